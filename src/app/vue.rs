// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// - Écran : affichage principal + dernière ligne d’historique + DEG/RAD + M
// - Pavé : chiffres, opérateurs, parenthèses, CE/AC/⌫, ±, =
// - Fonctions : %, x², √, 1/x, n!, 10ˣ, ln, log, sin, cos, tan, eˣ, |x|
// - Constantes / mémoire : π, e, ans, MC, MR, M+, M-
// - Journal : liste filtrable, clic = rappel du résultat

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Calculatrice;

const TAILLE_TOUCHE: [f32; 2] = [58.0, 34.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_fonctions(ui);

                ui.add_space(6.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_journal(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    let mode = self.calc.mode_angle().to_string();
                    if ui
                        .small_button(mode)
                        .on_hover_text("Basculer degrés / radians")
                        .clicked()
                    {
                        self.calc.basculer_mode_angle();
                    }
                    if self.calc.memoire() != 0.0 {
                        ui.monospace("M");
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.monospace(self.calc.historique());
                });

                let texte = egui::RichText::new(&self.affichage).monospace().size(30.0);
                let texte = if self.en_erreur() {
                    texte.color(ui.visuals().error_fg_color)
                } else {
                    texte
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.label(texte);
                });
            });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("fonctions")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "MC", |c| c.calc.memoire_effacer());
                self.bouton(ui, "MR", |c| c.calc.memoire_rappel());
                self.bouton(ui, "M+", |c| c.calc.memoire_ajouter());
                self.bouton(ui, "M-", |c| c.calc.memoire_soustraire());
                self.bouton(ui, "ans", |c| c.calc.ans());
                ui.end_row();

                self.bouton_unaire(ui, "sin", Calculatrice::sin);
                self.bouton_unaire(ui, "cos", Calculatrice::cos);
                self.bouton_unaire(ui, "tan", Calculatrice::tan);
                self.bouton(ui, "π", |c| c.calc.pi());
                self.bouton(ui, "e", |c| c.calc.e());
                ui.end_row();

                self.bouton_unaire(ui, "ln", Calculatrice::ln);
                self.bouton_unaire(ui, "log", Calculatrice::log);
                self.bouton_unaire(ui, "eˣ", Calculatrice::exp);
                self.bouton_unaire(ui, "10ˣ", Calculatrice::dix_puissance);
                self.bouton(ui, "xʸ", |c| c.calc.puissance());
                ui.end_row();

                self.bouton_unaire(ui, "x²", Calculatrice::carre);
                self.bouton_unaire(ui, "√", Calculatrice::racine);
                self.bouton_unaire(ui, "1/x", Calculatrice::inverse);
                self.bouton_unaire(ui, "n!", Calculatrice::factorielle);
                self.bouton_unaire(ui, "|x|", Calculatrice::valeur_absolue);
                ui.end_row();
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "(", |c| c.calc.ouvrir_parenthese());
                self.bouton(ui, ")", |c| c.calc.fermer_parenthese());
                self.bouton_unaire(ui, "%", Calculatrice::pourcentage);
                self.bouton(ui, "CE", |c| c.calc.effacer_entree());
                self.bouton(ui, "AC", |c| c.calc.tout_effacer());
                ui.end_row();

                self.chiffres(ui, ['7', '8', '9']);
                self.bouton(ui, "÷", |c| c.calc.operateur('÷'));
                self.bouton(ui, "⌫", |c| c.calc.effacer_dernier());
                ui.end_row();

                self.chiffres(ui, ['4', '5', '6']);
                self.bouton(ui, "×", |c| c.calc.operateur('×'));
                self.bouton(ui, "mod", |c| c.calc.operateur('%'));
                ui.end_row();

                self.chiffres(ui, ['1', '2', '3']);
                self.bouton(ui, "−", |c| c.calc.operateur('−'));
                ui.label("");
                ui.end_row();

                self.bouton(ui, "±", |c| c.calc.changer_signe());
                self.chiffres(ui, ['0']);
                self.bouton(ui, ",", |c| c.calc.saisir_virgule());
                self.bouton(ui, "+", |c| c.calc.operateur('+'));
                if ui
                    .add_sized(TAILLE_TOUCHE, egui::Button::new("="))
                    .clicked()
                {
                    self.egal();
                }
                ui.end_row();
            });
    }

    fn ui_journal(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new(format!("Historique ({})", self.journal.len()))
            .default_open(true)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Filtre :");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.recherche)
                            .desired_width(200.0)
                            .hint_text("ex: sin, 2.469"),
                    );
                    if ui.button("Vider").clicked() {
                        self.vider_journal();
                    }
                });

                ui.add_space(4.0);

                if self.journal.is_empty() {
                    ui.weak("(vide)");
                }

                // Plus récentes en haut ; le rappel se fait hors de l’emprunt du journal.
                let mut rappel: Option<String> = None;
                for ligne in self.journal.filtrer(&self.recherche).into_iter().rev() {
                    let label = egui::Label::new(egui::RichText::new(ligne).monospace())
                        .sense(egui::Sense::click());
                    let resp = ui
                        .add(label)
                        .on_hover_text("Cliquer pour reprendre le résultat");
                    if resp.clicked() {
                        rappel = Some(ligne.to_string());
                    }
                }
                if let Some(ligne) = rappel {
                    self.rappeler_ligne(&ligne);
                }
            });
    }

    fn chiffres<const N: usize>(&mut self, ui: &mut egui::Ui, chiffres: [char; N]) {
        for ch in chiffres {
            self.bouton(ui, &ch.to_string(), move |c| c.calc.saisir_chiffre(ch));
        }
    }

    /// Fonction appliquée au dernier nombre du tampon.
    fn bouton_unaire(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        op: fn(&mut Calculatrice) -> String,
    ) {
        self.bouton(ui, label, move |c| op(&mut c.calc));
    }

    /// Touche générique : l’action renvoie le texte à afficher.
    fn bouton(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        action: impl FnOnce(&mut Self) -> String,
    ) {
        if ui
            .add_sized(TAILLE_TOUCHE, egui::Button::new(label))
            .clicked()
        {
            let sortie = action(self);
            self.afficher(sortie);
        }
    }
}
