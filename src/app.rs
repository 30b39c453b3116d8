// src/app.rs
//
// Module App (racine)
// -------------------
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App + le clavier global

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl AppCalc {
    /// Clavier physique : caractères tapés + Enter / Backspace / Escape / Delete.
    /// Ignoré quand un champ texte (filtre du journal) a le focus.
    fn clavier(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let evenements = ctx.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.touche(c);
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.egal(),
                    egui::Key::Backspace => self.retour_arriere(),
                    egui::Key::Escape => self.clear_entree(),
                    egui::Key::Delete => self.reset_total(),
                    _ => {}
                },
                _ => {}
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
