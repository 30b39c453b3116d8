//! src/app/etat.rs
//!
//! État UI : la session de calcul du noyau + ce que l’écran montre.
//!
//! Rôle : relayer chaque touche vers `Calculatrice`, garder le texte affiché
//! et alimenter le journal de session. Aucune règle d’édition ici : elles
//! vivent toutes dans `noyau::session`.

use crate::noyau::historique::{resultat_de, Historique};
use crate::noyau::{Calculatrice, MARQUEUR_ERREUR};
use crate::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,

    // --- sorties ---
    pub affichage: String, // ce que l’écran principal montre

    // --- journal ---
    pub journal: Historique,
    pub recherche: String, // filtre du journal
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::depuis_reglages(&Reglages::default())
    }
}

impl AppCalc {
    pub fn depuis_reglages(r: &Reglages) -> Self {
        let calc = Calculatrice::new(r.mode_angle, r.decimales);
        Self {
            affichage: calc.affichage_live(),
            calc,
            journal: Historique::avec_capacite(r.historique_max),
            recherche: String::new(),
        }
    }

    /// Dépose la sortie d’une action sur l’écran.
    pub fn afficher(&mut self, sortie: String) {
        self.affichage = sortie;
    }

    pub fn en_erreur(&self) -> bool {
        self.affichage == MARQUEUR_ERREUR
    }

    /* ------------------------ Actions “touches” ------------------------ */

    /// '=' : calcule puis journalise la ligne si le calcul a réussi.
    pub fn egal(&mut self) {
        let sortie = self.calc.calculer();
        if sortie != MARQUEUR_ERREUR {
            self.journal.ajouter(self.calc.historique());
        }
        self.afficher(sortie);
    }

    /// Touche clavier / bouton générique.
    /// Renvoie false si le caractère n’a pas de sens pour la calculatrice.
    pub fn touche(&mut self, c: char) -> bool {
        let sortie = match c {
            '0'..='9' => self.calc.saisir_chiffre(c),
            ',' | '.' => self.calc.saisir_virgule(),
            '(' => self.calc.ouvrir_parenthese(),
            ')' => self.calc.fermer_parenthese(),
            '^' => self.calc.puissance(),
            '+' | '-' | '*' | '/' | '%' | '×' | '÷' | '−' => self.calc.operateur(c),
            '=' => {
                self.egal();
                return true;
            }
            'p' | 'π' => self.calc.pi(),
            'e' => self.calc.e(),
            '!' => self.calc.factorielle(),
            _ => return false,
        };
        self.afficher(sortie);
        true
    }

    pub fn retour_arriere(&mut self) {
        let sortie = self.calc.effacer_dernier();
        self.afficher(sortie);
    }

    /// CE
    pub fn clear_entree(&mut self) {
        let sortie = self.calc.effacer_entree();
        self.afficher(sortie);
    }

    /// AC : la session repart de zéro ; le journal reste.
    pub fn reset_total(&mut self) {
        let sortie = self.calc.tout_effacer();
        self.afficher(sortie);
    }

    /// Clic sur une ligne du journal : son résultat redevient le tampon.
    pub fn rappeler_ligne(&mut self, ligne: &str) {
        if let Some(resultat) = resultat_de(ligne) {
            let sortie = self.calc.depuis_resultat_historique(resultat);
            self.afficher(sortie);
        }
    }

    pub fn vider_journal(&mut self) {
        self.journal.vider();
        self.recherche.clear();
    }
}
