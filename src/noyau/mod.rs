//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - jetons.rs     : normalisation + tokenisation (moins unaire, × implicite)
//! - rpn.rs        : table des opérateurs + shunting-yard + évaluation postfix
//! - fonctions.rs  : mode d’angle, fonctions unaires, constantes
//! - eval.rs       : pipeline complet texte -> f64
//! - format.rs     : sérialisation interne / affichage
//! - tampon.rs     : frontière du dernier nombre du tampon
//! - session.rs    : éditeur du tampon + registres (mémoire, ans, verrou)
//! - historique.rs : journal de session filtrable
//! - erreur.rs     : erreurs de syntaxe / de domaine

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod rpn;
pub mod session;
pub mod tampon;


#[cfg(test)]
mod tests_session;


// API publique minimale
pub use eval::evaluer;
pub use fonctions::ModeAngle;
pub use session::{Calculatrice, MARQUEUR_ERREUR};
