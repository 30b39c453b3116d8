//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> tokenize -> RPN -> pile f64
//!
//! Fonction pure : texte + `ans` + mode d’angle. Ne lève que des erreurs de
//! syntaxe ; un résultat NaN/±inf est renvoyé tel quel (à l’appelant de juger).

use log::debug;

use super::erreur::ErreurCalcul;
use super::fonctions::ModeAngle;
use super::jetons::{format_tokens, normaliser, tokenize};
use super::rpn::{eval_rpn, format_rpn, to_rpn};

/// API publique : évalue une expression en f64.
pub fn evaluer(expression: &str, ans: f64, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
    let s = normaliser(expression);

    let jetons = tokenize(&s)?;
    debug!("jetons: {}", format_tokens(&jetons));

    let rpn = to_rpn(&jetons)?;
    debug!("rpn: {}", format_rpn(&rpn));

    let v = eval_rpn(&rpn, ans, mode)?;
    debug!("{expression:?} = {v}");
    Ok(v)
}
