// src/noyau/tampon.rs
//
// Frontières dans le tampon d’édition.
// `dernier_nombre` est l’unique fonction qui sait où commence le nombre final :
// changement de signe, virgule et opérations unaires passent toutes par elle.

use super::erreur::ErreurCalcul;
use super::jetons::lire_nombre;

pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '%')
}

/// Vrai si le tampon est vide ou se termine par un opérateur ou '('.
pub fn finit_par_operateur(tampon: &str) -> bool {
    match tampon.chars().last() {
        None => true,
        Some(c) => est_operateur(c) || c == '(',
    }
}

/// Nombre final du tampon (signe unaire compris).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DernierNombre<'a> {
    /// Offset (octets) du début du nombre dans le tampon.
    pub debut: usize,
    pub texte: &'a str,
}

impl DernierNombre<'_> {
    pub fn est_vide(&self) -> bool {
        self.texte.is_empty()
    }

    pub fn a_separateur(&self) -> bool {
        self.texte.contains(',') || self.texte.contains('.')
    }

    pub fn est_negatif(&self) -> bool {
        self.texte.starts_with('-')
    }

    pub fn valeur(&self) -> Result<f64, ErreurCalcul> {
        lire_nombre(self.texte).map_err(|_| ErreurCalcul::DernierNombre(self.texte.to_string()))
    }
}

/// Remonte depuis la fin sur chiffres et séparateurs, puis regarde un cran
/// plus loin : un '-' précédé d’un opérateur, d’un '(' ou du début du tampon
/// appartient au nombre ; sinon c’est un moins binaire et le nombre s’arrête.
pub fn dernier_nombre(tampon: &str) -> DernierNombre<'_> {
    let mut debut = tampon.len();
    for (i, c) in tampon.char_indices().rev() {
        if c.is_ascii_digit() || c == ',' || c == '.' {
            debut = i;
        } else {
            break;
        }
    }

    if let Some(avant) = tampon[..debut].strip_suffix('-') {
        let unaire = match avant.chars().last() {
            None => true,
            Some(c) => est_operateur(c) || c == '(',
        };
        if unaire {
            debut = avant.len();
        }
    }

    DernierNombre {
        debut,
        texte: &tampon[debut..],
    }
}
