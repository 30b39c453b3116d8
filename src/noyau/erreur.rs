// src/noyau/erreur.rs
//
// Deux familles d’erreurs :
// - Syntaxe : flux de jetons mal formé (levée par l’évaluateur)
// - Domaine : résultat mathématiquement indéfini ou non fini (levée par l’éditeur)
//
// À la frontière de l’éditeur, les deux deviennent le même marqueur d’erreur.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurSyntaxe {
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("identifiant inconnu: {0:?}")]
    IdentifiantInconnu(String),

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseOrpheline,

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("opérande manquant")]
    PileInsuffisante,

    #[error("expression invalide ({0} valeurs restantes)")]
    PileResiduelle(usize),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurDomaine {
    #[error("racine d’un nombre négatif")]
    RacineNegative,

    #[error("inverse de zéro")]
    InverseDeZero,

    #[error("logarithme d’un nombre non positif")]
    LogarithmeNonPositif,

    #[error("tangente indéfinie (cos ≈ 0)")]
    TangenteIndefinie,

    #[error("factorielle: entier naturel ≤ 170 attendu")]
    FactorielleInvalide,

    #[error("résultat non fini")]
    NonFini,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalcul {
    #[error("syntaxe: {0}")]
    Syntaxe(#[from] ErreurSyntaxe),

    #[error("domaine: {0}")]
    Domaine(#[from] ErreurDomaine),

    /// Le dernier nombre du tampon n’a pas pu être relu.
    #[error("dernier nombre illisible: {0:?}")]
    DernierNombre(String),
}
