// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
//
// Règles:
// - Ident(name) suivi de '(' et name ∈ fonctions => empilé, sorti après sa ')'
// - Ident(name) sinon => constante (pi, e, ans) résolue à l’évaluation
// - Moins unaire: opérateur préfixe, priorité 4, associatif à droite
//   (donc "-(2)^2" = 4, choix assumé)

use super::erreur::{ErreurCalcul, ErreurSyntaxe};
use super::fonctions::{constante, Fonction, ModeAngle};
use super::jetons::{lire_nombre, Jeton, Operateur};

pub fn precedence(op: Operateur) -> u8 {
    match op {
        Operateur::Plus | Operateur::Moins => 1,
        Operateur::Fois | Operateur::Division | Operateur::Modulo => 2,
        Operateur::Puissance => 3,
        Operateur::MoinsUnaire => 4,
    }
}

pub fn est_associatif_droite(op: Operateur) -> bool {
    matches!(op, Operateur::Puissance | Operateur::MoinsUnaire)
}

/// Faut-il sortir `haut` de la pile avant d’empiler `entrant` ?
/// - entrant associatif à gauche : oui si prio(haut) >= prio(entrant)
/// - entrant associatif à droite : oui seulement si prio(haut) > prio(entrant)
pub fn doit_depiler(haut: Operateur, entrant: Operateur) -> bool {
    if est_associatif_droite(entrant) {
        precedence(haut) > precedence(entrant)
    } else {
        precedence(haut) >= precedence(entrant)
    }
}

/// Élément de sortie (postfix).
#[derive(Clone, Debug, PartialEq)]
pub enum ElementRpn {
    Nombre(String),
    Ident(String),
    Op(Operateur),
    Fonction(Fonction),
}

/// Pile d’attente du shunting-yard.
#[derive(Clone, Copy, Debug)]
enum EnAttente {
    Op(Operateur),
    Fonction(Fonction),
    LPar,
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Nombre("30"), Op(Plus), Nombre("60"), RPar]
///   rpn:    [Nombre("30"), Nombre("60"), Op(Plus), Fonction(Sin)]
pub fn to_rpn(tokens: &[Jeton]) -> Result<Vec<ElementRpn>, ErreurSyntaxe> {
    let mut out: Vec<ElementRpn> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<EnAttente> = Vec::new();

    for (i, tok) in tokens.iter().enumerate() {
        match tok {
            Jeton::Nombre(n) => out.push(ElementRpn::Nombre(n.clone())),

            Jeton::Ident(nom) => {
                let appel = matches!(tokens.get(i + 1), Some(Jeton::LPar));
                match Fonction::depuis_nom(nom) {
                    Some(f) if appel => ops.push(EnAttente::Fonction(f)),
                    _ => out.push(ElementRpn::Ident(nom.clone())),
                }
            }

            Jeton::Op(entrant) => {
                // une fonction ou '(' bloque : elles restent collées à leur argument
                while let Some(EnAttente::Op(haut)) = ops.last().copied() {
                    if !doit_depiler(haut, *entrant) {
                        break;
                    }
                    ops.pop();
                    out.push(ElementRpn::Op(haut));
                }
                ops.push(EnAttente::Op(*entrant));
            }

            Jeton::LPar => ops.push(EnAttente::LPar),

            Jeton::RPar => {
                loop {
                    match ops.pop() {
                        Some(EnAttente::LPar) => break,
                        Some(EnAttente::Op(op)) => out.push(ElementRpn::Op(op)),
                        Some(EnAttente::Fonction(f)) => out.push(ElementRpn::Fonction(f)),
                        None => return Err(ErreurSyntaxe::ParentheseOrpheline),
                    }
                }

                if let Some(EnAttente::Fonction(f)) = ops.last().copied() {
                    ops.pop();
                    out.push(ElementRpn::Fonction(f));
                }
            }
        }
    }

    while let Some(attente) = ops.pop() {
        match attente {
            EnAttente::LPar => return Err(ErreurSyntaxe::ParentheseNonFermee),
            EnAttente::Op(op) => out.push(ElementRpn::Op(op)),
            EnAttente::Fonction(f) => out.push(ElementRpn::Fonction(f)),
        }
    }

    Ok(out)
}

/// Évalue une RPN sur une pile d’opérandes.
/// Division par zéro, racine négative... ne sont PAS des erreurs ici :
/// le résultat non fini remonte tel quel à l’appelant.
pub fn eval_rpn(rpn: &[ElementRpn], ans: f64, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for el in rpn {
        match el {
            ElementRpn::Nombre(texte) => st.push(lire_nombre(texte)?),

            ElementRpn::Ident(nom) => {
                let v = constante(nom, ans)
                    .ok_or_else(|| ErreurSyntaxe::IdentifiantInconnu(nom.clone()))?;
                st.push(v);
            }

            ElementRpn::Op(Operateur::MoinsUnaire) => {
                let x = st.pop().ok_or(ErreurSyntaxe::PileInsuffisante)?;
                st.push(-x);
            }

            ElementRpn::Op(op) => {
                let b = st.pop().ok_or(ErreurSyntaxe::PileInsuffisante)?;
                let a = st.pop().ok_or(ErreurSyntaxe::PileInsuffisante)?;
                st.push(appliquer_binaire(*op, a, b));
            }

            ElementRpn::Fonction(f) => {
                let x = st.pop().ok_or(ErreurSyntaxe::PileInsuffisante)?;
                st.push(f.appliquer(x, mode));
            }
        }
    }

    match st.len() {
        1 => Ok(st[0]),
        0 => Err(ErreurSyntaxe::PileInsuffisante.into()),
        n => Err(ErreurSyntaxe::PileResiduelle(n).into()),
    }
}

fn appliquer_binaire(op: Operateur, a: f64, b: f64) -> f64 {
    match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Division => a / b,
        Operateur::Modulo => a % b,
        Operateur::Puissance => a.powf(b),
        Operateur::MoinsUnaire => -b,
    }
}

/// Format utilitaire (debug) : RPN en texte.
pub fn format_rpn(rpn: &[ElementRpn]) -> String {
    rpn.iter()
        .map(|el| match el {
            ElementRpn::Nombre(n) => n.clone(),
            ElementRpn::Ident(nom) => nom.clone(),
            ElementRpn::Op(op) => op.symbole().to_string(),
            ElementRpn::Fonction(f) => f.nom().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
