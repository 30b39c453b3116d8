// src/noyau/jetons.rs

use super::erreur::ErreurSyntaxe;
use super::fonctions::Fonction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
    Modulo,
    Puissance,   // ^
    MoinsUnaire, // préfixe seulement
}

impl Operateur {
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Division => "/",
            Operateur::Modulo => "%",
            Operateur::Puissance => "^",
            Operateur::MoinsUnaire => "u-",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Texte décimal brut (signe éventuel inclus, ',' ou '.').
    Nombre(String),

    // Constante, fonction ou erreur : décidé par le RPN.
    Ident(String),

    Op(Operateur),

    LPar,
    RPar,
}

/* ------------------------ Normalisation ------------------------ */

/// Glyphes UI -> ASCII, espaces retirés, séparateur final complété ("3," -> "3,0").
pub fn normaliser(s: &str) -> String {
    let mut out: String = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' | '–' | '—' => '-',
            autre => autre,
        })
        .collect();

    if out.ends_with(',') || out.ends_with('.') {
        out.push('0');
    }
    out
}

/* ------------------------ Décisions contextuelles ------------------------ */

fn est_lettre(c: char) -> bool {
    c.is_alphabetic() || c == 'π'
}

fn est_chiffre_ou_separateur(c: char) -> bool {
    c.is_ascii_digit() || c == ',' || c == '.'
}

/// Un '-' est en position unaire s’il n’a aucune valeur à sa gauche :
/// début d’expression, après un opérateur, ou après '('.
pub fn est_position_unaire(prev: Option<&Jeton>) -> bool {
    matches!(prev, None | Some(Jeton::Op(_)) | Some(Jeton::LPar))
}

/// Le '-' fait partie du nombre qui suit (ex: `5*-3`) seulement en position
/// unaire ET suivi directement d’un chiffre ou d’un séparateur.
/// Devant une parenthèse ou un identifiant (`5*-(3)`), il reste un opérateur.
/// Le '.' compte comme séparateur ici aussi, comme dans `lire_nombre` ;
/// l’éditeur n’en écrit jamais, seul le texte libre (--eval) en contient.
pub fn moins_absorbe_dans_nombre(prev: Option<&Jeton>, suivant: Option<char>) -> bool {
    est_position_unaire(prev) && suivant.is_some_and(est_chiffre_ou_separateur)
}

fn produit_une_valeur(j: &Jeton) -> bool {
    matches!(j, Jeton::Nombre(_) | Jeton::Ident(_) | Jeton::RPar)
}

fn commence_une_valeur(j: &Jeton) -> bool {
    matches!(j, Jeton::Nombre(_) | Jeton::Ident(_) | Jeton::LPar)
}

/// `2(3)`, `2π`, `3sin(30)`, `(1)(2)` : un '*' est inséré entre deux valeurs
/// adjacentes. Exception : `sin(` reste un appel de fonction.
pub fn multiplication_implicite(prev: Option<&Jeton>, suivant: &Jeton) -> bool {
    let Some(prev) = prev else {
        return false;
    };
    if !produit_une_valeur(prev) || !commence_une_valeur(suivant) {
        return false;
    }
    if let (Jeton::Ident(nom), Jeton::LPar) = (prev, suivant) {
        if Fonction::depuis_nom(nom).is_some() {
            return false;
        }
    }
    true
}

fn pousser(out: &mut Vec<Jeton>, j: Jeton) {
    if multiplication_implicite(out.last(), &j) {
        out.push(Jeton::Op(Operateur::Fois));
    }
    out.push(j);
}

/* ------------------------ Tokenisation ------------------------ */

/// Tokenize une expression déjà normalisée.
/// Supporte:
/// - nombres décimaux (',' ou '.'), signe unaire absorbé selon le contexte
/// - opérateurs + - * / % ^ (et moins unaire préfixe)
/// - parenthèses ( )
/// - identifiants alphabétiques (minuscules), π -> "pi"
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurSyntaxe> {
    let mut out: Vec<Jeton> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Identifiants
        if est_lettre(c) {
            let start = i;
            while i < chars.len() && est_lettre(chars[i]) {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            let mot = mot.to_lowercase().replace('π', "pi");
            pousser(&mut out, Jeton::Ident(mot));
            continue;
        }

        // Nombres (avec signe unaire éventuel)
        let signe = c == '-' && moins_absorbe_dans_nombre(out.last(), chars.get(i + 1).copied());
        if est_chiffre_ou_separateur(c) || signe {
            let start = i;
            i += 1;
            while i < chars.len() && est_chiffre_ou_separateur(chars[i]) {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            pousser(&mut out, Jeton::Nombre(texte));
            continue;
        }

        let j = match c {
            '(' => Jeton::LPar,
            ')' => Jeton::RPar,
            '+' => Jeton::Op(Operateur::Plus),
            '-' if est_position_unaire(out.last()) => Jeton::Op(Operateur::MoinsUnaire),
            '-' => Jeton::Op(Operateur::Moins),
            '*' => Jeton::Op(Operateur::Fois),
            '/' => Jeton::Op(Operateur::Division),
            '%' => Jeton::Op(Operateur::Modulo),
            '^' => Jeton::Op(Operateur::Puissance),
            _ => return Err(ErreurSyntaxe::CaractereInattendu(c)),
        };
        pousser(&mut out, j);
        i += 1;
    }

    Ok(out)
}

/// Lit le texte d’un jeton Nombre ("-3,5", ",5", "12.25") en f64.
pub fn lire_nombre(texte: &str) -> Result<f64, ErreurSyntaxe> {
    let invalide = || ErreurSyntaxe::NombreInvalide(texte.to_string());

    let (signe, corps) = match texte.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", texte),
    };

    let separateurs = corps.chars().filter(|c| *c == ',' || *c == '.').count();
    if separateurs > 1 || !corps.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalide());
    }

    let mut ascii = corps.replace(',', ".");
    if ascii.starts_with('.') {
        ascii.insert(0, '0');
    }
    format!("{signe}{ascii}").parse::<f64>().map_err(|_| invalide())
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Jeton::Nombre(n) => n.clone(),
            Jeton::Ident(nom) => nom.clone(),
            Jeton::Op(op) => op.symbole().to_string(),
            Jeton::LPar => "(".to_string(),
            Jeton::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
