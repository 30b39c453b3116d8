// src/noyau/format.rs
//
// Deux sérialisations distinctes, à ne pas confondre :
// - interne  : "1234,5"    (tampon ; relisible par l’évaluateur, sans groupes)
// - affichage: "1.234,5"   (écran ; points de milliers, décimales bornées)

/* ------------------------ Interne (canonique) ------------------------ */

/// Sérialisation canonique d’un résultat dans le tampon.
/// `Display` de f64 donne déjà la plus courte écriture qui se relit à
/// l’identique, sans notation scientifique.
pub fn vers_interne(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}").replace('.', ",")
}

/* ------------------------ Affichage ------------------------ */

/// Groupe les chiffres d’une partie entière par milliers : "1234567" -> "1.234.567".
pub fn grouper_milliers(entier: &str) -> String {
    let n = entier.chars().count();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Résultat pour l’écran : au plus `decimales` chiffres après la virgule,
/// zéros finaux retirés, milliers groupés.
/// Les chiffres viennent de l’écriture la plus courte (celle du tampon) :
/// jamais de chiffres non significatifs au-delà de 2^53.
pub fn format_resultat(x: f64, decimales: usize) -> String {
    if !x.is_finite() {
        return x.to_string();
    }

    let court = format!("{}", x.abs());
    let (entier, frac) = court.split_once('.').unwrap_or((court.as_str(), ""));
    let (entier, frac) = arrondir_decimal(entier, frac, decimales);
    let frac = frac.trim_end_matches('0');

    // arrondi à zéro : pas de "-0"
    if entier == "0" && frac.is_empty() {
        return "0".to_string();
    }

    let mut out = String::new();
    if x.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&grouper_milliers(&entier));
    if !frac.is_empty() {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// Arrondi décimal (au pair le plus proche sur égalité exacte) de
/// `entier.frac` à `decimales` chiffres, sur le texte lui-même.
fn arrondir_decimal(entier: &str, frac: &str, decimales: usize) -> (String, String) {
    if frac.len() <= decimales {
        return (entier.to_string(), frac.to_string());
    }

    let (garde, reste) = frac.split_at(decimales);
    let mut chiffres: Vec<u8> = entier.bytes().chain(garde.bytes()).collect();

    let premier = reste.as_bytes()[0];
    let au_dela = reste[1..].bytes().any(|c| c != b'0');
    let dernier_impair = chiffres.last().is_some_and(|c| (c - b'0') % 2 == 1);
    let monter = premier > b'5' || (premier == b'5' && (au_dela || dernier_impair));

    if monter {
        let mut i = chiffres.len();
        loop {
            if i == 0 {
                chiffres.insert(0, b'1');
                break;
            }
            i -= 1;
            if chiffres[i] == b'9' {
                chiffres[i] = b'0';
            } else {
                chiffres[i] += 1;
                break;
            }
        }
    }

    let coupe = chiffres.len() - decimales;
    let texte = String::from_utf8_lossy(&chiffres);
    (texte[..coupe].to_string(), texte[coupe..].to_string())
}

fn est_nombre_seul(s: &str) -> bool {
    let corps = s.strip_prefix('-').unwrap_or(s);
    !corps.is_empty()
        && corps
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

/// Affichage “live” du tampon : "0" si vide ; un nombre seul est regroupé,
/// toute autre expression est montrée telle quelle.
pub fn format_live(tampon: &str) -> String {
    if tampon.is_empty() {
        return "0".to_string();
    }
    if !est_nombre_seul(tampon) {
        return tampon.to_string();
    }

    let (negatif, corps) = match tampon.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, tampon),
    };

    let (entier, decimal) = match corps.split_once(',') {
        Some((e, d)) => (e, Some(d)),
        None => (corps, None),
    };

    let entier = entier.replace('.', "");
    let mut out = String::new();
    if negatif {
        out.push('-');
    }
    out.push_str(&grouper_milliers(&entier));
    if let Some(d) = decimal {
        out.push(',');
        out.push_str(d);
    }
    out
}
