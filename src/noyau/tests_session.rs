//! Tests de session : séquences de touches -> tampon / affichage / registres.
//!
//! Chaque test rejoue une saisie comme le ferait l’UI, touche par touche.

use super::fonctions::ModeAngle;
use super::format::{format_resultat, vers_interne};
use super::session::{Calculatrice, MARQUEUR_ERREUR};

/// Rejoue une suite de touches : chiffres, ',', + - * / % ^, ( ), '=', '±'.
fn taper(c: &mut Calculatrice, touches: &str) -> String {
    let mut dernier = c.affichage_live();
    for t in touches.chars() {
        dernier = match t {
            '0'..='9' => c.saisir_chiffre(t),
            ',' => c.saisir_virgule(),
            '(' => c.ouvrir_parenthese(),
            ')' => c.fermer_parenthese(),
            '=' => c.calculer(),
            '±' => c.changer_signe(),
            '^' => c.puissance(),
            _ => c.operateur(t),
        };
    }
    dernier
}

fn session() -> Calculatrice {
    Calculatrice::default()
}

/* ------------------------ Verrou "=" ------------------------ */

#[test]
fn egal_puis_operateur_continue() {
    let mut c = session();
    assert_eq!(taper(&mut c, "2+3="), "5");
    assert_eq!(c.expression(), "5");
    assert!(c.egal_presse());
    assert_eq!(c.historique(), "2+3 = 5");

    assert_eq!(taper(&mut c, "+4="), "9");
    assert_eq!(c.expression(), "9");
    assert_eq!(c.historique(), "5+4 = 9");
}

#[test]
fn egal_puis_chiffre_repart_de_zero() {
    let mut c = session();
    taper(&mut c, "2+3=");
    assert_eq!(taper(&mut c, "7"), "7");
    assert_eq!(c.expression(), "7");
    assert!(!c.egal_presse());
    // ans a gardé le résultat précédent
    assert_eq!(c.valeur_ans(), 5.0);
}

#[test]
fn egal_puis_parenthese_ou_constante_repart_de_zero() {
    let mut c = session();
    taper(&mut c, "6*7=");
    c.ouvrir_parenthese();
    assert_eq!(c.expression(), "(");

    taper(&mut c, "1)=");
    c.pi();
    assert_eq!(c.expression(), "3,141592653589793");
}

#[test]
fn resultat_avec_milliers_et_decimales() {
    let mut c = session();
    assert_eq!(taper(&mut c, "1234,5*2="), "2.469");
    assert_eq!(c.expression(), "2469");
    assert_eq!(taper(&mut c, "/8="), "308,625");
    assert_eq!(c.expression(), "308,625");
}

/* ------------------------ Virgule ------------------------ */

#[test]
fn virgule_idempotente_et_zero_synthetique() {
    let mut c = session();
    assert_eq!(c.saisir_virgule(), "0,");
    taper(&mut c, "5");
    assert_eq!(c.saisir_virgule(), "0,5");
    assert_eq!(c.expression(), "0,5");

    taper(&mut c, "+");
    c.saisir_virgule();
    assert_eq!(c.expression(), "0,5+0,");
    taper(&mut c, "5=");
    assert_eq!(c.expression(), "1");
}

#[test]
fn virgule_finale_evaluee() {
    let mut c = session();
    assert_eq!(taper(&mut c, "3,="), "3");
}

/* ------------------------ Signe ------------------------ */

#[test]
fn signe_seulement_sur_dernier_nombre() {
    let mut c = session();
    taper(&mut c, "5+3");
    c.changer_signe();
    assert_eq!(c.expression(), "5+-3");
    c.changer_signe();
    assert_eq!(c.expression(), "5+3");
}

#[test]
fn signe_apres_moins_binaire() {
    let mut c = session();
    taper(&mut c, "5-3");
    c.changer_signe();
    assert_eq!(c.expression(), "5--3");
    assert_eq!(c.calculer(), "8");
}

#[test]
fn signe_en_tete_et_sur_vide() {
    let mut c = session();
    assert_eq!(c.changer_signe(), "-");
    taper(&mut c, "7");
    assert_eq!(c.expression(), "-7");
    c.changer_signe();
    assert_eq!(c.expression(), "7");

    taper(&mut c, "*(");
    c.changer_signe();
    assert_eq!(c.expression(), "7*(-");
}

#[test]
fn signe_apres_egal_prolonge_le_resultat() {
    let mut c = session();
    taper(&mut c, "2*3=");
    c.changer_signe();
    assert_eq!(c.expression(), "-6");
    assert!(!c.egal_presse());
}

/* ------------------------ Opérateurs ------------------------ */

#[test]
fn pas_de_double_operateur() {
    let mut c = session();
    assert_eq!(c.operateur('+'), "0");
    assert_eq!(c.expression(), "");
    taper(&mut c, "5++*");
    assert_eq!(c.expression(), "5+");
}

#[test]
fn moins_comme_signe() {
    let mut c = session();
    taper(&mut c, "-5*-3");
    assert_eq!(c.expression(), "-5*-3");
    assert_eq!(c.calculer(), "15");
}

#[test]
fn glyphes_ui_normalises() {
    let mut c = session();
    taper(&mut c, "8");
    c.operateur('×');
    taper(&mut c, "3");
    c.operateur('÷');
    taper(&mut c, "4");
    c.operateur('−');
    taper(&mut c, "1");
    assert_eq!(c.expression(), "8*3/4-1");
    assert_eq!(c.calculer(), "5");

    // symbole inconnu : ignoré
    c.operateur('#');
    assert_eq!(c.expression(), "5");
}

#[test]
fn puissance_gardee() {
    let mut c = session();
    assert_eq!(c.puissance(), "0");
    taper(&mut c, "2^^3^2");
    assert_eq!(c.expression(), "2^3^2");
    assert_eq!(c.calculer(), "512");
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn parenthese_multiplication_implicite() {
    let mut c = session();
    taper(&mut c, "2(3+4)");
    assert_eq!(c.expression(), "2*(3+4)");
    assert_eq!(c.calculer(), "14");

    let mut c = session();
    taper(&mut c, "(1)(2)");
    assert_eq!(c.expression(), "(1)*(2)");
}

#[test]
fn parentheses_desequilibrees_donnent_erreur() {
    let mut c = session();
    assert_eq!(taper(&mut c, "(2+3="), MARQUEUR_ERREUR);
    assert_eq!(c.expression(), "");
    assert_eq!(c.historique(), "");
    assert!(c.egal_presse());

    let mut c = session();
    assert_eq!(taper(&mut c, "2+3)="), MARQUEUR_ERREUR);
}

/* ------------------------ Effacement ------------------------ */

#[test]
fn retour_arriere() {
    let mut c = session();
    taper(&mut c, "12");
    assert_eq!(c.effacer_dernier(), "1");
    assert_eq!(c.effacer_dernier(), "0");
    assert_eq!(c.effacer_dernier(), "0");
}

#[test]
fn ce_et_ac() {
    let mut c = session();
    taper(&mut c, "2+3=");
    c.memoire_ajouter();

    // après '=', CE équivaut à AC
    assert_eq!(c.effacer_entree(), "0");
    assert_eq!(c.historique(), "");
    assert!(!c.egal_presse());

    taper(&mut c, "7+1");
    assert_eq!(c.effacer_entree(), "0");
    assert_eq!(c.expression(), "");

    taper(&mut c, "9=");
    assert_eq!(c.tout_effacer(), "0");
    assert_eq!(c.historique(), "");
    // mémoire et ans survivent à AC
    assert_eq!(c.memoire(), 5.0);
    assert_eq!(c.valeur_ans(), 9.0);
}

/* ------------------------ Opérations unaires ------------------------ */

#[test]
fn unaires_sur_dernier_nombre() {
    let mut c = session();
    taper(&mut c, "2+9");
    assert_eq!(c.racine(), "3");
    assert_eq!(c.expression(), "2+3");
    assert_eq!(c.carre(), "9");
    assert_eq!(c.expression(), "2+9");
    assert_eq!(c.pourcentage(), "0,09");
    assert_eq!(c.expression(), "2+0,09");
    assert_eq!(c.calculer(), "2,09");
}

#[test]
fn unaire_apres_egal_reste_editable() {
    let mut c = session();
    taper(&mut c, "4*4=");
    assert_eq!(c.racine(), "4");
    assert!(!c.egal_presse());
    // le verrou est tombé : le chiffre suivant s’ajoute
    taper(&mut c, "2");
    assert_eq!(c.expression(), "42");
}

#[test]
fn unaire_refuse_apres_operateur_ou_parenthese() {
    let mut c = session();
    taper(&mut c, "5+");
    assert_eq!(c.racine(), "5+");
    assert_eq!(c.expression(), "5+");

    let mut c = session();
    taper(&mut c, "(2+3)");
    assert_eq!(c.carre(), "(2+3)");
    assert_eq!(c.expression(), "(2+3)");

    let mut c = session();
    assert_eq!(c.inverse(), "0");
}

#[test]
fn unaire_nombre_negatif() {
    let mut c = session();
    taper(&mut c, "3*-2");
    assert_eq!(c.valeur_absolue(), "2");
    assert_eq!(c.expression(), "3*2");

    let mut c = session();
    taper(&mut c, "5-2");
    // '-' binaire : seul "2" est concerné
    assert_eq!(c.carre(), "4");
    assert_eq!(c.expression(), "5-4");
}

#[test]
fn unaires_domaine() {
    let cas: [(&str, fn(&mut Calculatrice) -> String); 6] = [
        ("-4", Calculatrice::racine),
        ("0", Calculatrice::inverse),
        ("0", Calculatrice::ln),
        ("-1", Calculatrice::log),
        ("90", Calculatrice::tan),
        ("2,5", Calculatrice::factorielle),
    ];
    for (saisie, op) in cas {
        let mut c = session();
        c.depuis_resultat_historique(saisie);
        assert_eq!(op(&mut c), MARQUEUR_ERREUR, "saisie={saisie:?}");
        assert_eq!(c.expression(), "", "saisie={saisie:?}");
        assert!(c.egal_presse(), "saisie={saisie:?}");
    }
}

#[test]
fn unaires_trig_selon_mode() {
    let mut c = session();
    taper(&mut c, "30");
    assert_eq!(c.sin(), "0,5");

    let mut c = session();
    taper(&mut c, "45");
    assert_eq!(c.tan(), "1");

    let mut c = Calculatrice::new(ModeAngle::Rad, 11);
    taper(&mut c, "0");
    assert_eq!(c.cos(), "1");
}

#[test]
fn unaires_log_exp() {
    let mut c = session();
    taper(&mut c, "3");
    assert_eq!(c.dix_puissance(), "1.000");
    assert_eq!(c.expression(), "1000");
    assert_eq!(c.log(), "3");

    let mut c = session();
    taper(&mut c, "1");
    c.exp();
    assert_eq!(c.ln(), "1");
    assert_eq!(c.expression(), "1");
}

#[test]
fn factorielle_exacte_puis_flottante() {
    let mut c = session();
    taper(&mut c, "5");
    assert_eq!(c.factorielle(), "120");
    assert_eq!(c.expression(), "120");

    let mut c = session();
    taper(&mut c, "20");
    c.factorielle();
    assert_eq!(c.expression(), "2432902008176640000");

    let mut c = session();
    taper(&mut c, "0");
    assert_eq!(c.factorielle(), "1");

    // 171! n’est plus fini en f64 : erreur plutôt que débordement silencieux
    let mut c = session();
    taper(&mut c, "171");
    assert_eq!(c.factorielle(), MARQUEUR_ERREUR);
}

/* ------------------------ Non finis ------------------------ */

#[test]
fn division_par_zero() {
    let mut c = session();
    assert_eq!(taper(&mut c, "5/0="), MARQUEUR_ERREUR);
    assert_eq!(c.expression(), "");
    assert!(c.egal_presse());
    // ans inchangé après une erreur
    assert_eq!(c.valeur_ans(), 0.0);

    // la saisie suivante repart proprement
    assert_eq!(taper(&mut c, "1+1="), "2");
}

#[test]
fn egal_sur_vide_est_une_erreur() {
    let mut c = session();
    assert_eq!(c.calculer(), MARQUEUR_ERREUR);
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn constantes_avec_multiplication_implicite() {
    let mut c = session();
    taper(&mut c, "2");
    c.pi();
    assert_eq!(c.expression(), "2*3,141592653589793");

    let mut c = session();
    taper(&mut c, "1+");
    c.e();
    assert_eq!(c.expression(), "1+2,718281828459045");
}

#[test]
fn ans_insere_le_dernier_resultat() {
    let mut c = session();
    taper(&mut c, "1,5*2=");
    taper(&mut c, "4+");
    c.ans();
    assert_eq!(c.expression(), "4+3");
    assert_eq!(c.calculer(), "7");
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn memoire_cycle_complet() {
    let mut c = session();
    taper(&mut c, "2+3");
    assert_eq!(c.memoire_ajouter(), "5");
    // le tampon n’est pas touché
    assert_eq!(c.expression(), "2+3");

    c.tout_effacer();
    taper(&mut c, "1,5");
    assert_eq!(c.memoire_soustraire(), "3,5");

    taper(&mut c, "*");
    c.memoire_rappel();
    assert_eq!(c.expression(), "1,5*3,5");

    assert_eq!(c.memoire_effacer(), "0");
    assert_eq!(c.memoire(), 0.0);
}

#[test]
fn memoire_ignore_tampon_illisible() {
    let mut c = session();
    taper(&mut c, "2+");
    assert_eq!(c.memoire_ajouter(), "0");

    c.tout_effacer();
    taper(&mut c, "(2");
    assert_eq!(c.memoire_ajouter(), "0");

    c.tout_effacer();
    taper(&mut c, "1/0");
    assert_eq!(c.memoire_ajouter(), "0");
    assert_eq!(c.expression(), "1/0");
}

#[test]
fn memoire_debordement_refuse() {
    let mut c = session();
    c.depuis_resultat_historique(&format!("1{}", "0".repeat(308)));
    assert_eq!(c.memoire_ajouter(), format_resultat(1e308, 11));

    // 2e308 n’est plus fini : la mémoire garde sa valeur
    assert_eq!(c.memoire_ajouter(), MARQUEUR_ERREUR);
    assert_eq!(c.memoire(), 1e308);
    assert_eq!(c.expression(), "");
    assert!(c.egal_presse());

    // MR réinsère une valeur finie relisible
    c.memoire_rappel();
    assert_eq!(c.expression(), vers_interne(1e308));
    assert_eq!(c.calculer(), format_resultat(1e308, 11));

    c.depuis_resultat_historique(&format!("-1{}", "0".repeat(308)));
    assert_eq!(c.memoire_soustraire(), MARQUEUR_ERREUR);
    assert_eq!(c.memoire(), 1e308);
}

/* ------------------------ Affichage / historique ------------------------ */

#[test]
fn grand_resultat_affiche_comme_le_tampon() {
    let mut c = session();
    assert_eq!(taper(&mut c, "10^25="), "10.000.000.000.000.000.000.000.000");
    assert_eq!(c.expression(), "10000000000000000000000000");
    assert_eq!(c.historique(), "10^25 = 10.000.000.000.000.000.000.000.000");
}

#[test]
fn affichage_live_groupe_les_nombres_seuls() {
    let mut c = session();
    assert_eq!(taper(&mut c, "1234567"), "1.234.567");
    assert_eq!(c.expression(), "1234567");
    assert_eq!(taper(&mut c, "+1"), "1234567+1");
}

#[test]
fn rechargement_depuis_historique() {
    let mut c = session();
    taper(&mut c, "9=");
    assert_eq!(c.depuis_resultat_historique(" −1.234,5 "), "-1.234,5");
    assert_eq!(c.expression(), "-1234,5");
    assert!(!c.egal_presse());
    // le chiffre suivant prolonge
    taper(&mut c, "6");
    assert_eq!(c.expression(), "-1234,56");
}

#[test]
fn mode_angle_bascule() {
    let mut c = session();
    assert_eq!(c.mode_angle(), ModeAngle::Deg);
    assert_eq!(c.basculer_mode_angle(), ModeAngle::Rad);
    c.depuis_resultat_historique("3,141592653589793");
    assert_eq!(c.cos(), "-1");
    assert_eq!(c.basculer_mode_angle(), ModeAngle::Deg);
}
