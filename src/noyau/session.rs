//! Noyau — session de calcul (éditeur du tampon + registres)
//!
//! Une instance par calculatrice : tampon, mode d’angle, mémoire, `ans`,
//! verrou “= vient d’être pressé” et ligne d’historique.
//!
//! Contrats :
//! - Chaque action modifie le tampon et/ou les registres puis renvoie le texte
//!   à afficher. Aucune erreur ne sort d’ici : elles deviennent `MARQUEUR_ERREUR`.
//! - Actions “départ neuf” (chiffre, virgule, constante, '(') : si le verrou
//!   est posé, le tampon repart de zéro.
//! - Actions “continuation” (opérateur, ^, signe) : le verrou saute, le
//!   résultat affiché est prolongé.

use log::{debug, info, warn};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::erreur::{ErreurCalcul, ErreurDomaine};
use super::eval::evaluer;
use super::fonctions::ModeAngle;
use super::format::{format_live, format_resultat, vers_interne};
use super::tampon::{dernier_nombre, est_operateur, finit_par_operateur};

/// Texte renvoyé à la place d’un affichage quand un calcul échoue.
pub const MARQUEUR_ERREUR: &str = "Erreur";

/// Décimales affichées par défaut pour un résultat.
pub const DECIMALES_DEFAUT: usize = 11;

/// Plus grand n dont n! reste fini en f64.
const FACTORIELLE_MAX: u32 = 170;

/// |cos(angle)| sous ce seuil => tangente considérée indéfinie.
const SEUIL_POLE_TAN: f64 = 1e-12;

/* ------------------------ Opérations unaires ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Pourcentage,
    Carre,
    Racine,
    Inverse,
    Factorielle,
    DixPuissance,
    Ln,
    Log,
    Sin,
    Cos,
    Tan,
    Exp,
    ValeurAbsolue,
}

impl OpUnaire {
    /// Applique l’opération en vérifiant son domaine ; un résultat non fini
    /// est une erreur de domaine.
    pub fn calculer(self, x: f64, mode: ModeAngle) -> Result<f64, ErreurDomaine> {
        use ErreurDomaine::*;

        let v = match self {
            OpUnaire::Pourcentage => x / 100.0,
            OpUnaire::Carre => x * x,
            OpUnaire::Racine => {
                if x < 0.0 {
                    return Err(RacineNegative);
                }
                x.sqrt()
            }
            OpUnaire::Inverse => {
                if x == 0.0 {
                    return Err(InverseDeZero);
                }
                1.0 / x
            }
            OpUnaire::Factorielle => factorielle(x)?,
            OpUnaire::DixPuissance => 10f64.powf(x),
            OpUnaire::Ln | OpUnaire::Log if x <= 0.0 => return Err(LogarithmeNonPositif),
            OpUnaire::Ln => x.ln(),
            OpUnaire::Log => x.log10(),
            OpUnaire::Sin => mode.en_radians(x).sin(),
            OpUnaire::Cos => mode.en_radians(x).cos(),
            OpUnaire::Tan => {
                let r = mode.en_radians(x);
                if r.cos().abs() < SEUIL_POLE_TAN {
                    return Err(TangenteIndefinie);
                }
                r.tan()
            }
            OpUnaire::Exp => x.exp(),
            OpUnaire::ValeurAbsolue => x.abs(),
        };

        if v.is_finite() {
            Ok(v)
        } else {
            Err(NonFini)
        }
    }
}

/// n! exact (big int) puis converti en f64 : pas de débordement silencieux.
fn factorielle(x: f64) -> Result<f64, ErreurDomaine> {
    if !(0.0..=f64::from(FACTORIELLE_MAX)).contains(&x) || x.fract() != 0.0 {
        return Err(ErreurDomaine::FactorielleInvalide);
    }

    let n = x as u32;
    let produit = (2..=n).fold(BigUint::one(), |acc, k| acc * k);
    produit.to_f64().ok_or(ErreurDomaine::NonFini)
}

/* ------------------------ Session ------------------------ */

#[derive(Clone, Debug)]
pub struct Calculatrice {
    tampon: String,
    mode_angle: ModeAngle,
    memoire: f64,
    ans: f64,
    egal_presse: bool,
    historique: String,
    decimales: usize,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new(ModeAngle::default(), DECIMALES_DEFAUT)
    }
}

impl Calculatrice {
    pub fn new(mode_angle: ModeAngle, decimales: usize) -> Self {
        Self {
            tampon: String::new(),
            mode_angle,
            memoire: 0.0,
            ans: 0.0,
            egal_presse: false,
            historique: String::new(),
            decimales,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    /// Tampon interne brut (virgule décimale, sans séparateur de milliers).
    pub fn expression(&self) -> &str {
        &self.tampon
    }

    /// Dernière ligne "<expression> = <résultat>" (vide après AC ou erreur).
    pub fn historique(&self) -> &str {
        &self.historique
    }

    pub fn affichage_live(&self) -> String {
        format_live(&self.tampon)
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.mode_angle
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    pub fn valeur_ans(&self) -> f64 {
        self.ans
    }

    pub fn egal_presse(&self) -> bool {
        self.egal_presse
    }

    pub fn basculer_mode_angle(&mut self) -> ModeAngle {
        self.mode_angle = self.mode_angle.bascule();
        info!("mode d’angle: {}", self.mode_angle);
        self.mode_angle
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn saisir_chiffre(&mut self, chiffre: char) -> String {
        if !chiffre.is_ascii_digit() {
            warn!("saisie ignorée: {chiffre:?} n’est pas un chiffre");
            return self.affichage_live();
        }
        self.depart_neuf();
        self.tampon.push(chiffre);
        self.affichage_live()
    }

    /// Idempotente : jamais deux séparateurs dans le même nombre.
    pub fn saisir_virgule(&mut self) -> String {
        self.depart_neuf();

        if dernier_nombre(&self.tampon).a_separateur() {
            return self.affichage_live();
        }
        if finit_par_operateur(&self.tampon) {
            self.tampon.push('0');
        }
        self.tampon.push(',');
        self.affichage_live()
    }

    /// Inverse le signe du seul nombre final (jamais d’une expression englobante).
    pub fn changer_signe(&mut self) -> String {
        self.egal_presse = false;

        let nombre = dernier_nombre(&self.tampon);
        if finit_par_operateur(&self.tampon) || nombre.est_vide() {
            self.tampon.push('-');
            return self.affichage_live();
        }

        let debut = nombre.debut;
        if nombre.est_negatif() {
            self.tampon.remove(debut);
        } else {
            self.tampon.insert(debut, '-');
        }
        self.affichage_live()
    }

    pub fn ouvrir_parenthese(&mut self) -> String {
        self.depart_neuf();
        self.multiplication_implicite();
        self.tampon.push('(');
        self.affichage_live()
    }

    /// Toujours acceptée : le déséquilibre n’est vu qu’au calcul.
    pub fn fermer_parenthese(&mut self) -> String {
        self.tampon.push(')');
        self.affichage_live()
    }

    pub fn effacer_dernier(&mut self) -> String {
        self.tampon.pop();
        self.affichage_live()
    }

    /// CE : après un '=', équivaut à AC ; sinon vide seulement le tampon.
    pub fn effacer_entree(&mut self) -> String {
        if self.egal_presse {
            return self.tout_effacer();
        }
        self.tampon.clear();
        self.affichage_live()
    }

    /// AC : tampon + historique + verrou. Mémoire et `ans` restent.
    pub fn tout_effacer(&mut self) -> String {
        self.historique.clear();
        self.tampon.clear();
        self.egal_presse = false;
        self.affichage_live()
    }

    /// Accepte + - * / % ^ ainsi que les glyphes × ÷ −.
    pub fn operateur(&mut self, symbole: char) -> String {
        let op = match symbole {
            '×' => '*',
            '÷' => '/',
            '−' | '–' | '—' => '-',
            c if est_operateur(c) => c,
            autre => {
                warn!("opérateur inconnu ignoré: {autre:?}");
                return self.affichage_live();
            }
        };

        self.egal_presse = false;

        // '-' peut ouvrir un nombre négatif (5*-3, (-2, -7)
        if op == '-' && finit_par_operateur(&self.tampon) {
            self.tampon.push('-');
            return self.affichage_live();
        }

        // pas d’opérateur en tête ni de "5++3"
        if finit_par_operateur(&self.tampon) {
            return self.affichage_live();
        }

        self.tampon.push(op);
        self.affichage_live()
    }

    pub fn puissance(&mut self) -> String {
        if finit_par_operateur(&self.tampon) {
            return self.affichage_live();
        }
        self.egal_presse = false;
        self.tampon.push('^');
        self.affichage_live()
    }

    /* ------------------------ Calcul ------------------------ */

    /// '=' : évalue tout le tampon et le remplace par le résultat canonique.
    pub fn calculer(&mut self) -> String {
        let saisie = self.tampon.clone();

        let resultat = evaluer(&saisie, self.ans, self.mode_angle).and_then(|v| {
            if v.is_finite() {
                Ok(v)
            } else {
                Err(ErreurDomaine::NonFini.into())
            }
        });

        match resultat {
            Ok(v) => {
                let affiche = format_resultat(v, self.decimales);
                self.ans = v;
                self.tampon = vers_interne(v);
                self.egal_presse = true;
                self.historique = format!("{saisie} = {affiche}");
                debug!("historique: {}", self.historique);
                affiche
            }
            Err(e) => {
                self.historique.clear();
                self.erreur(&e)
            }
        }
    }

    pub fn pourcentage(&mut self) -> String {
        self.unaire(OpUnaire::Pourcentage)
    }

    pub fn carre(&mut self) -> String {
        self.unaire(OpUnaire::Carre)
    }

    pub fn racine(&mut self) -> String {
        self.unaire(OpUnaire::Racine)
    }

    pub fn inverse(&mut self) -> String {
        self.unaire(OpUnaire::Inverse)
    }

    pub fn factorielle(&mut self) -> String {
        self.unaire(OpUnaire::Factorielle)
    }

    pub fn dix_puissance(&mut self) -> String {
        self.unaire(OpUnaire::DixPuissance)
    }

    pub fn ln(&mut self) -> String {
        self.unaire(OpUnaire::Ln)
    }

    pub fn log(&mut self) -> String {
        self.unaire(OpUnaire::Log)
    }

    pub fn sin(&mut self) -> String {
        self.unaire(OpUnaire::Sin)
    }

    pub fn cos(&mut self) -> String {
        self.unaire(OpUnaire::Cos)
    }

    pub fn tan(&mut self) -> String {
        self.unaire(OpUnaire::Tan)
    }

    pub fn exp(&mut self) -> String {
        self.unaire(OpUnaire::Exp)
    }

    pub fn valeur_absolue(&mut self) -> String {
        self.unaire(OpUnaire::ValeurAbsolue)
    }

    /// Remplace le nombre final par op(nombre). Refusé (sans effet) si le
    /// tampon finit par un opérateur, '(' ou ')'.
    pub fn unaire(&mut self, op: OpUnaire) -> String {
        if !self.peut_editer_dernier_nombre() {
            return self.affichage_live();
        }

        let nombre = dernier_nombre(&self.tampon);
        let debut = nombre.debut;
        let resultat = nombre
            .valeur()
            .and_then(|x| op.calculer(x, self.mode_angle).map_err(ErreurCalcul::from));

        match resultat {
            Ok(v) => {
                self.remplacer_dernier_nombre(debut, v);
                format_resultat(v, self.decimales)
            }
            Err(e) => self.erreur(&e),
        }
    }

    /* ------------------------ Constantes ------------------------ */

    pub fn pi(&mut self) -> String {
        self.inserer_constante(std::f64::consts::PI)
    }

    pub fn e(&mut self) -> String {
        self.inserer_constante(std::f64::consts::E)
    }

    pub fn ans(&mut self) -> String {
        self.inserer_constante(self.ans)
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn memoire_effacer(&mut self) -> String {
        self.memoire = 0.0;
        "0".to_string()
    }

    pub fn memoire_rappel(&mut self) -> String {
        self.inserer_constante(self.memoire)
    }

    pub fn memoire_ajouter(&mut self) -> String {
        let v = self.valeur_courante_ou_zero();
        self.cumuler_memoire(self.memoire + v)
    }

    pub fn memoire_soustraire(&mut self) -> String {
        let v = self.valeur_courante_ou_zero();
        self.cumuler_memoire(self.memoire - v)
    }

    /// Recharge le tampon depuis un résultat affiché ("1.234,5" -> "1234,5").
    pub fn depuis_resultat_historique(&mut self, texte: &str) -> String {
        self.tampon = texte
            .trim()
            .chars()
            .filter(|c| *c != ' ' && *c != '.')
            .map(|c| match c {
                '−' | '–' | '—' => '-',
                autre => autre,
            })
            .collect();
        self.egal_presse = false;
        self.affichage_live()
    }

    /* ------------------------ Interne ------------------------ */

    fn depart_neuf(&mut self) {
        if self.egal_presse {
            self.tampon.clear();
            self.egal_presse = false;
        }
    }

    /// "2" puis '(' ou π => "2*".
    fn multiplication_implicite(&mut self) {
        if let Some(c) = self.tampon.chars().last() {
            if c.is_ascii_digit() || c == ')' || c == ',' {
                self.tampon.push('*');
            }
        }
    }

    /// La mémoire reste toujours finie : un débordement est refusé.
    fn cumuler_memoire(&mut self, nouvelle: f64) -> String {
        if !nouvelle.is_finite() {
            return self.erreur(&ErreurDomaine::NonFini.into());
        }
        self.memoire = nouvelle;
        format_resultat(self.memoire, self.decimales)
    }

    /// Le tampon ne reçoit jamais "inf" ni "NaN".
    fn inserer_constante(&mut self, valeur: f64) -> String {
        if !valeur.is_finite() {
            return self.erreur(&ErreurDomaine::NonFini.into());
        }
        self.depart_neuf();
        self.multiplication_implicite();
        self.tampon.push_str(&vers_interne(valeur));
        self.affichage_live()
    }

    fn peut_editer_dernier_nombre(&self) -> bool {
        !finit_par_operateur(&self.tampon) && !self.tampon.ends_with(')')
    }

    fn remplacer_dernier_nombre(&mut self, debut: usize, valeur: f64) {
        self.tampon.truncate(debut);
        self.tampon.push_str(&vers_interne(valeur));
        self.egal_presse = false;
    }

    /// M+ / M- ne bloquent jamais : tampon illisible => 0.
    fn valeur_courante_ou_zero(&self) -> f64 {
        if finit_par_operateur(&self.tampon) {
            return 0.0;
        }
        match evaluer(&self.tampon, self.ans, self.mode_angle) {
            Ok(v) if v.is_finite() => v,
            Ok(v) => {
                debug!("mémoire: {v} non fini, compté 0");
                0.0
            }
            Err(e) => {
                debug!("mémoire: tampon illisible ({e}), compté 0");
                0.0
            }
        }
    }

    fn erreur(&mut self, e: &ErreurCalcul) -> String {
        warn!("calcul refusé sur {:?}: {e}", self.tampon);
        self.tampon.clear();
        self.egal_presse = true;
        MARQUEUR_ERREUR.to_string()
    }
}
