// src/reglages.rs
//
// Réglages persistants (lecture seule) : fichier TOML optionnel.
// Fichier absent => valeurs par défaut. Champs absents => valeurs par défaut.
//
// Exemple (~/.config/calculatrice-scientifique/reglages.toml) :
//
//   mode_angle = "RAD"
//   decimales = 8
//   historique_max = 50

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::noyau::historique::CAPACITE_DEFAUT;
use crate::noyau::session::DECIMALES_DEFAUT;
use crate::noyau::ModeAngle;

/// Garde-fou : au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub const DECIMALES_MAX: usize = 15;

const DOSSIER: &str = "calculatrice-scientifique";
const FICHIER: &str = "reglages.toml";

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture de {chemin}: {source}")]
    Lecture {
        chemin: PathBuf,
        source: std::io::Error,
    },

    #[error("format TOML invalide: {0}")]
    Format(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub mode_angle: ModeAngle,
    pub decimales: usize,
    pub historique_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            mode_angle: ModeAngle::default(),
            decimales: DECIMALES_DEFAUT,
            historique_max: CAPACITE_DEFAUT,
        }
    }
}

impl Reglages {
    /// Lit un texte TOML puis borne les valeurs.
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        let mut r: Reglages = toml::from_str(texte)?;
        r.decimales = r.decimales.min(DECIMALES_MAX);
        r.historique_max = r.historique_max.max(1);
        Ok(r)
    }

    /// `chemin` explicite (--config) ou chemin par défaut.
    /// Un fichier par défaut absent n’est pas une erreur ; un fichier explicite absent, si.
    pub fn charger(chemin: Option<&Path>) -> Result<Self, ErreurReglages> {
        let (chemin, explicite) = match chemin {
            Some(p) => (p.to_path_buf(), true),
            None => match chemin_defaut() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !explicite && !chemin.exists() {
            info!("pas de réglages ({}), valeurs par défaut", chemin.display());
            return Ok(Self::default());
        }

        let texte = fs::read_to_string(&chemin).map_err(|source| ErreurReglages::Lecture {
            chemin: chemin.clone(),
            source,
        })?;
        let r = Self::depuis_toml(&texte)?;
        info!("réglages chargés depuis {}: {r:?}", chemin.display());
        Ok(r)
    }
}

/// `<config_dir>/calculatrice-scientifique/reglages.toml`
pub fn chemin_defaut() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(DOSSIER).join(FICHIER))
}
