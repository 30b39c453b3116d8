// src/noyau/fonctions.rs
//
// Tables fermées : mode d’angle, fonctions unaires, constantes.
// Lecture seule, aucun état global.

use std::f64::consts::{E, PI};
use std::fmt;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModeAngle {
    #[default]
    Deg,
    Rad,
}

impl ModeAngle {
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Deg => ModeAngle::Rad,
            ModeAngle::Rad => ModeAngle::Deg,
        }
    }

    /// Angle saisi -> radians (DEG convertit, RAD laisse passer).
    pub fn en_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Deg => x.to_radians(),
            ModeAngle::Rad => x,
        }
    }
}

impl fmt::Display for ModeAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeAngle::Deg => f.write_str("DEG"),
            ModeAngle::Rad => f.write_str("RAD"),
        }
    }
}

/// Fonctions unaires appelables sous la forme `nom(`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
    Sqrt,
    Abs,
    Exp,
}

impl Fonction {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        let f = match nom {
            "sin" => Fonction::Sin,
            "cos" => Fonction::Cos,
            "tan" => Fonction::Tan,
            "ln" => Fonction::Ln,
            "log" => Fonction::Log,
            "sqrt" => Fonction::Sqrt,
            "abs" => Fonction::Abs,
            "exp" => Fonction::Exp,
            _ => return None,
        };
        Some(f)
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Ln => "ln",
            Fonction::Log => "log",
            Fonction::Sqrt => "sqrt",
            Fonction::Abs => "abs",
            Fonction::Exp => "exp",
        }
    }

    /// Sémantique IEEE-754 : pas d’erreur ici, NaN/±inf se propagent.
    pub fn appliquer(self, x: f64, mode: ModeAngle) -> f64 {
        match self {
            Fonction::Sin => mode.en_radians(x).sin(),
            Fonction::Cos => mode.en_radians(x).cos(),
            Fonction::Tan => mode.en_radians(x).tan(),
            Fonction::Ln => x.ln(),
            Fonction::Log => x.log10(),
            Fonction::Sqrt => x.sqrt(),
            Fonction::Abs => x.abs(),
            Fonction::Exp => x.exp(),
        }
    }
}

/// Résout une constante symbolique (`pi`, `e`, `ans`).
pub fn constante(nom: &str, ans: f64) -> Option<f64> {
    match nom {
        "pi" => Some(PI),
        "e" => Some(E),
        "ans" => Some(ans),
        _ => None,
    }
}
