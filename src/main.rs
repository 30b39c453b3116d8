// src/main.rs
//
// Calculatrice scientifique — point d’entrée
// ------------------------------------------
// - Sans argument : fenêtre native (eframe::run_native)
// - --eval "<expr>" : calcul unique sur la sortie standard, sans fenêtre
// - --config / --rad : réglages (fichier TOML, surcharge du mode d’angle)
//
// Journalisation : RUST_LOG=debug affiche jetons et RPN.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use log::warn;

mod app;
mod noyau;
mod reglages;

use app::AppCalc;
use noyau::format::format_resultat;
use noyau::{evaluer, ModeAngle, MARQUEUR_ERREUR};
use reglages::Reglages;

const TITRE_APP: &str = "Calculatrice scientifique";

#[derive(Debug, Parser)]
#[command(version, about = "Calculatrice scientifique (DEG/RAD, mémoire, historique)")]
struct Args {
    /// Fichier de réglages TOML (défaut : dossier de configuration utilisateur)
    #[arg(long, value_name = "FICHIER")]
    config: Option<PathBuf>,

    /// Démarrer en radians
    #[arg(long)]
    rad: bool,

    /// Évaluer une expression et quitter
    #[arg(long, value_name = "EXPRESSION")]
    eval: Option<String>,
}

fn reglages(args: &Args) -> Reglages {
    let mut r = Reglages::charger(args.config.as_deref()).unwrap_or_else(|e| {
        warn!("réglages ignorés: {e}");
        Reglages::default()
    });
    if args.rad {
        r.mode_angle = ModeAngle::Rad;
    }
    r
}

/// Mode ligne de commande : même verdict que la touche '=' (non fini => erreur).
fn eval_unique(expression: &str, r: &Reglages) -> String {
    match evaluer(expression, 0.0, r.mode_angle) {
        Ok(v) if v.is_finite() => format_resultat(v, r.decimales),
        Ok(v) => {
            warn!("{expression:?} = {v}");
            MARQUEUR_ERREUR.to_string()
        }
        Err(e) => {
            warn!("{expression:?}: {e}");
            MARQUEUR_ERREUR.to_string()
        }
    }
}

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();
    let r = reglages(&args);

    if let Some(expression) = &args.eval {
        let sortie = eval_unique(expression, &r);
        println!("{sortie}");
        if sortie == MARQUEUR_ERREUR {
            std::process::exit(1);
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([560.0, 720.0])
            .with_min_inner_size([440.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::depuis_reglages(&r)))),
    )
}
