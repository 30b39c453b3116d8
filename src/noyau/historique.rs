// src/noyau/historique.rs
//
// Journal de session : lignes "<expression> = <résultat>".
// Vit en mémoire seulement, borné en taille (les plus anciennes sortent).

use std::collections::VecDeque;

pub const CAPACITE_DEFAUT: usize = 200;

#[derive(Clone, Debug)]
pub struct Historique {
    lignes: VecDeque<String>,
    capacite: usize,
}

impl Default for Historique {
    fn default() -> Self {
        Self::avec_capacite(CAPACITE_DEFAUT)
    }
}

impl Historique {
    pub fn avec_capacite(capacite: usize) -> Self {
        Self {
            lignes: VecDeque::new(),
            capacite: capacite.max(1),
        }
    }

    /// Ajoute une ligne ; les lignes vides sont ignorées.
    pub fn ajouter(&mut self, ligne: &str) {
        let ligne = ligne.trim();
        if ligne.is_empty() {
            return;
        }
        if self.lignes.len() == self.capacite {
            self.lignes.pop_front();
        }
        self.lignes.push_back(ligne.to_string());
    }

    pub fn vider(&mut self) {
        self.lignes.clear();
    }

    pub fn len(&self) -> usize {
        self.lignes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lignes.is_empty()
    }

    /// Lignes contenant `requete` (insensible à la casse), de la plus ancienne
    /// à la plus récente. Requête vide => tout.
    pub fn filtrer(&self, requete: &str) -> Vec<&str> {
        let q = requete.trim().to_lowercase();
        self.lignes
            .iter()
            .filter(|l| q.is_empty() || l.to_lowercase().contains(&q))
            .map(String::as_str)
            .collect()
    }
}

/// Partie résultat d’une ligne : ce qui suit le dernier '='.
pub fn resultat_de(ligne: &str) -> Option<&str> {
    let (_, resultat) = ligne.rsplit_once('=')?;
    let resultat = resultat.trim();
    (!resultat.is_empty()).then_some(resultat)
}
