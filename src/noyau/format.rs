// src/noyau/format.rs
//
// Affichage d’un résultat f64 pour l’utilisateur.
// - représentation la plus courte qui relit la même valeur
// - entiers sans partie décimale (11, pas 11.0)
// - notation scientifique hors de [1e-5, 1e15)
// - séparateur décimal local

use super::normalise::SEPARATEUR_CANONIQUE;

const SCI_MIN: f64 = 1e-5;
const SCI_MAX: f64 = 1e15;

/// Formate `valeur` avec `separateur` comme point décimal.
pub fn format_resultat(valeur: f64, separateur: &str) -> String {
    if valeur.is_nan() {
        return "NaN".to_string();
    }
    if valeur.is_infinite() {
        return if valeur > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    // -0 s’affiche 0
    if valeur == 0.0 {
        return "0".to_string();
    }

    let abs = valeur.abs();
    let txt = if (SCI_MIN..SCI_MAX).contains(&abs) {
        format!("{valeur}")
    } else {
        format!("{valeur:e}")
    };

    if separateur.is_empty() || separateur == SEPARATEUR_CANONIQUE {
        txt
    } else {
        txt.replace(SEPARATEUR_CANONIQUE, separateur)
    }
}
