// src/noyau/normalise.rs
//
// Séparateur décimal local -> '.' canonique.
// Aucune validation ici : les caractères douteux ressortent plus tard (jetons).

use std::borrow::Cow;

/// Séparateur décimal compris par le tokenizer.
pub const SEPARATEUR_CANONIQUE: &str = ".";

/// Remplace chaque occurrence de `separateur` par `.`.
///
/// Pas de copie si le séparateur est déjà `.` (ou vide, traité comme canonique).
pub fn normaliser<'a>(expression: &'a str, separateur: &str) -> Cow<'a, str> {
    if separateur.is_empty() || separateur == SEPARATEUR_CANONIQUE {
        return Cow::Borrowed(expression);
    }
    Cow::Owned(expression.replace(separateur, SEPARATEUR_CANONIQUE))
}
