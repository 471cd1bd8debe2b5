// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Toutes terminales : une entrée mal formée n’est jamais “réessayée”.

use thiserror::Error;

/// Erreur d’évaluation, quelle que soit l’étape qui l’a produite
/// (lexique, syntaxe RPN, ou évaluation de la pile).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// Entrée vide ou seulement des espaces.
    #[error("Entrée vide")]
    EmptyExpression,

    /// Caractère hors de `[0-9 . + - * / ^ ( ) espaces]`.
    /// `position` : index en caractères dans le texte normalisé.
    #[error("caractère inattendu à la position {position}: '{caractere}'")]
    UnexpectedCharacter { position: usize, caractere: char },

    #[error("parenthèses non appariées")]
    MismatchedParentheses,

    /// Opérateur sans assez de valeurs sur la pile.
    #[error("opérande manquant pour '{0}'")]
    MissingOperand(String),

    #[error("division par zéro")]
    DivisionByZero,

    /// La pile finale ne contient pas exactement une valeur.
    #[error("expression invalide")]
    MalformedExpression,

    #[error("nombre invalide: '{0}'")]
    InvalidNumber(String),
}
