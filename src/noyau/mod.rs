//! Noyau d’évaluation
//!
//! Organisation interne :
//! - normalise.rs : séparateur décimal local -> '.'
//! - jetons.rs    : tokenisation (+ moins unaire)
//! - rpn.rs       : table des opérateurs + shunting-yard
//! - eval.rs      : pile RPN + pipeline complet
//! - erreur.rs    : taxonomie des erreurs
//! - format.rs    : affichage du résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvaluationError;
pub use eval::{evaluate, evaluate_detaille, DemarcheNoyau};
pub use format::format_resultat;
pub use normalise::SEPARATEUR_CANONIQUE;
