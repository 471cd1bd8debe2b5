//! Évaluateur d’expressions arithmétiques (f64).
//!
//! `+ - * / ^`, parenthèses, moins unaire ; séparateur décimal au choix.
//!
//! ```
//! use evaluateur::evaluate;
//!
//! assert_eq!(evaluate("3+4*2", ".").unwrap(), 11.0);
//! assert_eq!(evaluate("3,5+1", ",").unwrap(), 4.5);
//! ```

pub mod noyau;

pub use noyau::{evaluate, evaluate_detaille, format_resultat, EvaluationError};
