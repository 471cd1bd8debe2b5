//! src/app/reglages.rs
//!
//! Réglages de l’application : séparateur décimal de l’utilisateur.
//!
//! Source : variable d’environnement `EVALUATEUR_SEPARATEUR` (natif),
//! sinon '.' ; modifiable ensuite depuis l’interface.

use log::{info, warn};

/// Variable d’environnement lue au démarrage.
pub const VAR_SEPARATEUR: &str = "EVALUATEUR_SEPARATEUR";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Separateur {
    #[default]
    Point,
    Virgule,
}

impl Separateur {
    pub fn as_str(self) -> &'static str {
        match self {
            Separateur::Point => ".",
            Separateur::Virgule => ",",
        }
    }

    pub fn depuis_texte(s: &str) -> Option<Self> {
        match s {
            "." => Some(Separateur::Point),
            "," => Some(Separateur::Virgule),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    pub separateur: Separateur,
}

impl Reglages {
    /// Lit `EVALUATEUR_SEPARATEUR` ; valeur absente ou inconnue => défaut.
    pub fn depuis_env() -> Self {
        match std::env::var(VAR_SEPARATEUR) {
            Ok(v) => Self::depuis_valeur(&v),
            Err(_) => Self::default(),
        }
    }

    fn depuis_valeur(v: &str) -> Self {
        match Separateur::depuis_texte(v.trim()) {
            Some(separateur) => {
                info!("séparateur décimal: {:?}", separateur.as_str());
                Self { separateur }
            }
            None => {
                warn!("{VAR_SEPARATEUR}={v:?} ignoré (attendu \".\" ou \",\")");
                Self::default()
            }
        }
    }
}
