//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, erreur, démarche, réglages)
//! et offrir les actions des touches (saisie, DEL, C) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Une erreur ne modifie jamais l’affichage.
//! - Après un résultat ("expr=valeur"), la saisie suivante repart de zéro.

use super::reglages::{Reglages, Separateur};

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- affichage (entrée + dernier résultat) ---
    pub affichage: String,

    // --- sorties ---
    pub erreur: String, // message d’erreur (si l’évaluation échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            affichage: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            reglages,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “touches” (état seulement) ------------------------ */

    /// Ajoute un symbole. Si un résultat est affiché, on repart d’un affichage vide.
    pub fn saisir(&mut self, s: &str) {
        if self.affiche_resultat() {
            self.affichage.clear();
        }
        self.affichage.push_str(s);
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Touche décimale : insère le séparateur courant.
    pub fn saisir_separateur(&mut self) {
        let sep = self.reglages.separateur.as_str();
        self.saisir(sep);
    }

    /// DEL : retire le dernier caractère.
    pub fn effacer_dernier(&mut self) {
        self.affichage.pop();
        self.focus_entree = true;
    }

    /// C : tout effacer (affichage + erreur + démarche).
    pub fn effacer(&mut self) {
        self.affichage.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_separateur(&mut self, separateur: Separateur) {
        self.reglages.separateur = separateur;
        self.focus_entree = true;
    }

    /* ------------------------ Résultats ------------------------ */

    /// Vrai si l’affichage contient déjà "expr=valeur".
    pub fn affiche_resultat(&self) -> bool {
        self.affichage.contains('=')
    }

    /// Texte à évaluer : tout ce qui précède un éventuel '='.
    pub fn expression_courante(&self) -> &str {
        self.affichage
            .split_once('=')
            .map_or(self.affichage.as_str(), |(avant, _)| avant)
    }

    /// Dépose un résultat : l’affichage devient "expr=valeur".
    pub fn set_resultat(&mut self, valeur: &str, demarche: Demarche) {
        let expr = self.expression_courante().to_string();
        self.affichage = format!("{expr}={valeur}");
        self.erreur.clear();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Place une erreur. L’affichage reste intact ; la démarche est effacée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }
}
