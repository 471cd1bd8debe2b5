// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Pavé : 7 8 9 ( / 4 5 6 ) / 1 2 3 DEL / 0 sep ^ C / + - * / / =
// - Focus redonné à l’entrée après chaque clic (focus_entree)

use eframe::egui;
use log::debug;

use evaluateur::noyau::{evaluate_detaille, format_resultat};

use super::etat::{AppCalc, Demarche};
use super::reglages::Separateur;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Évaluateur");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                self.ui_pave_numerique(ui);

                if !self.erreur.is_empty() {
                    ui.add_space(6.0);
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.affichage)
                .desired_width(ui.available_width())
                .hint_text("Ex: 3+4*2, (1+2)^2, -5+3")
                .id_source("affichage_edit")
                .font(egui::TextStyle::Heading)
                .horizontal_align(egui::Align::Max),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue seulement si le champ est focus
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Séparateur décimal :");
            let mut sep = self.reglages.separateur;
            ui.radio_value(&mut sep, Separateur::Point, "point (.)");
            ui.radio_value(&mut sep, Separateur::Virgule, "virgule (,)");
            if sep != self.reglages.separateur {
                self.set_separateur(sep);
            }
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        let sep = self.reglages.separateur.as_str();

        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "7", Touche::Saisie("7"));
                self.bouton(ui, "8", Touche::Saisie("8"));
                self.bouton(ui, "9", Touche::Saisie("9"));
                self.bouton(ui, "(", Touche::Saisie("("));
                ui.end_row();

                self.bouton(ui, "4", Touche::Saisie("4"));
                self.bouton(ui, "5", Touche::Saisie("5"));
                self.bouton(ui, "6", Touche::Saisie("6"));
                self.bouton(ui, ")", Touche::Saisie(")"));
                ui.end_row();

                self.bouton(ui, "1", Touche::Saisie("1"));
                self.bouton(ui, "2", Touche::Saisie("2"));
                self.bouton(ui, "3", Touche::Saisie("3"));
                self.bouton(ui, "DEL", Touche::EffacerDernier);
                ui.end_row();

                self.bouton(ui, "0", Touche::Saisie("0"));
                self.bouton(ui, sep, Touche::Separateur);
                self.bouton(ui, "^", Touche::Saisie("^"));
                self.bouton(ui, "C", Touche::Effacer);
                ui.end_row();

                self.bouton(ui, "+", Touche::Saisie("+"));
                self.bouton(ui, "-", Touche::Saisie("-"));
                self.bouton(ui, "*", Touche::Saisie("*"));
                self.bouton(ui, "/", Touche::Saisie("/"));
                ui.end_row();
            });

        ui.add_space(6.0);

        let eq = ui.add_sized([ui.available_width(), 40.0], egui::Button::new("="));
        if eq.clicked() {
            self.eval_via_noyau();
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([64.0, 40.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Saisie(s) => self.saisir(s),
            Touche::Separateur => self.saisir_separateur(),
            Touche::EffacerDernier => self.effacer_dernier(),
            Touche::Effacer => self.effacer(),
        }
    }

    /// Évalue l’expression via le noyau, puis dépose résultat ou erreur dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let sep = self.reglages.separateur.as_str();

        match evaluate_detaille(self.expression_courante(), sep) {
            Ok((valeur, d_noyau)) => {
                let d_ui = Demarche {
                    jetons: d_noyau.jetons,
                    rpn: d_noyau.rpn,
                };
                self.set_resultat(&format_resultat(valeur, sep), d_ui);
            }
            Err(e) => {
                debug!("évaluation refusée: {e}");
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Saisie(&'static str),
    Separateur,
    EffacerDernier,
    Effacer,
}
