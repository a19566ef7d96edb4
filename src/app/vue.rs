// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Écran + pavé 4 colonnes. Chaque bouton envoie exactement un événement
// au moteur ; l'affichage est rendu tel quel (y compris "Error").
// Pas de saisie clavier.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Evenement, Operateur};

/// Taille d'une touche du pavé.
const TOUCHE: [f32; 2] = [64.0, 56.0];

/// Taille du texte de l'écran.
const TAILLE_ECRAN: f32 = 56.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        self.ui_ecran(ui);

        ui.add_space(12.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.affichage())
                                .size(TAILLE_ECRAN)
                                .monospace(),
                        )
                        .truncate(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                self.touche_chiffre(ui, '7');
                self.touche_chiffre(ui, '8');
                self.touche_chiffre(ui, '9');
                self.touche_operateur(ui, Operateur::Divide);
                ui.end_row();

                self.touche_chiffre(ui, '4');
                self.touche_chiffre(ui, '5');
                self.touche_chiffre(ui, '6');
                self.touche_operateur(ui, Operateur::Multiply);
                ui.end_row();

                self.touche_chiffre(ui, '1');
                self.touche_chiffre(ui, '2');
                self.touche_chiffre(ui, '3');
                self.touche_operateur(ui, Operateur::Subtract);
                ui.end_row();

                self.touche_chiffre(ui, '0');
                self.touche(ui, ".", "Point décimal", Evenement::Decimal);
                self.touche(ui, "=", "Calculer", Evenement::Calculer);
                self.touche_operateur(ui, Operateur::Add);
                ui.end_row();
            });

        ui.add_space(4.0);

        // AC (large) + C, comme la rangée du bas de l'écran d'origine.
        ui.horizontal(|ui| {
            let large = [TOUCHE[0] * 3.0 + 16.0, TOUCHE[1]];
            let ac = ui
                .add_sized(large, egui::Button::new("AC"))
                .on_hover_text("Remise à zéro totale");
            if ac.clicked() {
                self.envoyer(Evenement::EffacerTout);
            }

            self.touche(
                ui,
                "C",
                "Efface le dernier chiffre, puis l’opérateur",
                Evenement::EffacerDernier,
            );
        });
    }

    fn touche_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        let resp = ui.add_sized(TOUCHE, egui::Button::new(c.to_string()));
        if resp.clicked() {
            if let Some(ev) = Evenement::chiffre(c) {
                self.envoyer(ev);
            }
        }
    }

    fn touche_operateur(&mut self, ui: &mut egui::Ui, op: Operateur) {
        let actif = self.operateur_actif() == Some(op);
        let resp = ui.add_sized(TOUCHE, egui::Button::new(op.symbole()).selected(actif));
        if resp.clicked() {
            self.envoyer(Evenement::Operateur(op));
        }
    }

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, ev: Evenement) {
        let resp = ui
            .add_sized(TOUCHE, egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.envoyer(ev);
        }
    }
}
