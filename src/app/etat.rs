//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur et lui transmettre les touches.
//!
//! Contrats :
//! - Aucune logique de calcul ici (tout passe par `Moteur::handle`).
//! - La vue ne lit que l'affichage et l'opérateur en attente.

use crate::noyau::{Evenement, Moteur, Operateur};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    moteur: Moteur,
}

impl AppCalc {
    /// Une touche = un événement ; l'affichage retourné est à montrer tel quel.
    pub fn envoyer(&mut self, ev: Evenement) -> &str {
        self.moteur.handle(ev)
    }

    pub fn affichage(&self) -> &str {
        self.moteur.affichage()
    }

    /// Opérateur en attente (surbrillance de la touche).
    pub fn operateur_actif(&self) -> Option<Operateur> {
        self.moteur.operateur()
    }
}
