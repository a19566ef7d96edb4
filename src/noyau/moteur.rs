//! Noyau — moteur de la calculatrice (machine à états).
//!
//! Deux tampons d'opérande, un opérateur en attente, un affichage dérivé.
//! Les phases sont implicites :
//! - opérateur = None  : saisie du premier opérande (ou résultat affiché, déjà semé)
//! - opérateur = Some  : saisie du second opérande
//!
//! Contrats :
//! - `handle` est total : chaque événement produit un état valide + un affichage non vide.
//! - Saisie incomplète => aucun effet (pas d'erreur).
//! - Seul un résultat non numérique (division par zéro, NaN) s'affiche comme "Error".
//! - Les tampons ne contiennent que des chiffres ASCII et au plus un '.'.

use tracing::{debug, trace};

use super::calcul::{appliquer, formater_resultat, lire_nombre, TEXTE_ERREUR};
use super::evenement::{Evenement, Operateur};

/// Affichage initial (et après AC).
const AFFICHAGE_ZERO: &str = "0";

#[derive(Clone, Debug)]
pub struct Moteur {
    premier: String,
    second: String,
    operateur: Option<Operateur>,
    affichage: String,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            premier: String::new(),
            second: String::new(),
            operateur: None,
            affichage: AFFICHAGE_ZERO.to_string(),
        }
    }
}

fn est_blanc(s: &str) -> bool {
    s.trim().is_empty()
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point d'entrée unique : applique l'événement, retourne l'affichage à jour.
    pub fn handle(&mut self, ev: Evenement) -> &str {
        match ev {
            Evenement::Chiffre(c) => self.entrer_chiffre(c),
            Evenement::Operateur(op) => self.entrer_operateur(op),
            Evenement::Decimal => self.entrer_decimal(),
            Evenement::Calculer => self.calculer(),
            Evenement::EffacerDernier => self.effacer_dernier(),
            Evenement::EffacerTout => self.effacer_tout(),
        }

        debug!(
            evenement = ?ev,
            premier = %self.premier,
            second = %self.second,
            operateur = ?self.operateur,
            affichage = %self.affichage,
            "événement traité"
        );

        &self.affichage
    }

    /* ------------------------ Lecture seule (vue + tests) ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn premier(&self) -> &str {
        &self.premier
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.operateur
    }

    /* ------------------------ Gestionnaires ------------------------ */

    /// Tampon en cours de saisie : second si un opérateur est posé, sinon premier.
    fn tampon_courant(&mut self) -> &mut String {
        if self.operateur.is_some() {
            &mut self.second
        } else {
            &mut self.premier
        }
    }

    fn entrer_chiffre(&mut self, c: char) {
        // Variante publique : tout caractère hors 0..9 est sans effet.
        if !c.is_ascii_digit() {
            trace!(?c, "chiffre ignoré : caractère hors 0..9");
            return;
        }

        // Repartir après un "0" initial ou une erreur (premier opérande seulement).
        if self.operateur.is_none()
            && (self.premier == AFFICHAGE_ZERO || self.affichage == TEXTE_ERREUR)
        {
            self.premier.clear();
        }

        let cible = self.tampon_courant();
        cible.push(c);
        self.affichage = cible.clone();
    }

    fn entrer_operateur(&mut self, op: Operateur) {
        if est_blanc(&self.premier) {
            trace!(?op, "opérateur ignoré : premier opérande vide");
            return;
        }
        // Remplace silencieusement un opérateur déjà choisi ; l'affichage ne change pas.
        self.operateur = Some(op);
    }

    fn entrer_decimal(&mut self) {
        let cible = self.tampon_courant();
        if cible.contains('.') {
            trace!("point décimal ignoré : déjà présent");
            return;
        }

        if est_blanc(cible) {
            *cible = "0.".to_string();
        } else {
            cible.push('.');
        }
        self.affichage = cible.clone();
    }

    fn calculer(&mut self) {
        let (Some(a), Some(b), Some(op)) = (
            lire_nombre(&self.premier),
            lire_nombre(&self.second),
            self.operateur,
        ) else {
            trace!("calcul ignoré : saisie incomplète");
            return;
        };

        let resultat = appliquer(a, op, b);
        if let Err(e) = resultat {
            debug!(%e, a, b, "calcul en erreur");
        }
        let texte = formater_resultat(resultat);

        // Remise à zéro puis amorçage du premier opérande (enchaînement).
        self.effacer_tout();
        if texte != TEXTE_ERREUR {
            self.premier = texte.clone();
        }
        self.affichage = texte;
    }

    fn effacer_dernier(&mut self) {
        match self.operateur {
            None => {
                if est_blanc(&self.premier) {
                    return;
                }
                self.premier.pop();
                self.affichage = Self::ou_zero(&self.premier);
            }
            Some(_) if !est_blanc(&self.second) => {
                self.second.pop();
                self.affichage = Self::ou_zero(&self.second);
            }
            Some(_) => {
                // Second vide : on abandonne l'opérateur, pas le premier nombre.
                self.operateur = None;
                self.affichage = self.premier.clone();
            }
        }
    }

    fn effacer_tout(&mut self) {
        self.premier.clear();
        self.second.clear();
        self.operateur = None;
        self.affichage = AFFICHAGE_ZERO.to_string();
    }

    fn ou_zero(tampon: &str) -> String {
        if est_blanc(tampon) {
            AFFICHAGE_ZERO.to_string()
        } else {
            tampon.to_string()
        }
    }
}
