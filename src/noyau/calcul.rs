// src/noyau/calcul.rs
//
// Arithmétique f64 + lecture/affichage des nombres.
// Aucune panique : les erreurs restent des valeurs jusqu'à l'affichage.

use thiserror::Error;

use super::evenement::Operateur;

/// Texte affiché pour toute erreur de calcul.
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    /// Résultat NaN (ex: inf - inf après un dépassement enchaîné).
    #[error("résultat indéfini")]
    Indefini,
}

/// Lecture d'un tampon d'opérande : None si vide/blanc ou mal formé ("." seul).
pub fn lire_nombre(tampon: &str) -> Option<f64> {
    let s = tampon.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}

/// a op b, sans jamais paniquer.
pub fn appliquer(a: f64, op: Operateur, b: f64) -> Result<f64, ErreurCalcul> {
    let r = match op {
        Operateur::Add => a + b,
        Operateur::Subtract => a - b,
        Operateur::Multiply => a * b,
        Operateur::Divide => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
    };

    if r.is_nan() {
        Err(ErreurCalcul::Indefini)
    } else {
        Ok(r)
    }
}

/// Frontière d'affichage : rendu décimal par défaut, puis retrait du suffixe ".0" exact.
///
/// Pas de normalisation générale des zéros : seul ".0" est retiré (2.0 -> "2").
pub fn formater_resultat(r: Result<f64, ErreurCalcul>) -> String {
    match r {
        Ok(v) if !v.is_nan() => {
            let brut = format!("{v:?}");
            match brut.strip_suffix(".0") {
                Some(s) => s.to_string(),
                None => brut,
            }
        }
        _ => TEXTE_ERREUR.to_string(),
    }
}
