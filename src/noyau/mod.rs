//! Noyau — moteur de calculatrice à quatre opérations
//!
//! Organisation interne :
//! - evenement.rs : opérateurs + événements du pavé (enums fermées)
//! - calcul.rs    : arithmétique f64, lecture des tampons, format d'affichage
//! - moteur.rs    : machine à états (deux opérandes + opérateur en attente)

pub mod calcul;
pub mod evenement;
pub mod moteur;


// API publique minimale
pub use evenement::{Evenement, Operateur};
pub use moteur::Moteur;
