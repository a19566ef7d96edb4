// src/noyau/evenement.rs

/// Opérateur binaire en attente entre les deux opérandes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operateur {
    /// Symbole affiché sur le pavé.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Add => "+",
            Operateur::Subtract => "−",
            Operateur::Multiply => "×",
            Operateur::Divide => "÷",
        }
    }

    /// Symbole du pavé (ou alias ASCII) -> opérateur.
    pub fn depuis_symbole(s: &str) -> Option<Operateur> {
        match s.trim() {
            "+" => Some(Operateur::Add),
            "−" | "-" => Some(Operateur::Subtract),
            "×" | "*" => Some(Operateur::Multiply),
            "÷" | "/" => Some(Operateur::Divide),
            _ => None,
        }
    }
}

/// Événements envoyés par la vue au moteur (une touche = un événement).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    /// Chiffre '0'..='9' (construire via `Evenement::chiffre`).
    Chiffre(char),
    Operateur(Operateur),
    Decimal,
    Calculer,
    /// "C" : backspace à trois niveaux.
    EffacerDernier,
    /// "AC"
    EffacerTout,
}

impl Evenement {
    /// Seuls les chiffres ASCII passent ; le reste n'atteint jamais le moteur.
    pub fn chiffre(c: char) -> Option<Evenement> {
        c.is_ascii_digit().then_some(Evenement::Chiffre(c))
    }
}
