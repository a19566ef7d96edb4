//! Journalisation (tracing) — natif seulement.
//!
//! `RUST_LOG` prend le dessus sur le niveau par défaut :
//! ```bash
//! RUST_LOG=calculatrice_base=debug cargo run
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Silencieux par défaut : avertissements et erreurs seulement.
const NIVEAU_LOG_DEFAUT: &str = "warn";

static INIT: Once = Once::new();

/// Installe l'abonné fmt. Plusieurs appels : seul le premier compte.
pub fn init() {
    INIT.call_once(|| {
        let filtre = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(NIVEAU_LOG_DEFAUT));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_filter(filtre);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
