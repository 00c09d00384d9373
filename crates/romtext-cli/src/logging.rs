//! Tracing subscriber setup.
//!
//! Logs always go to stderr; stdout is reserved for emitted bank data.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output for the romtext crates when `verbose` is set.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,romtext_cli=debug,romtext_backend_text=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
