//! Process-wide tracing setup.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Variable holding an `EnvFilter` directive that overrides the flags.
pub const LOG_ENV: &str = "HERALD_LOG";

/// Load `.env`, then install the global subscriber.
///
/// `.env` is read first so a `HERALD_LOG` kept there takes effect.
///
/// # Errors
///
/// Returns an error if `.env` cannot be parsed or a subscriber is already set.
pub fn init(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    herald_config::load_dotenv().context("failed to load .env")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(quiet, verbose))
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn filter(quiet: bool, verbose: bool) -> EnvFilter {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level))
}
