//! NoteCrud terminal binary
//!
//! # Usage
//!
//! ```bash
//! cargo run -p notecrud-app
//!
//! # Verbose store logging (written to stderr)
//! RUST_LOG=debug cargo run -p notecrud-app
//! ```
//!
//! See `config.rs` for the `NOTECRUD_*` environment variables.

use std::io;

use notecrud_app_lib::AppConfig;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with rendered notes
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Starting NoteCrud (max title {} chars, max content {} chars)",
        config.store.max_title_length,
        config.store.max_content_length
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    notecrud_app_lib::run(config, stdin.lock(), stdout.lock())
}
