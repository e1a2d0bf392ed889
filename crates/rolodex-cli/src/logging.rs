use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use rolodex_core::error::RolodexError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Log to stderr, and to `log_file` when given. `RUST_LOG` overrides the
/// default `info` level.
pub fn init(log_file: Option<&Path>) -> Result<(), RolodexError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}
