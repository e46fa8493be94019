//! Tracing setup for hosts that do not install their own subscriber.
//!
//! Library code only emits `tracing` events; nothing is printed until a
//! subscriber is installed, either by the host or by [`init`].

use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

static INITIALIZED: Mutex<bool> = Mutex::new(false);

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Another global subscriber is already installed.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(tracing::subscriber::SetGlobalDefaultError),
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Subsequent calls are no-ops, including calls racing the first one.
pub fn init() -> Result<(), LoggingError> {
    let mut initialized = INITIALIZED.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if *initialized {
        return Ok(());
    }

    let subscriber = Registry::default()
        .with(build_env_filter())
        .with(fmt::layer().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber).map_err(LoggingError::SetGlobal)?;
    *initialized = true;
    drop(initialized);

    tracing::debug!("Logging initialized");
    Ok(())
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
