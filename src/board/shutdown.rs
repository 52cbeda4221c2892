//! # Cross-platform OS signal handling.
//!
//! Provides [`wait_for_shutdown_signal`] an async helper that completes when the process receives a termination signal.
//!
//! ## Signals
//! **Unix platforms:**
//! - `SIGINT` (Ctrl-C in terminal)
//! - `SIGTERM` (default kill signal)
//! - `SIGQUIT` (quit signal)
//!
//! **Windows platforms:**
//! - `Ctrl-C` via [`tokio::signal::ctrl_c`]

use std::io;

use crate::error::BoardError;

fn signal_error(source: io::Error) -> BoardError {
    BoardError::Signal { source }
}

/// Waits for a termination signal.
///
/// Returns `Ok(())` when any signal is received, or [`BoardError::Signal`] if
/// signal registration fails.
#[cfg(unix)]
pub async fn wait_for_shutdown_signal() -> Result<(), BoardError> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt()).map_err(signal_error)?;
    let mut sigterm = signal(SignalKind::terminate()).map_err(signal_error)?;
    let mut sigquit = signal(SignalKind::quit()).map_err(signal_error)?;

    tokio::select! {
        _ = sigint.recv()  => {},
        _ = sigterm.recv() => {},
        _ = sigquit.recv() => {},
    }
    Ok(())
}

/// Waits for a termination signal.
///
/// Returns `Ok(())` when Ctrl-C is received, or [`BoardError::Signal`] if
/// signal registration fails.
#[cfg(not(unix))]
pub async fn wait_for_shutdown_signal() -> Result<(), BoardError> {
    tokio::signal::ctrl_c().await.map_err(signal_error)
}
