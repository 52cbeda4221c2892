//! # pricecast demo
//!
//! Type a price and press enter: the `em` and `label` displays print it.
//!
//! ```text
//! 42000        broadcast a value
//! :unsub       press the unsubscribe button (detaches the label display)
//! :sub         press the subscribe button (attaches both displays again)
//! :quit        exit (Ctrl-C and end of input also exit)
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --features logging
//! ```

use std::sync::Arc;

use pricecast::{
    Board, BoardError, Config, ConsoleSurface, Handle, LineSource, RunStats, Surface,
    wait_for_shutdown_signal,
};
use tokio_util::sync::CancellationToken;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = rt.block_on(serve());
    // Stdin reads park a blocking thread; do not wait for it on exit.
    rt.shutdown_background();

    let stats = result?;
    log::info!(
        "board stopped: lines={} broadcasts={} renders={} rejected={}",
        stats.lines,
        stats.broadcasts,
        stats.renders,
        stats.rejected
    );
    Ok(())
}

async fn serve() -> Result<RunStats, BoardError> {
    let price_surfaces: Vec<Arc<dyn Surface>> = vec![ConsoleSurface::arc("em")];
    let label_surfaces: Vec<Arc<dyn Surface>> = vec![ConsoleSurface::arc("label")];

    #[cfg(feature = "logging")]
    let extra: Vec<Handle<str>> = vec![Handle::new(pricecast::LogWriter::new())];
    #[cfg(not(feature = "logging"))]
    let extra: Vec<Handle<str>> = Vec::new();

    let mut board = Board::builder(Config::default())
        .with_price_surfaces(price_surfaces)
        .with_label_surfaces(label_surfaces)
        .with_subscribers(extra)
        .build();

    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        match wait_for_shutdown_signal().await {
            Ok(()) => signal_token.cancel(),
            Err(err) => log::warn!("[{}] {}", err.as_label(), err.as_message()),
        }
    });

    board.run(&mut LineSource::stdin(), token).await
}
