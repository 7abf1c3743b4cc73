//! HTTP server command handler

use anyhow::{Context, Result};

use progression::SequencePredictor;

/// Run the HTTP API until Ctrl-C
pub fn run(host: &str, port: u16, predictor: SequencePredictor) -> Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    rt.block_on(progression::server::serve(host, port, predictor))
}
