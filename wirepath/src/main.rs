//! wirepath — shortest single-wire routing on a grid board.
//!
//! Run: cargo run -- --size 14 --blocked 20
//! Log output goes to stderr; set `RUST_LOG=debug` for search statistics.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wirepath_lib::{Args, RunConfig, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cfg = RunConfig::from(Args::parse());
    let mut stdout = io::stdout().lock();
    run(&cfg, &mut stdout)?;
    Ok(())
}
