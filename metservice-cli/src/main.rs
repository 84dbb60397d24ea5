//! Binary crate for the `metservice` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Human-friendly output formatting

use clap::Parser;
use env_logger::Env;

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().filter_or("METSERVICE_LOG", "warn"));

    let cmd = cli::Cli::parse();
    cmd.run().await
}
