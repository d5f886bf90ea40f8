//! # MyListing Directory Entry Point
//!
//! Parses flags and hands off to `mylisting_directory::run`.

use clap::Parser;
use mylisting_directory::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mylisting_directory::run(Cli::parse()).await
}
