//! CLI module
//!
//! - `serve`: REST surface in front of the remote executor
//! - `run`: one-shot `run` operation

pub mod run;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// ML node client - typed access to remote ML actions
#[derive(Parser)]
#[command(name = "ml-node-client")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the REST server
    Serve,

    /// Train, predict or train-and-predict once and print the output
    Run(run::RunCommandArgs),
}

/// `.env`, layered configuration and logging, shared by every command
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);
    config
}
