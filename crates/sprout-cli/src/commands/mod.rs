//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod app;
pub mod seed;
pub mod serve;

/// Sprout - money skills for kids
#[derive(Parser)]
#[command(name = "sprout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server
    Serve(serve::ServeArgs),

    /// Run the interactive screen shell
    App(app::AppArgs),

    /// Seed demo users and notifications
    Seed(seed::SeedArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::App(args) => app::execute(args).await,
            Commands::Seed(args) => seed::execute(args).await,
        }
    }
}
