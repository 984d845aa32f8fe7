//! API server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::sync::Arc;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let pool = Arc::new(sprout_db::init_pool_from_env().await?);

    println!();
    println!("  {} {}", "Sprout".green().bold(), "API Server".bold());
    println!();
    println!(
        "  {}     http://{}:{}/api",
        "API".green(),
        args.host,
        args.port
    );
    println!(
        "  {}  http://{}:{}/",
        "Status".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    sprout_api::run_server(pool, &args.host, args.port).await
}
