//! Demo data seeding.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::time::Duration;

use sprout_core::user::model::Role;

#[derive(Args)]
pub struct SeedArgs {
    /// Kid profile name
    #[arg(long, default_value = "Maya")]
    pub kid: String,

    /// Parent profile name
    #[arg(long, default_value = "Sam")]
    pub parent: String,
}

const KID_NOTIFICATIONS: &[(&str, &str)] = &[
    ("Allowance", "Your weekly allowance of $5 arrived"),
    ("Quiz result", "You scored 4/5 on the saving quiz"),
    ("Goal reached", "Skateboard fund is at 100%! Time to spend?"),
];

pub async fn execute(args: SeedArgs) -> Result<()> {
    let pool = sprout_db::init_pool_from_env().await?;

    let kid = sprout_core::user::create_user(&pool, &args.kid, Role::Kid, "demo-kid").await?;
    let parent =
        sprout_core::user::create_user(&pool, &args.parent, Role::Parent, "demo-parent").await?;

    for (title, message) in KID_NOTIFICATIONS {
        sprout_core::notification::create_notification(&pool, &kid.id, Some(title), message)
            .await?;
        // Keep creation-time scores distinct so the listing order is stable
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    sprout_core::notification::create_notification(
        &pool,
        &parent.id,
        Some("Weekly summary"),
        "Maya completed 2 lessons this week",
    )
    .await?;

    println!();
    println!("  {} demo data seeded", "Sprout".green().bold());
    println!();
    println!("  {}     {} (token: demo-kid)", "Kid".green(), kid.name);
    println!("  {}  {} (token: demo-parent)", "Parent".green(), parent.name);
    println!();
    println!("  Try: {} then {}", "sprout serve".bold(), "sprout app".bold());
    println!();

    Ok(())
}
