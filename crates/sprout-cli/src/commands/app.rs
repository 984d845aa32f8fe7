//! Interactive screen shell.
//!
//! Drives the navigation controller from the terminal: each screen is
//! rendered as text, and its outbound signals are offered as choices.
//! The dashboard lists the user's notifications through the shared
//! fetch client.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::Select;
use std::time::Duration;

use sprout_app::{get_context, ExecutionContext, FetchClient, NavController, NavSignal, Screen};
use sprout_core::notification::model::Notification;

#[derive(Args)]
pub struct AppArgs {
    /// Auth token for API calls (seeded demo token by default)
    #[arg(long, env = "SPROUT_TOKEN", default_value = "demo-kid")]
    pub token: String,
}

pub async fn execute(args: AppArgs) -> Result<()> {
    std::env::set_var("SPROUT_TOKEN", &args.token);
    let client = get_context(ExecutionContext::Persistent);

    let mut nav = NavController::new();

    println!();
    println!("  {}", "Sprout".green().bold());
    println!("  {}", "money skills for kids".dimmed());

    while nav.current() == Screen::Splash {
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    loop {
        let screen = nav.current();
        render(screen, &client).await;

        let signals: Vec<NavSignal> = screen
            .signals()
            .iter()
            .copied()
            .filter(|s| *s != NavSignal::SplashElapsed)
            .collect();
        let mut items: Vec<&str> = signals.iter().map(|s| label(*s)).collect();
        items.push("Exit");

        let choice = Select::new()
            .with_prompt("Where to?")
            .items(&items)
            .default(0)
            .interact()?;

        if choice == signals.len() {
            break;
        }
        nav.signal(signals[choice])?;
    }

    Ok(())
}

fn label(signal: NavSignal) -> &'static str {
    match signal {
        NavSignal::Continue => "Continue",
        NavSignal::OnboardingComplete => "Finish onboarding",
        NavSignal::OpenLearning => "Learn",
        NavSignal::OpenWallet => "Wallet",
        NavSignal::OpenSettings => "Settings",
        NavSignal::StartQuiz => "Start quiz",
        NavSignal::StartGame => "Start game",
        NavSignal::Back => "Back",
        NavSignal::SplashElapsed => "",
    }
}

async fn render(screen: Screen, client: &FetchClient) {
    println!();
    match screen {
        Screen::Splash => {}
        Screen::WhoIsUsing => {
            println!("  {}", "Who's using Sprout today?".bold());
            println!("  {}", "Pick any profile to continue.".dimmed());
        }
        Screen::Onboarding => {
            println!("  {}", "Welcome!".bold());
            println!("  Learn to earn, save and spend wisely.");
        }
        Screen::Dashboard => {
            println!("  {}", "Dashboard".bold());
            render_notifications(client).await;
        }
        Screen::Learning => {
            println!("  {}", "Learning Hub".bold());
            println!("  Quizzes and games to level up your money skills.");
        }
        Screen::Quiz => {
            println!("  {}", "Quiz".bold());
            println!("  Answer questions to earn stars.");
        }
        Screen::Game => {
            println!("  {}", "Coin Chase".bold());
            println!("  Catch the coins, dodge the bills!");
        }
        Screen::Wallet => {
            println!("  {}", "Wallet".bold());
            println!("  Your savings and spending at a glance.");
        }
        Screen::Settings => {
            println!("  {}", "Settings".bold());
        }
    }
    println!();
}

async fn render_notifications(client: &FetchClient) {
    match client.get::<Vec<Notification>>("/api/notifications").await {
        Ok(notifications) if notifications.is_empty() => {
            println!("  {}", "No notifications yet.".dimmed());
        }
        Ok(notifications) => {
            for n in &notifications {
                let marker = if n.read { " " } else { "•" };
                let title = n.title.as_deref().unwrap_or("Notification");
                println!(
                    "  {} {}  {}",
                    marker.yellow(),
                    title.bold(),
                    n.message
                );
            }
        }
        Err(e) => {
            // Terminal for this visit; the next visit re-requests.
            println!("  {} {}", "Could not load notifications:".red(), e);
        }
    }
}
