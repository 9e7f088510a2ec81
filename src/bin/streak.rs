// SPDX-License-Identifier: MIT

//! Workout streak tracker CLI.
//!
//! Drives the session/streak core against a JSON store in a local state
//! directory, one subcommand per operation. Each invocation restores the
//! persisted session first, like a page load.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fitzone::config::Config;
use fitzone::store::LocalStore;
use fitzone::tracker::SessionTracker;

#[derive(Parser)]
#[command(name = "streak", about = "FitZone workout streak tracker")]
struct Cli {
    /// Directory holding the durable store
    #[arg(long, env = "STATE_DIR")]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show login state and the current streak
    Status,
    /// Log in (any non-empty email/password pair is accepted)
    Login { email: String, password: String },
    /// Log out, keeping the streak counters
    Logout,
    /// Log a workout for right now
    Workout,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let state_dir = match cli.state_dir {
        Some(dir) => dir,
        None => Config::from_env()?.state_dir,
    };
    fs::create_dir_all(&state_dir)?;

    let store = LocalStore::open(state_dir.join("store.json"))?;
    let mut tracker = SessionTracker::new(store);
    tracker.set_notifier(Box::new(|msg| println!("{msg}")));
    tracker.restore_session();

    match cli.command {
        Command::Status => print_status(&tracker),
        Command::Login { email, password } => {
            tracker.login(&email, &password)?;
        }
        Command::Logout => tracker.logout()?,
        Command::Workout => {
            tracker.mark_workout_done()?;
        }
    }
    Ok(())
}

fn print_status(tracker: &SessionTracker) {
    match tracker.session() {
        Some(session) => println!("Logged in as {}", session.email),
        None => println!("Not logged in"),
    }

    println!("Streak days: {}", tracker.current_streak());
    match tracker.last_workout().and_then(chrono::DateTime::from_timestamp_millis) {
        Some(last) => println!("Last workout: {}", last.format("%Y-%m-%d %H:%M UTC")),
        None => println!("Last workout: never"),
    }
}
