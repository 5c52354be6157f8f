//! CLI entry point: render a route card for each stored activity.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use route_card::{ActivityStore, render_card, write_card};

#[derive(Parser)]
#[command(
    name = "route-card",
    version,
    about = "Render stored runs as annotated SVG route cards"
)]
struct Cli {
    /// Path to the activity database (created if missing)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Render every stored activity instead of the 10 most recent
    #[arg(long)]
    all: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok((written, skipped)) => {
            info!("{written} card(s) written, {skipped} record(s) skipped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> route_card::Result<(usize, usize)> {
    let store = ActivityStore::open(cli.database.as_deref(), cli.all)?;
    let out_dir = std::env::current_dir()?;

    let mut written = 0;
    let mut skipped = 0;
    for activity in store.list()? {
        match render_card(&activity)? {
            Some(card) => {
                let path = write_card(&card, &out_dir)?;
                info!("wrote {}", path.display());
                written += 1;
            }
            None => skipped += 1,
        }
    }
    Ok((written, skipped))
}
