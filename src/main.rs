use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use squad_scrape::clubs::{CLUB_URLS, DEFAULT_OUTPUT};
use squad_scrape::dedupe::dedupe;
use squad_scrape::net::PageFetcher;
use squad_scrape::{output, roster, PlayerRecord};

#[derive(Parser)]
#[command(name = "squad-scrape")]
#[command(about = "Scrape club squad minutes and player attributes into CSV", long_about = None)]
struct Cli {
    /// Output CSV file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Delay after each profile request in milliseconds
    #[arg(long, default_value = "100")]
    delay_ms: u64,

    /// Number of requests before a longer pause
    #[arg(long, default_value = "25")]
    batch_size: usize,

    /// Duration of the longer pause in milliseconds
    #[arg(long, default_value = "1000")]
    batch_delay_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Delete stale *.csv exports from the output directory first
    #[arg(long)]
    clean: bool,

    /// Only scrape the first N clubs (smoke runs)
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.clean {
        let dir = cli
            .output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let removed =
            output::remove_stale_exports(dir).context("Failed to clean stale exports")?;
        if removed > 0 {
            println!("Removed {} stale export(s)", removed);
        }
    }

    let mut fetcher = PageFetcher::with_config(
        cli.delay_ms,
        cli.batch_size,
        cli.batch_delay_ms,
        cli.timeout_secs,
    )
    .context("Failed to create HTTP client")?;

    let limit = cli.limit.unwrap_or(CLUB_URLS.len());
    let mut records = Vec::new();

    for url in CLUB_URLS.iter().take(limit) {
        println!("Processing URL: {}", url);
        let started = Instant::now();

        match roster::scrape_club(&mut fetcher, url) {
            Ok(mut club_records) => {
                println!(
                    "  {} players in {:.2}s",
                    club_records.len(),
                    started.elapsed().as_secs_f64()
                );
                records.append(&mut club_records);
            }
            Err(e) => {
                log::warn!("Skipping club {}: {}", url, e);
                println!("  Failed to fetch page: {}", e);
            }
        }
    }

    println!("Collected {} appearance rows", records.len());

    let players = dedupe(records);
    output::write_csv(&players, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!("Wrote {} players to {}", players.len(), cli.output.display());
    print_summary(&players);

    Ok(())
}

/// Final dump of the result table: a short preview per player.
fn print_summary(players: &[PlayerRecord]) {
    for player in players.iter().take(10) {
        println!("  {} - {} ({} min)", player.name, player.club, player.minutes);
    }
    if players.len() > 10 {
        println!("  ... and {} more", players.len() - 10);
    }
}
