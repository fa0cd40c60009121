mod config;
mod error;
mod extract;
mod fetch;
mod pagination;
mod record;
mod scrape;
mod writer;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use config::ScrapeConfig;
use fetch::PacedClient;
use scrape::Scraper;
use writer::JsonDirWriter;

#[derive(Parser)]
#[command(
    name = "votes_scraper",
    about = "Scrape the voting records of the Georgian Parliament"
)]
struct Cli {
    /// Output directory for per-bill JSON files (created if missing)
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("Failed to create output directory {}", cli.output.display()))?;
    println!("Output directory: {}", cli.output.display());

    let config = ScrapeConfig::default();
    let fetcher = PacedClient::new(config.pacing);
    let writer = JsonDirWriter::new(&cli.output, config.json_indent);

    let mut scraper = Scraper::new(config, fetcher, writer);
    let stats = scraper.run()?;
    println!(
        "Done: {} voting records across {} pages.",
        stats.records, stats.pages
    );

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
