use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

mod config;
mod db;
mod error;
mod models;
mod month;
mod report;
mod scoring;
mod telemetry;

use crate::config::AppConfig;
use crate::models::{Office, OfficeMetrics, Tier};
use crate::month::YearMonth;

#[derive(Parser)]
#[command(name = "referral-office-tiers")]
#[command(about = "Referral office scoring and tiering for dental referral marketing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    InitDb,
    /// Load realistic seed data
    Seed,
    /// Import monthly referral counts from a CSV file
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Score and tier every office
    Score {
        /// Reference month (YYYY-MM); defaults to the current month
        #[arg(long)]
        now: Option<YearMonth>,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Only list offices in this tier
        #[arg(long)]
        tier: Option<Tier>,
    },
    /// Generate a markdown tier report
    Report {
        #[arg(long)]
        now: Option<YearMonth>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Export office metrics as JSON or CSV
    Export {
        #[arg(long)]
        now: Option<YearMonth>,
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Json,
    Csv,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.log_level)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to Postgres")?;

    match cli.command {
        Commands::InitDb => {
            db::init_db(&pool).await?;
            println!("Schema ready.");
        }
        Commands::Seed => {
            db::seed(&pool).await?;
            println!("Seed data inserted.");
        }
        Commands::Import { csv } => {
            let written = db::import_csv(&pool, &csv).await?;
            println!("Wrote {written} monthly counts from {}.", csv.display());
        }
        Commands::Score { now, limit, tier } => {
            let now = resolve_now(now);
            let (offices, metrics) = score_all(&pool, now).await?;

            if metrics.is_empty() {
                println!("No offices in the catalog.");
                return Ok(());
            }

            let summary = scoring::summarize_tiers(&metrics);
            println!(
                "Tiers for {} offices as of {now}: {} VIP, {} Warm, {} Cold, {} Dormant ({} At-Risk, {} Emerging)",
                summary.total(),
                summary.vip,
                summary.warm,
                summary.cold,
                summary.dormant,
                summary.at_risk,
                summary.emerging
            );

            let mut listed: Vec<&OfficeMetrics> = report::ranked_active(&metrics);
            listed.extend(metrics.iter().filter(|m| !m.is_active()));
            if let Some(tier) = tier {
                listed.retain(|m| m.tier == tier);
            }

            for office in listed.into_iter().take(limit) {
                println!("- {}", describe(&offices, office));
            }
        }
        Commands::Report { now, out } => {
            let now = resolve_now(now);
            let (offices, metrics) = score_all(&pool, now).await?;
            let report = report::build_report(now, &offices, &metrics);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Export { now, format, out } => {
            let now = resolve_now(now);
            let (offices, metrics) = score_all(&pool, now).await?;
            let writer: Box<dyn Write> = match &out {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?,
                )),
                None => Box::new(io::stdout().lock()),
            };
            match format {
                ExportFormat::Json => report::write_json(writer, &metrics)?,
                ExportFormat::Csv => report::write_csv(writer, &offices, &metrics)?,
            }
            if let Some(path) = out {
                println!("Exported {} offices to {}.", metrics.len(), path.display());
            }
        }
    }

    Ok(())
}

fn resolve_now(now: Option<YearMonth>) -> YearMonth {
    now.unwrap_or_else(|| YearMonth::from_date(Utc::now().date_naive()))
}

async fn score_all(pool: &PgPool, now: YearMonth) -> anyhow::Result<(Vec<Office>, Vec<OfficeMetrics>)> {
    let offices = db::fetch_offices(pool).await?;
    let referrals = db::fetch_monthly_referrals(pool).await?;
    let metrics = scoring::compute_office_metrics(&referrals, &offices, now)
        .context("failed to score offices")?;
    tracing::info!(offices = offices.len(), referrals = referrals.len(), %now, "scored offices");
    Ok((offices, metrics))
}

fn describe(offices: &[Office], office: &OfficeMetrics) -> String {
    let name = offices
        .iter()
        .find(|o| o.office_id == office.office_id)
        .map(|o| o.name.as_str())
        .unwrap_or("(unnamed office)");
    let label = office
        .conditional_label
        .map(|label| format!(" [{label}]"))
        .unwrap_or_default();

    match (office.score, office.percentile) {
        (Some(score), Some(percentile)) => format!(
            "{name} ({}) {}{label} score {score:.1}, L12 {}, R3 {}, percentile {percentile}",
            office.office_id, office.tier, office.l12, office.r3
        ),
        _ if office.total_referrals == 0 => {
            format!("{name} ({}) {} no referral history", office.office_id, office.tier)
        }
        _ => format!(
            "{name} ({}) {} last referral {} months ago, {} all-time",
            office.office_id, office.tier, office.mslr, office.total_referrals
        ),
    }
}
