use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use route_cli::{load_snapshot, render_overview};
use route_core::{RiskRules, RouteOverview};
use route_sdk::{Config, RouteClient};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render route risk, cost and rest figures", long_about = None)]
struct Args {
    /// Saved route snapshot (JSON)
    #[arg(long, conflicts_with = "route_id")]
    snapshot: Option<PathBuf>,

    /// Route to fetch from the backend
    #[arg(long)]
    route_id: Option<String>,

    /// Backend URL (defaults to ROUTE_API_URL)
    #[arg(long)]
    url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Departure time (RFC 3339) for elapsed-time labels
    #[arg(long)]
    departure: Option<DateTime<Utc>>,

    /// JSON file with risk thresholds
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Print the overview as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn load_rules(path: Option<&PathBuf>) -> Result<RiskRules> {
    let Some(path) = path else {
        return Ok(RiskRules::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading rules {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing rules {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("route_report=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let rules = load_rules(args.rules.as_ref())?;

    let mut snapshot = match (&args.snapshot, &args.route_id) {
        (Some(path), _) => load_snapshot(path)?,
        (None, Some(route_id)) => {
            let mut config = Config::from_env();
            if let Some(url) = &args.url {
                config.api_url = url.clone();
            }
            if let Some(secs) = args.timeout_secs {
                config.request_timeout = Duration::from_secs(secs);
            }
            tracing::info!(api_url = %config.api_url, route_id, "fetching route snapshot");
            let client = RouteClient::from_config(&config)?;
            client.fetch_snapshot(route_id, args.departure).await
        }
        (None, None) => bail!("either --snapshot or --route-id is required"),
    };
    if args.departure.is_some() {
        snapshot.departure_time = args.departure;
    }

    let overview = RouteOverview::build(&snapshot, &rules);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
    } else {
        print!("{}", render_overview(&overview));
    }

    Ok(())
}
