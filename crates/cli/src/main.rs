use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use promq_sdk::{MetricFamily, PromqClient, TimeWindow};
use std::path::PathBuf;

mod config;

use config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "promq")]
#[command(about = "Query OpenFaaS and node-exporter metrics from Prometheus", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "promq.toml")]
    config: PathBuf,

    /// Prometheus host (overrides the configuration file)
    #[arg(long, env = "PROMQ_HOST")]
    host: Option<String>,

    /// Prometheus port (overrides the configuration file)
    #[arg(short, long, env = "PROMQ_PORT")]
    port: Option<u16>,

    /// Print the PromQL expression instead of running it
    #[arg(long)]
    dry_run: bool,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Average execution time per function, in seconds
    Afet {
        /// Lookback window in minutes
        #[arg(short, long)]
        window: Option<u64>,
    },
    /// Invocation rate per function and status code
    Invocations {
        /// Lookback window in minutes
        #[arg(short, long)]
        window: Option<u64>,
    },
    /// Active replicas per function
    Instances,
    /// CPU usage fraction per node
    Cpu {
        /// Lookback window in minutes
        #[arg(short, long)]
        window: Option<u64>,
    },
    /// RAM usage fraction per node
    Ram {
        /// Lookback window in minutes
        #[arg(short, long)]
        window: Option<u64>,
    },
}

impl Command {
    fn family(self, default_window: TimeWindow) -> MetricFamily {
        let window = |minutes: Option<u64>| minutes.map_or(default_window, TimeWindow::from_minutes);

        match self {
            Self::Afet { window: w } => MetricFamily::AverageExecutionTime(window(w)),
            Self::Invocations { window: w } => MetricFamily::InvocationRate(window(w)),
            Self::Instances => MetricFamily::ServiceCount,
            Self::Cpu { window: w } => MetricFamily::CpuUsage(window(w)),
            Self::Ram { window: w } => MetricFamily::RamUsage(window(w)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promq_cli=info,promq_sdk=info,promq_core=warn".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = CliConfig::load(&args.config)?;
    if let Some(host) = args.host {
        config.prometheus.host = host;
    }
    if let Some(port) = args.port {
        config.prometheus.port = port;
    }

    let family = args.command.family(config.default_window());

    if args.dry_run {
        println!("{}", family.expression());
        return Ok(());
    }

    let client = PromqClient::from_config(config.client_config())?;
    tracing::info!(
        "Querying {} on {}:{}",
        family.name(),
        config.prometheus.host,
        config.prometheus.port
    );

    let result = client
        .fetch(family)
        .await
        .with_context(|| format!("Failed to query {}", family.name()))?;
    tracing::info!("Received {} entries", result.len());

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}
