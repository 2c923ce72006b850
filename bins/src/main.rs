use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use env::Env;
use eyre::{Context, Result};
use etl::{parse_date, EtlJob};
use ingest::config::IngestConfig;
use log::{error, info};
use report::Reports;
use storage::Storage;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the report API.
    Serve,
    /// Import the CSV files listed in the data files config.
    Ingest {
        /// Overrides DATA_FILES_CONFIG.
        config: Option<PathBuf>,
    },
    /// Compute and store receipt metrics and a two-period comparison.
    Metrics(MetricsArgs),
    /// Ingest, then compute metrics.
    Run {
        #[command(flatten)]
        metrics: MetricsArgs,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct MetricsArgs {
    /// daily, weekly or monthly.
    granularity: String,
    #[arg(value_parser = parse_date)]
    first: NaiveDate,
    #[arg(value_parser = parse_date)]
    second: NaiveDate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    pretty_env_logger::init();
    color_eyre::install()?;
    let env = Env::load()?;

    match cli.command {
        Command::Serve => serve(&env).await,
        Command::Ingest { config } => import_files(&env, config).await,
        Command::Metrics(args) => run_metrics(&env, &args).await,
        Command::Run { metrics, config } => {
            if let Err(err) = import_files(&env, config).await {
                error!("Ingestion failed: {:#}", err);
            }
            run_metrics(&env, &metrics).await
        }
    }
}

async fn serve(env: &Env) -> Result<()> {
    info!("connecting to mongo");
    let storage = Storage::new(env.mongo_url(), env.db_name(), env.collection_name())
        .await
        .context("Failed to create storage")?;
    let reports = Reports::new(Arc::new(storage), env.sales_targets_path());
    api::serve(Arc::new(reports), env.app_addr()).await
}

async fn import_files(env: &Env, config: Option<PathBuf>) -> Result<()> {
    let config_path = config.unwrap_or_else(|| PathBuf::from(env.data_files_config()));
    let config = IngestConfig::load(&config_path)?;
    let Some(storage) = Storage::connect(env.mongo_url(), env.db_name(), env.collection_name()).await
    else {
        return Ok(());
    };
    for outcome in ingest::ingest(&storage, &config).await {
        info!("{}", outcome);
    }
    storage.close().await;
    info!("Ingestion finished");
    Ok(())
}

async fn run_metrics(env: &Env, args: &MetricsArgs) -> Result<()> {
    let Some(storage) = Storage::connect(env.mongo_url(), env.db_name(), env.collection_name()).await
    else {
        return Ok(());
    };
    let job = EtlJob {
        source: &storage,
        sink: &storage,
        metrics_path: Path::new(env.metrics_path()),
    };
    let snapshot = job.run(&args.granularity, args.first, args.second).await;
    storage.close().await;
    if let Some(snapshot) = snapshot {
        info!(
            "spending per receipt {:.2}, items per receipt {:.2}, sales difference {:.2}",
            snapshot.metrics.spending_per_receipt,
            snapshot.metrics.items_per_receipt,
            snapshot.metrics.sales_comparison.sales_difference
        );
    }
    Ok(())
}
