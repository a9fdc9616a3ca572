//! aemet: command-line front end for aemet-core
//!
//! Resolves Spanish place names against the local gazetteer and fetches the
//! matching AEMET OpenData documents. Every command prints pretty JSON on
//! stdout; logs go to stderr (tune with `RUST_LOG`).
//!
//! Usage examples
//! --------------
//!
//! - Municipality codes, typos tolerated
//!   $ aemet municipality "alcala de henare"
//!
//! - Beaches of a province, then the forecast of one of them
//!   $ aemet beach cadiz --mode province
//!   $ aemet beach-data bolonia
//!
//! - Stations near Madrid within 10 km
//!   $ aemet nearby 40.4168 -3.7038 --radius 10
//!
//! Configuration
//! -------------
//!
//! `AEMET_API_KEY`, `AEMET_API_BASE`, `AEMET_TIMEOUT_SECS` and
//! `AEMET_DATA_DIR` are read from the environment or a `.env` file.
mod args;

use crate::args::{CliArgs, Commands};
use aemet_core::config::data_dir_from_env;
use aemet_core::{AemetClient, AemetConfig, AemetService, BeachDataKind, Gazetteer};
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let data_dir = args
        .data_dir
        .or_else(data_dir_from_env)
        .unwrap_or_else(Gazetteer::default_data_dir);
    let gazetteer = Gazetteer::load_from_dir(&data_dir)
        .with_context(|| format!("loading gazetteer from {}", data_dir.display()))?;

    let config = AemetConfig::from_env();
    tracing::debug!(?config, "client configuration");
    let service = AemetService::new(gazetteer, AemetClient::new(config)?);
    let resolver = service.resolver();

    match args.command {
        Commands::Municipality { query } => print_json(&resolver.resolve_municipality(&query)?),

        Commands::Beach { query, mode } => print_json(&resolver.resolve_beach(&query, &mode)?),

        Commands::BeachData { query, days, kind } => {
            let kind: BeachDataKind = kind.parse()?;
            print_json(&service.beach_data(&query, kind, days).await?)
        }

        Commands::Stations { terms } => print_json(&service.station_list(&terms).await?),

        Commands::Nearby { lat, lon, radius } => {
            print_json(&service.nearby_stations(lat, lon, radius).await?)
        }

        Commands::Forecast { code } => print_json(&service.daily_forecast(&code).await?),

        Commands::Station { id } => print_json(&service.station_observation(&id).await?),

        Commands::History { id, start, end } => {
            print_json(&service.historical_data(&id, &start, &end).await?)
        }

        Commands::Climate { id, year } => print_json(&service.monthly_climate(&id, year).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
