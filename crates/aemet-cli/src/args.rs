use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for aemet
#[derive(Debug, Parser)]
#[command(
    name = "aemet",
    version,
    about = "Query AEMET forecasts, observations and climatology by place name"
)]
pub struct CliArgs {
    /// Directory holding the municipality, province and beach tables
    /// (default: $AEMET_DATA_DIR, then the aemet-core data directory)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find municipality codes by name or province (typos tolerated)
    Municipality {
        /// Municipality or province name (e.g. "Alcala de Henares")
        query: String,
    },

    /// Find beaches by beach, province or municipality name
    Beach {
        query: String,

        /// Field to match against: beach, province or municipality
        #[arg(short, long, default_value = "beach")]
        mode: String,
    },

    /// Beach forecast or UV index. Accepts a beach id, a name, `list` or `list:<province>`
    BeachData {
        query: String,

        /// Day offset for the UV index (0 = today)
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=4))]
        days: u8,

        /// What to fetch: beach or uv
        #[arg(short, long, default_value = "beach")]
        kind: String,
    },

    /// List climatological stations, optionally filtered by comma- or space-separated terms
    Stations {
        #[arg(default_value = "")]
        terms: String,
    },

    /// Stations within a radius of a point
    Nearby {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,

        /// Radius in kilometres
        #[arg(short, long, default_value_t = aemet_core::geo::DEFAULT_RADIUS_KM)]
        radius: f64,
    },

    /// Daily forecast for a 5-digit municipality code
    Forecast { code: String },

    /// Latest observations of a station (e.g. 3195)
    Station { id: String },

    /// Daily climatological values between two dates (YYYY-MM-DD)
    History {
        id: String,
        start: String,
        end: String,
    },

    /// Monthly climatology of a station for one year
    Climate { id: String, year: i32 },
}
