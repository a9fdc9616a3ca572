// crates/aemet-core/src/service.rs

//! Async operations that combine a fetch with the resolver.

use crate::error::{GeoError, Result};
use crate::gazetteer::Gazetteer;
use crate::model::{Beach, NearbyStation, StationRecord};
use crate::resolver::{
    filter_stations_by_radius, filter_stations_by_terms, BeachLookup, NoMatch, Resolver,
};
use crate::source::{Endpoint, WeatherSource};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// What to fetch once a beach is identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BeachDataKind {
    #[default]
    Forecast,
    UvIndex,
}

impl FromStr for BeachDataKind {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beach" | "playa" | "forecast" => Ok(Self::Forecast),
            "uv" | "uvi" | "uv_index" => Ok(Self::UvIndex),
            _ => Err(GeoError::InvalidMode(s.to_owned())),
        }
    }
}

impl fmt::Display for BeachDataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Forecast => "beach",
            Self::UvIndex => "uv",
        })
    }
}

/// Result of [`AemetService::beach_data`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BeachData<'g> {
    /// The fetched document.
    Report(Value),
    /// A listing or an ambiguous candidate set; nothing was fetched.
    Listing(Vec<&'g Beach>),
    NoMatch(NoMatch),
}

/// The gazetteer plus a data source, exposing every user-facing operation.
pub struct AemetService<S> {
    gazetteer: Gazetteer,
    source: S,
}

impl<S: WeatherSource> AemetService<S> {
    pub fn new(gazetteer: Gazetteer, source: S) -> Self {
        Self { gazetteer, source }
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.gazetteer)
    }

    pub async fn daily_forecast(&self, municipality_code: &str) -> Result<Value> {
        self.source
            .fetch(&Endpoint::DailyForecast(municipality_code.trim().to_owned()))
            .await
    }

    pub async fn station_observation(&self, station_id: &str) -> Result<Value> {
        self.source
            .fetch(&Endpoint::StationObservation(station_id.trim().to_owned()))
            .await
    }

    /// Daily climatology between two `YYYY-MM-DD` dates, both inclusive.
    pub async fn historical_data(&self, station_id: &str, start: &str, end: &str) -> Result<Value> {
        self.source
            .fetch(&Endpoint::DailyClimate {
                station: station_id.trim().to_owned(),
                start: start.trim().to_owned(),
                end: end.trim().to_owned(),
            })
            .await
    }

    pub async fn monthly_climate(&self, station_id: &str, year: i32) -> Result<Value> {
        self.source
            .fetch(&Endpoint::MonthlyClimate {
                station: station_id.trim().to_owned(),
                year,
            })
            .await
    }

    /// The station inventory, narrowed by `terms` when given.
    pub async fn station_list(&self, terms: &str) -> Result<Vec<StationRecord>> {
        Ok(filter_stations_by_terms(self.inventory().await?, terms))
    }

    pub async fn nearby_stations(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
    ) -> Result<Vec<NearbyStation>> {
        Ok(filter_stations_by_radius(
            self.inventory().await?,
            lat,
            lon,
            radius_km,
        ))
    }

    /// Resolve `input` to a beach and fetch its forecast or the UV index for
    /// `days` ahead. Listings, ambiguous matches and misses come back as-is
    /// without a request.
    pub async fn beach_data(
        &self,
        input: &str,
        kind: BeachDataKind,
        days: u8,
    ) -> Result<BeachData<'_>> {
        let code = match self.resolver().resolve_beach_or_code(input)? {
            BeachLookup::Code(code) => code,
            BeachLookup::All(list)
            | BeachLookup::Province(list)
            | BeachLookup::Candidates(list) => return Ok(BeachData::Listing(list)),
            BeachLookup::NoMatch(miss) => return Ok(BeachData::NoMatch(miss)),
        };

        // The UV map is national: the day offset selects it, not the beach.
        let endpoint = match kind {
            BeachDataKind::Forecast => Endpoint::BeachForecast(code),
            BeachDataKind::UvIndex => Endpoint::UvIndex(days),
        };
        Ok(BeachData::Report(self.source.fetch(&endpoint).await?))
    }

    async fn inventory(&self) -> Result<Vec<StationRecord>> {
        let unavailable = || GeoError::UpstreamUnavailable("Could not retrieve station list.".into());

        let rows = match self.source.fetch(&Endpoint::StationInventory).await? {
            Value::Array(rows) if !rows.is_empty() => rows,
            _ => return Err(unavailable()),
        };

        let total = rows.len();
        let stations: Vec<StationRecord> = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value(row) {
                Ok(s) => Some(s),
                Err(e) => {
                    debug!(error = %e, "skipping inventory row");
                    None
                }
            })
            .collect();

        debug!(total, parsed = stations.len(), "station inventory");
        Ok(stations)
    }
}
