// crates/aemet-core/src/source.rs

//! The remote data the system reads, and the seam the core fetches it through.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Every AEMET resource the service reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Daily forecast for a 5-digit municipality code.
    DailyForecast(String),
    /// Latest conventional observations of one station.
    StationObservation(String),
    /// Inventory of all climatological stations.
    StationInventory,
    /// Daily climatological values, dates as `YYYY-MM-DD`.
    DailyClimate {
        station: String,
        start: String,
        end: String,
    },
    /// Monthly and annual climatology for one year.
    MonthlyClimate { station: String, year: i32 },
    /// Beach forecast by beach id.
    BeachForecast(String),
    /// UV index map for a day offset (0 = today .. 4).
    UvIndex(u8),
}

impl Endpoint {
    /// Path segments relative to the API base URL, unescaped.
    pub fn segments(&self) -> Vec<String> {
        match self {
            Self::DailyForecast(code) => {
                owned(&["prediccion", "especifica", "municipio", "diaria", code.as_str()])
            }
            Self::StationObservation(id) => {
                owned(&["observacion", "convencional", "datos", "estacion", id.as_str()])
            }
            Self::StationInventory => owned(&[
                "valores",
                "climatologicos",
                "inventarioestaciones",
                "todasestaciones",
            ]),
            Self::DailyClimate {
                station,
                start,
                end,
            } => owned(&[
                "valores",
                "climatologicos",
                "diarios",
                "datos",
                "fechaini",
                format!("{start}T00:00:00UTC").as_str(),
                "fechafin",
                format!("{end}T23:59:59UTC").as_str(),
                "estacion",
                station.as_str(),
            ]),
            Self::MonthlyClimate { station, year } => owned(&[
                "valores",
                "climatologicos",
                "mensualesanuales",
                "datos",
                "anioini",
                year.to_string().as_str(),
                "aniofin",
                year.to_string().as_str(),
                "estacion",
                station.as_str(),
            ]),
            Self::BeachForecast(code) => owned(&["prediccion", "especifica", "playa", code.as_str()]),
            Self::UvIndex(days) => owned(&["prediccion", "especifica", "uvi", days.to_string().as_str()]),
        }
    }

    /// `segments()` joined with `/`.
    pub fn path(&self) -> String {
        self.segments().join("/")
    }
}

fn owned(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

/// Anything that can hand back the parsed JSON behind an [`Endpoint`].
///
/// Implementations report every failure, including an empty answer, as
/// [`GeoError::UpstreamUnavailable`](crate::GeoError::UpstreamUnavailable).
/// There is no retry on this side of the seam.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value>;
}
