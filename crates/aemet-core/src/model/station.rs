// crates/aemet-core/src/model/station.rs
use crate::coords::{to_decimal, DecimalCoordinate};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the AEMET station inventory.
///
/// Only the keys the resolver reads are typed. Missing keys default to an
/// empty string, which simply never matches a term and never parses as a
/// coordinate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    #[serde(rename = "indicativo", default)]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "provincia", default)]
    pub province: String,
    /// Sexagesimal, e.g. `"424607N"`.
    #[serde(rename = "latitud", default)]
    pub latitude: String,
    /// Sexagesimal, e.g. `"070103W"`.
    #[serde(rename = "longitud", default)]
    pub longitude: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StationRecord {
    /// Position in decimal degrees.
    pub fn coordinate(&self) -> Result<DecimalCoordinate> {
        Ok(DecimalCoordinate {
            latitude: to_decimal(&self.latitude)?,
            longitude: to_decimal(&self.longitude)?,
        })
    }
}

/// A station that passed the radius filter, with its distance attached.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NearbyStation {
    #[serde(flatten)]
    pub station: StationRecord,
    /// Great-circle distance to the query point, rounded to 2 decimals.
    pub distance_km: f64,
}
