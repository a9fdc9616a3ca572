// crates/aemet-core/src/resolver.rs

//! Query shapes the outer layer can ask for, built on the matcher, the
//! coordinate converter and the geo filter.
//!
//! Misses are values, not errors: a query with no hits comes back as
//! [`NoMatch`], which serializes to `{"error": "..."}`. Only a bad selector
//! ([`GeoError::InvalidMode`]) or a blank query ([`GeoError::EmptyQuery`])
//! is reported through `Err`.

use crate::coords::DecimalCoordinate;
use crate::error::{GeoError, Result};
use crate::gazetteer::Gazetteer;
use crate::geo::within_radius;
use crate::matcher::match_records;
use crate::model::{Beach, NearbyStation, StationRecord};
use crate::text::{normalize, split_terms};
use crate::traits::NameMatch;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Informational "nothing found" answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoMatch {
    pub error: String,
}

impl NoMatch {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Either every match in table order, or a [`NoMatch`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resolved<T> {
    Matches(Vec<T>),
    NoMatch(NoMatch),
}

impl<T> Resolved<T> {
    fn from_matches(matches: Vec<T>, on_empty: impl FnOnce() -> String) -> Self {
        if matches.is_empty() {
            Self::NoMatch(NoMatch::new(on_empty()))
        } else {
            Self::Matches(matches)
        }
    }

    /// The matches, empty on a miss.
    pub fn matches(&self) -> &[T] {
        match self {
            Self::Matches(m) => m,
            Self::NoMatch(_) => &[],
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch(_))
    }
}

/// A municipality hit, with its province name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MunicipalityMatch<'g> {
    pub municipality: &'g str,
    pub code: &'g str,
    pub province: &'g str,
}

/// Which beach field a name query is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeachField {
    Beach,
    Province,
    Municipality,
}

impl BeachField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::Province => "province",
            Self::Municipality => "municipality",
        }
    }

    fn select<'b>(&self, beach: &'b Beach) -> &'b str {
        match self {
            Self::Beach => &beach.name,
            Self::Province => &beach.province,
            Self::Municipality => &beach.municipality,
        }
    }
}

impl fmt::Display for BeachField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeachField {
    type Err = GeoError;

    /// English names, plus the Spanish ones used by the source catalogue.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beach" | "playa" => Ok(Self::Beach),
            "province" | "provincia" => Ok(Self::Province),
            "municipality" | "municipio" => Ok(Self::Municipality),
            _ => Err(GeoError::InvalidMode(s.to_owned())),
        }
    }
}

/// Outcome of [`Resolver::resolve_beach_or_code`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BeachLookup<'g> {
    /// `list`: the whole catalogue sorted by name.
    All(Vec<&'g Beach>),
    /// `list:<province>`: that province's beaches, possibly none.
    Province(Vec<&'g Beach>),
    /// A single beach id, ready for the downstream fetch.
    Code(String),
    /// More than one beach matched; the caller has to pick.
    Candidates(Vec<&'g Beach>),
    NoMatch(NoMatch),
}

const LIST_COMMAND: &str = "list";
const LIST_PROVINCE_PREFIX: &str = "list:";

/// Read-only query front-end over a [`Gazetteer`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'g> {
    gazetteer: &'g Gazetteer,
}

impl<'g> Resolver<'g> {
    pub fn new(gazetteer: &'g Gazetteer) -> Self {
        Self { gazetteer }
    }

    pub fn gazetteer(&self) -> &'g Gazetteer {
        self.gazetteer
    }

    /// Municipalities whose name or province name contains, or closely
    /// resembles, `query`.
    ///
    /// # Errors
    ///
    /// [`GeoError::EmptyQuery`] for blank input.
    pub fn resolve_municipality(&self, query: &str) -> Result<Resolved<MunicipalityMatch<'g>>> {
        let q = folded_query(query)?;
        let g = self.gazetteer;

        let matches: Vec<_> = match_records(&q, g.municipalities(), |m| {
            vec![m.name.as_str(), g.province_of(m)]
        })
            .into_iter()
            .map(|m| MunicipalityMatch {
                municipality: &m.name,
                code: &m.code,
                province: g.province_of(m),
            })
            .collect();

        Ok(Resolved::from_matches(matches, || {
            format!("No municipality matches found for '{query}'.")
        }))
    }

    /// Beaches whose `mode` field matches `query`.
    ///
    /// # Errors
    ///
    /// [`GeoError::InvalidMode`] when `mode` is not one of `beach`,
    /// `province`, `municipality`; [`GeoError::EmptyQuery`] for blank input.
    pub fn resolve_beach(&self, query: &str, mode: &str) -> Result<Resolved<&'g Beach>> {
        self.resolve_beach_by(query, mode.parse()?)
    }

    /// [`Resolver::resolve_beach`] with an already-parsed field.
    pub fn resolve_beach_by(&self, query: &str, field: BeachField) -> Result<Resolved<&'g Beach>> {
        let q = folded_query(query)?;
        let matches = match_records(&q, self.gazetteer.beaches(), |b| vec![field.select(b)]);

        Ok(Resolved::from_matches(matches, || {
            format!("No beaches found with {field} matching '{query}'.")
        }))
    }

    /// Turn a beach id, a beach/province name fragment, or one of the
    /// `list` / `list:<province>` commands into something actionable.
    ///
    /// Name fragments are matched by substring against the beach and
    /// province names. Exactly one hit yields its [`BeachLookup::Code`];
    /// several are handed back as [`BeachLookup::Candidates`].
    pub fn resolve_beach_or_code(&self, input: &str) -> Result<BeachLookup<'g>> {
        let command = folded_query(input)?;
        let g = self.gazetteer;

        if command == LIST_COMMAND {
            return Ok(BeachLookup::All(g.beaches_sorted_by_name()));
        }
        if let Some(province) = command.strip_prefix(LIST_PROVINCE_PREFIX) {
            return Ok(BeachLookup::Province(g.beaches_in_province(province)));
        }

        let raw = input.trim();
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(BeachLookup::Code(raw.to_owned()));
        }

        let mut candidates: Vec<&Beach> = g
            .beaches()
            .iter()
            .filter(|b| b.name_key().contains(&command) || normalize(&b.province).contains(&command))
            .collect();

        Ok(match candidates.len() {
            0 => BeachLookup::NoMatch(NoMatch::new(format!("No matches found for '{input}'."))),
            1 => BeachLookup::Code(candidates.remove(0).id.clone()),
            _ => BeachLookup::Candidates(candidates),
        })
    }
}

fn folded_query(query: &str) -> Result<String> {
    let q = normalize(query);
    if q.is_empty() {
        return Err(GeoError::EmptyQuery);
    }
    Ok(q)
}

/// Stations whose name or province contains any of the comma- or
/// space-separated `terms`. Blank `terms` keep every station.
pub fn filter_stations_by_terms(stations: Vec<StationRecord>, terms: &str) -> Vec<StationRecord> {
    let terms = split_terms(terms);
    if terms.is_empty() {
        info!("No search terms provided");
        return stations;
    }

    let filtered: Vec<StationRecord> = stations
        .into_iter()
        .filter(|s| {
            let name = s.name_key();
            let province = normalize(&s.province);
            terms
                .iter()
                .any(|t| name.contains(t.as_str()) || province.contains(t.as_str()))
        })
        .collect();

    info!(count = filtered.len(), "Filtered stations");
    filtered
}

/// Stations within `radius_km` of (`lat`, `lon`), in input order, each with
/// its distance attached. Stations with unreadable coordinates are skipped.
pub fn filter_stations_by_radius(
    stations: Vec<StationRecord>,
    lat: f64,
    lon: f64,
    radius_km: f64,
) -> Vec<NearbyStation> {
    let nearby = within_radius(DecimalCoordinate::new(lat, lon), stations, radius_km);
    info!(count = nearby.len(), radius_km, "Nearby stations");
    nearby
}
