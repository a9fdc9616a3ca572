// crates/aemet-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and turns the three
//! source JSON documents into typed records. Records missing a required key
//! are rejected here, so nothing downstream has to cope with partial rows.

use crate::error::{GeoError, Result};
use crate::gazetteer::Gazetteer;
use crate::model::{Beach, Municipality, Province};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod common_io;

pub const MUNICIPALITIES_FILE: &str = "Municipallity_code.json";
pub const PROVINCES_FILE: &str = "Provinces_code.json";
pub const BEACHES_FILE: &str = "Beaches_code.json";

/// Where the three gazetteer documents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GazetteerPaths {
    pub municipalities: PathBuf,
    pub provinces: PathBuf,
    pub beaches: PathBuf,
}

impl GazetteerPaths {
    /// The default file names inside `dir`. A `.gz` sibling is picked up
    /// when the plain file is absent.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            municipalities: common_io::locate(dir, MUNICIPALITIES_FILE),
            provinces: common_io::locate(dir, PROVINCES_FILE),
            beaches: common_io::locate(dir, BEACHES_FILE),
        }
    }
}

impl Gazetteer {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Load the tables from the default file names inside `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load(&GazetteerPaths::in_dir(dir))
    }

    /// Load the three tables and build the indices.
    pub fn load(paths: &GazetteerPaths) -> Result<Self> {
        let gazetteer = Self::from_readers(
            common_io::open_stream(&paths.municipalities)?,
            common_io::open_stream(&paths.provinces)?,
            common_io::open_stream(&paths.beaches)?,
        )?;

        let stats = gazetteer.stats();
        info!(
            municipalities = stats.municipalities,
            provinces = stats.provinces,
            beaches = stats.beaches,
            "gazetteer loaded"
        );
        Ok(gazetteer)
    }

    /// Parse the three documents from arbitrary readers.
    pub fn from_readers(
        municipalities: impl Read,
        provinces: impl Read,
        beaches: impl Read,
    ) -> Result<Self> {
        Self::new(
            parse_municipalities(municipalities)?,
            parse_provinces(provinces)?,
            parse_beaches(beaches)?,
        )
    }
}

/// `{ "Madrid": "28079", ... }`, in file order.
pub fn parse_municipalities(reader: impl Read) -> Result<Vec<Municipality>> {
    string_pairs(reader, "municipality")?
        .into_iter()
        .map(|(name, code)| Ok(Municipality { name, code }))
        .collect()
}

/// `{ "28": "Madrid", "5": "Ávila", ... }`. Codes are padded later by
/// [`Gazetteer::new`].
pub fn parse_provinces(reader: impl Read) -> Result<Vec<Province>> {
    string_pairs(reader, "province")?
        .into_iter()
        .map(|(code, name)| Ok(Province { code, name }))
        .collect()
}

/// `[ { "ID_PLAYA": ..., "NOMBRE_PLAYA": ..., ... }, ... ]`
pub fn parse_beaches(reader: impl Read) -> Result<Vec<Beach>> {
    let rows: Vec<Value> = serde_json::from_reader(reader)?;
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            serde_json::from_value(row)
                .map_err(|e| GeoError::InvalidData(format!("beach #{i}: {e}")))
        })
        .collect()
}

fn string_pairs(reader: impl Read, what: &str) -> Result<Vec<(String, String)>> {
    let object: Map<String, Value> = serde_json::from_reader(reader)?;
    object
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s)),
            other => Err(GeoError::InvalidData(format!(
                "{what} '{key}': expected a string, found {other}"
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn municipalities_keep_file_order() {
        let json = r#"{"Zamora": "49275", "Ávila": "05019", "Madrid": "28079"}"#;
        let names: Vec<_> = parse_municipalities(json.as_bytes())
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Zamora", "Ávila", "Madrid"]);
    }

    #[test]
    fn non_string_code_is_invalid_data() {
        let res = parse_municipalities(r#"{"Madrid": 28079}"#.as_bytes());
        assert!(matches!(res, Err(GeoError::InvalidData(_))));
    }

    #[test]
    fn beach_without_province_is_rejected_with_index() {
        let json = r#"[
            {"ID_PLAYA": 1, "NOMBRE_PLAYA": "A", "NOMBRE_PROVINCIA": "P", "NOMBRE_MUNICIPIO": "M"},
            {"ID_PLAYA": 2, "NOMBRE_PLAYA": "B", "NOMBRE_MUNICIPIO": "M"}
        ]"#;
        match parse_beaches(json.as_bytes()) {
            Err(GeoError::InvalidData(msg)) => assert!(msg.starts_with("beach #1"), "{msg}"),
            other => panic!("expected InvalidData, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_json_error() {
        assert!(matches!(parse_provinces("{".as_bytes()), Err(GeoError::Json(_))));
    }
}
