// crates/aemet-core/src/model/records.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A municipality from the static gazetteer.
///
/// `code` is the 5-digit INE code; its first two characters are the
/// province code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    pub name: String,
    pub code: String,
}

impl Municipality {
    /// The 2-character province prefix of the municipality code.
    pub fn province_code(&self) -> &str {
        self.code.get(..2).unwrap_or("")
    }
}

/// A province: zero-padded 2-character code and display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub code: String,
    pub name: String,
}

/// A beach as published in the AEMET beach catalogue.
///
/// The four keyed fields are required; every other key of the source
/// record is kept in `extra` and written back on serialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Beach {
    #[serde(rename = "ID_PLAYA", deserialize_with = "code_from_text_or_int")]
    pub id: String,
    #[serde(rename = "NOMBRE_PLAYA")]
    pub name: String,
    #[serde(rename = "NOMBRE_PROVINCIA")]
    pub province: String,
    #[serde(rename = "NOMBRE_MUNICIPIO")]
    pub municipality: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accepts `"1101101"` as well as `1101101`.
fn code_from_text_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Int(u64),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Text(s) => s,
        Code::Int(n) => n.to_string(),
    })
}
