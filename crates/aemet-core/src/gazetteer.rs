// crates/aemet-core/src/gazetteer.rs

//! The three static tables and the indices derived from them.
//!
//! A [`Gazetteer`] is built once at start-up and never mutated. The
//! resolver borrows it; nothing in the crate reaches for a global copy.

use crate::error::{GeoError, Result};
use crate::model::{Beach, Municipality, Province};
use crate::text::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Simple aggregate statistics for the loaded tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub municipalities: usize,
    pub provinces: usize,
    pub beaches: usize,
}

/// Immutable gazetteer tables plus lookup indices.
#[derive(Clone, Debug)]
pub struct Gazetteer {
    municipalities: Vec<Municipality>,
    provinces: Vec<Province>,
    beaches: Vec<Beach>,

    /// ProvinceCodeIndex: `"05"` -> `"Ávila"`.
    province_names: HashMap<String, String>,
    /// NameIndex: normalized municipality name -> code. Last one loaded wins.
    municipality_codes: HashMap<String, String>,
    /// BeachesByProvince: normalized province name -> indices into `beaches`,
    /// in table order.
    beaches_by_province: HashMap<String, Vec<usize>>,
}

impl Gazetteer {
    /// Build the indices over already-parsed tables.
    ///
    /// # Errors
    ///
    /// [`GeoError::InvalidData`] if a province code is not 1-2 ASCII digits.
    /// One-digit codes are zero-padded.
    pub fn new(
        municipalities: Vec<Municipality>,
        provinces: Vec<Province>,
        beaches: Vec<Beach>,
    ) -> Result<Self> {
        let provinces = provinces
            .into_iter()
            .map(|p| {
                Ok(Province {
                    code: pad_province_code(&p.code)?,
                    name: p.name,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let province_names = provinces
            .iter()
            .map(|p| (p.code.clone(), p.name.clone()))
            .collect::<HashMap<_, _>>();

        let mut municipality_codes = HashMap::with_capacity(municipalities.len());
        for m in &municipalities {
            if let Some(previous) = municipality_codes.insert(normalize(&m.name), m.code.clone()) {
                debug!(name = %m.name, previous = %previous, code = %m.code, "duplicate municipality name");
            }
        }

        let mut beaches_by_province: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, b) in beaches.iter().enumerate() {
            beaches_by_province
                .entry(normalize(&b.province))
                .or_default()
                .push(idx);
        }

        Ok(Self {
            municipalities,
            provinces,
            beaches,
            province_names,
            municipality_codes,
            beaches_by_province,
        })
    }

    pub fn municipalities(&self) -> &[Municipality] {
        &self.municipalities
    }

    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn beaches(&self) -> &[Beach] {
        &self.beaches
    }

    pub fn stats(&self) -> GazetteerStats {
        GazetteerStats {
            municipalities: self.municipalities.len(),
            provinces: self.provinces.len(),
            beaches: self.beaches.len(),
        }
    }

    /// Province display name for a 2-character code (`"28"` -> `"Madrid"`).
    pub fn province_name(&self, code: &str) -> Option<&str> {
        self.province_names.get(code).map(String::as_str)
    }

    /// Province display name of a municipality, `""` when the code is unknown.
    pub fn province_of(&self, m: &Municipality) -> &str {
        self.province_name(m.province_code()).unwrap_or("")
    }

    /// Exact (accent- and case-insensitive) municipality name to code.
    pub fn municipality_code(&self, name: &str) -> Option<&str> {
        self.municipality_codes
            .get(&normalize(name))
            .map(String::as_str)
    }

    /// Beaches of a province, in table order. Unknown provinces give an
    /// empty list.
    pub fn beaches_in_province(&self, province: &str) -> Vec<&Beach> {
        self.beaches_by_province
            .get(&normalize(province))
            .map(|idx| idx.iter().map(|&i| &self.beaches[i]).collect())
            .unwrap_or_default()
    }

    /// All beaches ordered by normalized name (stable for equal names).
    pub fn beaches_sorted_by_name(&self) -> Vec<&Beach> {
        let mut keyed: Vec<(String, &Beach)> =
            self.beaches.iter().map(|b| (normalize(&b.name), b)).collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed.into_iter().map(|(_, b)| b).collect()
    }
}

fn pad_province_code(code: &str) -> Result<String> {
    let code = code.trim();
    if code.is_empty() || code.len() > 2 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GeoError::InvalidData(format!(
            "province code '{code}' is not 1-2 digits"
        )));
    }
    Ok(format!("{code:0>2}"))
}
