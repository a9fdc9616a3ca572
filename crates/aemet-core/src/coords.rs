// crates/aemet-core/src/coords.rs

//! AEMET sexagesimal coordinates.
//!
//! The station inventory encodes each axis as `DDMMSSH`: two digits each of
//! degrees, minutes and seconds followed by an uppercase hemisphere letter.
//! Longitudes in Spain never exceed 99°, so two degree digits are enough.

use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};

/// A point in signed decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecimalCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl DecimalCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Convert `"424607N"` style strings to decimal degrees.
///
/// `S` and `W` give negative values. Only the shape is validated: minutes
/// or seconds above 59 are accepted and simply add up.
///
/// # Errors
///
/// [`GeoError::MalformedCoordinate`] when the input is not exactly six ASCII
/// digits followed by one of `N`, `S`, `E`, `W` (lowercase letters included).
///
/// ```
/// use aemet_core::coords::to_decimal;
///
/// let lat = to_decimal("424607N").unwrap();
/// assert!((lat - 42.768611).abs() < 1e-5);
/// let lon = to_decimal("070103W").unwrap();
/// assert!((lon + 7.0175).abs() < 1e-5);
/// ```
pub fn to_decimal(coord: &str) -> Result<f64> {
    let malformed = || GeoError::MalformedCoordinate(coord.to_owned());

    let bytes = coord.as_bytes();
    if bytes.len() != 7 {
        return Err(malformed());
    }
    let (digits, hemisphere) = bytes.split_at(6);
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(malformed());
    }

    let sign = match hemisphere[0] {
        b'N' | b'E' => 1.0,
        b'S' | b'W' => -1.0,
        _ => return Err(malformed()),
    };

    let pair = |at: usize| f64::from((digits[at] - b'0') * 10 + (digits[at + 1] - b'0'));
    let degrees = pair(0);
    let minutes = pair(2);
    let seconds = pair(4);

    Ok(sign * (degrees + minutes / 60.0 + seconds / 3600.0))
}
