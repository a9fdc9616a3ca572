// crates/aemet-core/src/geo.rs

//! Great-circle distance and the radius filter over station lists.

use crate::coords::DecimalCoordinate;
use crate::model::{NearbyStation, StationRecord};
use tracing::debug;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default search radius for nearby stations.
pub const DEFAULT_RADIUS_KM: f64 = 25.0;

/// Haversine distance between two points, in kilometres.
pub fn haversine_km(a: DecimalCoordinate, b: DecimalCoordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Keep the stations within `radius_km` of `origin` (boundary inclusive).
///
/// Results keep the input order. A station whose coordinates do not parse is
/// skipped and the rest of the list is still processed.
// TODO: offer a sort-by-distance option once callers agree on a flag for it.
pub fn within_radius(
    origin: DecimalCoordinate,
    stations: impl IntoIterator<Item = StationRecord>,
    radius_km: f64,
) -> Vec<NearbyStation> {
    let mut out = Vec::new();

    for station in stations {
        let position = match station.coordinate() {
            Ok(p) => p,
            Err(e) => {
                debug!(station = %station.id, error = %e, "skipping station");
                continue;
            }
        };

        let distance = haversine_km(origin, position);
        if distance <= radius_km {
            out.push(NearbyStation {
                station,
                distance_km: round2(distance),
            });
        }
    }

    out
}
