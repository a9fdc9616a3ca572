// crates/aemet-core/src/model/mod.rs
pub mod records;
pub mod station;

pub use records::{Beach, Municipality, Province};
pub use station::{NearbyStation, StationRecord};
