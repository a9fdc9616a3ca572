// crates/aemet-core/src/lib.rs

//! Accent- and typo-tolerant lookups over Spanish gazetteers and the AEMET
//! station inventory.
//!
//! Resolution is pure and synchronous: [`text::normalize`] folds every
//! string, [`matcher`] runs substring-or-[`similarity`] matching over the
//! static tables held by a [`Gazetteer`], [`coords`] and [`geo`] turn
//! station coordinates into radius filters, and [`Resolver`] packages it all
//! into the query shapes callers use. [`AemetService`] adds the remote fetch
//! on top through the [`WeatherSource`] seam.
//!
//! ```
//! use aemet_core::{Gazetteer, Resolver};
//!
//! let gazetteer = Gazetteer::from_readers(
//!     r#"{"Madrid": "28079", "Getafe": "28065"}"#.as_bytes(),
//!     r#"{"28": "Madrid"}"#.as_bytes(),
//!     "[]".as_bytes(),
//! )?;
//! let hits = Resolver::new(&gazetteer).resolve_municipality("madrid")?;
//! assert_eq!(hits.matches().len(), 2);
//! # Ok::<(), aemet_core::GeoError>(())
//! ```

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod coords;
pub mod error;
pub mod gazetteer;
pub mod geo;
pub mod loader; // The public loader
pub mod matcher;
pub mod model;
pub mod resolver;
pub mod service;
pub mod similarity;
pub mod source;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{GeoError, Result};
#[cfg(feature = "client")]
pub use client::AemetClient;
pub use config::AemetConfig;
pub use coords::DecimalCoordinate;
pub use gazetteer::{Gazetteer, GazetteerStats};
pub use loader::GazetteerPaths;
pub use model::{Beach, Municipality, NearbyStation, Province, StationRecord};
pub use resolver::{
    filter_stations_by_radius, filter_stations_by_terms, BeachField, BeachLookup,
    MunicipalityMatch, NoMatch, Resolved, Resolver,
};
pub use service::{AemetService, BeachData, BeachDataKind};
pub use source::{Endpoint, WeatherSource};
pub use traits::NameMatch;
