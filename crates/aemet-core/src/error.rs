// crates/aemet-core/src/error.rs
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Every hard failure the library can report.
///
/// "No match" and "ambiguous match" are not errors: the resolver returns
/// them as ordinary values so a batch never aborts on a single miss.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A dataset file could not be opened.
    #[error("{0}")]
    NotFound(String),

    /// A gazetteer record was rejected at load time.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A sexagesimal coordinate string could not be parsed.
    #[error("malformed coordinate '{0}'")]
    MalformedCoordinate(String),

    /// Unknown selector passed by the caller.
    #[error("Invalid type '{0}'. Use 'beach', 'province' or 'municipality'.")]
    InvalidMode(String),

    /// A query that trims to nothing would match every record.
    #[error("query must not be empty")]
    EmptyQuery,

    /// The remote API failed or returned nothing.
    #[error("AEMET unavailable: {0}")]
    UpstreamUnavailable(String),

    #[cfg(feature = "client")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
