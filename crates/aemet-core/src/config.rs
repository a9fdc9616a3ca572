// crates/aemet-core/src/config.rs
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://opendata.aemet.es/opendata/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// AEMET answers anonymous calls with an error envelope, not a 401.
pub const ANONYMOUS_API_KEY: &str = "ND";

pub const API_KEY_ENV: &str = "AEMET_API_KEY";
pub const BASE_URL_ENV: &str = "AEMET_API_BASE";
pub const TIMEOUT_ENV: &str = "AEMET_TIMEOUT_SECS";
pub const DATA_DIR_ENV: &str = "AEMET_DATA_DIR";

/// Connection settings for the AEMET open-data API.
#[derive(Clone, PartialEq, Eq)]
pub struct AemetConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for AemetConfig {
    fn default() -> Self {
        Self {
            api_key: ANONYMOUS_API_KEY.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for AemetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AemetConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AemetConfig {
    /// Read `AEMET_API_KEY`, `AEMET_API_BASE` and `AEMET_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AemetConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            Some(key) => config.api_key = key.trim().to_owned(),
            None => warn!("{API_KEY_ENV} not set, requests will be anonymous"),
        }

        if let Some(base) = lookup(BASE_URL_ENV).filter(|b| !b.trim().is_empty()) {
            config.base_url = base.trim().to_owned();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config.timeout = Duration::from_secs(secs),
                Err(_) => warn!(value = %raw, "ignoring invalid {TIMEOUT_ENV}"),
            }
        }

        config
    }
}

/// Gazetteer directory from `AEMET_DATA_DIR`, if set.
pub fn data_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(DATA_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let c = AemetConfig::from_lookup(lookup(&[]));
        assert_eq!(c, AemetConfig::default());
        assert_eq!(c.api_key, "ND");
    }

    #[test]
    fn reads_all_variables() {
        let c = AemetConfig::from_lookup(lookup(&[
            (API_KEY_ENV, " secret "),
            (BASE_URL_ENV, "http://localhost:9000/api"),
            (TIMEOUT_ENV, "5"),
        ]));
        assert_eq!(c.api_key, "secret");
        assert_eq!(c.base_url, "http://localhost:9000/api");
        assert_eq!(c.timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_timeout_keeps_default() {
        let c = AemetConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "soon")]));
        assert_eq!(c.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn debug_hides_api_key() {
        let c = AemetConfig::from_lookup(lookup(&[(API_KEY_ENV, "secret")]));
        assert!(!format!("{c:?}").contains("secret"));
    }
}
