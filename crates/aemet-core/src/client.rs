// crates/aemet-core/src/client.rs
#![cfg(feature = "client")]

use crate::config::AemetConfig;
use crate::error::{GeoError, Result};
use crate::source::{Endpoint, WeatherSource};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

/// First-hop answer: a status plus the URL of the real payload.
#[derive(Debug, Deserialize)]
struct Envelope {
    estado: u16,
    #[serde(default)]
    datos: Option<String>,
    #[serde(default)]
    descripcion: Option<String>,
}

/// HTTP client for opendata.aemet.es.
///
/// Every call is two requests: the API answers with an envelope pointing at
/// a short-lived data URL, and that second document is Latin-1 JSON.
#[derive(Debug, Clone)]
pub struct AemetClient {
    http: Client,
    config: AemetConfig,
}

impl AemetClient {
    pub fn new(config: AemetConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &AemetConfig {
        &self.config
    }

    /// Absolute URL of an endpoint, with each segment percent-encoded.
    pub fn url(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            GeoError::InvalidData(format!("bad base URL '{}': {e}", self.config.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|_| GeoError::InvalidData(format!("bad base URL '{}'", self.config.base_url)))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }

    async fn request(&self, endpoint: &Endpoint) -> Result<Value> {
        let url = self.url(endpoint)?;
        debug!(%url, "AEMET request");

        let envelope: Envelope = self
            .http
            .get(url)
            .header("api_key", &self.config.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let data_url = match envelope {
            Envelope {
                estado: 200,
                datos: Some(datos),
                ..
            } => datos,
            Envelope {
                estado,
                descripcion,
                ..
            } => {
                return Err(GeoError::UpstreamUnavailable(format!(
                    "estado {estado}: {}",
                    descripcion.unwrap_or_default()
                )))
            }
        };

        let body = self
            .http
            .get(data_url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_str(&decode_latin1(&body))?)
    }
}

/// Latin-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

#[async_trait]
impl WeatherSource for AemetClient {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value> {
        self.request(endpoint).await.map_err(|e| {
            error!(endpoint = %endpoint.path(), error = %e, "Error connecting to AEMET");
            match e {
                GeoError::UpstreamUnavailable(_) => e,
                other => GeoError::UpstreamUnavailable(other.to_string()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> AemetClient {
        AemetClient::new(AemetConfig {
            base_url: base.into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn latin1_decoding() {
        assert_eq!(decode_latin1(b"Le\xf3n"), "León");
        assert_eq!(decode_latin1(b"A Coru\xf1a"), "A Coruña");
    }

    #[test]
    fn url_escapes_segments_and_tolerates_trailing_slash() {
        let c = client("https://opendata.aemet.es/opendata/api/");
        let url = c.url(&Endpoint::StationObservation("84 16Y".into())).unwrap();
        assert_eq!(
            url.as_str(),
            "https://opendata.aemet.es/opendata/api/observacion/convencional/datos/estacion/84%2016Y"
        );
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let c = client("not a url");
        assert!(matches!(c.url(&Endpoint::StationInventory), Err(GeoError::InvalidData(_))));
    }
}
