mod common;

use aemet_core::{
    AemetService, BeachData, BeachDataKind, Endpoint, GeoError, Result, WeatherSource,
};
use async_trait::async_trait;
use common::fixture_gazetteer;
use serde_json::{json, Value};
use std::sync::Mutex;

/// Serves one canned answer and records every request.
struct Canned {
    answer: Option<Value>,
    calls: Mutex<Vec<Endpoint>>,
}

impl Canned {
    fn new(answer: Option<Value>) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Endpoint> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherSource for Canned {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value> {
        self.calls.lock().unwrap().push(endpoint.clone());
        self.answer
            .clone()
            .ok_or_else(|| GeoError::UpstreamUnavailable("offline".into()))
    }
}

fn inventory() -> Value {
    json!([
        {"indicativo": "3195", "nombre": "MADRID, RETIRO", "provincia": "MADRID",
         "latitud": "402443N", "longitud": "034041W", "altitud": "667"},
        {"indicativo": "0076", "nombre": "BARCELONA AEROPUERTO", "provincia": "BARCELONA",
         "latitud": "411734N", "longitud": "020412E", "altitud": "4"},
        {"indicativo": "3129", "nombre": "MADRID AEROPUERTO", "provincia": "MADRID",
         "latitud": "402800N", "longitud": "0333XXW", "altitud": "609"},
        {"indicativo": "3200", "nombre": "GETAFE", "provincia": "MADRID",
         "latitud": "401800N", "longitud": "034322W", "altitud": "620"},
        "not a station"
    ])
}

fn service(answer: Option<Value>) -> AemetService<Canned> {
    AemetService::new(fixture_gazetteer(), Canned::new(answer))
}

#[tokio::test]
async fn station_list_filters_by_any_term() {
    let svc = service(Some(inventory()));
    let stations = svc.station_list("retiro, valencia").await.unwrap();
    let ids: Vec<_> = stations.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["3195"]);
}

#[tokio::test]
async fn station_list_without_terms_returns_every_parsed_row() {
    let svc = service(Some(inventory()));
    assert_eq!(svc.station_list("").await.unwrap().len(), 4);
}

#[tokio::test]
async fn nearby_skips_malformed_station() {
    let svc = service(Some(inventory()));
    let near = svc.nearby_stations(40.4, -3.7, 25.0).await.unwrap();
    let ids: Vec<_> = near.iter().map(|n| n.station.id.as_str()).collect();
    assert_eq!(ids, vec!["3195", "3200"]);
    assert!(near.iter().all(|n| n.distance_km <= 25.0));
}

#[tokio::test]
async fn failed_fetch_is_upstream_unavailable() {
    let svc = service(None);
    assert!(matches!(
        svc.station_list("madrid").await,
        Err(GeoError::UpstreamUnavailable(_))
    ));
    assert!(matches!(
        svc.daily_forecast("28079").await,
        Err(GeoError::UpstreamUnavailable(_))
    ));
}

#[tokio::test]
async fn empty_inventory_is_upstream_unavailable() {
    let svc = service(Some(json!([])));
    assert!(matches!(
        svc.nearby_stations(40.4, -3.7, 25.0).await,
        Err(GeoError::UpstreamUnavailable(_))
    ));
}

#[tokio::test]
async fn pass_through_endpoints() {
    let svc = service(Some(json!({"ok": true})));
    svc.daily_forecast(" 28079 ").await.unwrap();
    svc.station_observation("8416Y").await.unwrap();
    svc.historical_data("3195", "2024-01-01", "2024-01-31").await.unwrap();
    svc.monthly_climate("3195", 2023).await.unwrap();

    assert_eq!(
        svc.source().calls(),
        vec![
            Endpoint::DailyForecast("28079".into()),
            Endpoint::StationObservation("8416Y".into()),
            Endpoint::DailyClimate {
                station: "3195".into(),
                start: "2024-01-01".into(),
                end: "2024-01-31".into(),
            },
            Endpoint::MonthlyClimate {
                station: "3195".into(),
                year: 2023,
            },
        ]
    );
}

#[tokio::test]
async fn single_beach_match_fetches_forecast() {
    let svc = service(Some(json!({"forecast": "sunny"})));
    let data = svc.beach_data("bolonia", BeachDataKind::Forecast, 0).await.unwrap();
    assert_eq!(data, BeachData::Report(json!({"forecast": "sunny"})));
    assert_eq!(svc.source().calls(), vec![Endpoint::BeachForecast("1103501".into())]);
}

#[tokio::test]
async fn uv_index_uses_day_offset() {
    let svc = service(Some(json!("uvi")));
    svc.beach_data("1101101", BeachDataKind::UvIndex, 3).await.unwrap();
    assert_eq!(svc.source().calls(), vec![Endpoint::UvIndex(3)]);
}

#[tokio::test]
async fn ambiguous_beach_skips_the_fetch() {
    let svc = service(Some(json!({})));
    match svc.beach_data("coruña", BeachDataKind::Forecast, 0).await.unwrap() {
        BeachData::Listing(list) => assert_eq!(list.len(), 2),
        other => panic!("expected candidates, got {other:?}"),
    }
    assert!(svc.source().calls().is_empty());
}

#[tokio::test]
async fn listing_and_miss_skip_the_fetch() {
    let svc = service(Some(json!({})));

    match svc.beach_data("list:cadiz", BeachDataKind::Forecast, 0).await.unwrap() {
        BeachData::Listing(list) => assert_eq!(list.len(), 3),
        other => panic!("expected listing, got {other:?}"),
    }
    match svc.beach_data("benidorm", BeachDataKind::Forecast, 0).await.unwrap() {
        BeachData::NoMatch(miss) => assert_eq!(miss.error, "No matches found for 'benidorm'."),
        other => panic!("expected miss, got {other:?}"),
    }
    assert!(svc.source().calls().is_empty());
}

#[test]
fn beach_data_kind_parses_aliases() {
    assert_eq!("beach".parse::<BeachDataKind>().unwrap(), BeachDataKind::Forecast);
    assert_eq!("UV_index".parse::<BeachDataKind>().unwrap(), BeachDataKind::UvIndex);
    assert!(matches!("tides".parse::<BeachDataKind>(), Err(GeoError::InvalidMode(_))));
}
