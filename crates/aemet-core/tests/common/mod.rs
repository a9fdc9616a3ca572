#![allow(dead_code)]

use aemet_core::Gazetteer;
use std::path::PathBuf;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture_gazetteer() -> Gazetteer {
    Gazetteer::load_from_dir(fixtures_dir()).expect("fixtures load")
}
