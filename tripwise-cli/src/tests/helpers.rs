//! Test helpers for writing request and catalog fixtures to disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Catalog JSON matching the two-city fixture: `CityA` then `CityB`.
pub(super) const PAIR_CATALOG_JSON: &str = r#"{
    "cities": [
        {"name": "CityA", "latitude": 42.6977, "longitude": 23.3219,
         "hotel_rate": 70, "food_rate": 20, "entry_fee": 10},
        {"name": "CityB", "latitude": 44.7866, "longitude": 20.4489,
         "hotel_rate": 65, "food_rate": 22, "entry_fee": 8}
    ],
    "routes": {"a-b": ["CityA", "CityB"]}
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory with UTF-8 paths for request, catalog and output.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_pair_catalog(&self) -> Utf8PathBuf {
        let path = self.path("catalog.json");
        write_utf8(&path, PAIR_CATALOG_JSON.as_bytes());
        path
    }
}

pub(super) fn request_json(route: &str, transport: &str, days: u32, budget: f64) -> String {
    serde_json::json!({
        "route": route,
        "transport": transport,
        "days": days,
        "budget": budget,
    })
    .to_string()
}

pub(super) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}
