//! Test helpers for staging plan requests on disk.

use camino::{Utf8Path, Utf8PathBuf};
use geojson::{FeatureCollection, Value};
use serde_json::json;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory addressed through a UTF-8 path.
#[derive(Debug)]
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
}

pub(super) fn moscow_request() -> serde_json::Value {
    json!({
        "name": "Test",
        "points": [
            { "latitude": 55.75, "longitude": 37.61, "name": "Red Square" },
            { "latitude": 55.76, "longitude": 37.62 },
            { "latitude": 55.74, "longitude": 37.60 }
        ],
        "options": { "mode": "walking" }
    })
}

pub(super) fn zigzag_request() -> serde_json::Value {
    json!({
        "name": "Zigzag",
        "points": [
            { "latitude": 0.0, "longitude": 0.0 },
            { "latitude": 0.0, "longitude": 0.3 },
            { "latitude": 0.0, "longitude": 0.1 },
            { "latitude": 0.0, "longitude": 0.2 },
            { "latitude": 0.0, "longitude": 0.4 }
        ]
    })
}

pub(super) fn write_request(path: &Utf8Path, request: &serde_json::Value) {
    let payload = serde_json::to_string_pretty(request).expect("serialize request");
    write_utf8(path, payload.as_bytes());
}

/// Longitudes of the point features in an exported document, in order.
pub(super) fn point_longitudes(document: &FeatureCollection) -> Vec<f64> {
    document
        .features
        .iter()
        .filter_map(|feature| feature.geometry.as_ref())
        .filter_map(|geometry| match &geometry.value {
            Value::Point(position) => position.first().copied(),
            _ => None,
        })
        .collect()
}
