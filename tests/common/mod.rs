// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Read an HTML fixture as raw bytes.
pub fn fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).expect("Cannot find test html document")
}

/// Wrap `<meta property=... content=...>` tags in a minimal document.
pub fn document(metas: &[(&str, &str)]) -> String {
    let tags: String = metas
        .iter()
        .map(|(p, c)| format!(r#"<meta property="{p}" content="{c}">"#))
        .collect();
    format!("<!DOCTYPE html><html><head>{tags}</head><body></body></html>")
}
