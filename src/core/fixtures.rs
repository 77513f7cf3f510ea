//! Fixture recording for offline tests. Compiled only with the `test-mode` feature.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Set to `1` to record every response body read through `net::read_body`.
pub(crate) const ENV_RECORD: &str = "NEWS_RECORD";
/// Overrides the directory fixtures are written to (default `tests/fixtures`).
pub(crate) const ENV_FIXDIR: &str = "NEWS_FIXDIR";

pub(crate) fn recording_enabled() -> bool {
    env::var(ENV_RECORD).ok().as_deref() == Some("1")
}

pub(crate) fn fixture_dir() -> PathBuf {
    env::var(ENV_FIXDIR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// File name shared with the test loaders, e.g. `top_headlines_page1.json`.
pub(crate) fn fixture_name(endpoint: &str, key: &str) -> String {
    format!("{endpoint}_{key}.json")
}

pub(crate) fn record(endpoint: &str, key: &str, body: &str) -> io::Result<PathBuf> {
    record_in(&fixture_dir(), endpoint, key, body)
}

pub(crate) fn record_in(dir: &Path, endpoint: &str, key: &str, body: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(fixture_name(endpoint, key));
    fs::write(&path, body)?;
    Ok(path)
}
