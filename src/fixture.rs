//! Catalogue fixture loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use atelier_core::Catalogue;

/// The catalogue shipped inside the binary, used unless `--fixture`
/// points at an override.
pub const DEFAULT_FIXTURE: &str = include_str!("../assets/portfolio.json");

/// Load the catalogue, from `path` when given, else the embedded fixture.
pub fn load(path: Option<&Path>) -> Result<Catalogue> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read fixture {}", path.display()))?;
            Catalogue::from_json_str(&text)
                .with_context(|| format!("invalid fixture {}", path.display()))
        }
        None => Catalogue::from_json_str(DEFAULT_FIXTURE).context("embedded fixture is invalid"),
    }
}
