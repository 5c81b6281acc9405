//! Metadata bundle loading.

use anyhow::Context;
use std::path::Path;
use wcs_protocol::{CoverageCatalog, MetadataBundle};

/// Load a metadata bundle and index it.
///
/// `.yaml`/`.yml` files are read as YAML, everything else as JSON.
pub fn load_catalog(path: impl AsRef<Path>) -> anyhow::Result<CoverageCatalog> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read metadata bundle {}", path.display()))?;

    let bundle: MetadataBundle = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML bundle {}", path.display()))?,
        _ => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON bundle {}", path.display()))?,
    };

    let catalog = CoverageCatalog::from_bundle(bundle)?;
    Ok(catalog)
}
