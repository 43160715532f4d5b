use std::path::Path;

use tracing::info;

use crate::catalog::{Catalog, CatalogError};

/// Reads and validates a catalog from a JSON file.
///
/// Categories and career paths are JSON arrays, so file order is preserved
/// as vector component order.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&raw)?;
    catalog.validate()?;

    info!(
        "Loaded catalog from {}: {} categories, {} career paths",
        path.display(),
        catalog.categories.len(),
        catalog.career_paths.len()
    );
    Ok(catalog)
}
