use anyhow::{Context, Result};
use std::path::PathBuf;

use segue_ingest::load_catalog;
use segue_rank::CatalogIndex;

/// Show catalog statistics.
pub fn show_status(catalog_path: Option<PathBuf>) -> Result<()> {
    let (path, _config) = super::resolve_catalog(catalog_path)?;

    let catalog = load_catalog(&path)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
    let index = CatalogIndex::build(catalog);

    println!("\n📊 Segue Status\n");
    println!("  Catalog: {}", path.display());
    println!("  Songs: {}", index.len());
    println!("  Artists: {}", index.catalog().artist_count());
    println!("  Vocabulary terms: {}", index.vectorizer().vocabulary_len());

    if index.is_empty() {
        println!("\n  The catalog is empty; every query will return no results.");
    }

    Ok(())
}
