use anyhow::{Context, Result};
use std::path::PathBuf;

use segue_ingest::load_catalog;
use segue_rank::{recommend, CatalogIndex, RecommendOptions};

/// Load the catalog, build the index, and print recommendations.
pub fn run_recommend(
    catalog_path: Option<PathBuf>,
    song: &str,
    weight: Option<f64>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let (path, config) = super::resolve_catalog(catalog_path)?;

    let catalog = load_catalog(&path)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
    let index = CatalogIndex::build(catalog);

    let options = RecommendOptions::default()
        .with_weight(weight.unwrap_or(config.default_weight))
        .with_limit(limit.unwrap_or(config.result_limit));

    let results = match recommend(&index, song, &options) {
        Ok(results) => results,
        Err(e) if e.is_not_found() => {
            println!("\"{song}\" is not in the catalog.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("\n🎵 Recommendations for \"{song}\"\n");

    if results.is_empty() {
        println!("  No other songs in the catalog to recommend.");
        return Ok(());
    }

    for (rank, rec) in results.iter().enumerate() {
        println!("  {}. {} by {}", rank + 1, rec.name, rec.artist);
        println!("     {}", rec.reason);
        if !rec.url.is_empty() {
            println!("     Preview: {}", rec.url);
        }
    }

    Ok(())
}
