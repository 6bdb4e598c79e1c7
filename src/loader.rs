use crate::error::{PortfolioError, Result};
use ledgers_common::Catalog;
use std::path::Path;

/// 案件カタログを読み込む。パス未指定ならサイト組み込みのカタログ
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::site());
    };

    if !path.exists() {
        return Err(PortfolioError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let catalog = Catalog::from_json(&content)?;
    log::info!("catalog loaded: {} ({} projects)", path.display(), catalog.len());
    Ok(catalog)
}
