use crate::error::{PortfolioError, Result};
use ledgers_common::{content, Catalog};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "JPG", "JPEG", "PNG"];

lazy_static::lazy_static! {
    // ルート相対で、拡張子付きのファイル
    static ref ASSET_PATH_RE: Regex =
        Regex::new(r"^/(?:[A-Za-z0-9_\-]+/)*[A-Za-z0-9_.\-]+\.(?:jpg|jpeg|png|webp|pdf)$").unwrap();
}

/// 公開ディレクトリの照合結果
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetReport {
    pub checked: usize,
    /// 参照されているのにファイルが無い
    pub missing: Vec<String>,
    /// パスの形式が不正
    pub invalid: Vec<String>,
    /// どこからも参照されていない画像
    pub unused: Vec<String>,
}

impl AssetReport {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }
}

pub fn is_valid_asset_path(path: &str) -> bool {
    ASSET_PATH_RE.is_match(path)
}

/// カタログとサイト掲載コンテンツが参照するパス（重複なし・ソート済み）
pub fn referenced_assets(catalog: &Catalog) -> BTreeSet<String> {
    let mut paths: BTreeSet<String> = catalog
        .projects()
        .iter()
        .flat_map(|p| p.images.iter().cloned())
        .collect();
    paths.extend(content::local_assets().into_iter().map(String::from));
    paths
}

/// 公開ディレクトリ `root` に参照先の画像が揃っているか確認する
pub fn check_assets(catalog: &Catalog, root: &Path) -> Result<AssetReport> {
    if !root.is_dir() {
        return Err(PortfolioError::FolderNotFound(root.display().to_string()));
    }

    let referenced = referenced_assets(catalog);
    let mut report = AssetReport {
        checked: referenced.len(),
        ..Default::default()
    };

    for path in &referenced {
        if !is_valid_asset_path(path) {
            log::warn!("invalid asset path: {}", path);
            report.invalid.push(path.clone());
            continue;
        }
        if !root.join(path.trim_start_matches('/')).is_file() {
            report.missing.push(path.clone());
        }
    }

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_image = path
            .extension()
            .map(|ext| IMAGE_EXTENSIONS.iter().any(|&e| e == ext.to_string_lossy()))
            .unwrap_or(false);
        if !is_image {
            continue;
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let url = format!(
            "/{}",
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        );
        if !referenced.contains(&url) {
            report.unused.push(url);
        }
    }
    report.unused.sort();

    log::debug!(
        "assets: checked={} missing={} invalid={} unused={}",
        report.checked,
        report.missing.len(),
        report.invalid.len(),
        report.unused.len()
    );
    Ok(report)
}
