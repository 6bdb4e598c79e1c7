//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use ledgers_portfolio::assets;
use ledgers_portfolio::config::Config;
use ledgers_portfolio::error::PortfolioError;
use ledgers_portfolio::loader;
use ledgers_portfolio::script::SessionScript;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない公開ディレクトリを検証した場合
#[test]
fn test_check_nonexistent_assets_folder() {
    let catalog = loader::load_catalog(None).unwrap();
    let result = assets::check_assets(&catalog, Path::new("/nonexistent/path/12345"));

    let err = result.unwrap_err();
    assert!(matches!(err, PortfolioError::FolderNotFound(_)));
}

/// 空の公開ディレクトリはエラーではなく全件不足
#[test]
fn test_check_empty_assets_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let catalog = loader::load_catalog(None).unwrap();

    let report = assets::check_assets(&catalog, dir.path()).unwrap();
    assert!(!report.is_ok());
    assert_eq!(report.missing.len(), report.checked);
    assert!(report.unused.is_empty());
}

/// 不正なJSONのカタログ
#[test]
fn test_broken_catalog_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = loader::load_catalog(Some(&path)).unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::Catalog(ledgers_common::Error::Json(_))
    ));
}

/// 重複IDのカタログ
#[test]
fn test_duplicate_project_id() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 1, "title": "A", "category": "Bookkeeping", "description": "", "images": ["/a.jpg"]},
            {"id": 1, "title": "B", "category": "Bookkeeping", "description": "", "images": ["/b.jpg"]}
        ]"#,
    )
    .unwrap();

    let err = loader::load_catalog(Some(&path)).unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::Catalog(ledgers_common::Error::DuplicateProjectId(1))
    ));
}

/// 存在しないスクリプト
#[test]
fn test_missing_script() {
    let err = SessionScript::load(Path::new("/nonexistent/session.json")).unwrap_err();
    assert!(matches!(err, PortfolioError::FileNotFound(_)));
}

/// 設定ファイルの読み書き
#[test]
fn test_config_round_trip_in_temp_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    config.set_interval_ms(2500);
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.ui.auto_advance_ms, 2500);
}

/// エラーメッセージ
#[test]
fn test_error_messages() {
    let err = PortfolioError::MissingAssets(3);
    assert_eq!(err.to_string(), "画像が3件不足しています");

    let err = PortfolioError::from(ledgers_common::Error::InvalidFilterValue("Tax".into()));
    assert!(err.to_string().starts_with("カタログが不正"));
}
