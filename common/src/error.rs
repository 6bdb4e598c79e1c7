//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// カタログ・ナビゲーションの構築時検証とフィルタ値の境界検証で発生する。
/// 実行中の状態遷移（モーダル開閉・画像送り）はエラーを返さず no-op になる。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid filter value: {0}")]
    InvalidFilterValue(String),

    #[error("Project {0} has no images")]
    EmptyImageList(u32),

    #[error("Invalid project id: {0}")]
    InvalidProjectId(u32),

    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(u32),

    #[error("Project {0} has an empty title")]
    EmptyTitle(u32),

    #[error("Navigation has no targets")]
    EmptyNavigation,

    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("Invalid section id: {0:?}")]
    InvalidSectionId(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
