use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("カタログが不正: {0}")]
    Catalog(#[from] ledgers_common::Error),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像が{0}件不足しています")]
    MissingAssets(usize),

    #[error("セッションスクリプトが不正: {0}")]
    Script(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
