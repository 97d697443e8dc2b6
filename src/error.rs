use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgriSenseError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像ではありません: {0}")]
    NotAnImage(String),

    #[error("解析結果がありません。先に `agrisense analyze <IMAGE>` を実行してください")]
    NoStoredResult,

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] agrisense_common::Error),
}

pub type Result<T> = std::result::Result<T, AgriSenseError>;
