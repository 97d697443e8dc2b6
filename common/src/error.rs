//! エラー型定義

use thiserror::Error;

/// ユーザーに表示する唯一のエラーメッセージ
pub const GENERIC_FAILURE_MESSAGE: &str = "Prediction failed — please try again.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 通信失敗・タイムアウト・非2xx・不正なレスポンスをまとめたもの
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 画面に出す文言（原因は区別しない）
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
