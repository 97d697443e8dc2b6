//! 解析エンドポイントの契約
//!
//! `POST {API_BASE}/analyze` に multipart の `image` フィールド1つを送る。
//! 通信部分はCLI(reqwest)とWeb(fetch)でそれぞれ実装する。

use std::time::Duration;

use serde_json::Value;

use crate::error::{Error, Result};

/// エンドポイントのパス
pub const ANALYZE_PATH: &str = "/analyze";

/// multipartのフィールド名
pub const IMAGE_FIELD: &str = "image";

/// リクエストのタイムアウト
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// CLIの既定APIベースURL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// ベースURLから解析URLを組み立て
pub fn analyze_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), ANALYZE_PATH)
}

/// レスポンスを検査し、本文テキストをそのまま返す
///
/// 非2xx、またはJSONオブジェクトでない本文は失敗扱い。
pub fn parse_response(status: u16, body: &str) -> Result<String> {
    if !(200..300).contains(&status) {
        return Err(Error::RequestFailed(format!("status {}", status)));
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(_)) => Ok(body.to_string()),
        Ok(_) => Err(Error::RequestFailed(
            "response is not a JSON object".to_string(),
        )),
        Err(e) => Err(Error::RequestFailed(format!("malformed response: {}", e))),
    }
}

/// 拡張子からContent-Typeを推定
pub fn mime_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
