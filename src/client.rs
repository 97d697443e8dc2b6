//! 解析エンドポイントへのアップロード

use crate::error::{AgriSenseError, Result};
use agrisense_common::{analyze_url, mime_type_for, parse_response, SelectedImage, IMAGE_FIELD};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::{Duration, Instant};

/// アップロードする画像
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// ファイルを読み込み、画像形式を判定
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AgriSenseError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        let mime_type = match image::guess_format(&bytes) {
            Ok(format) => format.to_mime_type().to_string(),
            Err(_) => match mime_type_for(&file_name) {
                "application/octet-stream" => {
                    return Err(AgriSenseError::NotAnImage(path.display().to_string()))
                }
                mime => mime.to_string(),
            },
        };

        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    pub fn selected(&self) -> SelectedImage {
        SelectedImage {
            file_name: self.file_name.clone(),
            mime_type: self.mime_type.clone(),
        }
    }
}

/// `POST {base}/analyze` クライアント
#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    http: reqwest::Client,
    url: String,
}

impl AnalyzeClient {
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: analyze_url(api_base),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// 画像を送信し、成功ならレスポンス本文をそのまま返す
    ///
    /// 通信失敗・タイムアウト・非2xx・不正な本文はすべて `RequestFailed`。
    pub async fn analyze(&self, upload: &ImageUpload) -> agrisense_common::Result<String> {
        let started = Instant::now();
        tracing::debug!(url = %self.url, file = %upload.file_name, size = upload.bytes.len(), "uploading image");

        let outcome = self.send(upload).await;
        match &outcome {
            Ok(_) => tracing::info!(elapsed_ms = started.elapsed().as_millis() as u64, "prediction received"),
            Err(e) => tracing::error!(elapsed_ms = started.elapsed().as_millis() as u64, error = %e, "prediction failed"),
        }
        outcome
    }

    async fn send(&self, upload: &ImageUpload) -> agrisense_common::Result<String> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime_type)
            .map_err(request_failed)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status().as_u16();
        tracing::debug!(status, "response status");
        let body = response.text().await.map_err(request_failed)?;

        parse_response(status, &body)
    }
}

fn request_failed(e: reqwest::Error) -> agrisense_common::Error {
    let kind = if e.is_timeout() { "timeout" } else { "transport" };
    agrisense_common::Error::RequestFailed(format!("{}: {}", kind, e))
}
