//! 解析画面の状態遷移
//!
//! 画像選択 → 解析開始 → 完了（成功なら保存）の流れをI/Oなしで持つ。
//! 通信はCLI/Webそれぞれが行い、結果を `finish` に渡す。

use crate::error::{Result, GENERIC_FAILURE_MESSAGE};
use crate::route::Route;
use crate::store::{save_result, ResultStore};
use crate::types::PredictionResult;

pub const NO_IMAGE_MESSAGE: &str = "Upload an image first.";
pub const NO_RESULT_MESSAGE: &str = "Analyze an image before viewing recommendations.";
pub const RESULT_PLACEHOLDER: &str =
    "Upload an image and click Analyze to see the prediction here.";
pub const RECOMMENDATION_HINT: &str = "Click 'View Recommendations' for management steps.";

/// 選択された画像
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: String,
}

/// 解析画面の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzeSession {
    pub image: Option<SelectedImage>,
    pub loading: bool,
    pub result: Option<PredictionResult>,
    pub error: Option<String>,
}

impl AnalyzeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 画像を選択（前回の結果とエラーは消す）
    pub fn select(&mut self, image: SelectedImage) {
        self.image = Some(image);
        self.result = None;
        self.error = None;
    }

    /// 解析開始
    pub fn begin(&mut self) -> std::result::Result<(), String> {
        if self.image.is_none() {
            self.error = Some(NO_IMAGE_MESSAGE.to_string());
            return Err(NO_IMAGE_MESSAGE.to_string());
        }
        self.loading = true;
        self.error = None;
        self.result = None;
        Ok(())
    }

    /// 解析完了
    ///
    /// 成功時のみレスポンス本文を上書き保存する。失敗時は保存に触れない。
    pub fn finish<S: ResultStore + ?Sized>(&mut self, store: &S, outcome: Result<String>) {
        self.loading = false;

        let stored = outcome.and_then(|raw| {
            let result = PredictionResult::from_json(&raw)?;
            save_result(store, &raw)?;
            Ok(result)
        });

        match stored {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(_) => {
                self.result = None;
                self.error = Some(GENERIC_FAILURE_MESSAGE.to_string());
            }
        }
    }

    /// 推奨画面へ遷移できるか
    pub fn view_recommendations(&mut self) -> std::result::Result<Route, String> {
        if self.result.is_some() {
            Ok(Route::Recommend)
        } else {
            self.error = Some(NO_RESULT_MESSAGE.to_string());
            Err(NO_RESULT_MESSAGE.to_string())
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            "Analyzing..."
        } else {
            "Analyze"
        }
    }

    pub fn recommendation_text(&self) -> String {
        self.result
            .as_ref()
            .and_then(|r| r.recommendation.clone())
            .unwrap_or_else(|| RECOMMENDATION_HINT.to_string())
    }
}
