//! 推奨画面の表示モデル
//!
//! 保存済み結果を読み直し、欠けている項目は固定の既定文言で埋める。

use crate::error::Result;
use crate::store::{load_result, ResultStore, StoredResult};
use crate::types::TextOrList;

pub const NO_ANALYSIS_MESSAGE: &str = "No analysis found. Please analyze a leaf first.";
pub const CAUSE_FALLBACK: &str = "AI-generated cause not available.";
pub const SYMPTOMS_FALLBACK: &str = "No symptom data";
pub const TREATMENT_FALLBACK: &str =
    "General: maintain water, nutrients, check local extension services.";
pub const PREVENTION_FALLBACK: &str = "Practice crop rotation and sanitation.";
pub const RECOMMENDATION_FALLBACK: &str = "No recommendation available.";

/// 推奨画面の内容
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationReport {
    pub label: String,
    pub confidence: String,
    pub cause: String,
    pub symptoms: String,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
    pub recommendation: String,
    raw: String,
}

impl RecommendationReport {
    /// ストアから組み立て（未解析ならNone）
    pub fn from_store<S: ResultStore + ?Sized>(store: &S) -> Result<Option<Self>> {
        Ok(load_result(store)?.map(Self::from_stored))
    }

    pub fn from_stored(stored: StoredResult) -> Self {
        let StoredResult { raw, result } = stored;
        let details = result.details();

        Self {
            label: result.label_or_unknown().to_string(),
            confidence: result.confidence_percent(),
            cause: details
                .cause
                .unwrap_or_else(|| CAUSE_FALLBACK.to_string()),
            symptoms: details
                .symptoms
                .map(|s| s.joined(", "))
                .unwrap_or_else(|| SYMPTOMS_FALLBACK.to_string()),
            treatment: bullet_items(details.treatment, TREATMENT_FALLBACK),
            prevention: bullet_items(details.prevention, PREVENTION_FALLBACK),
            recommendation: result
                .recommendation
                .unwrap_or_else(|| RECOMMENDATION_FALLBACK.to_string()),
            raw,
        }
    }

    /// "Copy Report" でコピーする内容（保存済みJSONそのまま）
    pub fn copy_text(&self) -> &str {
        &self.raw
    }
}

fn bullet_items(value: Option<TextOrList>, fallback: &str) -> Vec<String> {
    value
        .map(|v| v.items())
        .unwrap_or_else(|| vec![fallback.to_string()])
}
