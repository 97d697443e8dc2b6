//! 解析結果の型定義
//!
//! 保存されるのはバックエンドが返したJSONそのもの。
//! ここの型は表示用の読み取りビューで、書き戻しには使わない。

use serde_json::{Map, Value};

use crate::error::Result;

/// 文字列または文字列配列
#[derive(Debug, Clone, PartialEq)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    /// 配列は`sep`で連結、文字列はそのまま
    pub fn joined(&self, sep: &str) -> String {
        match self {
            TextOrList::Text(text) => text.clone(),
            TextOrList::List(items) => items.join(sep),
        }
    }

    /// 箇条書き用の要素列（文字列は1要素）
    pub fn items(&self) -> Vec<String> {
        match self {
            TextOrList::Text(text) => vec![text.clone()],
            TextOrList::List(items) => items.clone(),
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(TextOrList::List(
                items.iter().filter_map(value_to_string).collect(),
            )),
            other => value_to_string(other).map(TextOrList::Text),
        }
    }
}

/// 病害の詳細情報
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Details {
    pub cause: Option<String>,
    pub symptoms: Option<TextOrList>,
    pub treatment: Option<TextOrList>,
    pub prevention: Option<TextOrList>,
}

impl Details {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            cause: map.get("cause").and_then(value_to_string),
            symptoms: map.get("symptoms").and_then(TextOrList::from_value),
            treatment: map.get("treatment").and_then(TextOrList::from_value),
            prevention: map.get("prevention").and_then(TextOrList::from_value),
        }
    }
}

/// 予測結果（`POST /analyze` のレスポンス）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionResult {
    pub label: Option<String>,
    pub confidence: Option<f64>,
    pub recommendation: Option<String>,
    pub details: Option<Details>,
}

impl PredictionResult {
    /// JSONオブジェクトを寛容に読み取る
    ///
    /// 想定外の型のフィールドは欠損扱いにし、全体をエラーにはしない。
    /// トップレベルがオブジェクトでない場合のみエラー。
    pub fn from_json(raw: &str) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_str(raw)?;
        Ok(Self::from_map(&map))
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            label: map.get("label").and_then(value_to_string),
            confidence: map.get("confidence").and_then(value_to_f64),
            recommendation: map.get("recommendation").and_then(value_to_string),
            details: map
                .get("details")
                .and_then(Value::as_object)
                .map(Details::from_map),
        }
    }

    /// ラベル（無ければ "Unknown"）
    pub fn label_or_unknown(&self) -> &str {
        self.label.as_deref().unwrap_or("Unknown")
    }

    /// 信頼度をパーセント表示（小数2桁、0.5は切り上げ）
    pub fn confidence_percent(&self) -> String {
        match self.confidence {
            Some(c) if c.is_finite() => {
                let percent = c * 100.0;
                format!("{:.2}%", (percent * 100.0).round() / 100.0)
            }
            _ => "N/A".to_string(),
        }
    }

    pub fn details(&self) -> Details {
        self.details.clone().unwrap_or_default()
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
        other => Some(other.to_string()),
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    if let Some(n) = value.as_f64() {
        return Some(n);
    }
    value.as_str().and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_result_full() {
        let raw = r#"{
            "label": "Tomato Early blight",
            "confidence": 0.9347,
            "recommendation": "Remove affected leaves.",
            "details": {
                "cause": "Alternaria solani",
                "symptoms": ["dark spots", "yellowing"],
                "treatment": "Copper fungicide",
                "prevention": ["crop rotation", "mulching"]
            }
        }"#;

        let result = PredictionResult::from_json(raw).expect("パース失敗");
        assert_eq!(result.label.as_deref(), Some("Tomato Early blight"));
        assert_eq!(result.confidence, Some(0.9347));
        assert_eq!(result.recommendation.as_deref(), Some("Remove affected leaves."));

        let details = result.details();
        assert_eq!(details.cause.as_deref(), Some("Alternaria solani"));
        assert_eq!(
            details.symptoms,
            Some(TextOrList::List(vec!["dark spots".into(), "yellowing".into()]))
        );
        assert_eq!(details.treatment, Some(TextOrList::Text("Copper fungicide".into())));
    }

    #[test]
    fn test_prediction_result_minimal_backend_shape() {
        // バックエンドは label / confidence / recommendation のみ返す
        let raw = r#"{"label":"Corn Common rust","confidence":0.71,"recommendation":"Use sulfur spray."}"#;
        let result = PredictionResult::from_json(raw).expect("パース失敗");

        assert_eq!(result.label_or_unknown(), "Corn Common rust");
        assert_eq!(result.details(), Details::default());
    }

    #[test]
    fn test_unexpected_field_types_are_treated_as_missing() {
        let raw = r#"{"label": ["x"], "confidence": {}, "details": "oops", "extra": 1}"#;
        let result = PredictionResult::from_json(raw).expect("パース失敗");

        assert_eq!(result.label, None);
        assert_eq!(result.confidence, None);
        assert_eq!(result.details, None);
    }

    #[test]
    fn test_confidence_as_string_is_accepted() {
        let result = PredictionResult::from_json(r#"{"confidence": "0.5"}"#).expect("パース失敗");
        assert_eq!(result.confidence_percent(), "50.00%");
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(PredictionResult::from_json("[1, 2]").is_err());
        assert!(PredictionResult::from_json("\"text\"").is_err());
        assert!(PredictionResult::from_json("not json").is_err());
    }

    #[test]
    fn test_confidence_percent_two_decimals() {
        let result = PredictionResult {
            confidence: Some(0.9347),
            ..Default::default()
        };
        assert_eq!(result.confidence_percent(), "93.47%");

        let result = PredictionResult {
            confidence: Some(1.0),
            ..Default::default()
        };
        assert_eq!(result.confidence_percent(), "100.00%");
    }

    #[test]
    fn test_confidence_percent_missing() {
        assert_eq!(PredictionResult::default().confidence_percent(), "N/A");
        assert_eq!(PredictionResult::default().label_or_unknown(), "Unknown");
    }

    #[test]
    fn test_text_or_list_joined() {
        let list = TextOrList::List(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(list.joined(", "), "a, b, c");

        let text = TextOrList::Text("a; b".into());
        assert_eq!(text.joined(", "), "a; b");
    }

    #[test]
    fn test_text_or_list_items() {
        let text = TextOrList::Text("single".into());
        assert_eq!(text.items(), vec!["single".to_string()]);
    }

    #[test]
    fn test_text_or_list_from_array_skips_non_text() {
        let value: Value = serde_json::from_str(r#"["x", null, 2, {"y": 1}]"#).expect("パース失敗");
        assert_eq!(
            TextOrList::from_value(&value),
            Some(TextOrList::List(vec!["x".into(), "2".into()]))
        );
    }

    #[test]
    fn test_confidence_percent_rounds_half_up() {
        let result = PredictionResult {
            confidence: Some(0.01125),
            ..Default::default()
        };
        assert_eq!(result.confidence_percent(), "1.13%");
    }
}
