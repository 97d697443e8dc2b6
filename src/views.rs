//! 端末向けの画面描画

use agrisense_common::analyze::{AnalyzeSession, RESULT_PLACEHOLDER};
use agrisense_common::report::{RecommendationReport, NO_ANALYSIS_MESSAGE};
use agrisense_common::BRAND;
use std::fmt::Write;

/// 解析画面の「Prediction Result」欄
pub fn render_prediction(session: &AnalyzeSession) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Prediction Result");
    let _ = writeln!(out, "-----------------");

    match &session.result {
        Some(result) => {
            let _ = writeln!(out, "Disease:    {}", result.label_or_unknown());
            let _ = writeln!(out, "Confidence: {}", result.confidence_percent());
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", session.recommendation_text());
        }
        None => {
            let _ = writeln!(out, "{}", RESULT_PLACEHOLDER);
        }
    }

    if let Some(error) = &session.error {
        let _ = writeln!(out);
        let _ = writeln!(out, "! {}", error);
    }
    out
}

/// 推奨画面
pub fn render_recommendations(report: Option<&RecommendationReport>) -> String {
    let Some(report) = report else {
        return format!("{}\n", NO_ANALYSIS_MESSAGE);
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", BRAND, report.label);
    let _ = writeln!(out, "Confidence: {}", report.confidence);
    let _ = writeln!(out);

    let _ = writeln!(out, "[Cause]");
    let _ = writeln!(out, "{}", report.cause);
    let _ = writeln!(out);

    let _ = writeln!(out, "[Symptoms]");
    let _ = writeln!(out, "{}", report.symptoms);
    let _ = writeln!(out);

    let _ = writeln!(out, "[Treatment]");
    for item in &report.treatment {
        let _ = writeln!(out, "  - {}", item);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "[Prevention]");
    for item in &report.prevention {
        let _ = writeln!(out, "  - {}", item);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "[AI Quick Recommendation]");
    let _ = writeln!(out, "{}", report.recommendation);
    out
}
