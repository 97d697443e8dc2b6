//! AgriSense Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod store;
pub mod api;
pub mod analyze;
pub mod report;
pub mod route;
pub mod home;

pub use types::{Details, PredictionResult, TextOrList};
pub use error::{Error, Result, GENERIC_FAILURE_MESSAGE};
pub use store::{load_result, save_result, MemoryStore, ResultStore, StoredResult, RESULT_KEY};
pub use api::{analyze_url, mime_type_for, parse_response, IMAGE_FIELD, REQUEST_TIMEOUT};
pub use analyze::{AnalyzeSession, SelectedImage};
pub use report::RecommendationReport;
pub use route::{Route, BRAND};
