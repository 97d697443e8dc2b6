//! ファイルストアのテスト
//!
//! localStorage相当の保存・上書き・未保存時の動作を検証

use agrisense::error::AgriSenseError;
use agrisense::file_store::FileStore;
use agrisense_common::report::{RecommendationReport, SYMPTOMS_FALLBACK};
use agrisense_common::{
    load_result, save_result, AnalyzeSession, ResultStore, SelectedImage, RESULT_KEY,
};
use tempfile::tempdir;

/// 保存ファイルが無い場合は未解析扱い
#[test]
fn test_file_store_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::in_dir(dir.path());

    assert!(store.read(RESULT_KEY).expect("読込失敗").is_none());
    assert!(load_result(&store).expect("読込失敗").is_none());
    assert!(RecommendationReport::from_store(&store).expect("読込失敗").is_none());
}

/// 保存した本文がそのまま読み戻せる
#[test]
fn test_file_store_save_and_load_verbatim() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::in_dir(dir.path());
    let raw = "{\"label\": \"Cherry Powdery mildew\",\n  \"confidence\": 0.8312}";

    save_result(&store, raw).expect("保存失敗");

    // 別インスタンスから読み直す
    let reopened = FileStore::in_dir(dir.path());
    let loaded = load_result(&reopened).expect("読込失敗").expect("結果なし");
    assert_eq!(loaded.raw, raw);
    assert_eq!(loaded.result.confidence_percent(), "83.12%");
}

/// 上書き保存
#[test]
fn test_file_store_overwrite() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::in_dir(dir.path());

    save_result(&store, r#"{"label":"first"}"#).expect("保存失敗");
    save_result(&store, r#"{"label":"second","details":{"symptoms":["a","b"]}}"#).expect("保存失敗");

    let report = RecommendationReport::from_store(&store)
        .expect("読込失敗")
        .expect("結果なし");
    assert_eq!(report.label, "second");
    assert_eq!(report.symptoms, "a, b");
}

/// 他のキーは保持される
#[test]
fn test_file_store_keeps_other_keys() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::in_dir(dir.path());

    store.write("theme", "dark").expect("保存失敗");
    save_result(&store, r#"{"label":"x"}"#).expect("保存失敗");

    assert_eq!(store.read("theme").expect("読込失敗").as_deref(), Some("dark"));
}

/// 保存先ディレクトリが無くても作成される
#[test]
fn test_file_store_creates_parent_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let nested = dir.path().join("a").join("b");
    let store = FileStore::in_dir(&nested);

    save_result(&store, r#"{"label":"x","confidence":0.1}"#).expect("保存失敗");
    assert!(store.path().exists());

    let report = RecommendationReport::from_store(&store)
        .expect("読込失敗")
        .expect("結果なし");
    assert_eq!(report.symptoms, SYMPTOMS_FALLBACK);
}

/// 壊れた保存ファイルは読込エラーになるが、次の保存で作り直される
#[test]
fn test_file_store_corrupt_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::in_dir(dir.path());
    std::fs::write(store.path(), "{\"agrisense_result\": \"{\\\"label\\\":").unwrap();

    assert!(store.read(RESULT_KEY).is_err());
    assert!(matches!(store.load_report(), Err(AgriSenseError::Common(_))));

    let raw = r#"{"label":"Apple scab","confidence":0.9}"#;
    save_result(&store, raw).expect("壊れたファイルでも保存できるはず");

    let loaded = load_result(&store).expect("読込失敗").expect("結果なし");
    assert_eq!(loaded.raw, raw);
}

/// 壊れた保存ファイルがあっても解析成功はエラーにならない
#[test]
fn test_successful_analysis_recovers_corrupt_store() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::in_dir(dir.path());
    std::fs::write(store.path(), "{\"agrisense_result\": \"{\\\"label\\\":").unwrap();

    let mut session = AnalyzeSession::new();
    session.select(SelectedImage {
        file_name: "leaf.jpg".to_string(),
        mime_type: "image/jpeg".to_string(),
    });
    session.begin().expect("開始できるはず");
    session.finish(&store, Ok(r#"{"label":"Apple scab","confidence":0.9}"#.to_string()));

    assert!(session.error.is_none());
    let report = store.load_report().expect("読込失敗").expect("結果なし");
    assert_eq!(report.label, "Apple scab");
}

/// 保存後に一時ファイルが残らない
#[test]
fn test_file_store_leaves_no_temp_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::in_dir(dir.path());

    save_result(&store, r#"{"label":"x"}"#).expect("保存失敗");

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .expect("ディレクトリ読込失敗")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["local-storage.json".to_string()]);
}

/// 設定ファイルが壊れていても保存済み結果は読める
#[test]
fn test_report_ignores_corrupt_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("config.json"), "{ broken").unwrap();
    let store = FileStore::in_dir(dir.path());
    save_result(&store, r#"{"label":"Grape Black rot"}"#).expect("保存失敗");

    let report = store.load_report().expect("読込失敗").expect("結果なし");
    assert_eq!(report.label, "Grape Black rot");
    assert!(agrisense::config::Config::load_from(&dir.path().join("config.json")).is_err());
}
