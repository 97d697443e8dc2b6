//! ローカル保存（ブラウザのlocalStorage相当）
//!
//! 保存するのは最後に成功したレスポンスのJSONテキストのみ。
//! 解析のたびに上書きし、明示的な削除は行わない。

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;
use crate::types::PredictionResult;

/// 保存キー
pub const RESULT_KEY: &str = "agrisense_result";

/// キー/値ストア
pub trait ResultStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// 保存済みの解析結果
#[derive(Debug, Clone, PartialEq)]
pub struct StoredResult {
    /// バックエンドが返したJSONテキスト（無加工）
    pub raw: String,
    /// 表示用ビュー
    pub result: PredictionResult,
}

/// 保存済み結果を読み込み（未保存ならNone）
pub fn load_result<S: ResultStore + ?Sized>(store: &S) -> Result<Option<StoredResult>> {
    let Some(raw) = store.read(RESULT_KEY)? else {
        return Ok(None);
    };
    let result = PredictionResult::from_json(&raw)?;
    Ok(Some(StoredResult { raw, result }))
}

/// レスポンスのJSONテキストをそのまま上書き保存
pub fn save_result<S: ResultStore + ?Sized>(store: &S, raw: &str) -> Result<()> {
    store.write(RESULT_KEY, raw)
}

/// メモリ上のストア
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ResultStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
