//! ファイルに保存するキー/値ストア
//!
//! ブラウザのlocalStorageと同じく、キーごとに文字列を1つ持つ。
//! 中身はJSONオブジェクト1つ（キー → 値の文字列）。

use crate::error::Result;
use agrisense_common::report::RecommendationReport;
use agrisense_common::{Error, ResultStore};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const STORE_FILE_NAME: &str = "local-storage.json";

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 設定ディレクトリ配下の既定の保存先
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存済みの結果から推奨レポートを組み立てる
    pub fn load_report(&self) -> Result<Option<RecommendationReport>> {
        Ok(RecommendationReport::from_store(self)?)
    }

    fn load_entries(&self) -> std::result::Result<BTreeMap<String, String>, Error> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::Storage(format!("{}: {}", self.path.display(), e)))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn storage_error(path: &Path, e: std::io::Error) -> Error {
        Error::Storage(format!("{}: {}", path.display(), e))
    }
}

impl ResultStore for FileStore {
    fn read(&self, key: &str) -> std::result::Result<Option<String>, Error> {
        Ok(self.load_entries()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> std::result::Result<(), Error> {
        // 壊れたファイルは空として作り直す
        let mut entries = match self.load_entries() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "保存ファイルが壊れているため作り直します");
                BTreeMap::new()
            }
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Self::storage_error(parent, e))?;
        }

        // 一時ファイルに書いてから置き換える
        let content = serde_json::to_string_pretty(&entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content).map_err(|e| Self::storage_error(&tmp_path, e))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| Self::storage_error(&self.path, e))?;
        Ok(())
    }
}
