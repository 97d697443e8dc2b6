//! localStorage を使うストア

use agrisense_common::{Error, Result, ResultStore};
use gloo::storage::{LocalStorage, Storage};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl ResultStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use agrisense_common::{load_result, save_result, RESULT_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_browser_store_overwrites_result_key() {
        let store = BrowserStore;
        save_result(&store, r#"{"label":"first"}"#).expect("save failed");
        save_result(&store, r#"{"label":"second", "confidence": 0.5}"#).expect("save failed");

        let raw = store.read(RESULT_KEY).expect("read failed");
        assert_eq!(raw.as_deref(), Some(r#"{"label":"second", "confidence": 0.5}"#));

        let loaded = load_result(&store).expect("read failed").expect("no result");
        assert_eq!(loaded.result.confidence_percent(), "50.00%");
    }
}
