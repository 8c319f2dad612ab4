//! localStorage を使ったリポジトリ

use photo_gallery_common::{Error, PhotoRepository, Result};
use wasm_bindgen::JsValue;

/// localStorage の1キーに写真リストを保存する
#[derive(Debug, Clone)]
pub struct LocalStorageRepository {
    key: String,
}

impl LocalStorageRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| Error::Storage("window is not available".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| Error::Storage("localStorage is not available".to_string()))
    }
}

impl PhotoRepository for LocalStorageRepository {
    fn load(&self) -> Result<Option<String>> {
        Self::storage()?.get_item(&self.key).map_err(js_error)
    }

    fn save(&self, payload: &str) -> Result<()> {
        Self::storage()?.set_item(&self.key, payload).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> Error {
    Error::Storage(format!("{:?}", value))
}
