//! ギャラリー設定
//!
//! 保存先キーとアップロード制限をまとめる。

use serde::{Deserialize, Serialize};

/// localStorage のキー
pub const STORAGE_KEY: &str = "photo-gallery-photos";

/// アップロード上限（15 MiB）
pub const MAX_UPLOAD_BYTES: u64 = 15 * 1024 * 1024;

pub const TITLE_MAX_CHARS: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryConfig {
    pub storage_key: String,
    pub max_upload_bytes: u64,
    pub title_max_chars: usize,
    pub description_max_chars: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            title_max_chars: TITLE_MAX_CHARS,
            description_max_chars: DESCRIPTION_MAX_CHARS,
        }
    }
}
