//! 写真リストの保存先
//!
//! 保存先は文字列1つ分のスロット。ブラウザでは localStorage、
//! テストでは MemoryRepository を使う。

use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};

/// 写真リスト（JSON）を読み書きするスロット
pub trait PhotoRepository {
    /// 保存済みの値。未保存なら None
    fn load(&self) -> Result<Option<String>>;

    /// 値を丸ごと上書き保存
    fn save(&self, payload: &str) -> Result<()>;
}

/// メモリ上のリポジトリ
///
/// クローンは同じスロットを共有するので、ストアに渡した後も
/// テスト側から中身を確認できる。
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    slot: Arc<Mutex<Option<String>>>,
    fail_writes: bool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の値が入った状態で作成
    pub fn with_payload(payload: impl Into<String>) -> Self {
        let repo = Self::default();
        *repo.lock() = Some(payload.into());
        repo
    }

    /// 書き込みが常に失敗するリポジトリ
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// 現在保存されている値
    pub fn payload(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PhotoRepository for MemoryRepository {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.lock().clone())
    }

    fn save(&self, payload: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Storage("write rejected".to_string()));
        }
        *self.lock() = Some(payload.to_string());
        Ok(())
    }
}
