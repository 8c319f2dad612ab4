//! 写真の型定義
//!
//! - Photo: グリッドに並ぶ写真（localStorage に保存される）
//! - NewPhoto: アップロードフォームからの入力
//! - PendingDelete: 削除確認中の写真
//! - CarouselPhoto: バナー用の固定写真

use serde::{Deserialize, Serialize};

/// ギャラリーの写真
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// 作成時刻（ミリ秒）由来のID
    pub id: i64,
    pub title: String,
    pub description: String,
    /// リモートURL または Data URI
    pub image: String,
    pub likes: u32,
    #[serde(default)]
    pub is_liked: bool,
}

impl Photo {
    /// いいねを反転した新しいレコードを返す
    pub fn with_like_toggled(&self) -> Self {
        let is_liked = !self.is_liked;
        let likes = if is_liked {
            self.likes.saturating_add(1)
        } else {
            self.likes.saturating_sub(1)
        };
        Self {
            is_liked,
            likes,
            ..self.clone()
        }
    }

    pub fn pending_delete(&self) -> PendingDelete {
        PendingDelete {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

/// アップロードされた写真（ID等の採番前）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhoto {
    pub title: String,
    pub description: String,
    pub image: String,
}

/// 削除確認ダイアログに渡す写真
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: i64,
    pub title: String,
}

/// カルーセル写真
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselPhoto {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}
