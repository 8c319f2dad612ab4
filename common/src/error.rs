//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("File read error: {0}")]
    FileRead(String),
}

impl Error {
    /// ユーザーへの通知文言。検証エラーはそのまま、それ以外は保存失敗として出す
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(e) => e.to_string(),
            other => format!("儲存失敗：{}", other),
        }
    }
}

/// アップロードフォームの検証エラー
///
/// Display はそのままユーザーへの通知文言として使う。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("圖片大小不能超過 {}MB", .limit / (1024 * 1024))]
    FileTooLarge { size: u64, limit: u64 },

    #[error("請輸入作品標題")]
    MissingTitle,

    #[error("標題最多 {limit} 字")]
    TitleTooLong { limit: usize },

    #[error("請輸入作品描述")]
    MissingDescription,

    #[error("描述最多 {limit} 字")]
    DescriptionTooLong { limit: usize },

    #[error("請選擇圖片")]
    MissingImage,

    #[error("上傳中，請稍候")]
    AlreadySubmitting,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
