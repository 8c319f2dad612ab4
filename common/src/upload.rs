//! アップロードフォームの状態
//!
//! ファイル読み込み（プレビュー用・送信用）は非同期なので、開始時に
//! `ReadTicket` を発行し、完了時にチケットが最新かを確認する。
//! フォームを閉じる・ファイルを選び直すと古いチケットは無効になる。

use crate::config::GalleryConfig;
use crate::error::ValidationError;
use crate::types::NewPhoto;

/// 選択されたファイルのメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

/// 非同期読み込み1回分の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTicket(u64);

#[derive(Debug, Clone)]
pub struct UploadFormState {
    config: GalleryConfig,
    title: String,
    description: String,
    file: Option<SelectedFile>,
    preview: Option<String>,
    submitting: bool,
    pending_preview: Option<ReadTicket>,
    pending_submit: Option<ReadTicket>,
    next_ticket: u64,
}

impl UploadFormState {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            title: String::new(),
            description: String::new(),
            file: None,
            preview: None,
            submitting: false,
            pending_preview: None,
            pending_submit: None,
            next_ticket: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// 送信ボタンを有効にできるか
    pub fn is_ready(&self) -> bool {
        self.file.is_some()
            && validate_text_fields(&self.title, &self.description, &self.config).is_ok()
    }

    /// 入力欄の maxlength と同じく上限で切り詰める
    pub fn set_title(&mut self, value: &str) {
        self.title = truncate_chars(value, self.config.title_max_chars);
    }

    pub fn set_description(&mut self, value: &str) {
        self.description = truncate_chars(value, self.config.description_max_chars);
    }

    /// ファイル選択。上限超過ならフォームは変更しない
    ///
    /// 成功時はプレビュー用読み込みのチケットを返す。
    pub fn select_file(&mut self, file: SelectedFile) -> Result<ReadTicket, ValidationError> {
        if self.submitting {
            return Err(ValidationError::AlreadySubmitting);
        }
        check_file_size(file.size, self.config.max_upload_bytes)?;
        let ticket = self.issue_ticket();
        self.file = Some(file);
        self.preview = None;
        self.pending_preview = Some(ticket);
        Ok(ticket)
    }

    /// プレビュー読み込み完了。古いチケットなら無視して false
    pub fn complete_preview(&mut self, ticket: ReadTicket, data_uri: String) -> bool {
        if self.pending_preview != Some(ticket) {
            return false;
        }
        self.pending_preview = None;
        self.preview = Some(data_uri);
        true
    }

    /// プレビュー読み込み失敗
    pub fn fail_preview(&mut self, ticket: ReadTicket) -> bool {
        if self.pending_preview != Some(ticket) {
            return false;
        }
        self.pending_preview = None;
        true
    }

    /// 送信開始。送信中は読み込み完了まで次の送信を受け付けない
    pub fn submit(&mut self) -> Result<ReadTicket, ValidationError> {
        if self.submitting {
            return Err(ValidationError::AlreadySubmitting);
        }
        validate_text_fields(&self.title, &self.description, &self.config)?;
        if self.file.is_none() {
            return Err(ValidationError::MissingImage);
        }
        let ticket = self.issue_ticket();
        self.submitting = true;
        self.pending_submit = Some(ticket);
        Ok(ticket)
    }

    /// 送信用読み込み完了。最新のチケットなら NewPhoto を返してフォームを空にする
    pub fn complete_submit(&mut self, ticket: ReadTicket, data_uri: String) -> Option<NewPhoto> {
        if self.pending_submit != Some(ticket) {
            return None;
        }
        let photo = NewPhoto {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image: data_uri,
        };
        self.reset();
        Some(photo)
    }

    /// 送信用読み込み失敗。送信ロックを解除する
    pub fn fail_submit(&mut self, ticket: ReadTicket) -> bool {
        if self.pending_submit != Some(ticket) {
            return false;
        }
        self.pending_submit = None;
        self.submitting = false;
        true
    }

    /// 全項目を空にし、読み込み中のチケットを無効にする
    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.file = None;
        self.preview = None;
        self.submitting = false;
        self.pending_preview = None;
        self.pending_submit = None;
    }

    fn issue_ticket(&mut self) -> ReadTicket {
        self.next_ticket += 1;
        ReadTicket(self.next_ticket)
    }
}

/// ファイルサイズの上限チェック
pub fn check_file_size(size: u64, limit: u64) -> Result<(), ValidationError> {
    if size > limit {
        return Err(ValidationError::FileTooLarge { size, limit });
    }
    Ok(())
}

/// タイトル・説明の必須チェックと文字数チェック
pub fn validate_text_fields(
    title: &str,
    description: &str,
    config: &GalleryConfig,
) -> Result<(), ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if title.chars().count() > config.title_max_chars {
        return Err(ValidationError::TitleTooLong {
            limit: config.title_max_chars,
        });
    }
    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    if description.chars().count() > config.description_max_chars {
        return Err(ValidationError::DescriptionTooLong {
            limit: config.description_max_chars,
        });
    }
    Ok(())
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_UPLOAD_BYTES;

    fn file(size: u64) -> SelectedFile {
        SelectedFile {
            name: "sunset.jpg".to_string(),
            size,
            mime_type: "image/jpeg".to_string(),
        }
    }

    fn filled_form() -> UploadFormState {
        let mut form = UploadFormState::new(GalleryConfig::default());
        form.set_title("T");
        form.set_description("D");
        form.select_file(file(1024)).unwrap();
        form
    }

    #[test]
    fn test_file_size_limit_is_inclusive() {
        assert!(check_file_size(MAX_UPLOAD_BYTES, MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(
            check_file_size(MAX_UPLOAD_BYTES + 1, MAX_UPLOAD_BYTES),
            Err(ValidationError::FileTooLarge {
                size: MAX_UPLOAD_BYTES + 1,
                limit: MAX_UPLOAD_BYTES
            })
        );
    }

    #[test]
    fn test_set_title_truncates() {
        let mut form = UploadFormState::new(GalleryConfig::default());
        form.set_title(&"あ".repeat(60));
        assert_eq!(form.title().chars().count(), 50);
        form.set_description(&"x".repeat(250));
        assert_eq!(form.description().len(), 200);
    }

    #[test]
    fn test_not_ready_until_all_fields() {
        let mut form = UploadFormState::new(GalleryConfig::default());
        assert!(!form.is_ready());
        form.set_title("T");
        form.set_description("D");
        assert!(!form.is_ready());
        form.select_file(file(10)).unwrap();
        assert!(form.is_ready());
    }

    #[test]
    fn test_whitespace_title_is_missing() {
        let config = GalleryConfig::default();
        assert_eq!(
            validate_text_fields("   ", "D", &config),
            Err(ValidationError::MissingTitle)
        );
        assert_eq!(
            validate_text_fields("T", "\n", &config),
            Err(ValidationError::MissingDescription)
        );
    }

    #[test]
    fn test_oversized_file_leaves_form_unchanged() {
        let mut form = filled_form();
        let before = form.file().cloned();
        let result = form.select_file(file(MAX_UPLOAD_BYTES + 1));
        assert!(matches!(result, Err(ValidationError::FileTooLarge { .. })));
        assert_eq!(form.file().cloned(), before);
        assert_eq!(form.title(), "T");
    }

    #[test]
    fn test_preview_completes() {
        let mut form = UploadFormState::new(GalleryConfig::default());
        let ticket = form.select_file(file(10)).unwrap();
        assert!(form.complete_preview(ticket, "data:image/jpeg;base64,AA==".to_string()));
        assert_eq!(form.preview(), Some("data:image/jpeg;base64,AA=="));
    }

    #[test]
    fn test_stale_preview_ignored_after_reselect() {
        let mut form = UploadFormState::new(GalleryConfig::default());
        let first = form.select_file(file(10)).unwrap();
        let second = form.select_file(file(20)).unwrap();
        assert!(!form.complete_preview(first, "old".to_string()));
        assert_eq!(form.preview(), None);
        assert!(form.complete_preview(second, "new".to_string()));
        assert_eq!(form.preview(), Some("new"));
    }

    #[test]
    fn test_submit_requires_file() {
        let mut form = UploadFormState::new(GalleryConfig::default());
        form.set_title("T");
        form.set_description("D");
        assert_eq!(form.submit(), Err(ValidationError::MissingImage));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_submit_locks_until_complete() {
        let mut form = filled_form();
        let ticket = form.submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.submit(), Err(ValidationError::AlreadySubmitting));
        assert_eq!(
            form.select_file(file(10)),
            Err(ValidationError::AlreadySubmitting)
        );

        let photo = form
            .complete_submit(ticket, "data:image/jpeg;base64,AA==".to_string())
            .unwrap();
        assert_eq!(photo.title, "T");
        assert_eq!(photo.description, "D");
        assert_eq!(photo.image, "data:image/jpeg;base64,AA==");

        assert!(!form.is_submitting());
        assert_eq!(form.title(), "");
        assert!(form.file().is_none());
    }

    #[test]
    fn test_submit_trims_text() {
        let mut form = UploadFormState::new(GalleryConfig::default());
        form.set_title("  晨光 ");
        form.set_description(" 清晨 ");
        form.select_file(file(10)).unwrap();
        let ticket = form.submit().unwrap();
        let photo = form.complete_submit(ticket, "data:image/png;base64,AA==".into()).unwrap();
        assert_eq!(photo.title, "晨光");
        assert_eq!(photo.description, "清晨");
    }

    #[test]
    fn test_failed_submit_releases_lock() {
        let mut form = filled_form();
        let ticket = form.submit().unwrap();
        assert!(form.fail_submit(ticket));
        assert!(!form.is_submitting());
        assert_eq!(form.title(), "T");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_close_cancels_in_flight_submit() {
        let mut form = filled_form();
        let ticket = form.submit().unwrap();
        form.reset();
        assert!(form.complete_submit(ticket, "late".to_string()).is_none());
        assert!(!form.fail_submit(ticket));
        assert_eq!(form.title(), "");
        assert!(!form.is_submitting());
    }
}
