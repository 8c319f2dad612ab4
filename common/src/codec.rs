//! 保存データのエンコード・検証
//!
//! localStorage の値は Photo の JSON 配列。読み込み時は形だけでなく
//! 中身（ID重複、文字数、画像の参照先）も確認する。

use std::collections::HashSet;

use crate::config::GalleryConfig;
use crate::data_uri;
use crate::error::{Error, Result};
use crate::types::Photo;

/// JavaScript の数値で正確に表せるIDの上限（`Number.MAX_SAFE_INTEGER`）
pub const MAX_PHOTO_ID: i64 = (1 << 53) - 1;

pub fn encode_photos(photos: &[Photo]) -> Result<String> {
    Ok(serde_json::to_string(photos)?)
}

/// デフォルト設定の制限で読み込む
pub fn decode_photos(json: &str) -> Result<Vec<Photo>> {
    decode_photos_with(json, &GalleryConfig::default())
}

pub fn decode_photos_with(json: &str, config: &GalleryConfig) -> Result<Vec<Photo>> {
    let photos: Vec<Photo> = serde_json::from_str(json)?;
    validate_photos(&photos, config)?;
    Ok(photos)
}

pub fn validate_photos(photos: &[Photo], config: &GalleryConfig) -> Result<()> {
    let mut seen = HashSet::with_capacity(photos.len());
    for photo in photos {
        if !seen.insert(photo.id) {
            return Err(Error::InvalidPayload(format!("duplicate id {}", photo.id)));
        }
        if !(-MAX_PHOTO_ID..=MAX_PHOTO_ID).contains(&photo.id) {
            return Err(Error::InvalidPayload(format!("id {} out of range", photo.id)));
        }
        check_text("title", photo, &photo.title, config.title_max_chars)?;
        check_text("description", photo, &photo.description, config.description_max_chars)?;
        if data_uri::classify(&photo.image).is_none() {
            return Err(Error::InvalidPayload(format!(
                "photo {}: unsupported image source",
                photo.id
            )));
        }
    }
    Ok(())
}

fn check_text(field: &str, photo: &Photo, value: &str, max_chars: usize) -> Result<()> {
    let len = value.chars().count();
    if len == 0 || len > max_chars {
        return Err(Error::InvalidPayload(format!(
            "photo {}: {} must be 1-{} characters (got {})",
            photo.id, field, max_chars, len
        )));
    }
    Ok(())
}
