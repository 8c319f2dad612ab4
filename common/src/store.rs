//! 写真ストア
//!
//! 写真リストを保持し、変更のたびにリポジトリへ丸ごと書き戻す。
//! レコードはその場で書き換えず、新しいリストに置き換える。

use log::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::codec;
use crate::config::GalleryConfig;
use crate::data_uri;
use crate::defaults::default_photos;
use crate::error::{Error, Result, ValidationError};
use crate::repository::PhotoRepository;
use crate::types::{NewPhoto, Photo};
use crate::upload::validate_text_fields;

pub struct PhotoStore<R, C = SystemClock> {
    photos: Vec<Photo>,
    repository: R,
    clock: C,
    config: GalleryConfig,
}

impl<R: PhotoRepository> PhotoStore<R> {
    /// 保存済みのリスト（なければ初期データ）で開始
    pub fn initialize(repository: R, config: GalleryConfig) -> Self {
        Self::initialize_with_clock(repository, SystemClock, config)
    }
}

impl<R: PhotoRepository, C: Clock> PhotoStore<R, C> {
    pub fn initialize_with_clock(repository: R, clock: C, config: GalleryConfig) -> Self {
        let photos = match repository.load() {
            Ok(Some(payload)) => match codec::decode_photos_with(&payload, &config) {
                Ok(photos) => {
                    info!("Loaded {} photos from storage", photos.len());
                    photos
                }
                Err(e) => {
                    warn!("Stored photos are invalid, falling back to defaults: {}", e);
                    default_photos()
                }
            },
            Ok(None) => {
                info!("No stored photos, using defaults");
                default_photos()
            }
            Err(e) => {
                warn!("Failed to read stored photos, falling back to defaults: {}", e);
                default_photos()
            }
        };

        let store = Self {
            photos,
            repository,
            clock,
            config,
        };
        // 初期データもこの時点で保存される
        if let Err(e) = store.persist() {
            warn!("Failed to persist initial photos: {}", e);
        }
        store
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn get(&self, id: i64) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// 写真を末尾に追加し、採番したIDを返す
    ///
    /// 保存に失敗した場合もメモリ上のリストには追加済み。
    pub fn add(&mut self, new_photo: NewPhoto) -> Result<i64> {
        validate_text_fields(&new_photo.title, &new_photo.description, &self.config)?;
        if data_uri::classify(&new_photo.image).is_none() {
            return Err(ValidationError::MissingImage.into());
        }

        let id = self.next_id()?;
        let photo = Photo {
            id,
            title: new_photo.title,
            description: new_photo.description,
            image: new_photo.image,
            likes: 0,
            is_liked: false,
        };
        debug!("Adding photo {} ({})", id, photo.title);

        let mut photos = Vec::with_capacity(self.photos.len() + 1);
        photos.extend(self.photos.iter().cloned());
        photos.push(photo);
        self.replace(photos)?;
        Ok(id)
    }

    /// IDの写真を削除。該当なしなら何もせず false
    pub fn remove_by_id(&mut self, id: i64) -> Result<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        debug!("Removing photo {}", id);
        let photos = self.photos.iter().filter(|p| p.id != id).cloned().collect();
        self.replace(photos)?;
        Ok(true)
    }

    /// いいねを反転。該当なしなら何もせず false
    pub fn toggle_like(&mut self, id: i64) -> Result<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let photos = self
            .photos
            .iter()
            .map(|p| if p.id == id { p.with_like_toggled() } else { p.clone() })
            .collect();
        self.replace(photos)?;
        Ok(true)
    }

    /// 現在のリストを保存先に書き込む
    pub fn persist(&self) -> Result<()> {
        let payload = codec::encode_photos(&self.photos)?;
        self.repository.save(&payload)
    }

    fn replace(&mut self, photos: Vec<Photo>) -> Result<()> {
        self.photos = photos;
        self.persist().inspect_err(|e| warn!("Failed to persist photos: {}", e))
    }

    /// 現在時刻。時計が既存の最大IDを超えていなければ最大ID+1
    fn next_id(&self) -> Result<i64> {
        let now = self.clock.now_millis();
        let id = match self.photos.iter().map(|p| p.id).max() {
            Some(max_id) if now <= max_id => max_id.checked_add(1),
            _ => Some(now),
        };
        id.filter(|id| *id <= codec::MAX_PHOTO_ID)
            .ok_or_else(|| Error::InvalidPayload("photo id space exhausted".to_string()))
    }
}

impl<R, C> std::fmt::Debug for PhotoStore<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoStore")
            .field("photos", &self.photos.len())
            .field("storage_key", &self.config.storage_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::repository::MemoryRepository;

    const NOW: i64 = 1_700_000_000_000;

    fn store() -> (PhotoStore<MemoryRepository, FixedClock>, MemoryRepository) {
        let repo = MemoryRepository::new();
        let store =
            PhotoStore::initialize_with_clock(repo.clone(), FixedClock(NOW), GalleryConfig::default());
        (store, repo)
    }

    fn new_photo(title: &str) -> NewPhoto {
        NewPhoto {
            title: title.to_string(),
            description: "D".to_string(),
            image: "data:image/png;base64,iVBORw==".to_string(),
        }
    }

    #[test]
    fn test_defaults_written_on_initialize() {
        let (store, repo) = store();
        assert_eq!(store.len(), 6);
        let stored = codec::decode_photos(&repo.payload().unwrap()).unwrap();
        assert_eq!(stored, store.photos());
    }

    #[test]
    fn test_add_uses_clock() {
        let (mut store, _) = store();
        let id = store.add(new_photo("T")).unwrap();
        assert_eq!(id, NOW);
    }

    #[test]
    fn test_add_with_stalled_clock_stays_unique() {
        let (mut store, _) = store();
        let first = store.add(new_photo("A")).unwrap();
        let second = store.add(new_photo("B")).unwrap();
        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_add_with_clock_behind_existing_ids() {
        let repo = MemoryRepository::new();
        let mut store = PhotoStore::initialize_with_clock(repo, FixedClock(3), GalleryConfig::default());
        assert_eq!(store.add(new_photo("T")).unwrap(), 7);
    }

    /// 最大IDの次が採番できなければエラーで、リストは変わらない
    #[test]
    fn test_add_when_ids_exhausted() {
        let stored = format!(
            r#"[{{"id":{},"title":"t","description":"d","image":"https://x/a.jpg","likes":0}}]"#,
            codec::MAX_PHOTO_ID
        );
        let repo = MemoryRepository::with_payload(stored.clone());
        let mut store =
            PhotoStore::initialize_with_clock(repo.clone(), FixedClock(NOW), GalleryConfig::default());
        assert_eq!(store.len(), 1);

        assert!(matches!(store.add(new_photo("T")), Err(Error::InvalidPayload(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(codec::decode_photos(&repo.payload().unwrap()).unwrap(), store.photos());
    }

    #[test]
    fn test_add_accepts_octet_stream_image() {
        let (mut store, _) = store();
        let mut photo = new_photo("T");
        photo.image = "data:application/octet-stream;base64,AAAA".to_string();
        let id = store.add(photo).unwrap();
        assert_eq!(store.get(id).unwrap().image, "data:application/octet-stream;base64,AAAA");
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let (mut store, _) = store();
        let result = store.add(new_photo("  "));
        assert!(matches!(result, Err(Error::Validation(ValidationError::MissingTitle))));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_add_rejects_unknown_image_source() {
        let (mut store, _) = store();
        let mut photo = new_photo("T");
        photo.image = "not an image".to_string();
        assert!(matches!(
            store.add(photo),
            Err(Error::Validation(ValidationError::MissingImage))
        ));
    }

    #[test]
    fn test_remove_absent_id_does_not_write() {
        let (mut store, repo) = store();
        repo.save("sentinel").unwrap();
        assert!(!store.remove_by_id(999).unwrap());
        assert_eq!(repo.payload().as_deref(), Some("sentinel"));
    }

    #[test]
    fn test_toggle_like_absent_id() {
        let (mut store, _) = store();
        let before = store.photos().to_vec();
        assert!(!store.toggle_like(999).unwrap());
        assert_eq!(store.photos(), before.as_slice());
    }

    #[test]
    fn test_write_failure_keeps_memory_change() {
        let mut store = PhotoStore::initialize_with_clock(
            MemoryRepository::failing(),
            FixedClock(NOW),
            GalleryConfig::default(),
        );
        assert!(matches!(store.toggle_like(1), Err(Error::Storage(_))));
        assert!(store.get(1).unwrap().is_liked);
    }
}
