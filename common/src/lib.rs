//! Photo Gallery Common Library
//!
//! Web(WASM)フロントエンドから使う写真ギャラリーの型とロジック。
//! DOMに依存しないのでネイティブでテストできる。

pub mod carousel;
pub mod clock;
pub mod codec;
pub mod config;
pub mod data_uri;
pub mod defaults;
pub mod error;
pub mod repository;
pub mod store;
pub mod types;
pub mod upload;

pub use carousel::Carousel;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{GalleryConfig, MAX_UPLOAD_BYTES, STORAGE_KEY};
pub use defaults::{default_photos, CAROUSEL_PHOTOS};
pub use error::{Error, Result, ValidationError};
pub use repository::{MemoryRepository, PhotoRepository};
pub use store::PhotoStore;
pub use types::{CarouselPhoto, NewPhoto, PendingDelete, Photo};
pub use upload::{ReadTicket, SelectedFile, UploadFormState};
