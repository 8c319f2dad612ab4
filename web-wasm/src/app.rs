//! メインアプリケーションコンポーネント（ギャラリーページ）
//!
//! 写真ストアとダイアログの開閉状態はすべてここで持ち、
//! 子コンポーネントにはシグナルとコールバックを渡す。

use gloo::dialogs::alert;
use leptos::prelude::*;
use log::error;
use photo_gallery_common::{
    Carousel, GalleryConfig, NewPhoto, PendingDelete, Photo, PhotoStore, CAROUSEL_PHOTOS,
};

use crate::components::{
    carousel::FeaturedCarousel,
    delete_confirm_dialog::DeleteConfirmDialog,
    header::Header,
    photo_gallery::PhotoGallery,
    photo_preview::PhotoPreview,
    upload_form::UploadForm,
};
use crate::storage::LocalStorageRepository;

/// ブラウザで使う写真ストア
pub type GalleryStore = PhotoStore<LocalStorageRepository>;

/// 更新の失敗をユーザーに通知
fn report(result: Option<photo_gallery_common::Result<impl Sized>>) {
    if let Some(Err(e)) = result {
        error!("Photo update failed: {}", e);
        alert(&e.user_message());
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = GalleryConfig::default();
    let repository = LocalStorageRepository::new(config.storage_key.clone());
    let store: RwSignal<GalleryStore> = RwSignal::new(PhotoStore::initialize(repository, config));

    // ダイアログ状態
    let (is_upload_open, set_is_upload_open) = signal(false);
    let (is_delete_open, set_is_delete_open) = signal(false);
    let (is_preview_open, set_is_preview_open) = signal(false);
    let (photo_to_delete, set_photo_to_delete) = signal(None::<PendingDelete>);
    let (preview_photo, set_preview_photo) = signal(None::<Photo>);
    let carousel = RwSignal::new(Carousel::new(CAROUSEL_PHOTOS.len()));

    let delete_title =
        Signal::derive(move || photo_to_delete.get().map(|p| p.title).unwrap_or_default());

    // アップロードハンドラ
    let on_upload = move |photo: NewPhoto| {
        report(store.try_update(|s| s.add(photo)));
    };

    // 削除は必ず確認ダイアログを経由する
    let on_delete_request = move |pending: PendingDelete| {
        set_photo_to_delete.set(Some(pending));
        set_is_delete_open.set(true);
    };

    let on_delete_confirm = move |_: ()| {
        if let Some(pending) = photo_to_delete.get_untracked() {
            report(store.try_update(|s| s.remove_by_id(pending.id)));
            set_photo_to_delete.set(None);
        }
    };

    let on_delete_close = move |_: ()| {
        set_is_delete_open.set(false);
        set_photo_to_delete.set(None);
    };

    let on_like = move |photo_id: i64| {
        report(store.try_update(|s| s.toggle_like(photo_id)));
    };

    let on_preview = move |photo: Photo| {
        set_preview_photo.set(Some(photo));
        set_is_preview_open.set(true);
    };

    let on_preview_close = move |_: ()| {
        set_is_preview_open.set(false);
        set_preview_photo.set(None);
    };

    view! {
        <main class="gallery-page">
            <Header on_upload_click=move |_: ()| set_is_upload_open.set(true) />

            <UploadForm
                is_open=is_upload_open
                config=store.with_untracked(|s| s.config().clone())
                on_close=move |_: ()| set_is_upload_open.set(false)
                on_upload=on_upload
            />

            <DeleteConfirmDialog
                is_open=is_delete_open
                title=delete_title
                on_confirm=on_delete_confirm
                on_close=on_delete_close
            />

            <PhotoPreview
                is_open=is_preview_open
                photo=preview_photo
                on_close=on_preview_close
            />

            <FeaturedCarousel carousel=carousel />

            <section class="container">
                <h1 class="section-title">"精選作品"</h1>
                <PhotoGallery
                    store=store
                    on_preview=on_preview
                    on_delete_request=on_delete_request
                    on_like=on_like
                />
            </section>
        </main>
    }
}
