//! 写真ギャラリーコンポーネント
//!
//! カードはIDでキーを付ける。画像や文言は作成時に一度だけ読み、
//! いいねの状態だけを購読する。

use leptos::prelude::*;
use photo_gallery_common::{PendingDelete, Photo};

use crate::app::GalleryStore;

#[component]
pub fn PhotoGallery<FP, FD, FL>(
    store: RwSignal<GalleryStore>,
    on_preview: FP,
    on_delete_request: FD,
    on_like: FL,
) -> impl IntoView
where
    FP: Fn(Photo) + 'static + Clone + Send + Sync,
    FD: Fn(PendingDelete) + 'static + Clone + Send + Sync,
    FL: Fn(i64) + 'static + Clone + Send + Sync,
{
    let ids = Memo::new(move |_| store.with(|s| s.photos().iter().map(|p| p.id).collect::<Vec<_>>()));

    view! {
        <div class="photo-gallery">
            <For
                each=move || ids.get()
                key=|id| *id
                children=move |id| {
                    let photo = store.with_untracked(|s| s.get(id).cloned())?;
                    let like_state = Memo::new(move |_| {
                        store.with(|s| s.get(id).map(|p| (p.likes, p.is_liked)).unwrap_or_default())
                    });
                    Some(view! {
                        <PhotoCard
                            photo=photo
                            like_state=like_state
                            on_preview=on_preview.clone()
                            on_delete_request=on_delete_request.clone()
                            on_like=on_like.clone()
                        />
                    })
                }
            />
        </div>
    }
}

#[component]
fn PhotoCard<FP, FD, FL>(
    photo: Photo,
    /// （いいね数, いいね済み）
    like_state: Memo<(u32, bool)>,
    on_preview: FP,
    on_delete_request: FD,
    on_like: FL,
) -> impl IntoView
where
    FP: Fn(Photo) + 'static + Clone + Send + Sync,
    FD: Fn(PendingDelete) + 'static + Clone + Send + Sync,
    FL: Fn(i64) + 'static + Clone + Send + Sync,
{
    let photo_id = photo.id;
    let pending = photo.pending_delete();

    view! {
        <div class="photo-card">
            <div
                class="photo-frame"
                on:click={
                    let photo = photo.clone();
                    move |_| on_preview(photo.clone())
                }
            >
                <img src=photo.image.clone() alt=photo.title.clone() />
                <button
                    class="btn-delete"
                    title="刪除作品"
                    on:click=move |ev| {
                        // プレビューを開かない
                        ev.stop_propagation();
                        on_delete_request(pending.clone());
                    }
                >
                    "🗑"
                </button>
            </div>
            <div class="photo-info">
                <h3>{photo.title.clone()}</h3>
                <p>{photo.description.clone()}</p>
                <div class="photo-actions">
                    <button
                        class="btn-like"
                        class:liked=move || like_state.get().1
                        on:click=move |_| on_like(photo_id)
                    >
                        {move || if like_state.get().1 { "♥" } else { "♡" }}
                    </button>
                    <span class="like-count">{move || like_state.get().0}</span>
                </div>
            </div>
        </div>
    }
}
