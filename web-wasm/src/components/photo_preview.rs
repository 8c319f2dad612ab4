//! 全画面プレビューコンポーネント

use leptos::prelude::*;
use photo_gallery_common::Photo;

#[component]
pub fn PhotoPreview<FX>(
    is_open: ReadSignal<bool>,
    photo: ReadSignal<Option<Photo>>,
    on_close: FX,
) -> impl IntoView
where
    FX: Fn(()) + 'static + Clone + Send + Sync,
{
    let visible = move || if is_open.get() { photo.get() } else { None };

    move || {
        let on_close = on_close.clone();
        visible().map(|photo| {
            view! {
                <div
                    class="preview-backdrop"
                    on:click={
                        let on_close = on_close.clone();
                        move |_| on_close(())
                    }
                >
                    <div class="preview-content" on:click=|ev| ev.stop_propagation()>
                        <button
                            class="btn-close preview-close"
                            on:click={
                                let on_close = on_close.clone();
                                move |_| on_close(())
                            }
                        >
                            "✕"
                        </button>
                        <img src=photo.image.clone() alt=photo.title.clone() />
                        <div class="caption">
                            <h2>{photo.title.clone()}</h2>
                            <p>{photo.description.clone()}</p>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
