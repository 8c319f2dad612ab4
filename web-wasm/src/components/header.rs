//! ヘッダー（ナビゲーションバー）コンポーネント

use leptos::prelude::*;

#[component]
pub fn Header<FU>(on_upload_click: FU) -> impl IntoView
where
    FU: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <nav class="header">
            <div class="header-inner">
                <div class="brand">
                    <span class="brand-icon">"📷"</span>
                    <span class="brand-name">"阿翔的攝影集"</span>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| on_upload_click(())
                >
                    "上傳作品"
                </button>
            </div>
        </nav>
    }
}
