//! 削除確認ダイアログコンポーネント

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmDialog<FC, FX>(
    is_open: ReadSignal<bool>,
    title: Signal<String>,
    on_confirm: FC,
    on_close: FX,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FX: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h2>"確認刪除"</h2>
                        <button
                            class="btn-close"
                            on:click={
                                let on_close = on_close.clone();
                                move |_| on_close(())
                            }
                        >
                            "✕"
                        </button>
                    </div>

                    <p class="modal-body">
                        {move || format!("確定要刪除作品「{}」嗎？此操作無法復原。", title.get())}
                    </p>

                    <div class="modal-actions">
                        <button
                            class="btn btn-secondary"
                            on:click={
                                let on_close = on_close.clone();
                                move |_| on_close(())
                            }
                        >
                            "取消"
                        </button>
                        <button
                            class="btn btn-danger"
                            on:click={
                                let on_confirm = on_confirm.clone();
                                let on_close = on_close.clone();
                                move |_| {
                                    on_confirm(());
                                    on_close(());
                                }
                            }
                        >
                            "確認刪除"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
