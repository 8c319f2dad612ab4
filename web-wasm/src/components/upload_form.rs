//! アップロードフォームコンポーネント
//!
//! 入力状態は `UploadFormState` が持ち、ここではDOMイベントを渡すだけ。
//! ファイル読み込みは中断可能なタスクで、フォームを閉じると中断する。

use futures::future::AbortHandle;
use gloo::dialogs::alert;
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};
use photo_gallery_common::{GalleryConfig, NewPhoto, Result, UploadFormState};
use web_sys::{File, HtmlInputElement};

use crate::file_reader;

#[component]
pub fn UploadForm<FC, FU>(
    is_open: ReadSignal<bool>,
    config: GalleryConfig,
    on_close: FC,
    on_upload: FU,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FU: Fn(NewPhoto) + 'static + Clone + Send + Sync,
{
    let title_max = config.title_max_chars.to_string();
    let description_max = config.description_max_chars.to_string();
    let form = RwSignal::new(UploadFormState::new(config));
    let selected = StoredValue::new_local(None::<File>);
    let preview_read = StoredValue::new(None::<AbortHandle>);
    let submit_read = StoredValue::new(None::<AbortHandle>);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let clear_file_input = move || {
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    // 入力を空にし、読み込み中のタスクを中断して閉じる
    let handle_close = {
        let on_close = on_close.clone();
        move || {
            abort(preview_read);
            abort(submit_read);
            form.update(|f| f.reset());
            selected.set_value(None);
            clear_file_input();
            on_close(());
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Some(result) = form.try_update(|f| f.select_file(file_reader::selected_file(&file))) else {
            return;
        };
        match result {
            Err(e) => {
                alert(&e.to_string());
                input.set_value("");
            }
            Ok(ticket) => {
                selected.set_value(Some(file.clone()));
                spawn_read(file, preview_read, move |result| {
                    form.update(|f| match result {
                        Ok(data_uri) => {
                            f.complete_preview(ticket, data_uri);
                        }
                        Err(e) => {
                            warn!("Preview read failed: {}", e);
                            f.fail_preview(ticket);
                        }
                    });
                });
            }
        }
    };

    let on_submit = {
        let handle_close = handle_close.clone();
        let on_upload = on_upload.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(result) = form.try_update(|f| f.submit()) else {
                return;
            };
            let ticket = match result {
                Ok(ticket) => ticket,
                Err(e) => {
                    alert(&e.to_string());
                    return;
                }
            };
            let Some(file) = selected.get_value() else {
                form.update(|f| {
                    f.fail_submit(ticket);
                });
                alert("上傳失敗，請重試");
                return;
            };

            let handle_close = handle_close.clone();
            let on_upload = on_upload.clone();
            spawn_read(file, submit_read, move |result| match result {
                Ok(data_uri) => {
                    let photo = form.try_update(|f| f.complete_submit(ticket, data_uri)).flatten();
                    if let Some(photo) = photo {
                        info!("Uploading photo \"{}\"", photo.title);
                        on_upload(photo);
                        handle_close();
                    }
                }
                Err(e) => {
                    warn!("Upload read failed: {}", e);
                    let released = form.try_update(|f| f.fail_submit(ticket)).unwrap_or(false);
                    if released {
                        alert("上傳失敗，請重試");
                    }
                }
            });
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h2>"上傳作品"</h2>
                        <button
                            class="btn-close"
                            on:click={
                                let handle_close = handle_close.clone();
                                move |_| handle_close()
                            }
                        >
                            "✕"
                        </button>
                    </div>

                    <form class="upload-form" on:submit=on_submit.clone()>
                        <div class="form-group">
                            <label for="upload-title">"標題"</label>
                            <input
                                type="text"
                                id="upload-title"
                                required
                                maxlength=title_max.clone()
                                placeholder="請輸入作品標題（最多50字）"
                                prop:value=move || form.with(|f| f.title().to_string())
                                on:input=move |ev| {
                                    form.update(|f| f.set_title(&event_target_value(&ev)));
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label for="upload-description">"描述"</label>
                            <textarea
                                id="upload-description"
                                rows="3"
                                required
                                maxlength=description_max.clone()
                                placeholder="請輸入作品描述（最多200字）"
                                prop:value=move || form.with(|f| f.description().to_string())
                                on:input=move |ev| {
                                    form.update(|f| f.set_description(&event_target_value(&ev)));
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label>"圖片"</label>
                            <label class="file-picker">
                                "⇪ "
                                {move || form.with(|f| {
                                    f.file()
                                        .map(|file| file.name.clone())
                                        .unwrap_or_else(|| "選擇檔案".to_string())
                                })}
                                <input
                                    type="file"
                                    accept="image/*"
                                    class="hidden"
                                    node_ref=file_input
                                    on:change=on_file_change.clone()
                                />
                            </label>
                            <p class="text-muted">"支持 JPG、PNG 格式，大小不超過 15MB"</p>
                            {move || form.with(|f| f.preview().map(str::to_string)).map(|src| view! {
                                <div class="upload-preview">
                                    <img src=src alt="Preview" />
                                </div>
                            })}
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary btn-block"
                            disabled=move || form.with(|f| !f.is_ready() || f.is_submitting())
                        >
                            {move || if form.with(|f| f.is_submitting()) { "上傳中..." } else { "確認上傳" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// 読み込みタスクを開始。同じスロットの前回分は中断する
fn spawn_read<F>(file: File, slot: StoredValue<Option<AbortHandle>>, on_done: F)
where
    F: FnOnce(Result<String>) + 'static,
{
    let (task, handle) = file_reader::read_abortable(file);
    slot.update_value(|current| {
        if let Some(previous) = current.replace(handle) {
            previous.abort();
        }
    });
    spawn_local(async move {
        if let Ok(result) = task.await {
            on_done(result);
        }
    });
}

fn abort(slot: StoredValue<Option<AbortHandle>>) {
    slot.update_value(|current| {
        if let Some(handle) = current.take() {
            handle.abort();
        }
    });
}
