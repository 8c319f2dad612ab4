//! ブラウザ上のテスト（wasm-pack test --headless --firefox）
//!
//! localStorage リポジトリとファイル読み込みを検証

#![cfg(target_arch = "wasm32")]

use photo_gallery_common::{
    default_photos, FixedClock, GalleryConfig, PhotoRepository, PhotoStore,
};
use photo_gallery_wasm::file_reader::{read_abortable, read_as_data_uri, selected_file};
use photo_gallery_wasm::storage::LocalStorageRepository;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn repository(key: &str) -> LocalStorageRepository {
    let repo = LocalStorageRepository::new(key);
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .remove_item(key)
        .unwrap();
    repo
}

fn png_file(name: &str) -> web_sys::File {
    let bytes = js_sys::Uint8Array::from(&b"\x89PNG"[..]);
    let parts = js_sys::Array::of1(&JsValue::from(bytes));
    let options = web_sys::FilePropertyBag::new();
    options.set_type("image/png");
    web_sys::File::new_with_u8_array_sequence_and_options(&parts, name, &options).unwrap()
}

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    let repo = repository("photo-gallery-test-round-trip");
    assert_eq!(repo.load().unwrap(), None);

    repo.save("[]").unwrap();
    assert_eq!(repo.load().unwrap().as_deref(), Some("[]"));
}

#[wasm_bindgen_test]
fn test_store_writes_defaults_to_local_storage() {
    let repo = repository("photo-gallery-test-defaults");
    let store = PhotoStore::initialize_with_clock(repo.clone(), FixedClock(0), GalleryConfig::default());

    let stored: Vec<photo_gallery_common::Photo> =
        serde_json::from_str(&repo.load().unwrap().unwrap()).unwrap();
    assert_eq!(stored, default_photos());
    assert_eq!(store.len(), 6);
}

#[wasm_bindgen_test]
fn test_selected_file_metadata() {
    let meta = selected_file(&png_file("dot.png"));
    assert_eq!(meta.name, "dot.png");
    assert_eq!(meta.size, 4);
    assert_eq!(meta.mime_type, "image/png");
}

#[wasm_bindgen_test]
async fn test_read_as_data_uri() {
    let uri = read_as_data_uri(png_file("dot.png")).await.unwrap();
    assert_eq!(uri, "data:image/png;base64,iVBORw==");
}

#[wasm_bindgen_test]
async fn test_aborted_read_resolves_aborted() {
    let (task, handle) = read_abortable(png_file("dot.png"));
    handle.abort();
    assert!(task.await.is_err());
}
