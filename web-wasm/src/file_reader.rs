//! ファイル → Data URI の非同期読み込み
//!
//! FileReader のコールバックを oneshot チャネルで Future に変換する。
//! Future を drop すると読み込み中の FileReader も中断する。

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{abortable, AbortHandle, Abortable};
use photo_gallery_common::data_uri::{encode_data_uri, mime_type_for};
use photo_gallery_common::{Error, Result, SelectedFile};
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, ProgressEvent};

type Sender = Rc<RefCell<Option<oneshot::Sender<std::result::Result<Vec<u8>, String>>>>>;

/// File のメタデータ
pub fn selected_file(file: &File) -> SelectedFile {
    let name = file.name();
    SelectedFile {
        mime_type: mime_type_for(&file.type_(), &name),
        size: file.size() as u64,
        name,
    }
}

/// 中断可能な読み込みを作成
pub fn read_abortable(
    file: File,
) -> (Abortable<impl std::future::Future<Output = Result<String>>>, AbortHandle) {
    abortable(read_as_data_uri(file))
}

/// ファイルを読み込んで Data URI を返す
pub async fn read_as_data_uri(file: File) -> Result<String> {
    let reader = FileReader::new().map_err(read_error)?;
    let (tx, rx) = oneshot::channel();
    let tx: Sender = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let reader = reader.clone();
        let tx = tx.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_| {
            let result = reader
                .result()
                .map(|buffer| js_sys::Uint8Array::new(&buffer).to_vec())
                .map_err(|e| format!("{:?}", e));
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(result);
            }
        })
    };
    let onerror = {
        let tx = tx.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err("FileReader error".to_string()));
            }
        })
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader.read_as_array_buffer(&file).map_err(read_error)?;

    // onload/onerror より先に drop される
    let _guard = ReaderGuard(reader);

    let bytes = rx
        .await
        .map_err(|_| Error::FileRead("read cancelled".to_string()))?
        .map_err(Error::FileRead)?;

    let mime_type = mime_type_for(&file.type_(), &file.name());
    Ok(encode_data_uri(&mime_type, &bytes))
}

/// drop 時にハンドラを外し、読み込み中なら中断する
struct ReaderGuard(FileReader);

impl Drop for ReaderGuard {
    fn drop(&mut self) {
        self.0.set_onload(None);
        self.0.set_onerror(None);
        if self.0.ready_state() == FileReader::LOADING {
            self.0.abort();
        }
    }
}

fn read_error(value: JsValue) -> Error {
    Error::FileRead(format!("{:?}", value))
}
