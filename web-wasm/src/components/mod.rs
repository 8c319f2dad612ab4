pub mod carousel;
pub mod delete_confirm_dialog;
pub mod header;
pub mod photo_gallery;
pub mod photo_preview;
pub mod upload_form;
