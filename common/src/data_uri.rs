//! Data URI ユーティリティ
//!
//! アップロード画像は `data:image/jpeg;base64,...` 形式で保存する。

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// 画像の参照先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// http(s) でホストされた画像
    Remote(&'a str),
    /// 埋め込み画像（MIMEタイプ, Base64データ）
    Inline { mime_type: &'a str, data: &'a str },
}

/// バイト列を Data URI に変換
pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Data URIからBase64データ部分を抽出
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    let (header, data) = data_url.split_once(',')?;
    header.ends_with(";base64").then_some(data)
}

/// Data URIからMIMEタイプを抽出
pub fn extract_mime_type_from_data_url(data_url: &str) -> Option<&str> {
    data_url
        .strip_prefix("data:")
        .and_then(|s| s.split([';', ',']).next())
        .filter(|mime| !mime.is_empty())
}

/// `image` フィールドの値を分類する。どちらでもなければ None
///
/// 埋め込み画像のMIMEタイプは問わない（ブラウザが種類を判定できない
/// ファイルは `application/octet-stream` になる）。
pub fn classify(image: &str) -> Option<ImageSource<'_>> {
    if image.starts_with("https://") || image.starts_with("http://") {
        return Some(ImageSource::Remote(image));
    }
    let mime_type = extract_mime_type_from_data_url(image)?;
    let data = extract_base64_from_data_url(image)?;
    Some(ImageSource::Inline { mime_type, data })
}

/// ファイルのMIMEタイプを決める
///
/// ブラウザが type を返さない場合は拡張子から推定する。
pub fn mime_type_for(file_type: &str, file_name: &str) -> String {
    if !file_type.is_empty() {
        return file_type.to_string();
    }
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
    .to_string()
}
