//! 送信する画像ファイルの選択
//!
//! ファイルピッカーの`accept="image/*"`に相当するフィルタ。拡張子からMIMEタイプを決める。
//! 中身は送信時に読み込む。

use crate::error::{DetectError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: &'static str,
}

const IMAGE_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
];

/// 拡張子に対応するMIMEタイプ（大文字小文字は区別しない）
pub fn mime_type_for(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

pub fn open_image(path: &Path) -> Result<ImageFile> {
    if !path.is_file() {
        return Err(DetectError::FileNotFound(path.display().to_string()));
    }

    let mime_type = path
        .extension()
        .and_then(|ext| mime_type_for(&ext.to_string_lossy()))
        .ok_or_else(|| DetectError::UnsupportedImage(path.display().to_string()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ImageFile {
        path: path.canonicalize()?,
        file_name,
        mime_type,
    })
}

impl ImageFile {
    /// ローカルプレビュー用の参照
    pub fn preview_url(&self) -> String {
        format!("file://{}", self.path.display())
    }
}
