//! 手動アップロードの保存
//!
//! ファイルは内容のSHA-256（hex）をファイル名として保存する。
//! 同じ内容を再アップロードしても1ファイルにまとまる。

use crate::error::Result;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// 内容のSHA-256をhex文字列で返す
pub fn content_digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// アップロード内容を保存し、保存先パスを返す
pub async fn save_upload(upload_dir: &Path, bytes: &[u8]) -> Result<PathBuf> {
    tokio::fs::create_dir_all(upload_dir).await?;
    let path = upload_dir.join(content_digest(bytes));
    if !tokio::fs::try_exists(&path).await? {
        tokio::fs::write(&path, bytes).await?;
    }
    Ok(path)
}
