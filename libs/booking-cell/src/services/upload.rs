use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tokio::fs;
use tracing::debug;

/// Time-qualified name for an uploaded file. Two uploads of the same original
/// name within one millisecond can still collide; accepted edge case.
pub fn stored_filename(original: &str) -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), original)
}

/// Write the uploaded bytes under the upload directory and return the stored
/// filename. The directory is created on first use.
pub async fn save_prescription(dir: &str, original: &str, bytes: &[u8]) -> Result<String> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("creating upload directory {}", dir))?;

    let filename = stored_filename(original);
    let path = Path::new(dir).join(&filename);

    fs::write(&path, bytes)
        .await
        .with_context(|| format!("writing upload {}", path.display()))?;

    debug!("stored prescription upload as {}", filename);
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_filename_keeps_original_suffix() {
        let name = stored_filename("report.pdf");
        let (prefix, suffix) = name.split_once('-').unwrap();
        assert!(prefix.parse::<i64>().is_ok());
        assert_eq!(suffix, "report.pdf");
    }

    #[tokio::test]
    async fn save_writes_bytes_under_dir() {
        let dir = tempfile::tempdir().unwrap();
        let dir_path = dir.path().to_str().unwrap();

        let filename = save_prescription(dir_path, "report.pdf", b"%PDF-1.4")
            .await
            .unwrap();

        let stored = tokio::fs::read(dir.path().join(&filename)).await.unwrap();
        assert_eq!(stored, b"%PDF-1.4");
        assert!(filename.ends_with("-report.pdf"));
    }

    #[tokio::test]
    async fn unwritable_dir_is_an_error() {
        let result = save_prescription("/proc/definitely-not-writable", "a.txt", b"x").await;
        assert!(result.is_err());
    }
}
