//! Delivery of rendered documents to the user

use super::error::Result;
use super::RenderedDocument;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Receives a finished document, the terminal counterpart of a browser
/// file download
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Store the document and return where it ended up
    async fn save(&self, document: &RenderedDocument) -> Result<PathBuf>;

    /// Human-readable destination, for the status bar
    fn location(&self) -> String;
}

/// Writes documents into a directory. An existing file is never
/// overwritten; the name gets a ` (n)` suffix instead.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    const MAX_ATTEMPTS: usize = 1000;

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// `name` for the first attempt, then `stem (n).ext`
pub fn candidate_name(name: &str, attempt: usize) -> String {
    if attempt == 0 {
        return name.to_string();
    }
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem} ({attempt}).{ext}"),
        _ => format!("{name} ({attempt})"),
    }
}

/// Write `bytes` to the freshly created file at `path`. A failed write
/// removes the file so no truncated document is left behind.
async fn write_or_remove<W>(out: &mut W, path: &Path, bytes: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written = async {
        out.write_all(bytes).await?;
        out.flush().await
    }
    .await;

    if let Err(e) = written {
        if let Err(cleanup) = tokio::fs::remove_file(path).await {
            tracing::warn!("Could not remove partial {}: {cleanup}", path.display());
        }
        return Err(e.into());
    }
    Ok(())
}

#[async_trait]
impl DocumentSink for DirectorySink {
    async fn save(&self, document: &RenderedDocument) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;

        for attempt in 0..Self::MAX_ATTEMPTS {
            let path = self.dir.join(candidate_name(&document.file_name, attempt));
            let file = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await;
            let mut file = match file {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            };
            write_or_remove(&mut file, &path, &document.bytes).await?;
            tracing::debug!(
                "Wrote {} bytes ({}) to {}",
                document.bytes.len(),
                document.mime_type,
                path.display()
            );
            return Ok(path);
        }

        Err(std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free file name for {}", document.file_name),
        )
        .into())
    }

    fn location(&self) -> String {
        self.dir.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{DOCX_MIME_TYPE, OUTPUT_FILE_NAME};

    fn document(bytes: &[u8]) -> RenderedDocument {
        RenderedDocument {
            file_name: OUTPUT_FILE_NAME.to_string(),
            mime_type: DOCX_MIME_TYPE,
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn test_candidate_names() {
        assert_eq!(candidate_name("dokument.docx", 0), "dokument.docx");
        assert_eq!(candidate_name("dokument.docx", 2), "dokument (2).docx");
        assert_eq!(candidate_name("README", 1), "README (1)");
        assert_eq!(candidate_name(".hidden", 1), ".hidden (1)");
    }

    #[test]
    fn test_save_writes_under_fixed_name() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path().join("downloads"));

        let path = tokio_test::block_on(sink.save(&document(b"docx"))).unwrap();

        assert_eq!(path, dir.path().join("downloads").join("dokument.docx"));
        assert_eq!(std::fs::read(&path).unwrap(), b"docx");
    }

    #[tokio::test]
    async fn test_failed_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dokument.docx");
        std::fs::write(&path, b"").unwrap();
        let mut out = tokio_test::io::Builder::new()
            .write_error(std::io::Error::other("disk full"))
            .build();

        let err = write_or_remove(&mut out, &path, b"docx").await.unwrap_err();

        assert!(matches!(err, crate::template::RenderError::Io(_)));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_successful_write_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dokument.docx");
        let mut file = tokio::fs::File::create(&path).await.unwrap();

        write_or_remove(&mut file, &path, b"docx").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"docx");
    }

    #[tokio::test]
    async fn test_save_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        let first = sink.save(&document(b"one")).await.unwrap();
        let second = sink.save(&document(b"two")).await.unwrap();

        assert_eq!(first.file_name().unwrap(), "dokument.docx");
        assert_eq!(second.file_name().unwrap(), "dokument (1).docx");
        assert_eq!(std::fs::read(&first).unwrap(), b"one");
        assert_eq!(std::fs::read(&second).unwrap(), b"two");
    }
}
