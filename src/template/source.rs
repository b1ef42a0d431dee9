//! Where template bytes come from

use super::error::{RenderError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Supplies the raw template on each download. Implementations must not
/// cache: every call reads the template afresh.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Fetch the template bytes
    async fn fetch(&self) -> Result<Vec<u8>>;

    /// Human-readable location, for logs
    fn location(&self) -> String;
}

/// Template stored on the local filesystem
#[derive(Debug, Clone)]
pub struct FileTemplateSource {
    path: PathBuf,
}

impl FileTemplateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TemplateSource for FileTemplateSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| RenderError::Fetch {
                path: self.path.display().to_string(),
                source,
            })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
