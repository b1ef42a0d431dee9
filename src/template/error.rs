//! Error type for document generation

use thiserror::Error;

/// Anything that can go wrong between fetching the template and writing the
/// rendered document. Callers treat every variant the same way; the variants
/// exist for the log line.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template {path}: {source}")]
    Fetch {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("template archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("template xml: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("template xml encoding: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("template part {part}: {message}")]
    Syntax { part: String, message: String },
    #[error("template has no document part")]
    MissingDocument,
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
