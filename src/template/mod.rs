//! Document rendering
//!
//! Fills a DOCX template's `{{name}}` placeholders with form values:
//! - `source`: where template bytes come from
//! - `docx`: container and XML handling
//! - `placeholder`: token search and substitution within a paragraph
//! - `sink`: where the finished document is delivered

mod docx;
mod error;
mod placeholder;
mod sink;
mod source;
mod values;

#[cfg(test)]
pub(crate) mod test_support;

pub use docx::{render, DOCX_MIME_TYPE};
pub use error::{RenderError, Result};
pub use sink::{DirectorySink, DocumentSink};
pub use source::{FileTemplateSource, TemplateSource};
pub use values::TemplateValues;

#[cfg(test)]
pub use sink::MockDocumentSink;
#[cfg(test)]
pub use source::MockTemplateSource;

/// File name every rendered document is delivered under
pub const OUTPUT_FILE_NAME: &str = "dokument.docx";

/// A filled-in document ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Fetch the template, fill it and package the result
pub async fn render_document(
    source: &dyn TemplateSource,
    values: &TemplateValues,
) -> Result<RenderedDocument> {
    let template = source.fetch().await?;
    tracing::debug!(
        "Fetched template {} ({} bytes), filling {} values",
        source.location(),
        template.len(),
        values.count()
    );
    let bytes = render(&template, values)?;
    Ok(RenderedDocument {
        file_name: OUTPUT_FILE_NAME.to_string(),
        mime_type: DOCX_MIME_TYPE,
        bytes,
    })
}
