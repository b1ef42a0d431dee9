//! DOCX rendering: unzip, substitute placeholders in the text parts, rezip

use super::error::{RenderError, Result};
use super::placeholder::{substitute_runs, RunText};
use super::values::TemplateValues;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::collections::{HashMap, HashSet};
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// MIME type of a WordprocessingML document
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Main document part inside the container
pub const DOCUMENT_PART: &str = "word/document.xml";

const PARAGRAPH: &[u8] = b"w:p";
const TEXT: &[u8] = b"w:t";

/// Whether a container entry holds paragraph text that may carry placeholders
pub fn is_text_part(name: &str) -> bool {
    if name == DOCUMENT_PART || name == "word/footnotes.xml" || name == "word/endnotes.xml" {
        return true;
    }
    let Some(file) = name.strip_prefix("word/") else {
        return false;
    };
    (file.starts_with("header") || file.starts_with("footer"))
        && file.ends_with(".xml")
        && !file.contains('/')
}

/// Fill the placeholders of a DOCX template.
///
/// Text parts are rewritten; every other entry is copied without
/// recompression.
pub fn render(template: &[u8], values: &TemplateValues) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(template))?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::with_capacity(template.len())));
    let mut has_document = false;

    for index in 0..archive.len() {
        let name = archive.by_index_raw(index)?.name().to_string();

        if !is_text_part(&name) {
            let entry = archive.by_index_raw(index)?;
            writer.raw_copy_file(entry)?;
            continue;
        }

        has_document |= name == DOCUMENT_PART;
        let mut xml = Vec::new();
        archive.by_index(index)?.read_to_end(&mut xml)?;

        let rendered = render_part(&name, &xml, values)?;
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        writer.start_file(name.as_str(), options)?;
        writer.write_all(&rendered)?;
    }

    if !has_document {
        return Err(RenderError::MissingDocument);
    }

    Ok(writer.finish()?.into_inner())
}

/// One text node inside a `<w:t>` element
#[derive(Debug)]
struct TextSlot {
    /// Event index of the enclosing `<w:t>` start tag
    start_event: usize,
    /// Event index of the text node itself
    text_event: usize,
    text: String,
}

/// Substitute placeholders in one XML part
pub fn render_part(part: &str, xml: &[u8], values: &TemplateValues) -> Result<Vec<u8>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut events: Vec<Event<'static>> = Vec::new();
    // Paragraphs nest through text boxes, so keep a stack
    let mut open_paragraphs: Vec<Vec<TextSlot>> = Vec::new();
    let mut paragraphs: Vec<Vec<TextSlot>> = Vec::new();
    let mut text_start: Option<usize> = None;

    loop {
        let event = reader.read_event_into(&mut buf)?.into_owned();
        buf.clear();

        match &event {
            Event::Eof => break,
            Event::Start(e) if e.name().as_ref() == PARAGRAPH => {
                open_paragraphs.push(Vec::new());
            }
            Event::End(e) if e.name().as_ref() == PARAGRAPH => {
                if let Some(slots) = open_paragraphs.pop() {
                    paragraphs.push(slots);
                }
            }
            Event::Start(e) if e.name().as_ref() == TEXT => text_start = Some(events.len()),
            Event::End(e) if e.name().as_ref() == TEXT => text_start = None,
            Event::Text(t) => {
                if let (Some(start_event), Some(slots)) = (text_start, open_paragraphs.last_mut())
                {
                    slots.push(TextSlot {
                        start_event,
                        text_event: events.len(),
                        text: t.unescape()?.into_owned(),
                    });
                }
            }
            _ => {}
        }
        events.push(event);
    }

    let mut replacements: HashMap<usize, RunText> = HashMap::new();
    let mut preserve: HashSet<usize> = HashSet::new();

    for slots in paragraphs {
        let runs: Vec<String> = slots.iter().map(|s| s.text.clone()).collect();
        let substituted = substitute_runs(&runs, values).map_err(|e| RenderError::Syntax {
            part: part.to_string(),
            message: e.to_string(),
        })?;
        let Some(outputs) = substituted else {
            continue;
        };
        for (slot, pieces) in slots.into_iter().zip(outputs) {
            if pieces.len() == 1 && pieces[0] == slot.text {
                continue;
            }
            preserve.insert(slot.start_event);
            replacements.insert(slot.text_event, pieces);
        }
    }

    if replacements.is_empty() {
        return Ok(xml.to_vec());
    }
    tracing::debug!("{part}: rewriting {} text runs", replacements.len());

    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    for (index, event) in events.into_iter().enumerate() {
        match event {
            Event::Start(start) if preserve.contains(&index) => {
                writer.write_event(Event::Start(preserve_space(start)))?;
            }
            _ if replacements.contains_key(&index) => {
                let pieces = replacements.remove(&index).unwrap_or_default();
                write_run_text(&mut writer, &pieces)?;
            }
            event => writer.write_event(event)?,
        }
    }

    Ok(writer.into_inner())
}

/// Mark a `<w:t>` so leading and trailing spaces of the new text survive
fn preserve_space(mut start: BytesStart<'static>) -> BytesStart<'static> {
    let has_space = start
        .attributes()
        .flatten()
        .any(|a| a.key.as_ref() == b"xml:space");
    if !has_space {
        start.push_attribute(("xml:space", "preserve"));
    }
    start
}

/// Write run text, closing and reopening `<w:t>` around each line break
fn write_run_text(writer: &mut Writer<Vec<u8>>, pieces: &[String]) -> Result<()> {
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            writer.write_event(Event::End(BytesEnd::new("w:t")))?;
            writer.write_event(Event::Empty(BytesStart::new("w:br")))?;
            writer.write_event(Event::Start(
                BytesStart::new("w:t").with_attributes([("xml:space", "preserve")]),
            ))?;
        }
        writer.write_event(Event::Text(BytesText::new(piece)))?;
    }
    Ok(())
}
