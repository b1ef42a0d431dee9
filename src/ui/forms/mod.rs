//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `document_form`: The three-field document form

mod document_form;
mod field_renderer;

pub use document_form::draw_document_form;
