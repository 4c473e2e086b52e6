//! Output rendering for the merged document.

pub mod json;

pub use json::render_document;
