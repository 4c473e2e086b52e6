use crate::Result;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Read a whole file and parse it as `T`.
///
/// The file handle is released before parsing starts, so documents are never
/// held open across each other.
fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read {} file {}", what, path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {} file {}", what, path.display()))
}

/// Load a document whose top level must be a JSON object.
pub fn load_object(path: &Path, what: &str) -> Result<Map<String, Value>> {
    load_json(path, what)
}

/// Load the export layout: a JSON array, possibly empty.
pub fn load_layout(path: &Path) -> Result<Vec<Value>> {
    load_json(path, "export layout")
}
