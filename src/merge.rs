//! Merge pipeline: config + program metadata + export layout -> one document.
//!
//! JSON shape after merging:
//! {
//!   ...config keys...,
//!   ...program keys...,            // program wins on collision
//!   "maps": [
//!     {
//!       "type": "BPF_MAP_TYPE_RINGBUF",
//!       ...,
//!       "export_data_types": {...}  // layout[0], buffer maps only
//!     },
//!     { "type": "BPF_MAP_TYPE_HASH", ... }
//!   ]
//! }
//!
//! Only one ring buffer or perf buffer export is supported: every buffer map
//! receives the same first layout entry.

use crate::Result;
use crate::input::{InputPaths, load_layout, load_object};

use anyhow::bail;
use serde_json::{Map, Value};

const MAPS_KEY: &str = "maps";
const TYPE_KEY: &str = "type";
const EXPORT_KEY: &str = "export_data_types";

/// Map types whose records are exported to user space.
pub fn is_buffer_map_type(name: &str) -> bool {
    matches!(name, "BPF_MAP_TYPE_RINGBUF" | "BPF_MAP_TYPE_PERF_EVENT_ARRAY")
}

#[derive(Debug, Clone)]
pub struct Merged {
    pub document: Value,
    /// Buffer maps left without `export_data_types` because the layout was empty.
    pub skipped: usize,
}

/// Shallow merge: every top-level key of `overlay` replaces the base value.
pub fn merge_top_level(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        base.insert(key, value);
    }
}

/// Attach `layout[0]` to every ring/perf buffer map in `doc["maps"]`.
///
/// Returns how many buffer maps were left untouched because the layout is
/// empty; reporting that is up to the caller.
pub fn annotate_buffer_maps(doc: &mut Map<String, Value>, layout: &[Value]) -> Result<usize> {
    let maps = match doc.get_mut(MAPS_KEY) {
        Some(Value::Array(maps)) => maps,
        Some(other) => bail!("\"{}\" must be an array, found {}", MAPS_KEY, kind(other)),
        None => bail!("merged document is missing required field \"{}\"", MAPS_KEY),
    };

    let export = layout.first();
    let mut skipped = 0;
    for (idx, entry) in maps.iter_mut().enumerate() {
        let map = match entry {
            Value::Object(map) => map,
            other => bail!("maps[{}] must be an object, found {}", idx, kind(other)),
        };
        let Some(ty) = map.get(TYPE_KEY) else {
            bail!("maps[{}] is missing required field \"{}\"", idx, TYPE_KEY);
        };

        // Non-string types never match.
        if !ty.as_str().is_some_and(is_buffer_map_type) {
            continue;
        }

        match export {
            Some(layout) => {
                map.insert(EXPORT_KEY.to_string(), layout.clone());
            }
            None => skipped += 1,
        }
    }

    Ok(skipped)
}

/// Load the three documents and produce the merged result.
///
/// Files are read in order config, program, layout; the first failure aborts
/// the whole merge. `maps` must come from the program metadata itself, a
/// `maps` key in the config does not count.
pub fn merge_documents(paths: &InputPaths) -> Result<Merged> {
    let mut doc = load_object(&paths.config, "config")?;
    let program = load_object(&paths.program, "program metadata")?;
    if !program.contains_key(MAPS_KEY) {
        bail!(
            "program metadata {} is missing required field \"{}\"",
            paths.program.display(),
            MAPS_KEY
        );
    }
    merge_top_level(&mut doc, program);

    let layout = load_layout(&paths.layout)?;
    let skipped = annotate_buffer_maps(&mut doc, &layout)?;

    Ok(Merged {
        document: Value::Object(doc),
        skipped,
    })
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
