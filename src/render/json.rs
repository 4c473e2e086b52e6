use crate::Result;

use serde_json::Value;

/// Serialize the merged document, compact unless `pretty` is set.
///
/// The returned text carries a trailing newline so it can go to stdout in a
/// single write.
pub fn render_document(doc: &Value, pretty: bool) -> Result<String> {
    let mut out = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn compact_by_default() {
        let doc = json!({"a": 1, "maps": [{"type": "BPF_MAP_TYPE_RINGBUF"}]});
        assert_eq!(
            render_document(&doc, false).unwrap(),
            "{\"a\":1,\"maps\":[{\"type\":\"BPF_MAP_TYPE_RINGBUF\"}]}\n"
        );
    }

    #[test]
    fn pretty_output_parses_back() {
        let doc = json!({"b": [1, 2], "a": {"c": null}});
        let text = render_document(&doc, true).unwrap();
        assert!(text.contains("\n  \"b\": ["));
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, doc);
    }
}
