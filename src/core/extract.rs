use regex::{Regex, RegexBuilder};
use serde_json::Value;
use std::sync::LazyLock;

use crate::utils::error::Result;

/// Product name as it appears in listings, with or without the inner space.
pub const PRODUCT_PATTERN: &str = r"X100\s*VI";

static PRODUCT_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(PRODUCT_PATTERN)
        .case_insensitive(true)
        .build()
        .expect("product regex is valid")
});

static JSON_LD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<script[^>]*type=["']application/ld\+json["'][^>]*>([\s\S]*?)</script>"#)
        .expect("json-ld regex is valid")
});

static FIELD_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[。！？!?]|\.\s|\s{2,}").expect("field separator regex is valid")
});

/// Compiles a user supplied keyword the way every strategy matches it.
pub fn compile_keyword(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

pub fn matches_product(text: &str) -> bool {
    PRODUCT_RE.is_match(text)
}

/// Returns the text `window` characters either side of every keyword match.
///
/// Overlapping windows are kept as separate entries.
pub fn find_keyword_contexts(text: &str, keyword: &Regex, window: usize) -> Vec<String> {
    let mut contexts = Vec::new();

    for m in keyword.find_iter(text) {
        let before = &text[..m.start()];
        let start = before
            .char_indices()
            .rev()
            .take(window)
            .last()
            .map(|(idx, _)| idx)
            .unwrap_or(m.start());

        let after = &text[m.end()..];
        let end = m.end()
            + after
                .char_indices()
                .nth(window)
                .map(|(idx, _)| idx)
                .unwrap_or(after.len());

        let snippet = text[start..end].trim();
        if !snippet.is_empty() {
            contexts.push(snippet.to_string());
        }
    }

    contexts
}

/// Splits normalized text into sentence-like fields and keeps the ones
/// naming the product.
pub fn split_product_fields(text: &str) -> Vec<String> {
    FIELD_SEPARATOR_RE
        .split(text)
        .map(str::trim)
        .filter(|field| !field.is_empty() && matches_product(field))
        .map(str::to_string)
        .collect()
}

/// Mines `application/ld+json` blocks for objects whose `name` is the product.
///
/// Blocks that do not parse are skipped.
pub fn extract_json_product_candidates(html: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    for caps in JSON_LD_RE.captures_iter(html) {
        let body = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        if body.is_empty() {
            continue;
        }

        let payload: Value = match serde_json::from_str(body) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!("Skipping unparsable JSON-LD block: {}", e);
                continue;
            }
        };

        let mut objects = Vec::new();
        collect_objects(&payload, &mut objects);

        for item in objects {
            let name = field_text(item.get("name"));
            if name.is_empty() || !matches_product(&name) {
                continue;
            }
            let availability = field_text(item.get("availability"));
            candidates.push(format!("{} {}", name, availability).trim().to_string());
        }
    }

    candidates
}

// Pre-order: an object comes before anything nested inside it.
fn collect_objects<'a>(node: &'a Value, out: &mut Vec<&'a serde_json::Map<String, Value>>) {
    match node {
        Value::Object(map) => {
            out.push(map);
            for value in map.values() {
                collect_objects(value, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_objects(item, out);
            }
        }
        _ => {}
    }
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
