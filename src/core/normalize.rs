use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<script[\s\S]*?</script>").expect("script block regex is valid")
});
static STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<style[\s\S]*?</style>").expect("style block regex is valid")
});
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag regex is valid"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

/// Drops `<script>` and `<style>` blocks, body included.
pub fn strip_scripts_and_styles(html: &str) -> String {
    let without_scripts = SCRIPT_RE.replace_all(html, " ");
    STYLE_RE.replace_all(&without_scripts, " ").into_owned()
}

// Legacy entities that browsers also accept without the trailing semicolon.
static BARE_ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(amp|lt|gt|quot|nbsp|copy|reg|yen|AMP|LT|GT|QUOT)(?-u:\b);?")
        .expect("bare entity regex is valid")
});
// Closing tags that end a listing row or paragraph. `</div>` is left out on
// purpose: product cards put name and stock label in sibling divs.
static BLOCK_END_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(?:li|p|tr|dd|dt|ul|ol|table|h[1-6])\s*>|<br\s*/?>")
        .expect("block end regex is valid")
});

/// Decodes HTML entities, including the semicolon-less legacy forms.
pub fn decode_entities(value: &str) -> String {
    let terminated = BARE_ENTITY_RE.replace_all(value, "&${1};");
    html_escape::decode_html_entities(&terminated).into_owned()
}

/// Decodes entities, replaces every tag with a space and collapses
/// whitespace runs to a single space.
///
/// Entities are decoded first, so escaped markup (`&lt;b&gt;`) is removed too.
pub fn normalize_text(value: &str) -> String {
    let text = decode_entities(value);
    let text = TAG_RE.replace_all(&text, " ");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Cuts markup at block-level closing tags and returns each non-empty
/// block as normalized text.
pub fn split_blocks(html: &str) -> Vec<String> {
    BLOCK_END_RE
        .split(html)
        .map(normalize_text)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Normalizes every candidate and keeps the first occurrence of each,
/// dropping those that normalize to nothing.
pub fn dedup_candidates<I, S>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for candidate in candidates {
        let norm = normalize_text(candidate.as_ref());
        if norm.is_empty() || !seen.insert(norm.clone()) {
            continue;
        }
        unique.push(norm);
    }

    unique
}

/// Cuts `value` to at most `max_chars` characters.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
