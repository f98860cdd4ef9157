use regex::Regex;
use std::sync::LazyLock;

use crate::core::normalize::truncate_chars;
use crate::domain::model::ProductStatus;

pub const IN_STOCK_KEYWORDS: [&str; 6] = [
    "在庫あり",
    "在庫有",
    "即納",
    "当日出荷",
    "翌日出荷",
    "注文可能",
];

pub const OUT_OF_STOCK_KEYWORDS: [&str; 6] = [
    "在庫なし",
    "入荷待ち",
    "お取り寄せ",
    "販売終了",
    "予約受付終了",
    "売り切れ",
];

/// Shown when the snippet has no recognizable product line.
pub const FALLBACK_TITLE: &str = "X100VI";
pub const MAX_TITLE_CHARS: usize = 140;
pub const MAX_SNIPPET_CHARS: usize = 220;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[^\n]*(?:FUJIFILM\s*)?X100\s*VI[^\n]*").expect("title regex is valid")
});

/// In-stock keywords win over out-of-stock ones; `None` when neither appears.
pub fn detect_stock(text: &str) -> Option<bool> {
    if IN_STOCK_KEYWORDS.iter().any(|kw| text.contains(*kw)) {
        return Some(true);
    }
    if OUT_OF_STOCK_KEYWORDS.iter().any(|kw| text.contains(*kw)) {
        return Some(false);
    }
    None
}

pub fn extract_title(snippet: &str) -> String {
    TITLE_RE
        .find(snippet)
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

/// Builds the display record; classification always sees the full snippet.
pub fn classify(snippet: &str) -> ProductStatus {
    let title = extract_title(snippet);
    ProductStatus {
        title: truncate_chars(&title, MAX_TITLE_CHARS).to_string(),
        snippet: truncate_chars(snippet, MAX_SNIPPET_CHARS).to_string(),
        in_stock: detect_stock(snippet),
    }
}
