//! Markup stripping for feed summaries.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Remove every `<...>` tag from `text`.
///
/// Entities are left as-is and no whitespace is normalized; the result is
/// only meant to be readable in a chat embed.
pub fn strip_markup(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}
