//! Post text composition.

/// Bluesky caps posts at 300 graphemes. Counting chars never undercounts
/// graphemes, so staying under this many chars is always accepted.
pub const MAX_POST_CHARS: usize = 300;

/// Title, description and link separated by blank lines.
pub fn compose_message(title: &str, description: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => format!("{}\n\n{}\n\n{}", title, description, url),
        None => format!("{}\n\n{}", title, description),
    }
}

/// Replace every line break with a space so the text fits a `key=value` line.
pub fn single_line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

/// Compose a message no longer than `max_chars`, shortening the description
/// first and the title only if the link alone does not leave room.
///
/// The link is never cut.
pub fn fit_post(title: &str, description: &str, url: Option<&str>, max_chars: usize) -> String {
    let full = compose_message(title, description, url);
    if full.chars().count() <= max_chars {
        return full;
    }

    let without_description = compose_message(title, "", url).chars().count();
    if without_description < max_chars {
        let room = max_chars - without_description;
        return compose_message(title, &clip(description, room), url);
    }

    // Not even the title fits next to the link: drop the description entirely.
    let link_part = url.map_or(0, |u| u.chars().count() + 2);
    let room = max_chars.saturating_sub(link_part);
    match url {
        Some(url) => format!("{}\n\n{}", clip(title, room), url),
        None => clip(title, room),
    }
}

/// Clip to `max_chars` characters, marking the cut with an ellipsis.
fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut clipped: String = text.chars().take(max_chars - 1).collect();
    clipped.push('…');
    clipped
}
