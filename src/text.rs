//! Text helpers for rendered WordPress content
//!
//! The API delivers titles and body copy as HTML with typographic entities
//! already encoded. These helpers turn that into plain text for terminal
//! output: entity decoding, tag stripping, excerpting, and date formatting.

use chrono::NaiveDateTime;

/// Named entities WordPress commonly emits in rendered fields
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
];

/// Format WordPress timestamps arrive in (site-local, no offset)
const WP_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Decodes HTML entities in rendered text
///
/// Handles the named entities WordPress emits plus numeric entities like
/// `&#8217;` (typographic quotes, dashes, the ellipsis). Anything that does
/// not parse as an entity is left untouched.
pub fn decode_entities(text: &str) -> String {
    let mut decoded = text.to_string();
    for (entity, replacement) in NAMED_ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, replacement);
        }
    }
    decode_numeric_entities(&decoded)
}

/// Replaces `&#NNN;` sequences with the character they name
fn decode_numeric_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("&#") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];

        let digits_end = tail.find(|c: char| !c.is_ascii_digit()).unwrap_or(tail.len());
        let is_entity = digits_end > 0 && tail[digits_end..].starts_with(';');

        if is_entity {
            let decoded = tail[..digits_end]
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32);
            match decoded {
                Some(c) => out.push(c),
                // Out-of-range code point: keep the literal text
                None => {
                    out.push_str("&#");
                    out.push_str(&tail[..digits_end + 1]);
                }
            }
            rest = &tail[digits_end + 1..];
        } else {
            out.push_str("&#");
            rest = tail;
        }
    }

    out.push_str(rest);
    out
}

/// Strips HTML tags from rendered content, trimming surrounding whitespace
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}

/// Builds a plain-text excerpt of at most `max_chars` characters
///
/// Tags are stripped first; content longer than the limit is cut and
/// suffixed with an ellipsis.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let plain = strip_html(content);
    if plain.chars().count() <= max_chars {
        return plain;
    }
    let cut: String = plain.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Formats a WordPress timestamp as a long-form date (`March 5, 2024`)
///
/// Unparseable input is returned unchanged; this is a display helper, not
/// a validator.
pub fn format_date(date: &str) -> String {
    match NaiveDateTime::parse_from_str(date, WP_DATE_FORMAT) {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
