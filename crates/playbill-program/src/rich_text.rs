//! Rich-text content detection
//!
//! Section bodies arrive as already-sanitized HTML fragments. A section is
//! only worth a page when something visible remains once markup is removed.

/// Plain text of an HTML fragment: tags and `&nbsp;` become spaces and
/// whitespace runs collapse to a single space.
pub fn visible_text(input: &str) -> String {
    let mut text = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        if ch == '<' {
            if let Some(end) = rest.find('>').filter(|&end| end > 1) {
                text.push(' ');
                rest = &rest[end + 1..];
                continue;
            }
        }
        if ch == '&' && starts_with_ignore_case(rest, "&nbsp;") {
            text.push(' ');
            rest = &rest["&nbsp;".len()..];
            continue;
        }
        text.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether an HTML fragment has any visible text
pub fn rich_text_has_content(input: &str) -> bool {
    !visible_text(input).is_empty()
}

/// Whether a plain string has anything besides whitespace
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    haystack
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
