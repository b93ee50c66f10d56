//! Match highlighting.

/// Opening highlight marker
pub const MARK_OPEN: &str = "<mark>";
/// Closing highlight marker
pub const MARK_CLOSE: &str = "</mark>";

/// Wrap every case-insensitive occurrence of `query` in `<mark>…</mark>`.
///
/// The original casing of `text` is kept. The query is matched literally.
#[must_use]
pub fn highlight(text: &str, query: &str) -> String {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + MARK_OPEN.len() + MARK_CLOSE.len());
    let mut i = 0;

    while i < chars.len() {
        match match_len(&chars[i..], &needle) {
            Some(len) => {
                out.push_str(MARK_OPEN);
                out.extend(&chars[i..i + len]);
                out.push_str(MARK_CLOSE);
                i += len;
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }

    out
}

/// Number of `text` chars whose lowercase form starts with `needle`, if any.
fn match_len(text: &[char], needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (consumed, c) in text.iter().enumerate() {
        for lower in c.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(consumed + 1);
        }
    }
    None
}
