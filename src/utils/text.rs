//! Plain-text helpers for article and entry bodies.

/// Split content into paragraphs on blank lines.
///
/// Lines inside a paragraph are kept as-is; empty paragraphs are dropped.
pub fn paragraphs(content: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if let Some(s) = start.take() {
                result.push(content[s..end].trim());
            }
        } else {
            if start.is_none() {
                start = Some(offset);
            }
            end = offset + line.len();
        }
        offset += line.len();
    }

    if let Some(s) = start {
        result.push(content[s..end].trim());
    }

    result
}

pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// First `max_chars` characters of `text`, cut at a word boundary when one
/// exists, with an ellipsis appended if anything was removed.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let head = &text[..cut];
    let head = match head.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => &head[..idx],
        _ => head,
    };

    format!("{}…", head.trim_end())
}
