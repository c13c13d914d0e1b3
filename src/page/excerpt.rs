//! Post excerpts for listings and fallback descriptions.

/// Default excerpt length in characters.
pub const EXCERPT_LENGTH: usize = 160;

const ELLIPSIS: char = '…';

/// Prune `text` to at most `max_chars` characters on a word boundary.
///
/// Whitespace is collapsed first. Text that already fits is returned as-is;
/// otherwise trailing punctuation is dropped and `…` appended. A single word
/// longer than `max_chars` is cut mid-word.
pub fn prune(text: &str, max_chars: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= max_chars {
        return text;
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map_or(text.len(), |(idx, _)| idx);
    let head = &text[..cut];

    // The character right after the cut decides if the last word is whole
    let whole_word = text[cut..].starts_with(' ');
    let head = if whole_word {
        head
    } else {
        head.rsplit_once(' ').map_or(head, |(kept, _)| kept)
    };

    let mut excerpt = head
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '.' | '-'))
        .to_string();
    excerpt.push(ELLIPSIS);
    excerpt
}
