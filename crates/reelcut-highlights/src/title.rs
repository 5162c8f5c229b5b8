//! Highlight title generation.

/// Title used when the source text has nothing printable left.
pub const DEFAULT_TITLE: &str = "Highlight";

const TITLE_WORDS: usize = 6;

/// Derive a display title from highlight text.
///
/// Takes the first six whitespace-delimited words, strips everything except
/// word characters, whitespace and hyphens, and title-cases the result.
///
/// ```
/// use reelcut_highlights::generate_title;
/// assert_eq!(
///     generate_title("this is AMAZING!!! you won't believe it"),
///     "This Is Amazing You Wont Believe"
/// );
/// assert_eq!(generate_title(" ?! ... "), "Highlight");
/// ```
pub fn generate_title(text: &str) -> String {
    let joined = text
        .split_whitespace()
        .take(TITLE_WORDS)
        .collect::<Vec<_>>()
        .join(" ");

    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return DEFAULT_TITLE.to_string();
    }

    title_case(cleaned)
}

/// Uppercase letters that follow a non-letter, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
