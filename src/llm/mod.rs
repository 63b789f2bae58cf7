// src/llm/mod.rs

mod gemini;

pub use gemini::{AiError, GeminiClient};

/// Reduce a raw model reply to a single alphanumeric token.
///
/// Takes the first whitespace-separated token and strips everything outside
/// ASCII letters/digits. If nothing survives, the full trimmed reply is
/// better than an empty payload.
pub fn single_word(raw: &str) -> String {
    let trimmed = raw.trim();
    let first = trimmed.split_whitespace().next().unwrap_or("");
    let stripped: String = first.chars().filter(char::is_ascii_alphanumeric).collect();
    if stripped.is_empty() {
        trimmed.to_string()
    } else {
        stripped
    }
}

#[cfg(test)]
mod tests {
    use super::single_word;

    #[test]
    fn takes_first_token() {
        assert_eq!(single_word("Paris"), "Paris");
        assert_eq!(single_word("  Paris, France.\n"), "Paris");
        assert_eq!(single_word("42 is the answer"), "42");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(single_word("\"Paris.\""), "Paris");
        assert_eq!(single_word("don't"), "dont");
    }

    #[test]
    fn falls_back_to_trimmed_original() {
        assert_eq!(single_word("  ¿? !!  "), "¿? !!");
        assert_eq!(single_word(""), "");
    }
}
