//! Caption noise removal, whitespace normalization, and truncation.

use regex::Regex;
use std::sync::OnceLock;

static NOISE_RE: OnceLock<Regex> = OnceLock::new();
static SPACES_RE: OnceLock<Regex> = OnceLock::new();
static NEWLINES_RE: OnceLock<Regex> = OnceLock::new();

fn noise_re() -> &'static Regex {
    NOISE_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\[(?:Music|Applause|Laughter|Cheering|Inaudible|Silence|Background Music|Background Noise)\]",
        )
        .expect("Invalid noise regex")
    })
}

fn spaces_re() -> &'static Regex {
    SPACES_RE.get_or_init(|| Regex::new(r" +").expect("Invalid spaces regex"))
}

fn newlines_re() -> &'static Regex {
    NEWLINES_RE.get_or_init(|| Regex::new(r"\n+").expect("Invalid newlines regex"))
}

/// Remove caption noise tags and normalize whitespace.
///
/// Bracketed non-speech annotations ([Music], [Applause], ...) are
/// stripped when they are the sole bracket content, runs of spaces
/// collapse to one space, runs of newlines to one newline, and the result
/// is trimmed. Applying this twice gives the same result as once.
pub fn clean_transcript(text: &str) -> String {
    let text = noise_re().replace_all(text, "");
    let text = spaces_re().replace_all(&text, " ");
    let text = newlines_re().replace_all(&text, "\n");
    text.trim().to_string()
}

/// Outcome of applying the character budget.
#[derive(Debug, Clone, PartialEq)]
pub struct Truncation {
    pub text: String,
    pub truncated: bool,
    /// Character count before truncation.
    pub original_length: usize,
    /// The budget when truncated, the original length otherwise.
    pub truncated_to: usize,
}

/// Truncate cleaned text to at most `max_chars` characters.
pub fn truncate_chars(text: String, max_chars: usize) -> Truncation {
    let original_length = text.chars().count();

    if original_length > max_chars {
        Truncation {
            text: text.chars().take(max_chars).collect(),
            truncated: true,
            original_length,
            truncated_to: max_chars,
        }
    } else {
        Truncation {
            text,
            truncated: false,
            original_length,
            truncated_to: original_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_tags_removed() {
        assert_eq!(clean_transcript("hello [Music] world"), "hello world");
        assert_eq!(clean_transcript("[Applause] welcome"), "welcome");
        assert_eq!(clean_transcript("[Background Noise] hi [Inaudible]"), "hi");
    }

    #[test]
    fn test_noise_tags_case_insensitive() {
        assert_eq!(clean_transcript("a [MUSIC] b"), "a b");
        assert_eq!(clean_transcript("a [music] b"), "a b");
        assert_eq!(clean_transcript("a [background music] b"), "a b");
    }

    #[test]
    fn test_unknown_brackets_kept() {
        assert_eq!(clean_transcript("a [Speaker 1] b"), "a [Speaker 1] b");
        assert_eq!(clean_transcript("[Musical interlude]"), "[Musical interlude]");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(clean_transcript("a    b"), "a b");
        assert_eq!(clean_transcript("a\n\n\nb"), "a\nb");
        assert_eq!(clean_transcript("  padded  "), "padded");
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let inputs = [
            "hello [Music]  world",
            "[Applause]\n\n[Laughter]\ntext",
            "   a  b\n\nc   ",
        ];
        for input in inputs {
            let once = clean_transcript(input);
            assert_eq!(clean_transcript(&once), once);
        }
    }

    #[test]
    fn test_noise_only_cleans_to_empty() {
        assert_eq!(clean_transcript("[Music] [Music] [Applause]"), "");
        assert_eq!(clean_transcript("[Music]"), "");
    }

    #[test]
    fn test_truncation_boundary() {
        let exact = "x".repeat(100);
        let result = truncate_chars(exact, 100);
        assert!(!result.truncated);
        assert_eq!(result.original_length, 100);
        assert_eq!(result.truncated_to, 100);
        assert_eq!(result.text.chars().count(), 100);

        let over = "x".repeat(101);
        let result = truncate_chars(over, 100);
        assert!(result.truncated);
        assert_eq!(result.original_length, 101);
        assert_eq!(result.truncated_to, 100);
        assert_eq!(result.text.chars().count(), 100);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let text = "æøå".repeat(10); // 30 chars, 60 bytes
        let result = truncate_chars(text, 15);
        assert!(result.truncated);
        assert_eq!(result.original_length, 30);
        assert_eq!(result.text.chars().count(), 15);
    }
}
