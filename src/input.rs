use crate::error::{Result, SentimentError};

/// Character count above which the client surfaces a soft length warning
///
/// The endpoint enforces no limit; this only drives presentation.
pub const SOFT_CHAR_LIMIT: usize = 280;

/// A tweet accepted for submission
///
/// Holds the text exactly as typed: trimming is applied only to decide
/// emptiness, and the submitted body is never altered. Exposes the metadata
/// the presentation layer needs for its character counter and length warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetInput {
    text: String,
}

impl TweetInput {
    /// Validate raw user text, rejecting input that is empty after trimming
    pub fn parse<S: Into<String>>(raw: S) -> Result<Self> {
        let text = raw.into();
        if text.trim().is_empty() {
            return Err(SentimentError::EmptyInput);
        }
        Ok(Self { text })
    }

    /// The text as submitted
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters, as shown by the live counter
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the soft length warning applies
    pub fn exceeds_soft_limit(&self) -> bool {
        self.char_count() > SOFT_CHAR_LIMIT
    }
}

impl AsRef<str> for TweetInput {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(
            TweetInput::parse(""),
            Err(SentimentError::EmptyInput)
        ));
    }

    #[test]
    fn test_rejects_whitespace_only_input() {
        assert!(matches!(
            TweetInput::parse("   "),
            Err(SentimentError::EmptyInput)
        ));
        assert!(matches!(
            TweetInput::parse(" \t\n "),
            Err(SentimentError::EmptyInput)
        ));
    }

    #[test]
    fn test_keeps_text_untrimmed() {
        let input = TweetInput::parse("  hello  ").unwrap();
        assert_eq!(input.text(), "  hello  ");
    }

    #[test]
    fn test_char_count_counts_characters_not_bytes() {
        let input = TweetInput::parse("héllo").unwrap();
        assert_eq!(input.char_count(), 5);
    }

    #[test]
    fn test_soft_limit_boundary() {
        let at_limit = TweetInput::parse("x".repeat(SOFT_CHAR_LIMIT)).unwrap();
        assert!(!at_limit.exceeds_soft_limit());

        let over_limit = TweetInput::parse("x".repeat(SOFT_CHAR_LIMIT + 1)).unwrap();
        assert!(over_limit.exceeds_soft_limit());
    }
}
