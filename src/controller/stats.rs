//! Live text statistics shown under the editor

/// Character and word counts of a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            chars: char_count(text),
            words: word_count(text),
        }
    }
}

/// Number of characters (Unicode scalar values)
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of whitespace-delimited words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("a  b   c"), 3);
        assert_eq!(word_count("\tone\ntwo\r\n three "), 3);
    }

    #[test]
    fn test_char_count() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("a b\n"), 4);
        assert_eq!(char_count("héllo"), 5);
    }
}
