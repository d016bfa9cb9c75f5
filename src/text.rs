//! Text analysis - counts words, characters and sentences.

use serde::Serialize;

/// Characters that terminate a sentence.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Punctuation stripped from token ends before measuring word length.
const WORD_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Statistics record for a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStats {
    pub word_count: usize,
    pub char_count_excluding_spaces: usize,
    pub sentence_count: usize,
    pub avg_word_length: f64,
}

/// Analyzes a piece of text and returns its statistics.
///
/// Words are whitespace-delimited tokens. The character count excludes
/// only the literal space character: tabs and newlines are kept, an
/// inherited quirk preserved on purpose. A text with no terminal
/// punctuation counts as exactly one sentence. Average word length is
/// measured after stripping leading and trailing punctuation from each
/// token and is rounded to 2 decimal places.
///
/// Total over all string input; the empty string degrades to zero
/// counts and a sentence count of one.
pub fn analyze_text(text: &str) -> TextStats {
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();

    let char_count_excluding_spaces = text.chars().filter(|c| *c != ' ').count();

    let sentence_count = text
        .chars()
        .filter(|c| SENTENCE_TERMINATORS.contains(c))
        .count()
        .max(1);

    let avg_word_length = if word_count > 0 {
        let total_word_length: usize = words
            .iter()
            .map(|w| w.trim_matches(&WORD_PUNCTUATION[..]).chars().count())
            .sum();
        round_to_2(total_word_length as f64 / word_count as f64)
    } else {
        0.0
    };

    TextStats {
        word_count,
        char_count_excluding_spaces,
        sentence_count,
        avg_word_length,
    }
}

fn round_to_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_empty_text() {
        let stats = analyze_text("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.char_count_excluding_spaces, 0);
        assert_eq!(stats.sentence_count, 1);
        assert_eq!(stats.avg_word_length, 0.0);
    }

    #[test]
    fn test_analyze_sample_text() {
        let stats = analyze_text("Hello world! This is Python. Functions are great?");
        assert_eq!(stats.word_count, 8);
        assert_eq!(stats.char_count_excluding_spaces, 42);
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.avg_word_length, 4.88);
    }

    #[test]
    fn test_analyze_no_terminal_punctuation_is_one_sentence() {
        let stats = analyze_text("no punctuation here");
        assert_eq!(stats.sentence_count, 1);
        assert_eq!(stats.word_count, 3);
    }

    #[test]
    fn test_analyze_strips_only_literal_spaces() {
        // Tabs and newlines stay in the character count
        let stats = analyze_text("a\tb\nc d");
        assert_eq!(stats.char_count_excluding_spaces, 6);
        assert_eq!(stats.word_count, 4);
    }

    #[test]
    fn test_analyze_word_length_strips_edge_punctuation() {
        // "Hi," and "there!" measure as 2 and 5
        let stats = analyze_text("Hi, there!");
        assert_eq!(stats.avg_word_length, 3.5);
    }

    #[test]
    fn test_analyze_punctuation_only_tokens() {
        // Tokens that strip down to nothing still count as words
        let stats = analyze_text("... !!!");
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.avg_word_length, 0.0);
        assert_eq!(stats.sentence_count, 6);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let text = "Same input. Same output!";
        assert_eq!(analyze_text(text), analyze_text(text));
    }

    #[test]
    fn test_text_stats_serializes() {
        let stats = analyze_text("Hello world.");
        let json = serde_json::to_value(&stats).expect("serializable");
        assert_eq!(json["word_count"], 2);
        assert_eq!(json["sentence_count"], 1);
    }
}
