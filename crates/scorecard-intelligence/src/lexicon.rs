// ABOUTME: Phrase lexicon matching by plain substring containment
// ABOUTME: Counts how many distinct lexicon entries occur in lowercased message text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Lowercased view of a message used for all phrase matching
#[derive(Debug, Clone)]
pub struct NormalizedText {
    lowered: String,
}

impl NormalizedText {
    /// Lowercase `text` once for repeated matching
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            lowered: text.to_lowercase(),
        }
    }

    /// The lowercased text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.lowered
    }

    /// Number of lexicon entries contained in the text, each counted once
    #[must_use]
    pub fn count_matches(&self, lexicon: &[&str]) -> u32 {
        let hits = lexicon
            .iter()
            .filter(|phrase| self.lowered.contains(*phrase))
            .count();
        u32::try_from(hits).unwrap_or(u32::MAX)
    }

    /// Whether any lexicon entry is contained in the text
    #[must_use]
    pub fn contains_any(&self, lexicon: &[&str]) -> bool {
        lexicon.iter().any(|phrase| self.lowered.contains(phrase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_is_case_insensitive() {
        let text = NormalizedText::new("I THINK it is Probably fine");
        assert_eq!(text.count_matches(&["i think", "probably", "maybe"]), 2);
    }

    #[test]
    fn test_each_entry_counts_once() {
        let text = NormalizedText::new("sorry, sorry, so sorry");
        assert_eq!(text.count_matches(&["sorry"]), 1);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // "done" inside "abandoned" still counts; matching is not word-aware
        let text = NormalizedText::new("The cart was abandoned");
        assert!(text.contains_any(&["done"]));
        assert!(!text.contains_any(&["resolved", "fixed"]));
    }
}
