//! Stopword filtering
//!
//! The default filter is a fixed list of common English function words shared
//! by both tokenizers, so switching tokenizer never changes which words count
//! as content. Full per-language lists come from the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Common English function words
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "an", "and", "any",
    "are", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "does", "doing", "during", "each", "for", "from", "further", "had",
    "has", "have", "here", "how", "into", "its", "itself", "just", "more", "most", "much",
    "only", "other", "ought", "over", "same", "should", "some", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "through", "under",
    "until", "very", "was", "were", "what", "when", "where", "which", "while", "will", "with",
    "would", "your",
];

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// The built-in English list
    pub fn english() -> Self {
        Self::from_list(ENGLISH_STOPWORDS)
    }

    /// Create a filter from the full `stop-words` list for a language
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru. Unknown codes
    /// fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Built-in list when `language` is `None`, otherwise the language list,
    /// extended with `extra` words either way
    pub fn from_config(language: Option<&str>, extra: &[String]) -> Self {
        let mut filter = match language {
            Some(lang) => Self::new(lang),
            None => Self::english(),
        };
        for word in extra {
            filter.stopwords.insert(word.to_lowercase());
        }
        filter
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.stopwords.contains(&word.to_lowercase())
        } else {
            self.stopwords.contains(word)
        }
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Sorted copy of the list for a language, or the built-in list for `None`
    pub fn built_in_list(language: Option<&str>) -> Vec<String> {
        let filter = Self::from_config(language, &[]);
        let mut words: Vec<String> = filter.stopwords.into_iter().collect();
        words.sort();
        words
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_english() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("which"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("learning"));
        assert!(filter.len() >= 60);
    }

    #[test]
    fn test_language_list() {
        let filter = StopwordFilter::new("en");
        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("network"));

        let german = StopwordFilter::new("de");
        assert!(german.is_stopword("und"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_from_config_extends() {
        let filter = StopwordFilter::from_config(None, &["Lecture".to_string()]);
        assert!(filter.is_stopword("lecture"));
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_built_in_list_sorted() {
        let words = StopwordFilter::built_in_list(None);
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(words, sorted);
        assert!(words.contains(&"because".to_string()));
    }
}
