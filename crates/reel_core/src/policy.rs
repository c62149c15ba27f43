//! Content and interest policies injected into the onboarding validator.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;

/// Interest tags a profile may carry unless a catalog is configured otherwise.
pub const DEFAULT_INTERESTS: [&str; 15] = [
    "Music",
    "Dance",
    "Comedy",
    "Food",
    "Travel",
    "Fashion",
    "Sports",
    "Gaming",
    "Art",
    "Beauty",
    "Education",
    "Technology",
    "Fitness",
    "Lifestyle",
    "Nature",
];

const DEFAULT_BLACKLIST: [&str; 8] = [
    "fuck", "shit", "bitch", "asshole", "bastard", "cunt", "whore", "slut",
];

/// Blacklist predicate over free text.
pub trait ContentPolicy: Send + Sync {
    fn has_bad_words(&self, text: &str) -> bool;
}

/// Case-insensitive substring blacklist.
#[derive(Debug, Clone)]
pub struct WordBlacklist {
    words: Vec<String>,
}

impl WordBlacklist {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a newline-separated word list. Blank lines and `#` comments are
    /// skipped.
    pub fn parse(source: &str) -> Self {
        Self::new(
            source
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading blacklist {}", path.display()))?;
        Ok(Self::parse(&source))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordBlacklist {
    fn default() -> Self {
        Self::new(DEFAULT_BLACKLIST)
    }
}

impl ContentPolicy for WordBlacklist {
    fn has_bad_words(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.words.iter().any(|w| haystack.contains(w.as_str()))
    }
}

/// Allow-list of interest tags. Matching is exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct InterestCatalog {
    tags: Vec<String>,
}

impl InterestCatalog {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Keep the entries that are allow-listed strings, in input order.
    /// Duplicates survive; everything else is dropped without error.
    pub fn filter(&self, candidates: &[Value]) -> Vec<String> {
        candidates
            .iter()
            .filter_map(Value::as_str)
            .filter(|tag| self.contains(tag))
            .map(str::to_owned)
            .collect()
    }
}

impl Default for InterestCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_INTERESTS)
    }
}
