//! Token-set membership built from the grammar's token alternation.
//!
//! The validator collects every entry token into one matchable set: a
//! compiled regex alternation of the escaped literals (`^(?:a|b|c)$`) used
//! as the membership test, plus a map from token text to the first table
//! index declaring it. The regex face is what the matching engine uses to
//! tell "value" from "recognized token" while consuming arguments; the map
//! face resolves a matched item to its grammar entry.
//!
//! Exact-match set membership is the required semantic; the alternation is
//! anchored on both ends so no substring or prefix matching can occur.

use std::collections::HashMap;

use regex::Regex;

use crate::status::GrammarError;

/// The alternation of all grammar tokens, queryable two ways.
#[derive(Debug, Clone)]
pub struct TokenSet {
    /// `None` when the grammar has no entries; membership is then false.
    pattern: Option<Regex>,
    /// Token text to the first grammar index declaring it.
    indices: HashMap<String, usize>,
}

impl TokenSet {
    /// Whether an input item is a recognized token.
    pub fn is_token(&self, item: &str) -> bool {
        match &self.pattern {
            Some(regex) => regex.is_match(item),
            None => false,
        }
    }

    /// Grammar index of the first entry declaring this token text.
    pub fn entry_of(&self, item: &str) -> Option<usize> {
        self.indices.get(item).copied()
    }

    /// Number of distinct token literals in the set.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the set holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The compiled alternation pattern, when one exists.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(|regex| regex.as_str())
    }
}

impl PartialEq for TokenSet {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern() && self.indices == other.indices
    }
}

/// Accumulates tokens in table order and compiles the final alternation.
#[derive(Debug, Default)]
pub(crate) struct TokenSetBuilder {
    literals: Vec<String>,
    indices: HashMap<String, usize>,
}

impl TokenSetBuilder {
    pub(crate) fn new() -> Self {
        TokenSetBuilder::default()
    }

    /// Add one entry's token. The first table index declaring a given token
    /// text wins; later duplicates keep their alternation branch but never
    /// resolve.
    pub(crate) fn add(&mut self, token: &str, entry: usize) {
        if !self.indices.contains_key(token) {
            self.indices.insert(token.to_string(), entry);
        }
        self.literals.push(regex::escape(token));
    }

    pub(crate) fn build(self) -> Result<TokenSet, GrammarError> {
        if self.literals.is_empty() {
            return Ok(TokenSet {
                pattern: None,
                indices: self.indices,
            });
        }
        let alternation = format!("^(?:{})$", self.literals.join("|"));
        let pattern =
            Regex::new(&alternation).map_err(|e| GrammarError::Pattern(e.to_string()))?;
        Ok(TokenSet {
            pattern: Some(pattern),
            indices: self.indices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(tokens: &[&str]) -> TokenSet {
        let mut builder = TokenSetBuilder::new();
        for (i, token) in tokens.iter().enumerate() {
            builder.add(token, i);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_membership_exact_match_only() {
        let set = set_of(&["--alpha", "--beta"]);
        assert!(set.is_token("--alpha"));
        assert!(set.is_token("--beta"));
        assert!(!set.is_token("--alph"));
        assert!(!set.is_token("--alphaa"));
        assert!(!set.is_token("alpha"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let set = set_of(&[]);
        assert!(set.is_empty());
        assert!(!set.is_token("--anything"));
        assert!(!set.is_token(""));
        assert_eq!(set.pattern(), None);
    }

    #[test]
    fn test_entry_resolution_in_table_order() {
        let set = set_of(&["--a", "--b"]);
        assert_eq!(set.entry_of("--a"), Some(0));
        assert_eq!(set.entry_of("--b"), Some(1));
        assert_eq!(set.entry_of("--c"), None);
    }

    #[test]
    fn test_duplicate_token_first_declaration_wins() {
        let mut builder = TokenSetBuilder::new();
        builder.add("--x", 0);
        builder.add("--x", 3);
        let set = builder.build().unwrap();
        assert_eq!(set.entry_of("--x"), Some(0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_regex_metacharacters_in_tokens_are_literal() {
        let set = set_of(&["-x|.*", "(y)"]);
        assert!(set.is_token("-x|.*"));
        assert!(set.is_token("(y)"));
        assert!(!set.is_token("-x"));
        assert!(!set.is_token("y"));
        assert!(!set.is_token("-xz"));
    }

    #[test]
    fn test_alternation_is_anchored() {
        let set = set_of(&["--x"]);
        assert_eq!(set.pattern(), Some("^(?:\\-\\-x)$"));
    }
}
