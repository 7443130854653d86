//! Token classifier: post-match mandatory/optional/invalid checking.
//!
//! After a scan the caller knows which entries were found; the classifier
//! checks that picture against two caller-supplied token classes, each a
//! space-separated list. A token in the mandatory set must have been found;
//! a found token must belong to one of the two sets. The walk follows table
//! order and stops at the first violation.

use std::collections::HashSet;

use crate::grammar::GrammarTable;
use crate::status::ClassifyError;

/// Check every entry's found flag against the mandatory and optional sets.
///
/// `mandatory` and `optional` are space-separated token lists. Returns the
/// first violation in table order: an unfound mandatory token, or a found
/// token that belongs to neither set.
pub fn classify_tokens(
    table: &GrammarTable,
    mandatory: &str,
    optional: &str,
) -> Result<(), ClassifyError> {
    let mandatory_set: HashSet<&str> = mandatory.split_whitespace().collect();
    let optional_set: HashSet<&str> = optional.split_whitespace().collect();

    for entry in table.iter() {
        let token = entry.token.as_str();
        if !entry.found && mandatory_set.contains(token) {
            return Err(ClassifyError::MandatoryMissing {
                token: token.to_string(),
            });
        }
        if entry.found && !mandatory_set.contains(token) && !optional_set.contains(token) {
            return Err(ClassifyError::InvalidToken {
                token: token.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::GrammarEntry;

    fn table_with(found: &[(&str, bool)]) -> GrammarTable {
        let mut table = GrammarTable::new();
        for (token, was_found) in found {
            let mut entry = GrammarEntry::flag(token);
            entry.found = *was_found;
            table.push(entry);
        }
        table
    }

    #[test]
    fn test_empty_table_passes() {
        let table = GrammarTable::new();
        assert_eq!(classify_tokens(&table, "--x", ""), Ok(()));
    }

    #[test]
    fn test_unfound_mandatory_token_fails() {
        let table = table_with(&[("--x", false)]);
        assert_eq!(
            classify_tokens(&table, "--x", ""),
            Err(ClassifyError::MandatoryMissing {
                token: "--x".to_string()
            })
        );
    }

    #[test]
    fn test_found_mandatory_token_passes() {
        let table = table_with(&[("--x", true)]);
        assert_eq!(classify_tokens(&table, "--x", ""), Ok(()));
    }

    #[test]
    fn test_found_token_outside_both_sets_fails() {
        let table = table_with(&[("--x", true), ("--y", true)]);
        assert_eq!(
            classify_tokens(&table, "--x", ""),
            Err(ClassifyError::InvalidToken {
                token: "--y".to_string()
            })
        );
    }

    #[test]
    fn test_found_optional_token_passes() {
        let table = table_with(&[("--x", true), ("--y", true)]);
        assert_eq!(classify_tokens(&table, "--x", "--y"), Ok(()));
    }

    #[test]
    fn test_unfound_optional_token_passes() {
        let table = table_with(&[("--y", false)]);
        assert_eq!(classify_tokens(&table, "", "--y"), Ok(()));
    }

    #[test]
    fn test_unfound_unclassified_token_passes() {
        // Not found and in neither set: nothing to complain about.
        let table = table_with(&[("--z", false)]);
        assert_eq!(classify_tokens(&table, "--x", "--y"), Ok(()));
    }

    #[test]
    fn test_first_violation_in_table_order_wins() {
        let table = table_with(&[("--a", true), ("--b", false)]);
        // --a is invalid, --b is mandatory-missing; --a comes first.
        assert_eq!(
            classify_tokens(&table, "--b", ""),
            Err(ClassifyError::InvalidToken {
                token: "--a".to_string()
            })
        );
    }

    #[test]
    fn test_space_separated_class_lists() {
        let table = table_with(&[("--a", true), ("--b", true), ("--c", false)]);
        assert_eq!(
            classify_tokens(&table, "--a  --c", " --b "),
            Err(ClassifyError::MandatoryMissing {
                token: "--c".to_string()
            })
        );
    }
}
