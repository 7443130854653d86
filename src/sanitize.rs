//! Value sanitizer: clears whitespace-only bound values.
//!
//! A value consisting entirely of whitespace almost always means the caller
//! quoted an empty-ish argument; downstream code reading the binding wants
//! `""`, not `"   "`. The pass rewrites exactly those values and touches
//! nothing else. It always succeeds.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::grammar::GrammarTable;

/// Lazy-compiled pattern for non-empty, whitespace-only values.
static WHITESPACE_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s+$").expect("whitespace pattern is valid")
});

/// Replace every non-empty whitespace-only bound value with the empty
/// string, across all entries that take values.
pub fn sanitize_whitespace_values(table: &mut GrammarTable) {
    for entry in table.entries_mut() {
        if entry.max_args == 0 {
            continue;
        }
        for value in entry.binding.values_mut() {
            if WHITESPACE_ONLY.is_match(value) {
                value.clear();
            }
        }
    }
}
