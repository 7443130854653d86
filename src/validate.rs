//! Grammar validator: structural checks and output-side reset.
//!
//! Validation walks the table once, in declaration order, and stops at the
//! first violation. The walk doubles as the reset pass the engine relies
//! on: every found flag is cleared and every binding restored to its empty
//! value before any input is read, so repeated scans on the same table
//! never leak bindings from a prior call. The walk also collects the
//! alternation of all entry tokens into the [`TokenSet`] the engine uses
//! to tell values from recognized tokens.

use crate::grammar::{ArgBinding, GrammarTable};
use crate::status::GrammarError;
use crate::tokenset::{TokenSet, TokenSetBuilder};

/// Check the table for structural well-formedness, reset its output side,
/// and build the token set.
///
/// Checked per entry, in order: the token is non-empty; `min_args` does not
/// exceed `max_args`; the binding shape agrees with `max_args` (`Scalar`
/// when one value is taken, `Sequence` when more, anything when none). A
/// sequence binding is normalized to exactly `max_args` empty slots. An
/// empty table validates trivially and yields an empty token set.
pub fn validate(table: &mut GrammarTable) -> Result<TokenSet, GrammarError> {
    let mut builder = TokenSetBuilder::new();

    for (index, entry) in table.entries_mut().iter_mut().enumerate() {
        if entry.token.is_empty() {
            return Err(GrammarError::EmptyToken { entry: index });
        }
        if entry.min_args > entry.max_args {
            return Err(GrammarError::MinExceedsMax {
                entry: index,
                min: entry.min_args,
                max: entry.max_args,
            });
        }

        match (&mut entry.binding, entry.max_args) {
            (ArgBinding::None, 0) => {}
            (ArgBinding::None, _) => {
                return Err(GrammarError::MissingBinding { entry: index });
            }
            (ArgBinding::Scalar(_), max) if max > 1 => {
                return Err(GrammarError::SequenceExpected { entry: index });
            }
            (ArgBinding::Sequence(_), 1) => {
                return Err(GrammarError::ScalarExpected { entry: index });
            }
            // A binding on a zero-argument entry is tolerated and cleared.
            (ArgBinding::Scalar(value), _) => value.clear(),
            (ArgBinding::Sequence(values), max) => {
                values.clear();
                values.resize(max, String::new());
            }
        }

        entry.found = false;
        builder.add(&entry.token, index);
    }

    builder.build()
}
