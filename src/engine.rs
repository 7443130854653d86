//! Matching engine: the single-pass scan of input against a grammar table.
//!
//! The scan consumes the input sequence left to right. Each item must be a
//! recognized token; the first table entry declaring that token text takes
//! it, collects up to `max_args` following items as values, and is marked
//! found. Duplicates are rejected, not merged. Argument consumption is
//! greedy but bounded: a look-ahead item that itself matches the token set
//! is a stop signal once `min_args` is satisfied (the variadic early-exit),
//! and an error before that. The scan stops at the first error; no further
//! input is processed.
//!
//! Every call performs reset + validate + scan as one unit: the validator
//! clears all found flags and bindings before the first item is read, so
//! the engine owns the output side of the table for the duration of the
//! call and nothing leaks between invocations.

use serde::Serialize;

use crate::grammar::GrammarTable;
use crate::status::{MatchError, Status};
use crate::validate::validate;

/// Result of a completed scan.
///
/// Created fresh on every invocation. `tokens_matched` counts distinct
/// grammar entries matched, not input items consumed. The index fields
/// record the final scan position and are chiefly interesting on the error
/// path, where [`MatchError`] carries the same context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    /// Always [`Status::Ok`] on the success path.
    pub status: Status,
    /// Count of distinct grammar entries matched.
    pub tokens_matched: usize,
    /// Input index of the last token item processed.
    pub last_input_index: usize,
    /// Grammar index of the last entry matched.
    pub last_grammar_index: usize,
    /// Last 0-based argument slot examined.
    pub last_arg_index: usize,
}

/// Scan `input` against `table`, binding matched values into the table.
///
/// Performs reset + validate + scan as one call. On success every matched
/// entry has `found == true` and its values bound; on failure the table is
/// left as the scan got to it (flags and values bound so far stay bound)
/// and the error names the offending position.
pub fn match_tokens(
    table: &mut GrammarTable,
    input: &[String],
) -> Result<ParseOutcome, MatchError> {
    let token_set = validate(table)?;

    let mut tokens_matched = 0;
    let mut last_input_index = 0;
    let mut last_grammar_index = 0;
    let mut last_arg_index = 0;
    let mut pos = 0;

    while pos < input.len() {
        let item = input[pos].as_str();
        last_input_index = pos;

        // Membership first (the alternation), then resolution to the first
        // table entry declaring this token text.
        if !token_set.is_token(item) {
            return Err(MatchError::UnknownToken { input: pos });
        }
        let entry_index = match token_set.entry_of(item) {
            Some(index) => index,
            None => return Err(MatchError::UnknownToken { input: pos }),
        };
        last_grammar_index = entry_index;

        if table.entries()[entry_index].found {
            return Err(MatchError::TokenAlreadySet {
                input: pos,
                entry: entry_index,
            });
        }
        pos += 1;

        let min_args = table.entries()[entry_index].min_args;
        let max_args = table.entries()[entry_index].max_args;

        let mut slot = 0;
        while slot < max_args {
            last_arg_index = slot;
            match input.get(pos) {
                None => {
                    // Input exhausted: satisfied with `slot` values, or the
                    // minimum was never met.
                    if slot >= min_args {
                        break;
                    }
                    return Err(MatchError::MissingArgument {
                        input: pos,
                        entry: entry_index,
                        arg: slot,
                    });
                }
                Some(next) if token_set.is_token(next) => {
                    // A look-ahead that parses as a known token is a stop
                    // signal, never a value: it becomes the next token to
                    // process once the minimum is met, and an error before.
                    if slot >= min_args {
                        break;
                    }
                    return Err(MatchError::TokenInsteadOfValue {
                        input: pos,
                        entry: entry_index,
                        arg: slot,
                    });
                }
                Some(value) => {
                    table.entries_mut()[entry_index].write_value(slot, value);
                    pos += 1;
                    slot += 1;
                }
            }
        }

        table.entries_mut()[entry_index].found = true;
        tokens_matched += 1;
    }

    Ok(ParseOutcome {
        status: Status::Ok,
        tokens_matched,
        last_input_index,
        last_grammar_index,
        last_arg_index,
    })
}
