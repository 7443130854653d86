//! Status codes and error types for the closed failure set.
//!
//! Every failure anywhere in the engine maps onto one of the status kinds
//! below; no other error shape crosses a component boundary. Each error
//! enum carries the positional context (input index, grammar index,
//! argument slot) needed by the status reporter.

use std::fmt;

use serde::Serialize;

/// The closed set of outcome kinds, with stable numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// Scan completed without error.
    Ok,
    /// An operation was invoked with a missing required output location.
    /// Unreachable through the typed API; retained for code stability.
    MalformedCall,
    /// The grammar table itself is malformed.
    GrammarStructural,
    /// An input item matched no grammar entry's token.
    UnknownToken,
    /// An input token matched an entry already marked found.
    TokenAlreadySet,
    /// Fewer than `min_args` values were available before input ran out.
    MissingArgument,
    /// A recognized token appeared before `min_args` values were supplied.
    TokenInsteadOfValue,
    /// A mandatory token was never matched.
    MandatoryMissing,
    /// A matched token belongs to neither the mandatory nor optional set.
    InvalidToken,
}

impl Status {
    /// Stable numeric code for this status kind.
    pub fn code(&self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::MalformedCall => 1,
            Status::GrammarStructural => 2,
            Status::UnknownToken => 3,
            Status::TokenAlreadySet => 4,
            Status::MissingArgument => 5,
            Status::TokenInsteadOfValue => 6,
            Status::MandatoryMissing => 7,
            Status::InvalidToken => 8,
        }
    }

    /// Short kebab-case name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::MalformedCall => "malformed-call",
            Status::GrammarStructural => "grammar-structural",
            Status::UnknownToken => "unknown-token",
            Status::TokenAlreadySet => "token-already-set",
            Status::MissingArgument => "missing-argument",
            Status::TokenInsteadOfValue => "token-instead-of-value",
            Status::MandatoryMissing => "mandatory-missing",
            Status::InvalidToken => "invalid-token",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Structural violations found while validating a grammar table.
///
/// The validator stops at the first violation; `entry` is the table index
/// of the offending grammar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// Entry has an empty token string.
    EmptyToken { entry: usize },
    /// Entry declares `min_args > max_args`.
    MinExceedsMax { entry: usize, min: usize, max: usize },
    /// Entry takes values but binds no output location.
    MissingBinding { entry: usize },
    /// Entry takes exactly one value but binds a sequence.
    ScalarExpected { entry: usize },
    /// Entry takes several values but binds a scalar.
    SequenceExpected { entry: usize },
    /// The token alternation failed to compile.
    Pattern(String),
}

impl GrammarError {
    /// Table index of the offending entry, when one exists.
    pub fn entry(&self) -> Option<usize> {
        match self {
            GrammarError::EmptyToken { entry }
            | GrammarError::MinExceedsMax { entry, .. }
            | GrammarError::MissingBinding { entry }
            | GrammarError::ScalarExpected { entry }
            | GrammarError::SequenceExpected { entry } => Some(*entry),
            GrammarError::Pattern(_) => None,
        }
    }

    pub fn status(&self) -> Status {
        Status::GrammarStructural
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::EmptyToken { entry } => {
                write!(f, "grammar entry {} has an empty token", entry)
            }
            GrammarError::MinExceedsMax { entry, min, max } => write!(
                f,
                "grammar entry {} declares min_args {} > max_args {}",
                entry, min, max
            ),
            GrammarError::MissingBinding { entry } => write!(
                f,
                "grammar entry {} takes values but has no argument binding",
                entry
            ),
            GrammarError::ScalarExpected { entry } => write!(
                f,
                "grammar entry {} takes one value but binds a sequence",
                entry
            ),
            GrammarError::SequenceExpected { entry } => write!(
                f,
                "grammar entry {} takes several values but binds a scalar",
                entry
            ),
            GrammarError::Pattern(msg) => {
                write!(f, "token alternation failed to compile: {}", msg)
            }
        }
    }
}

impl std::error::Error for GrammarError {}

/// Failures raised by the matching engine during a scan.
///
/// `input` is the index of the offending input item (or the first index
/// past the end for exhaustion), `entry` the grammar index of the entry
/// being matched, `arg` the 0-based argument slot being filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The table failed validation before any input was read.
    Grammar(GrammarError),
    /// Input item matches no entry's token.
    UnknownToken { input: usize },
    /// Input token matches an entry already marked found.
    TokenAlreadySet { input: usize, entry: usize },
    /// Input ran out before `min_args` values were collected.
    MissingArgument { input: usize, entry: usize, arg: usize },
    /// A recognized token appeared where a value was still required.
    TokenInsteadOfValue { input: usize, entry: usize, arg: usize },
}

impl MatchError {
    /// Status kind for this failure.
    pub fn status(&self) -> Status {
        match self {
            MatchError::Grammar(_) => Status::GrammarStructural,
            MatchError::UnknownToken { .. } => Status::UnknownToken,
            MatchError::TokenAlreadySet { .. } => Status::TokenAlreadySet,
            MatchError::MissingArgument { .. } => Status::MissingArgument,
            MatchError::TokenInsteadOfValue { .. } => Status::TokenInsteadOfValue,
        }
    }

    /// Input index the failure is positioned at (0 when no input was read).
    pub fn last_input_index(&self) -> usize {
        match self {
            MatchError::Grammar(_) => 0,
            MatchError::UnknownToken { input }
            | MatchError::TokenAlreadySet { input, .. }
            | MatchError::MissingArgument { input, .. }
            | MatchError::TokenInsteadOfValue { input, .. } => *input,
        }
    }

    /// Grammar index the failure is positioned at (0 when none applies).
    pub fn last_grammar_index(&self) -> usize {
        match self {
            MatchError::Grammar(inner) => inner.entry().unwrap_or(0),
            MatchError::UnknownToken { .. } => 0,
            MatchError::TokenAlreadySet { entry, .. }
            | MatchError::MissingArgument { entry, .. }
            | MatchError::TokenInsteadOfValue { entry, .. } => *entry,
        }
    }

    /// Argument slot the failure is positioned at (0 when none applies).
    pub fn last_arg_index(&self) -> usize {
        match self {
            MatchError::MissingArgument { arg, .. }
            | MatchError::TokenInsteadOfValue { arg, .. } => *arg,
            _ => 0,
        }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Grammar(inner) => write!(f, "grammar validation failed: {}", inner),
            MatchError::UnknownToken { input } => {
                write!(f, "unknown token at input position {}", input)
            }
            MatchError::TokenAlreadySet { input, .. } => {
                write!(f, "token at input position {} was already matched", input)
            }
            MatchError::MissingArgument { input, arg, .. } => write!(
                f,
                "input ended at position {} before required argument {} was supplied",
                input, arg
            ),
            MatchError::TokenInsteadOfValue { input, arg, .. } => write!(
                f,
                "recognized token at input position {} where required argument {} was expected",
                input, arg
            ),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Grammar(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<GrammarError> for MatchError {
    fn from(inner: GrammarError) -> Self {
        MatchError::Grammar(inner)
    }
}

/// Violations found by the token classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// A mandatory token was never matched.
    MandatoryMissing { token: String },
    /// A matched token is in neither the mandatory nor the optional set.
    InvalidToken { token: String },
}

impl ClassifyError {
    pub fn status(&self) -> Status {
        match self {
            ClassifyError::MandatoryMissing { .. } => Status::MandatoryMissing,
            ClassifyError::InvalidToken { .. } => Status::InvalidToken,
        }
    }

    /// The token text the violation names.
    pub fn token(&self) -> &str {
        match self {
            ClassifyError::MandatoryMissing { token } | ClassifyError::InvalidToken { token } => {
                token
            }
        }
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::MandatoryMissing { token } => {
                write!(f, "mandatory token '{}' was not supplied", token)
            }
            ClassifyError::InvalidToken { token } => {
                write!(f, "token '{}' is not valid here", token)
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_stable() {
        assert_eq!(Status::Ok.code(), 0);
        assert_eq!(Status::MalformedCall.code(), 1);
        assert_eq!(Status::GrammarStructural.code(), 2);
        assert_eq!(Status::UnknownToken.code(), 3);
        assert_eq!(Status::TokenAlreadySet.code(), 4);
        assert_eq!(Status::MissingArgument.code(), 5);
        assert_eq!(Status::TokenInsteadOfValue.code(), 6);
        assert_eq!(Status::MandatoryMissing.code(), 7);
        assert_eq!(Status::InvalidToken.code(), 8);
    }

    #[test]
    fn test_status_display_uses_kebab_name() {
        assert_eq!(Status::TokenAlreadySet.to_string(), "token-already-set");
    }

    #[test]
    fn test_grammar_error_reports_entry_index() {
        let err = GrammarError::MinExceedsMax {
            entry: 2,
            min: 3,
            max: 1,
        };
        assert_eq!(err.entry(), Some(2));
        assert_eq!(err.status(), Status::GrammarStructural);
    }

    #[test]
    fn test_match_error_positions() {
        let err = MatchError::TokenInsteadOfValue {
            input: 4,
            entry: 1,
            arg: 0,
        };
        assert_eq!(err.status(), Status::TokenInsteadOfValue);
        assert_eq!(err.last_input_index(), 4);
        assert_eq!(err.last_grammar_index(), 1);
        assert_eq!(err.last_arg_index(), 0);
    }

    #[test]
    fn test_match_error_wraps_grammar_error() {
        let err = MatchError::from(GrammarError::EmptyToken { entry: 3 });
        assert_eq!(err.status(), Status::GrammarStructural);
        assert_eq!(err.last_grammar_index(), 3);
    }

    #[test]
    fn test_classify_error_names_token() {
        let err = ClassifyError::MandatoryMissing {
            token: "--x".to_string(),
        };
        assert_eq!(err.token(), "--x");
        assert_eq!(err.status(), Status::MandatoryMissing);
    }
}
