//! # tokmatch
//!
//! A declarative token-matching engine for flag-style argument sequences.
//!
//! A grammar table describes which tokens are legal, how many trailing
//! values each may take, and where matched values are written. The engine
//! validates the table, scans the input once, and binds matched values to
//! the entries' output locations:
//!
//! ```text
//! grammar:  --verbose (0 values)   --out (1 value)   --in (1..=3 values)
//! input:    --in a b --out result.txt --verbose
//! result:   --in  found, ["a", "b", ""]
//!           --out found, "result.txt"
//!           --verbose found
//! ```
//!
//! Post-match passes classify tokens against mandatory/optional sets,
//! sanitize whitespace-only values, and render positional diagnostics.
//! Everything runs synchronously to completion or to the first error.

pub mod classify;
pub mod engine;
pub mod formats;
pub mod grammar;
pub mod report;
pub mod sanitize;
pub mod status;
pub mod tokenset;
pub mod validate;

pub use classify::classify_tokens;
pub use engine::{match_tokens, ParseOutcome};
pub use formats::{bound_entries, to_json, to_yaml, BoundEntry, FormatError};
pub use grammar::{ArgBinding, GrammarEntry, GrammarTable};
pub use report::describe_status;
pub use sanitize::sanitize_whitespace_values;
pub use status::{ClassifyError, GrammarError, MatchError, Status};
pub use tokenset::TokenSet;
pub use validate::validate;
