//! Status reporter: positional diagnostics from a status code.
//!
//! Given a status kind plus the positional context a failed call left
//! behind, produce the fragment naming the offending input item or grammar
//! entry. Callers own the static message text for each status kind; the
//! fragment only supplies the "which one" part:
//!
//! ```text
//! unknown-token     -> ` at "--nope" (input position 2)`
//! missing-argument  -> ` for token "--out" (grammar entry 1)`
//! malformed-call    -> `` (no positional referent)
//! ```

use crate::grammar::GrammarTable;
use crate::status::Status;

/// Produce the positional fragment for a status kind.
///
/// Input-positioned statuses name the input item at `last_input_index`;
/// grammar-positioned statuses name the entry token at
/// `last_grammar_index`. Statuses with no positional referent, and any
/// index that falls outside the given sequence, yield the empty fragment.
pub fn describe_status(
    status: Status,
    input: &[String],
    table: &GrammarTable,
    last_input_index: usize,
    last_grammar_index: usize,
) -> String {
    match status {
        Status::UnknownToken | Status::TokenAlreadySet | Status::TokenInsteadOfValue => {
            match input.get(last_input_index) {
                Some(item) => format!(
                    " at \"{}\" (input position {})",
                    item, last_input_index
                ),
                None => String::new(),
            }
        }
        Status::GrammarStructural
        | Status::MissingArgument
        | Status::MandatoryMissing
        | Status::InvalidToken => match table.get(last_grammar_index) {
            Some(entry) => format!(
                " for token \"{}\" (grammar entry {})",
                entry.token, last_grammar_index
            ),
            None => String::new(),
        },
        Status::Ok | Status::MalformedCall => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::GrammarEntry;

    fn input(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn table_of(tokens: &[&str]) -> GrammarTable {
        let mut table = GrammarTable::new();
        for token in tokens {
            table.push(GrammarEntry::flag(token));
        }
        table
    }

    #[test]
    fn test_unknown_token_names_input_item() {
        let fragment = describe_status(
            Status::UnknownToken,
            &input(&["--a", "--nope"]),
            &table_of(&["--a"]),
            1,
            0,
        );
        assert_eq!(fragment, " at \"--nope\" (input position 1)");
    }

    #[test]
    fn test_missing_argument_names_grammar_entry() {
        let fragment = describe_status(
            Status::MissingArgument,
            &input(&["--out"]),
            &table_of(&["--v", "--out"]),
            1,
            1,
        );
        assert_eq!(fragment, " for token \"--out\" (grammar entry 1)");
    }

    #[test]
    fn test_grammar_structural_names_grammar_entry() {
        let fragment = describe_status(
            Status::GrammarStructural,
            &[],
            &table_of(&["--x"]),
            0,
            0,
        );
        assert_eq!(fragment, " for token \"--x\" (grammar entry 0)");
    }

    #[test]
    fn test_statuses_without_referent_yield_empty_fragment() {
        let table = table_of(&["--x"]);
        let items = input(&["--x"]);
        assert_eq!(describe_status(Status::Ok, &items, &table, 0, 0), "");
        assert_eq!(
            describe_status(Status::MalformedCall, &items, &table, 0, 0),
            ""
        );
    }

    #[test]
    fn test_out_of_range_input_index_yields_empty_fragment() {
        let fragment = describe_status(
            Status::UnknownToken,
            &input(&["--x"]),
            &table_of(&["--x"]),
            9,
            0,
        );
        assert_eq!(fragment, "");
    }

    #[test]
    fn test_out_of_range_grammar_index_yields_empty_fragment() {
        let fragment = describe_status(
            Status::MandatoryMissing,
            &[],
            &table_of(&["--x"]),
            0,
            7,
        );
        assert_eq!(fragment, "");
    }

    #[test]
    fn test_token_already_set_positions_on_input() {
        let fragment = describe_status(
            Status::TokenAlreadySet,
            &input(&["--x", "--x"]),
            &table_of(&["--x"]),
            1,
            0,
        );
        assert_eq!(fragment, " at \"--x\" (input position 1)");
    }
}
