//! Grammar model: entries, output bindings, and the ordered grammar table.
//!
//! A grammar is data, not code: each entry names one recognized token, the
//! number of trailing values it accepts (`min_args..=max_args`), and the
//! output location those values are written to. The table preserves
//! declaration order; when two entries declare the same token text, the
//! first one in table order wins during a scan.
//!
//! Output bindings are explicit owned locations inside the entry, resolved
//! once when the table is built. The matching engine owns the full reset of
//! the output side (found flags and bound values) on every call.

/// Output location for an entry's matched argument values.
///
/// The shape must agree with the entry's `max_args`: `None` when no values
/// are taken, `Scalar` for exactly one, `Sequence` for more. The validator
/// enforces the shape and normalizes a sequence to `max_args` slots so every
/// position `0 <= a < max_args` is addressable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgBinding {
    /// No values are collected (`max_args == 0`).
    None,
    /// A single value slot (`max_args == 1`).
    Scalar(String),
    /// One slot per argument position (`max_args > 1`).
    Sequence(Vec<String>),
}

impl ArgBinding {
    /// View the bound values as a slice (empty for `None`).
    pub fn values(&self) -> &[String] {
        match self {
            ArgBinding::None => &[],
            ArgBinding::Scalar(value) => std::slice::from_ref(value),
            ArgBinding::Sequence(values) => values,
        }
    }

    /// Mutable view of the bound values (empty for `None`).
    pub fn values_mut(&mut self) -> &mut [String] {
        match self {
            ArgBinding::None => &mut [],
            ArgBinding::Scalar(value) => std::slice::from_mut(value),
            ArgBinding::Sequence(values) => values,
        }
    }
}

/// One row of the grammar table: a token plus its cardinality and outputs.
///
/// Fields are public so callers can assemble tables by hand; a hand-built
/// entry may be malformed, which is exactly what [`validate`] exists to
/// catch before any input is read.
///
/// [`validate`]: crate::validate::validate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarEntry {
    /// The literal token text this entry recognizes. Must be non-empty.
    pub token: String,
    /// Minimum number of trailing values required once the token matches.
    pub min_args: usize,
    /// Maximum number of trailing values consumed. Must be `>= min_args`.
    pub max_args: usize,
    /// Where matched values are written.
    pub binding: ArgBinding,
    /// Set true the moment the token is matched during a scan.
    pub found: bool,
}

impl GrammarEntry {
    /// An entry that takes no values (a bare flag).
    pub fn flag(token: &str) -> Self {
        GrammarEntry {
            token: token.to_string(),
            min_args: 0,
            max_args: 0,
            binding: ArgBinding::None,
            found: false,
        }
    }

    /// An entry that takes at most one value, bound to a scalar slot.
    ///
    /// `min_args` of 0 makes the value optional, 1 makes it required.
    pub fn scalar(token: &str, min_args: usize) -> Self {
        GrammarEntry {
            token: token.to_string(),
            min_args,
            max_args: 1,
            binding: ArgBinding::Scalar(String::new()),
            found: false,
        }
    }

    /// An entry that takes up to `max_args` values, bound by position.
    pub fn sequence(token: &str, min_args: usize, max_args: usize) -> Self {
        GrammarEntry {
            token: token.to_string(),
            min_args,
            max_args,
            binding: ArgBinding::Sequence(vec![String::new(); max_args]),
            found: false,
        }
    }

    /// Write a matched value into slot `slot` of the binding.
    ///
    /// The validator guarantees the binding shape and slot range before the
    /// engine ever calls this; an out-of-shape write is a no-op.
    pub(crate) fn write_value(&mut self, slot: usize, value: &str) {
        match &mut self.binding {
            ArgBinding::None => {}
            ArgBinding::Scalar(target) => {
                target.clear();
                target.push_str(value);
            }
            ArgBinding::Sequence(targets) => {
                if let Some(target) = targets.get_mut(slot) {
                    target.clear();
                    target.push_str(value);
                }
            }
        }
    }

    /// The bound scalar value, if this entry binds a scalar.
    pub fn scalar_value(&self) -> Option<&str> {
        match &self.binding {
            ArgBinding::Scalar(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Ordered sequence of grammar entries.
///
/// Order determines first-match-wins semantics and is preserved in all
/// diagnostics (grammar indices reported by errors index into this table).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrammarTable {
    entries: Vec<GrammarEntry>,
}

impl GrammarTable {
    /// Create an empty table.
    pub fn new() -> Self {
        GrammarTable {
            entries: Vec::new(),
        }
    }

    /// Append an entry, preserving declaration order.
    pub fn push(&mut self, entry: GrammarEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a given table index.
    pub fn get(&self, index: usize) -> Option<&GrammarEntry> {
        self.entries.get(index)
    }

    /// Mutable entry at a given table index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut GrammarEntry> {
        self.entries.get_mut(index)
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[GrammarEntry] {
        &self.entries
    }

    /// All entries in declaration order, mutably.
    pub fn entries_mut(&mut self) -> &mut [GrammarEntry] {
        &mut self.entries
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, GrammarEntry> {
        self.entries.iter()
    }
}

impl From<Vec<GrammarEntry>> for GrammarTable {
    fn from(entries: Vec<GrammarEntry>) -> Self {
        GrammarTable { entries }
    }
}
