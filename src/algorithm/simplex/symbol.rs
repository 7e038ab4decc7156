//! # Internal tableau symbols
//!
//! The solver rewrites user variables and bookkeeping unknowns into
//! [`Symbol`]s, small copyable tokens compared by id. External symbols back
//! user variables one-to-one; slack, error and dummy symbols are manufactured
//! while installing constraints and never surface to the user.
use crate::data::indexed_map::Identified;

/// The role a symbol plays in the tableau.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SymbolKind {
    /// The sentinel kind of [`Symbol::invalid`].
    Invalid,
    /// Backs a user variable.
    External,
    /// Turns an inequality into an equation.
    Slack,
    /// Measures the violation of a non-required constraint.
    Error,
    /// Marks a required equality that adds no new degree of freedom.
    Dummy,
}

/// An internal unknown, compared by id.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Symbol {
    id: usize,
    kind: SymbolKind,
}

impl Symbol {
    /// Create a symbol. Ids are allocated by the owning solver, starting at
    /// 1; they are never reused within a solver.
    pub fn new(id: usize, kind: SymbolKind) -> Self {
        debug_assert!(id > 0);
        debug_assert_ne!(kind, SymbolKind::Invalid);

        Self { id, kind }
    }

    /// The distinguished sentinel symbol.
    pub fn invalid() -> Self {
        Self { id: 0, kind: SymbolKind::Invalid }
    }

    /// The role of this symbol.
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Whether this is the sentinel symbol.
    pub fn is_invalid(&self) -> bool {
        self.kind == SymbolKind::Invalid
    }

    /// Whether this symbol may be pivoted into the basis: slack and error
    /// symbols may, external and dummy symbols may not.
    pub fn is_pivotable(&self) -> bool {
        matches!(self.kind, SymbolKind::Slack | SymbolKind::Error)
    }
}

impl Identified for Symbol {
    fn id(&self) -> usize {
        self.id
    }
}
