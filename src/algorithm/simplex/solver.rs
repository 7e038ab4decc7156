//! # The incremental solver
//!
//! The [`Solver`] owns the tableau: one defining [`Row`] per basic symbol,
//! the objective row, and the bookkeeping that ties user-facing constraints
//! to the symbols manufactured for them. Constraints are installed and
//! retired with bounded pivot work; after every successful public call the
//! tableau is primal-feasible and the objective is at a minimum.
use tracing::{debug, trace};

use crate::algorithm::simplex::near_zero;
use crate::algorithm::simplex::row::Row;
use crate::algorithm::simplex::symbol::{Symbol, SymbolKind};
use crate::algorithm::SolverError;
use crate::data::constraint_system::constraint::{Constraint, RelationalOperator};
use crate::data::constraint_system::expression::Expression;
use crate::data::constraint_system::strength;
use crate::data::constraint_system::variable::Variable;
use crate::data::indexed_map::IndexedMap;

/// Default ceiling on pivots per optimization pass.
const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// The two symbols recorded for an installed constraint.
///
/// The marker locates the constraint's row when it is removed; the other
/// symbol is the second error symbol for non-required equalities and the
/// invalid sentinel everywhere it does not apply. Both are needed to reverse
/// the constraint's error contribution to the objective.
#[derive(Copy, Clone, Debug)]
struct Tag {
    marker: Symbol,
    other: Symbol,
}

/// Bookkeeping for a registered edit variable.
#[derive(Debug)]
struct EditInfo {
    tag: Tag,
    constraint: Constraint,
    constant: f64,
}

/// Which row an optimization pass minimizes.
#[derive(Copy, Clone, Debug)]
enum Target {
    /// The real objective.
    Objective,
    /// The temporary copy used while installing a row through the
    /// artificial-variable phase.
    Artificial,
}

/// An incremental solver for systems of weighted linear constraints.
///
/// Required constraints hold exactly in every solution; non-required
/// constraints are satisfied as well as their strengths allow, stronger
/// levels taking strict precedence over weaker ones. Solutions are
/// maintained incrementally: adding, removing or editing a constraint
/// re-optimizes the existing tableau instead of resolving from scratch.
///
/// Computed values are published to the [`Variable`]s by
/// [`update_variables`](Self::update_variables); nothing is written to them
/// by the other operations.
#[derive(Debug)]
pub struct Solver {
    constraints: IndexedMap<Constraint, Tag>,
    vars: IndexedMap<Variable, Symbol>,
    edits: IndexedMap<Variable, EditInfo>,
    rows: IndexedMap<Symbol, Row>,
    objective: Row,
    artificial: Option<Row>,
    infeasible_rows: Vec<Symbol>,
    symbol_tick: usize,
    max_iterations: usize,
}

impl Solver {
    /// Create an empty solver.
    pub fn new() -> Self {
        Self {
            constraints: IndexedMap::new(),
            vars: IndexedMap::new(),
            edits: IndexedMap::new(),
            rows: IndexedMap::new(),
            objective: Row::new(0f64),
            artificial: None,
            infeasible_rows: Vec::new(),
            symbol_tick: 1,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// The ceiling on pivots per optimization pass.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Change the ceiling on pivots per optimization pass.
    ///
    /// The ceiling is a safety valve against cycling on pathological inputs;
    /// exceeding it fails the operation with
    /// [`SolverError::IterationLimitExceeded`].
    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.max_iterations = max_iterations;
    }

    /// Add a constraint to the system and re-optimize.
    ///
    /// # Errors
    ///
    /// [`SolverError::DuplicateConstraint`] if the constraint is already
    /// present, [`SolverError::UnsatisfiableConstraint`] if no assignment
    /// satisfies it together with the constraints already installed.
    pub fn add_constraint(&mut self, constraint: &Constraint) -> Result<(), SolverError> {
        if self.constraints.contains(constraint) {
            return Err(SolverError::DuplicateConstraint(constraint.clone()));
        }

        // Creating a row interns symbols for any variables the constraint
        // mentions for the first time. Those symbols may linger in the
        // variable map if the add fails below; symbol ids are unique, so
        // this is a bounded space cost, not a correctness issue.
        let (mut row, tag) = self.create_row(constraint);

        let mut subject = Self::choose_subject(&row, &tag);
        if subject.is_invalid() && row.all_dummies() {
            if !near_zero(row.constant()) {
                return Err(SolverError::UnsatisfiableConstraint(constraint.clone()));
            }
            // The constraint is redundant; its dummy marker can carry the
            // zero row.
            subject = tag.marker;
        }

        if subject.is_invalid() {
            if !self.add_with_artificial_variable(&row)? {
                return Err(SolverError::UnsatisfiableConstraint(constraint.clone()));
            }
        } else {
            row.solve_for(subject);
            self.substitute(subject, &row);
            self.rows.insert(subject, row);
        }

        self.constraints.insert(constraint.clone(), tag);
        self.optimize(Target::Objective)?;
        debug!(constraint = %constraint, "added constraint");
        Ok(())
    }

    /// Add each constraint in turn, stopping at the first failure.
    pub fn add_constraints(
        &mut self,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Result<(), SolverError> {
        for constraint in constraints {
            self.add_constraint(&constraint)?;
        }
        Ok(())
    }

    /// Remove a previously added constraint and re-optimize.
    ///
    /// # Errors
    ///
    /// [`SolverError::UnknownConstraint`] if the constraint is not present.
    pub fn remove_constraint(&mut self, constraint: &Constraint) -> Result<(), SolverError> {
        let tag = self
            .constraints
            .remove(constraint)
            .ok_or_else(|| SolverError::UnknownConstraint(constraint.clone()))?;

        // The error contribution must leave the objective before any
        // pivoting, otherwise the substitutions below fold the error terms
        // into unrelated rows.
        self.remove_constraint_effects(constraint, &tag);

        if self.rows.remove(&tag.marker).is_none() {
            // The marker is not basic: pivot it into the basis, which
            // eliminates it from the rest of the tableau, then drop the row.
            let leaving = self.get_marker_leaving_symbol(tag.marker);
            if leaving.is_invalid() {
                return Err(SolverError::Internal("no leaving row for a marker"));
            }
            let mut row = self
                .rows
                .remove(&leaving)
                .ok_or(SolverError::Internal("leaving symbol lost its row"))?;
            row.solve_for_symbols(leaving, tag.marker);
            self.substitute(tag.marker, &row);
        }

        self.optimize(Target::Objective)?;
        debug!(constraint = %constraint, "removed constraint");
        Ok(())
    }

    /// Whether the constraint is currently installed.
    pub fn has_constraint(&self, constraint: &Constraint) -> bool {
        self.constraints.contains(constraint)
    }

    /// The constraints currently installed, in deterministic map order.
    pub fn constraints(&self) -> Vec<Constraint> {
        self.constraints.keys().cloned().collect()
    }

    /// Build a constraint `lhs op rhs` without adding it to the solver.
    ///
    /// Convenience wrapper over [`Constraint::with_rhs`] for callers holding
    /// a solver handle.
    pub fn create_constraint(
        &self,
        lhs: impl Into<Expression>,
        op: RelationalOperator,
        rhs: impl Into<Expression>,
        strength: f64,
    ) -> Constraint {
        Constraint::with_rhs(lhs, op, rhs, strength)
    }

    /// Register a variable for direct value suggestions.
    ///
    /// Internally this installs the goal `variable == 0` at the given
    /// strength; [`suggest_value`](Self::suggest_value) then moves the goal's
    /// target around. The strength is clipped and must be below
    /// [`strength::REQUIRED`].
    ///
    /// # Errors
    ///
    /// [`SolverError::DuplicateEditVariable`] if the variable is already
    /// registered, [`SolverError::BadRequiredStrength`] for a required
    /// strength.
    pub fn add_edit_variable(
        &mut self,
        variable: &Variable,
        strength: f64,
    ) -> Result<(), SolverError> {
        if self.edits.contains(variable) {
            return Err(SolverError::DuplicateEditVariable(variable.clone()));
        }
        let strength = strength::clip(strength);
        if strength == strength::REQUIRED {
            return Err(SolverError::BadRequiredStrength);
        }

        let constraint = Constraint::new(
            Expression::from(variable.clone()),
            RelationalOperator::Equal,
            strength,
        );
        self.add_constraint(&constraint)?;
        let tag = self
            .constraints
            .get(&constraint)
            .copied()
            .ok_or(SolverError::Internal("edit constraint was not recorded"))?;
        self.edits.insert(
            variable.clone(),
            EditInfo { tag, constraint, constant: 0f64 },
        );
        Ok(())
    }

    /// Deregister an edit variable and drop its goal constraint.
    ///
    /// # Errors
    ///
    /// [`SolverError::UnknownEditVariable`] if the variable is not
    /// registered.
    pub fn remove_edit_variable(&mut self, variable: &Variable) -> Result<(), SolverError> {
        let constraint = self
            .edits
            .get(variable)
            .map(|info| info.constraint.clone())
            .ok_or_else(|| SolverError::UnknownEditVariable(variable.clone()))?;
        self.remove_constraint(&constraint)?;
        self.edits.remove(variable);
        Ok(())
    }

    /// Whether the variable is registered for editing.
    pub fn has_edit_variable(&self, variable: &Variable) -> bool {
        self.edits.contains(variable)
    }

    /// Suggest a value for an edit variable and restore feasibility.
    ///
    /// The difference against the previous suggestion is propagated through
    /// the tableau; rows whose constants turn negative are repaired by the
    /// dual simplex, which preserves the optimality of the objective.
    ///
    /// # Errors
    ///
    /// [`SolverError::UnknownEditVariable`] if the variable is not
    /// registered.
    pub fn suggest_value(&mut self, variable: &Variable, value: f64) -> Result<(), SolverError> {
        let (delta, tag) = {
            let info = self
                .edits
                .get_mut(variable)
                .ok_or_else(|| SolverError::UnknownEditVariable(variable.clone()))?;
            let delta = value - info.constant;
            info.constant = value;
            (delta, info.tag)
        };
        trace!(variable = %variable, value, delta, "suggested value");

        {
            let Self { rows, infeasible_rows, .. } = self;

            // The constraint's error symbols carry the delta. Three cases:
            // either of them is basic and absorbs it directly, or both are
            // non-basic and the delta distributes over their coefficients.
            if let Some(row) = rows.get_mut(&tag.marker) {
                if row.add(-delta) < 0f64 {
                    infeasible_rows.push(tag.marker);
                }
            } else if let Some(row) = rows.get_mut(&tag.other) {
                if row.add(delta) < 0f64 {
                    infeasible_rows.push(tag.other);
                }
            } else {
                for (symbol, row) in rows.iter_mut() {
                    let coefficient = row.coefficient_for(tag.marker);
                    if coefficient != 0f64
                        && row.add(delta * coefficient) < 0f64
                        && symbol.kind() != SymbolKind::External
                    {
                        infeasible_rows.push(*symbol);
                    }
                }
            }
        }

        self.dual_optimize()
    }

    /// Publish the current solution to the variables.
    ///
    /// Each variable backed by a basic symbol receives its row's constant;
    /// variables whose symbols are non-basic are at zero.
    pub fn update_variables(&mut self) {
        let Self { vars, rows, .. } = self;
        for (variable, symbol) in vars.iter() {
            match rows.get(symbol) {
                Some(row) => variable.set_value(row.constant()),
                None => variable.set_value(0f64),
            }
        }
    }

    /// Forget every constraint, edit variable and interned symbol.
    ///
    /// Variables keep their last published values; the solver itself returns
    /// to its freshly constructed state (the pivot ceiling is kept).
    pub fn reset(&mut self) {
        self.constraints.clear();
        self.vars.clear();
        self.edits.clear();
        self.rows.clear();
        self.objective = Row::new(0f64);
        self.artificial = None;
        self.infeasible_rows.clear();
        self.symbol_tick = 1;
    }

    /// Allocate a fresh symbol of the given kind.
    fn make_symbol(&mut self, kind: SymbolKind) -> Symbol {
        let symbol = Symbol::new(self.symbol_tick, kind);
        self.symbol_tick += 1;
        symbol
    }

    /// The external symbol backing a variable, interned on first mention.
    fn get_var_symbol(&mut self, variable: &Variable) -> Symbol {
        if let Some(&symbol) = self.vars.get(variable) {
            return symbol;
        }
        let symbol = self.make_symbol(SymbolKind::External);
        self.vars.insert(variable.clone(), symbol);
        symbol
    }

    /// Translate a constraint into a tableau row and its tag.
    ///
    /// Terms on basic symbols are replaced by their defining rows, so the
    /// result is expressed entirely in non-basic symbols. The returned row
    /// has a non-negative constant.
    fn create_row(&mut self, constraint: &Constraint) -> (Row, Tag) {
        let expression = constraint.expression();
        let mut row = Row::new(expression.constant());

        for term in expression.terms() {
            if near_zero(term.coefficient) {
                continue;
            }
            let symbol = self.get_var_symbol(&term.variable);
            match self.rows.get(&symbol) {
                Some(basic) => row.insert_row(basic, term.coefficient),
                None => row.insert_symbol(symbol, term.coefficient),
            }
        }

        let mut tag = Tag { marker: Symbol::invalid(), other: Symbol::invalid() };
        match constraint.op() {
            op @ (RelationalOperator::LessOrEqual | RelationalOperator::GreaterOrEqual) => {
                let coefficient = match op {
                    RelationalOperator::LessOrEqual => 1f64,
                    _ => -1f64,
                };
                let slack = self.make_symbol(SymbolKind::Slack);
                tag.marker = slack;
                row.insert_symbol(slack, coefficient);
                if constraint.strength() < strength::REQUIRED {
                    let error = self.make_symbol(SymbolKind::Error);
                    tag.other = error;
                    row.insert_symbol(error, -coefficient);
                    self.objective.insert_symbol(error, constraint.strength());
                }
            }
            RelationalOperator::Equal => {
                if constraint.strength() < strength::REQUIRED {
                    let errplus = self.make_symbol(SymbolKind::Error);
                    let errminus = self.make_symbol(SymbolKind::Error);
                    tag.marker = errplus;
                    tag.other = errminus;
                    row.insert_symbol(errplus, -1f64);
                    row.insert_symbol(errminus, 1f64);
                    self.objective.insert_symbol(errplus, constraint.strength());
                    self.objective.insert_symbol(errminus, constraint.strength());
                } else {
                    let dummy = self.make_symbol(SymbolKind::Dummy);
                    tag.marker = dummy;
                    row.insert_symbol(dummy, 1f64);
                }
            }
        }

        // The basis requires non-negative constants; the equation is
        // unaffected by flipping all signs.
        if row.constant() < 0f64 {
            row.reverse_sign();
        }

        (row, tag)
    }

    /// Pick the symbol the new row should define.
    ///
    /// An external symbol always qualifies. Failing that, the constraint's
    /// own slack or error symbols qualify when their coefficient is
    /// negative. Returns the invalid symbol when no candidate exists.
    fn choose_subject(row: &Row, tag: &Tag) -> Symbol {
        for &symbol in row.symbols() {
            if symbol.kind() == SymbolKind::External {
                return symbol;
            }
        }
        if tag.marker.is_pivotable() && row.coefficient_for(tag.marker) < 0f64 {
            return tag.marker;
        }
        if tag.other.is_pivotable() && row.coefficient_for(tag.other) < 0f64 {
            return tag.other;
        }
        Symbol::invalid()
    }

    /// Install a row that offers no natural subject.
    ///
    /// A fresh symbol adopts the row, and a copy of the row serves as a
    /// temporary objective: if its minimum is zero the real constraint is
    /// satisfiable and the artificial symbol can be retired from the basis.
    /// If the minimum is not zero the row's equation is taken back out of
    /// the tableau entirely, so a failed add leaves no trace beyond interned
    /// symbols.
    ///
    /// Returns whether the row could be satisfied.
    fn add_with_artificial_variable(&mut self, row: &Row) -> Result<bool, SolverError> {
        let artificial = self.make_symbol(SymbolKind::Slack);
        self.rows.insert(artificial, row.clone());
        self.artificial = Some(row.clone());

        self.optimize(Target::Artificial)?;
        let success = near_zero(
            self.artificial
                .as_ref()
                .map(Row::constant)
                .unwrap_or(0f64),
        );
        self.artificial = None;

        let mut satisfiable = success;
        if success {
            if let Some(mut basic) = self.rows.remove(&artificial) {
                if basic.is_constant() {
                    return Ok(true);
                }
                let entering = Self::any_pivotable_symbol(&basic);
                if entering.is_invalid() {
                    satisfiable = false;
                } else {
                    basic.solve_for_symbols(artificial, entering);
                    self.substitute(entering, &basic);
                    self.rows.insert(entering, basic);
                }
            }
        } else {
            self.remove_artificial_row(artificial)?;
        }

        // The artificial symbol is retired; scrub any occurrence left in the
        // tableau.
        for (_, row) in self.rows.iter_mut() {
            row.remove_symbol(artificial);
        }
        self.objective.remove_symbol(artificial);

        if !satisfiable {
            // Substitutions made on behalf of the dead row may have left the
            // objective improvable.
            self.optimize(Target::Objective)?;
        }
        Ok(satisfiable)
    }

    /// Take an artificial symbol's equation back out of the tableau, the
    /// same way a constraint's marker row is removed.
    fn remove_artificial_row(&mut self, artificial: Symbol) -> Result<(), SolverError> {
        if self.rows.remove(&artificial).is_some() {
            return Ok(());
        }
        let leaving = self.get_marker_leaving_symbol(artificial);
        if leaving.is_invalid() {
            return Err(SolverError::Internal("no leaving row for an artificial symbol"));
        }
        let mut row = self
            .rows
            .remove(&leaving)
            .ok_or(SolverError::Internal("leaving symbol lost its row"))?;
        row.solve_for_symbols(leaving, artificial);
        self.substitute(artificial, &row);
        Ok(())
    }

    /// The first slack or error symbol in the row, or the invalid symbol.
    fn any_pivotable_symbol(row: &Row) -> Symbol {
        for &symbol in row.symbols() {
            if symbol.is_pivotable() {
                return symbol;
            }
        }
        Symbol::invalid()
    }

    /// Replace every occurrence of a symbol across the tableau with its new
    /// defining row.
    ///
    /// Basic rows whose constants turn negative are queued for the dual
    /// simplex; external basics are exempt, they are allowed any value.
    fn substitute(&mut self, symbol: Symbol, row: &Row) {
        let Self { rows, objective, artificial, infeasible_rows, .. } = self;
        for (basic, candidate) in rows.iter_mut() {
            candidate.substitute(symbol, row);
            if basic.kind() != SymbolKind::External && candidate.constant() < 0f64 {
                infeasible_rows.push(*basic);
            }
        }
        objective.substitute(symbol, row);
        if let Some(artificial) = artificial.as_mut() {
            artificial.substitute(symbol, row);
        }
    }

    /// Minimize the target row with primal simplex pivots.
    ///
    /// Feasibility is preserved throughout; the pass ends when no objective
    /// cell offers improvement.
    fn optimize(&mut self, target: Target) -> Result<(), SolverError> {
        for _ in 0..self.max_iterations {
            let entering = {
                let objective = match target {
                    Target::Objective => &self.objective,
                    Target::Artificial => self
                        .artificial
                        .as_ref()
                        .ok_or(SolverError::Internal("artificial row not alive"))?,
                };
                Self::get_entering_symbol(objective)
            };
            if entering.is_invalid() {
                return Ok(());
            }

            let leaving = self.get_leaving_symbol(entering);
            if leaving.is_invalid() {
                return Err(SolverError::Internal("the objective is unbounded"));
            }

            trace!(?entering, ?leaving, "primal pivot");
            let mut row = self
                .rows
                .remove(&leaving)
                .ok_or(SolverError::Internal("leaving symbol lost its row"))?;
            row.solve_for_symbols(leaving, entering);
            self.substitute(entering, &row);
            self.rows.insert(entering, row);
        }
        Err(SolverError::IterationLimitExceeded(self.max_iterations))
    }

    /// Restore feasibility with dual simplex pivots.
    ///
    /// Rows queued as infeasible are re-examined; stale entries (repaired in
    /// the meantime, or no longer basic) are skipped.
    fn dual_optimize(&mut self) -> Result<(), SolverError> {
        while let Some(leaving) = self.infeasible_rows.pop() {
            let entering = match self.rows.get(&leaving) {
                Some(row) if row.constant() < 0f64 => self.get_dual_entering_symbol(row),
                _ => continue,
            };
            if entering.is_invalid() {
                return Err(SolverError::Internal("dual optimize found no entering symbol"));
            }

            trace!(?entering, ?leaving, "dual pivot");
            let mut row = self
                .rows
                .remove(&leaving)
                .ok_or(SolverError::Internal("leaving symbol lost its row"))?;
            row.solve_for_symbols(leaving, entering);
            self.substitute(entering, &row);
            self.rows.insert(entering, row);
        }
        Ok(())
    }

    /// The first objective cell that offers improvement.
    ///
    /// Cells are scanned in map order, which is deterministic; dummies never
    /// enter the basis.
    fn get_entering_symbol(objective: &Row) -> Symbol {
        for (&symbol, &coefficient) in objective.cells() {
            if symbol.kind() != SymbolKind::Dummy && coefficient < 0f64 {
                return symbol;
            }
        }
        Symbol::invalid()
    }

    /// The dual entering symbol for an infeasible row: among cells with a
    /// positive coefficient and a non-dummy symbol, the one minimizing the
    /// ratio of objective coefficient to cell coefficient.
    fn get_dual_entering_symbol(&self, row: &Row) -> Symbol {
        let mut entering = Symbol::invalid();
        let mut ratio = f64::INFINITY;
        for (&symbol, &coefficient) in row.cells() {
            if coefficient > 0f64 && symbol.kind() != SymbolKind::Dummy {
                let candidate = self.objective.coefficient_for(symbol) / coefficient;
                if candidate < ratio {
                    ratio = candidate;
                    entering = symbol;
                }
            }
        }
        entering
    }

    /// The basic symbol leaving the basis for the entering symbol: the
    /// minimum-ratio row among those with a negative coefficient on the
    /// entering symbol. External basics never leave.
    fn get_leaving_symbol(&self, entering: Symbol) -> Symbol {
        let mut found = Symbol::invalid();
        let mut ratio = f64::INFINITY;
        for (&symbol, row) in self.rows.iter() {
            if symbol.kind() == SymbolKind::External {
                continue;
            }
            let coefficient = row.coefficient_for(entering);
            if coefficient < 0f64 {
                let candidate = -row.constant() / coefficient;
                if candidate < ratio {
                    ratio = candidate;
                    found = symbol;
                }
            }
        }
        found
    }

    /// The basic symbol whose row should be vacated to pivot a non-basic
    /// marker into the basis on constraint removal.
    ///
    /// Rows with a negative marker coefficient are preferred by minimum
    /// ratio, then rows with a positive coefficient, then any row owned by
    /// an external symbol; external rows are the last resort so that user
    /// variables keep their definitions whenever possible.
    fn get_marker_leaving_symbol(&self, marker: Symbol) -> Symbol {
        let mut ratio_negative = f64::INFINITY;
        let mut ratio_positive = f64::INFINITY;
        let mut first = Symbol::invalid();
        let mut second = Symbol::invalid();
        let mut third = Symbol::invalid();

        for (&symbol, row) in self.rows.iter() {
            let coefficient = row.coefficient_for(marker);
            if coefficient == 0f64 {
                continue;
            }
            if symbol.kind() == SymbolKind::External {
                third = symbol;
            } else if coefficient < 0f64 {
                let candidate = -row.constant() / coefficient;
                if candidate < ratio_negative {
                    ratio_negative = candidate;
                    first = symbol;
                }
            } else {
                let candidate = row.constant() / coefficient;
                if candidate < ratio_positive {
                    ratio_positive = candidate;
                    second = symbol;
                }
            }
        }

        if !first.is_invalid() {
            first
        } else if !second.is_invalid() {
            second
        } else {
            third
        }
    }

    /// Take a constraint's error terms back out of the objective.
    fn remove_constraint_effects(&mut self, constraint: &Constraint, tag: &Tag) {
        if tag.marker.kind() == SymbolKind::Error {
            self.remove_marker_effects(tag.marker, constraint.strength());
        }
        if tag.other.kind() == SymbolKind::Error {
            self.remove_marker_effects(tag.other, constraint.strength());
        }
    }

    /// Subtract an error symbol's weighted contribution from the objective,
    /// going through its defining row if it is basic.
    fn remove_marker_effects(&mut self, marker: Symbol, strength: f64) {
        let Self { rows, objective, .. } = self;
        match rows.get(&marker) {
            Some(row) => objective.insert_row(row, -strength),
            None => objective.insert_symbol(marker, -strength),
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
