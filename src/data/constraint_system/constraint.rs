//! # Constraints
//!
//! A [`Constraint`] pairs a linear [`Expression`] with a relational operator
//! and a strength. The stored equation always has an implicit right-hand side
//! of zero: any explicit right-hand side is subtracted into the expression at
//! construction time.
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::data::constraint_system::expression::Expression;
use crate::data::constraint_system::strength;
use crate::data::indexed_map::Identified;

/// Source of unique constraint ids, shared by all solvers in the process.
static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// The relation a constraint imposes between its expression and zero.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RelationalOperator {
    /// The expression must be at most zero.
    LessOrEqual,
    /// The expression must be at least zero.
    GreaterOrEqual,
    /// The expression must equal zero.
    Equal,
}

impl fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RelationalOperator::LessOrEqual => write!(f, "<="),
            RelationalOperator::GreaterOrEqual => write!(f, ">="),
            RelationalOperator::Equal => write!(f, "=="),
        }
    }
}

/// A weighted (in)equality over an expression.
///
/// Like [`Variable`](crate::Variable), a `Constraint` is a cheap-clone handle
/// whose identity is a stable id: adding a constraint to a solver and later
/// removing it requires the same handle (or a clone of it), not a
/// structurally equal rebuild.
#[derive(Clone)]
pub struct Constraint {
    inner: Rc<ConstraintData>,
}

struct ConstraintData {
    id: usize,
    expression: Expression,
    op: RelationalOperator,
    strength: f64,
}

impl Constraint {
    /// Create a constraint `expression op 0` at the given strength.
    ///
    /// The strength is clipped to `[0, REQUIRED]`.
    pub fn new(
        expression: impl Into<Expression>,
        op: RelationalOperator,
        strength: f64,
    ) -> Self {
        Self {
            inner: Rc::new(ConstraintData {
                id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
                expression: expression.into(),
                op,
                strength: strength::clip(strength),
            }),
        }
    }

    /// Create a constraint `lhs op rhs` at the given strength.
    ///
    /// The right-hand side is folded into the stored expression, which
    /// becomes `lhs - rhs`.
    pub fn with_rhs(
        lhs: impl Into<Expression>,
        op: RelationalOperator,
        rhs: impl Into<Expression>,
        strength: f64,
    ) -> Self {
        Self::new(lhs.into() - rhs.into(), op, strength)
    }

    /// The constraint's expression, with right-hand side folded in.
    pub fn expression(&self) -> &Expression {
        &self.inner.expression
    }

    /// The relational operator.
    pub fn op(&self) -> RelationalOperator {
        self.inner.op
    }

    /// The strength, clipped to `[0, REQUIRED]`.
    pub fn strength(&self) -> f64 {
        self.inner.strength
    }
}

impl Identified for Constraint {
    fn id(&self) -> usize {
        self.inner.id
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Constraint {}

impl Hash for Constraint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} 0 [strength {}]",
            self.inner.expression, self.inner.op, self.inner.strength,
        )
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("id", &self.inner.id)
            .field("expression", &self.inner.expression)
            .field("op", &self.inner.op)
            .field("strength", &self.inner.strength)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::{Constraint, RelationalOperator};
    use crate::data::constraint_system::strength;
    use crate::data::constraint_system::variable::Variable;

    #[test]
    fn rhs_is_folded_into_the_expression() {
        let x = Variable::named("x");
        let constraint = Constraint::with_rhs(
            x.clone() + 2f64,
            RelationalOperator::Equal,
            x.clone() * 3f64,
            strength::REQUIRED,
        );
        assert_eq!(constraint.expression().terms().len(), 1);
        assert_eq!(constraint.expression().terms()[0].coefficient, -2f64);
        assert_eq!(constraint.expression().constant(), 2f64);
    }

    #[test]
    fn strength_is_clipped() {
        let x = Variable::named("x");
        let constraint = Constraint::new(
            x.clone(),
            RelationalOperator::Equal,
            strength::REQUIRED * 2f64,
        );
        assert_eq!(constraint.strength(), strength::REQUIRED);

        let negative = Constraint::new(x, RelationalOperator::Equal, -5f64);
        assert_eq!(negative.strength(), 0f64);
    }

    #[test]
    fn identity_survives_cloning() {
        let x = Variable::named("x");
        let constraint = Constraint::new(x.clone(), RelationalOperator::Equal, strength::WEAK);
        let clone = constraint.clone();
        assert_eq!(constraint, clone);

        let rebuilt = Constraint::new(x, RelationalOperator::Equal, strength::WEAK);
        assert_ne!(constraint, rebuilt);
    }
}
