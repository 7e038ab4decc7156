//! # Linear expressions
//!
//! An [`Expression`] is a linear combination of [`Variable`]s plus a
//! constant. Expressions are assembled with ordinary arithmetic operators;
//! every combination of `f64`, [`Variable`], [`Term`] and [`Expression`]
//! that denotes a linear form is supported, and anything non-linear does not
//! type-check.
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use itertools::Itertools;

use crate::data::constraint_system::variable::Variable;
use crate::data::indexed_map::IndexedMap;

/// A single `coefficient * variable` product.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    /// The variable of this term.
    pub variable: Variable,
    /// The multiplier on the variable.
    pub coefficient: f64,
}

impl Term {
    /// Create a term from a variable and a coefficient.
    pub fn new(variable: Variable, coefficient: f64) -> Self {
        Self { variable, coefficient }
    }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Self::new(variable, 1f64)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} * {}", self.coefficient, self.variable)
    }
}

/// A linear combination of variables plus a constant.
///
/// Construction normalizes the term list: terms mentioning the same variable
/// are combined by summing their coefficients, keeping the position of the
/// first mention. The stored form is immutable; arithmetic operators build
/// new expressions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    terms: Vec<Term>,
    constant: f64,
}

impl Expression {
    /// Create an expression from terms and a constant.
    ///
    /// Duplicate variables in `terms` are merged into a single term.
    pub fn new(terms: Vec<Term>, constant: f64) -> Self {
        let mut combined: IndexedMap<Variable, f64> = IndexedMap::new();
        for term in terms {
            match combined.get_mut(&term.variable) {
                Some(coefficient) => *coefficient += term.coefficient,
                None => {
                    combined.insert(term.variable, term.coefficient);
                }
            }
        }
        Self {
            terms: combined
                .iter()
                .map(|(variable, &coefficient)| Term::new(variable.clone(), coefficient))
                .collect(),
            constant,
        }
    }

    /// An expression consisting of a constant only.
    pub fn from_constant(constant: f64) -> Self {
        Self { terms: Vec::new(), constant }
    }

    /// The terms of this expression.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The constant of this expression.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Evaluate the expression at the variables' current values.
    pub fn value(&self) -> f64 {
        self.constant
            + self
                .terms
                .iter()
                .map(|term| term.coefficient * term.variable.value())
                .sum::<f64>()
    }
}

impl From<f64> for Expression {
    fn from(constant: f64) -> Self {
        Self::from_constant(constant)
    }
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Self {
        Self { terms: vec![Term::from(variable)], constant: 0f64 }
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Self { terms: vec![term], constant: 0f64 }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "{}", self.constant);
        }
        write!(f, "{} + {}", self.terms.iter().join(" + "), self.constant)
    }
}

// Operator plumbing. Negation and scaling keep the shape of their operand;
// sums always produce an `Expression` and go through `Expression::new` so
// that duplicate variables are merged.

impl Neg for Variable {
    type Output = Term;

    fn neg(self) -> Term {
        Term::new(self, -1f64)
    }
}

impl Neg for Term {
    type Output = Term;

    fn neg(self) -> Term {
        Term::new(self.variable, -self.coefficient)
    }
}

impl Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Expression {
        Expression {
            terms: self
                .terms
                .into_iter()
                .map(|term| Term::new(term.variable, -term.coefficient))
                .collect(),
            constant: -self.constant,
        }
    }
}

impl Mul<f64> for Variable {
    type Output = Term;

    fn mul(self, coefficient: f64) -> Term {
        Term::new(self, coefficient)
    }
}

impl Mul<Variable> for f64 {
    type Output = Term;

    fn mul(self, variable: Variable) -> Term {
        Term::new(variable, self)
    }
}

impl Div<f64> for Variable {
    type Output = Term;

    fn div(self, divisor: f64) -> Term {
        Term::new(self, 1f64 / divisor)
    }
}

impl Mul<f64> for Term {
    type Output = Term;

    fn mul(self, multiplier: f64) -> Term {
        Term::new(self.variable, self.coefficient * multiplier)
    }
}

impl Mul<Term> for f64 {
    type Output = Term;

    fn mul(self, term: Term) -> Term {
        Term::new(term.variable, self * term.coefficient)
    }
}

impl Div<f64> for Term {
    type Output = Term;

    fn div(self, divisor: f64) -> Term {
        Term::new(self.variable, self.coefficient / divisor)
    }
}

impl Mul<f64> for Expression {
    type Output = Expression;

    fn mul(self, multiplier: f64) -> Expression {
        Expression {
            terms: self
                .terms
                .into_iter()
                .map(|term| Term::new(term.variable, term.coefficient * multiplier))
                .collect(),
            constant: self.constant * multiplier,
        }
    }
}

impl Mul<Expression> for f64 {
    type Output = Expression;

    fn mul(self, expression: Expression) -> Expression {
        expression * self
    }
}

impl Div<f64> for Expression {
    type Output = Expression;

    fn div(self, divisor: f64) -> Expression {
        self * (1f64 / divisor)
    }
}

/// Implement `Add` and `Sub` for a pair of expression-like types by lifting
/// both sides into `Expression`.
macro_rules! sum_impls {
    ($($lhs:ty, $rhs:ty;)*) => {
        $(
            impl Add<$rhs> for $lhs {
                type Output = Expression;

                fn add(self, rhs: $rhs) -> Expression {
                    let lhs = Expression::from(self);
                    let rhs = Expression::from(rhs);
                    let mut terms = lhs.terms;
                    terms.extend(rhs.terms);
                    Expression::new(terms, lhs.constant + rhs.constant)
                }
            }

            impl Sub<$rhs> for $lhs {
                type Output = Expression;

                fn sub(self, rhs: $rhs) -> Expression {
                    self + (-Expression::from(rhs))
                }
            }
        )*
    };
}

sum_impls! {
    Variable, Variable;
    Variable, Term;
    Variable, Expression;
    Variable, f64;
    Term, Variable;
    Term, Term;
    Term, Expression;
    Term, f64;
    Expression, Variable;
    Expression, Term;
    Expression, Expression;
    Expression, f64;
}

/// The scalar-on-the-left sums, which cannot be macro-generated against the
/// blanket `Expression: From` bound.
macro_rules! scalar_sum_impls {
    ($($rhs:ty;)*) => {
        $(
            impl Add<$rhs> for f64 {
                type Output = Expression;

                fn add(self, rhs: $rhs) -> Expression {
                    Expression::from(rhs) + self
                }
            }

            impl Sub<$rhs> for f64 {
                type Output = Expression;

                fn sub(self, rhs: $rhs) -> Expression {
                    (-Expression::from(rhs)) + self
                }
            }
        )*
    };
}

scalar_sum_impls! {
    Variable;
    Term;
    Expression;
}

#[cfg(test)]
mod test {
    use super::{Expression, Term};
    use crate::data::constraint_system::variable::Variable;

    #[test]
    fn duplicate_variables_are_merged() {
        let x = Variable::named("x");
        let expression = Expression::new(
            vec![
                Term::new(x.clone(), 2f64),
                Term::new(x.clone(), 3f64),
            ],
            1f64,
        );
        assert_eq!(expression.terms().len(), 1);
        assert_eq!(expression.terms()[0].coefficient, 5f64);
        assert_eq!(expression.constant(), 1f64);
    }

    #[test]
    fn merge_keeps_first_mention_order() {
        let x = Variable::named("x");
        let y = Variable::named("y");
        let expression = Expression::new(
            vec![
                Term::new(y.clone(), 1f64),
                Term::new(x.clone(), 1f64),
                Term::new(y.clone(), 4f64),
            ],
            0f64,
        );
        let variables = expression
            .terms()
            .iter()
            .map(|term| term.variable.clone())
            .collect::<Vec<_>>();
        assert_eq!(variables, vec![y, x]);
        assert_eq!(expression.terms()[0].coefficient, 5f64);
    }

    #[test]
    fn operator_composition() {
        let x = Variable::named("x");
        let y = Variable::named("y");

        let expression = x.clone() * 2f64 + y.clone() - 3f64;
        assert_eq!(expression.terms().len(), 2);
        assert_eq!(expression.terms()[0], Term::new(x.clone(), 2f64));
        assert_eq!(expression.terms()[1], Term::new(y.clone(), 1f64));
        assert_eq!(expression.constant(), -3f64);

        let flipped = 3f64 - (x.clone() * 2f64 + y.clone());
        assert_eq!(flipped.terms()[0], Term::new(x.clone(), -2f64));
        assert_eq!(flipped.terms()[1], Term::new(y.clone(), -1f64));
        assert_eq!(flipped.constant(), 3f64);
    }

    #[test]
    fn nested_expressions_fold_constants() {
        let x = Variable::named("x");
        let inner = x.clone() + 5f64;
        let outer = inner.clone() + inner + 1f64;
        assert_eq!(outer.terms().len(), 1);
        assert_eq!(outer.terms()[0].coefficient, 2f64);
        assert_eq!(outer.constant(), 11f64);
    }

    #[test]
    fn scaling_distributes() {
        let x = Variable::named("x");
        let expression = (x.clone() + 2f64) * 3f64;
        assert_eq!(expression.terms()[0].coefficient, 3f64);
        assert_eq!(expression.constant(), 6f64);

        let divided = expression / 3f64;
        assert_eq!(divided.terms()[0].coefficient, 1f64);
        assert_eq!(divided.constant(), 2f64);
    }

    #[test]
    fn evaluation_uses_current_values() {
        let x = Variable::named("x");
        let y = Variable::named("y");
        x.set_value(2f64);
        y.set_value(10f64);
        let expression = x * 3f64 + y + 1f64;
        assert_eq!(expression.value(), 17f64);
    }
}
