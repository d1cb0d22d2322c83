//! Gate angle expressions.
//!
//! Angles are kept as small expression trees so that fixed rotations keep a
//! readable form (`π` instead of `3.141592653589793`) while data-dependent
//! angles fold down to constants.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A rotation angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A constant numeric value.
    Constant(f64),
    /// The constant π.
    Pi,
    /// Negation.
    Neg(Box<ParameterExpression>),
    /// Addition.
    Add(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Subtraction.
    Sub(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Multiplication.
    Mul(Box<ParameterExpression>, Box<ParameterExpression>),
}

impl ParameterExpression {
    /// Create a constant angle.
    pub fn constant(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }

    /// Create a π constant.
    pub fn pi() -> Self {
        ParameterExpression::Pi
    }

    /// Evaluate the expression.
    pub fn value(&self) -> f64 {
        match self {
            ParameterExpression::Constant(v) => *v,
            ParameterExpression::Pi => PI,
            ParameterExpression::Neg(e) => -e.value(),
            ParameterExpression::Add(a, b) => a.value() + b.value(),
            ParameterExpression::Sub(a, b) => a.value() - b.value(),
            ParameterExpression::Mul(a, b) => a.value() * b.value(),
        }
    }

    /// Collapse the tree into a single constant.
    ///
    /// A bare `π` is kept symbolic.
    #[must_use]
    pub fn simplify(&self) -> Self {
        match self {
            ParameterExpression::Constant(_) | ParameterExpression::Pi => self.clone(),
            _ => ParameterExpression::Constant(self.value()),
        }
    }

    /// Check if the expression is a leaf.
    pub fn is_atomic(&self) -> bool {
        matches!(
            self,
            ParameterExpression::Constant(_) | ParameterExpression::Pi
        )
    }

    /// Numeric comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.value() - other.value()).abs() <= tolerance
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterExpression::Constant(v) => write!(f, "{v}"),
            ParameterExpression::Pi => write!(f, "π"),
            ParameterExpression::Neg(e) => write!(f, "-({e})"),
            ParameterExpression::Add(a, b) => write!(f, "({a} + {b})"),
            ParameterExpression::Sub(a, b) => write!(f, "({a} - {b})"),
            ParameterExpression::Mul(a, b) => write!(f, "({a} * {b})"),
        }
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }
}

impl From<i32> for ParameterExpression {
    fn from(value: i32) -> Self {
        ParameterExpression::Constant(f64::from(value))
    }
}

impl std::ops::Add for ParameterExpression {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        ParameterExpression::Add(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Sub for ParameterExpression {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        ParameterExpression::Sub(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Mul for ParameterExpression {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        ParameterExpression::Mul(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Neg for ParameterExpression {
    type Output = Self;

    fn neg(self) -> Self::Output {
        ParameterExpression::Neg(Box::new(self))
    }
}
