use std::collections::HashMap;

use crate::{Error, Expression, FloatExt};

/// Named parameter values supplied by the caller on every interaction.
///
/// Lookups are case-sensitive. The free variable `x` is not stored here; it
/// is passed separately to [`Expression::evaluate`] so one set of bindings
/// can serve a whole sampling pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings<Real> {
    values: HashMap<String, Real>,
}

impl<Real: Copy> Bindings<Real> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: Real) -> &mut Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<Real> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<Real, S: Into<String>> FromIterator<(S, Real)> for Bindings<Real> {
    fn from_iter<I: IntoIterator<Item = (S, Real)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<Real, S: Into<String>, const N: usize> From<[(S, Real); N]> for Bindings<Real> {
    fn from(pairs: [(S, Real); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<Real: FloatExt> Expression<Real> {
    /// Computes the value of the tree at `x` under `bindings`.
    ///
    /// IEEE semantics throughout: division by zero gives signed infinity,
    /// `0/0` and logarithms of non-positive values give NaN, and non-finite
    /// results propagate upward unchanged. Filtering them is the sampler's
    /// job, not the evaluator's. The only failure is a [`Parameter`] name
    /// missing from `bindings`; there is no silent default.
    ///
    /// [`Parameter`]: Expression::Parameter
    pub fn evaluate(&self, bindings: &Bindings<Real>, x: Real) -> Result<Real, Error> {
        match self {
            Self::Constant(value) => Ok(*value),
            Self::Parameter(name) => bindings
                .get(name)
                .ok_or_else(|| Error::UndefinedParameter(name.clone())),
            Self::X => Ok(x),
            Self::Brackets(inner) => inner.evaluate(bindings, x),
            Self::Neg(only) => evaluate_unary_op(|a| -a, only, bindings, x),
            Self::Abs(only) => evaluate_unary_op(Real::abs, only, bindings, x),
            Self::Square(only) => evaluate_unary_op(|a| a.powi(2), only, bindings, x),
            Self::Sqrt(only) => evaluate_unary_op(Real::sqrt, only, bindings, x),
            Self::Exp(only) => evaluate_unary_op(Real::exp, only, bindings, x),
            Self::Ln(only) => evaluate_unary_op(Real::ln, only, bindings, x),
            Self::Sin(only) => evaluate_unary_op(Real::sin, only, bindings, x),
            Self::Cos(only) => evaluate_unary_op(Real::cos, only, bindings, x),
            Self::Tan(only) => evaluate_unary_op(Real::tan, only, bindings, x),
            Self::Cot(only) => evaluate_unary_op(|a| a.tan().recip(), only, bindings, x),
            Self::Asin(only) => evaluate_unary_op(Real::asin, only, bindings, x),
            Self::Acos(only) => evaluate_unary_op(Real::acos, only, bindings, x),
            Self::Atan(only) => evaluate_unary_op(Real::atan, only, bindings, x),
            Self::Acot(only) => evaluate_unary_op(|a| a.recip().atan(), only, bindings, x),
            Self::Sum(lhs, rhs) => evaluate_binary_op(|a, b| a + b, lhs, rhs, bindings, x),
            Self::Sub(lhs, rhs) => evaluate_binary_op(|a, b| a - b, lhs, rhs, bindings, x),
            Self::Mul(lhs, rhs) => evaluate_binary_op(|a, b| a * b, lhs, rhs, bindings, x),
            Self::Frac(lhs, rhs) => evaluate_binary_op(|a, b| a / b, lhs, rhs, bindings, x),
            Self::Pow(base, exponent) => evaluate_binary_op(Real::powf, base, exponent, bindings, x),
            Self::Log(value, base) => evaluate_binary_op(Real::log, value, base, bindings, x),
            Self::Max(lhs, rhs) => evaluate_binary_op(Real::max, lhs, rhs, bindings, x),
            Self::Min(lhs, rhs) => evaluate_binary_op(Real::min, lhs, rhs, bindings, x),
        }
    }
}

fn evaluate_unary_op<Real: FloatExt>(
    op: fn(Real) -> Real,
    only: &Expression<Real>,
    bindings: &Bindings<Real>,
    x: Real,
) -> Result<Real, Error> {
    Ok(op(only.evaluate(bindings, x)?))
}

fn evaluate_binary_op<Real: FloatExt>(
    op: fn(Real, Real) -> Real,
    lhs: &Expression<Real>,
    rhs: &Expression<Real>,
    bindings: &Bindings<Real>,
    x: Real,
) -> Result<Real, Error> {
    Ok(op(lhs.evaluate(bindings, x)?, rhs.evaluate(bindings, x)?))
}
