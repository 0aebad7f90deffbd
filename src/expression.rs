/// An immutable algebraic expression over one free variable `x` and any
/// number of named parameters.
///
/// Trees are built programmatically by level-definition code, never parsed
/// from text. There is no mutation API, so a tree is acyclic by construction
/// and may be shared read-only across threads for the lifetime of a level.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression<Real> {
    // Leaves.
    Constant(Real),
    Parameter(String),
    /// The single free variable, `x`.
    X,

    // Unary operators.
    Neg(Box<Expression<Real>>),
    Abs(Box<Expression<Real>>),
    Square(Box<Expression<Real>>),
    Sqrt(Box<Expression<Real>>),
    /// `e` raised to the operand.
    Exp(Box<Expression<Real>>),
    /// Natural logarithm. Evaluates, but has no render template.
    Ln(Box<Expression<Real>>),
    Sin(Box<Expression<Real>>),
    Cos(Box<Expression<Real>>),
    Tan(Box<Expression<Real>>),
    /// `1 / tan`.
    Cot(Box<Expression<Real>>),
    Asin(Box<Expression<Real>>),
    Acos(Box<Expression<Real>>),
    Atan(Box<Expression<Real>>),
    /// `atan(1 / a)`.
    Acot(Box<Expression<Real>>),
    /// Explicit grouping. Transparent to evaluation, only affects rendering.
    Brackets(Box<Expression<Real>>),

    // Binary operators.
    Sum(Box<Expression<Real>>, Box<Expression<Real>>),
    Sub(Box<Expression<Real>>, Box<Expression<Real>>),
    Mul(Box<Expression<Real>>, Box<Expression<Real>>),
    Frac(Box<Expression<Real>>, Box<Expression<Real>>),
    /// Base, then exponent.
    Pow(Box<Expression<Real>>, Box<Expression<Real>>),
    /// Logarithm of the first operand in the base of the second. Any
    /// positive base.
    Log(Box<Expression<Real>>, Box<Expression<Real>>),
    /// Evaluates, but has no render template.
    Max(Box<Expression<Real>>, Box<Expression<Real>>),
    /// Evaluates, but has no render template.
    Min(Box<Expression<Real>>, Box<Expression<Real>>),
}

impl<Real> Expression<Real> {
    /// Shorthand for `Expression::Parameter` taking anything string-like.
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::Parameter(name.into())
    }

    /// The variant name, as used in error reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Constant(_) => "Constant",
            Self::Parameter(_) => "Parameter",
            Self::X => "X",
            Self::Neg(_) => "Neg",
            Self::Abs(_) => "Abs",
            Self::Square(_) => "Square",
            Self::Sqrt(_) => "Sqrt",
            Self::Exp(_) => "Exp",
            Self::Ln(_) => "Ln",
            Self::Sin(_) => "Sin",
            Self::Cos(_) => "Cos",
            Self::Tan(_) => "Tan",
            Self::Cot(_) => "Cot",
            Self::Asin(_) => "Asin",
            Self::Acos(_) => "Acos",
            Self::Atan(_) => "Atan",
            Self::Acot(_) => "Acot",
            Self::Brackets(_) => "Brackets",
            Self::Sum(_, _) => "Sum",
            Self::Sub(_, _) => "Sub",
            Self::Mul(_, _) => "Mul",
            Self::Frac(_, _) => "Frac",
            Self::Pow(_, _) => "Pow",
            Self::Log(_, _) => "Log",
            Self::Max(_, _) => "Max",
            Self::Min(_, _) => "Min",
        }
    }
}
