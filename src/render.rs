use crate::{Error, Expression, FloatExt};

impl<Real: FloatExt> Expression<Real> {
    /// Produces the LaTeX-like text for the tree.
    ///
    /// Purely structural: one fixed template per variant, no numeric
    /// simplification, and braces around every composite subterm so the
    /// output stays unambiguous when a typesetter concatenates it without
    /// knowing operator precedence.
    ///
    /// Intentionally partial: `Ln`, `Max` and `Min` have no template and
    /// return [`Error::RenderUnsupported`] instead of fabricating one. They
    /// never appear in a shippable level.
    pub fn render(&self) -> Result<String, Error> {
        Ok(match self {
            Self::Constant(value) => value.to_string(),
            Self::Parameter(name) => name.clone(),
            Self::X => "x".to_string(),
            Self::Brackets(inner) => format!("{{({})}}", inner.render()?),
            Self::Neg(only) => format!("{{-{{{}}}}}", only.render()?),
            Self::Abs(only) => render_named_unary("abs", only)?,
            Self::Square(only) => format!("{{{{{}}}^2}}", only.render()?),
            Self::Sqrt(only) => render_named_unary("sqrt", only)?,
            Self::Exp(only) => render_named_unary("exp", only)?,
            Self::Sin(only) => render_named_unary("sin", only)?,
            Self::Cos(only) => render_named_unary("cos", only)?,
            Self::Tan(only) => render_named_unary("tan", only)?,
            Self::Cot(only) => render_named_unary("cot", only)?,
            Self::Asin(only) => render_named_unary("asin", only)?,
            Self::Acos(only) => render_named_unary("acos", only)?,
            Self::Atan(only) => render_named_unary("atan", only)?,
            Self::Acot(only) => render_named_unary("acot", only)?,
            Self::Sum(lhs, rhs) => render_infix("+", lhs, rhs)?,
            Self::Sub(lhs, rhs) => render_infix("-", lhs, rhs)?,
            Self::Mul(lhs, rhs) => render_infix("*", lhs, rhs)?,
            Self::Frac(lhs, rhs) => {
                format!("{{\\frac{{{}}}{{{}}}}}", lhs.render()?, rhs.render()?)
            }
            Self::Pow(base, exponent) => render_infix("^", base, exponent)?,
            Self::Log(value, base) => {
                // Base goes in the subscript.
                format!("{{\\log_{{{}}}{{{}}}}}", base.render()?, value.render()?)
            }
            Self::Ln(_) | Self::Max(_, _) | Self::Min(_, _) => {
                return Err(Error::RenderUnsupported(self.kind()))
            }
        })
    }
}

/// `{\f{A}}`
fn render_named_unary<Real: FloatExt>(
    name: &str,
    only: &Expression<Real>,
) -> Result<String, Error> {
    Ok(format!("{{\\{}{{{}}}}}", name, only.render()?))
}

/// `{{A}op{B}}`
fn render_infix<Real: FloatExt>(
    op: &str,
    lhs: &Expression<Real>,
    rhs: &Expression<Real>,
) -> Result<String, Error> {
    Ok(format!("{{{{{}}}{}{{{}}}}}", lhs.render()?, op, rhs.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use Expression::*;

    fn boxed(e: Expression<f64>) -> Box<Expression<f64>> {
        Box::new(e)
    }

    #[test]
    fn leaves() {
        assert_eq!(Expression::<f64>::X.render().unwrap(), "x");
        assert_eq!(Expression::<f64>::parameter("A").render().unwrap(), "A");
        assert_eq!(Constant(5.0_f64).render().unwrap(), "5");
        assert_eq!(Constant(2.5_f64).render().unwrap(), "2.5");
        assert_eq!(Constant(-0.5_f64).render().unwrap(), "-0.5");
    }

    #[test]
    fn infix_templates() {
        let sum = Sum(boxed(Expression::parameter("A")), boxed(X));
        assert_eq!(sum.render().unwrap(), r"{{A}+{x}}");

        let sub = Sub(boxed(X), boxed(Constant(1.0)));
        assert_eq!(sub.render().unwrap(), r"{{x}-{1}}");

        let mul = Mul(boxed(Expression::parameter("A")), boxed(X));
        assert_eq!(mul.render().unwrap(), r"{{A}*{x}}");

        let pow = Pow(boxed(X), boxed(Constant(3.0)));
        assert_eq!(pow.render().unwrap(), r"{{x}^{3}}");
    }

    #[test]
    fn fraction_and_log() {
        let frac = Frac(boxed(Constant(1.0)), boxed(X));
        assert_eq!(frac.render().unwrap(), r"{\frac{1}{x}}");

        let log = Log(boxed(X), boxed(Constant(2.0)));
        assert_eq!(log.render().unwrap(), r"{\log_{2}{x}}");
    }

    #[test]
    fn unary_templates() {
        assert_eq!(Neg(boxed(X)).render().unwrap(), r"{-{x}}");
        assert_eq!(Abs(boxed(X)).render().unwrap(), r"{\abs{x}}");
        assert_eq!(Square(boxed(X)).render().unwrap(), r"{{x}^2}");
        assert_eq!(Sqrt(boxed(X)).render().unwrap(), r"{\sqrt{x}}");
        assert_eq!(Exp(boxed(X)).render().unwrap(), r"{\exp{x}}");
        assert_eq!(Sin(boxed(X)).render().unwrap(), r"{\sin{x}}");
        assert_eq!(Cos(boxed(X)).render().unwrap(), r"{\cos{x}}");
        assert_eq!(Tan(boxed(X)).render().unwrap(), r"{\tan{x}}");
        assert_eq!(Cot(boxed(X)).render().unwrap(), r"{\cot{x}}");
        assert_eq!(Asin(boxed(X)).render().unwrap(), r"{\asin{x}}");
        assert_eq!(Acos(boxed(X)).render().unwrap(), r"{\acos{x}}");
        assert_eq!(Atan(boxed(X)).render().unwrap(), r"{\atan{x}}");
        assert_eq!(Acot(boxed(X)).render().unwrap(), r"{\acot{x}}");
    }

    #[test]
    fn brackets_group_composites() {
        let grouped = Brackets(boxed(Sum(boxed(Expression::parameter("A")), boxed(X))));
        assert_eq!(grouped.render().unwrap(), r"{({{A}+{x}})}");
    }

    #[test]
    fn nested_composition() {
        // A * x^2.
        let tree = Mul(boxed(Expression::parameter("A")), boxed(Square(boxed(X))));
        assert_eq!(tree.render().unwrap(), r"{{A}*{{{x}^2}}}");
    }

    #[test]
    fn unsupported_variants_refuse_to_render() {
        assert_eq!(
            Ln(boxed(X)).render(),
            Err(Error::RenderUnsupported("Ln"))
        );
        assert_eq!(
            Max(boxed(X), boxed(Constant(0.0))).render(),
            Err(Error::RenderUnsupported("Max"))
        );
        assert_eq!(
            Min(boxed(X), boxed(Constant(0.0))).render(),
            Err(Error::RenderUnsupported("Min"))
        );
    }
}
