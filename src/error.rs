/// The three failure conditions of the core. Non-finite evaluation results
/// are not errors; they are valid IEEE outcomes that the sampler filters.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Evaluation referenced a parameter that the bindings do not contain.
    #[error("no parameter named `{0}`")]
    UndefinedParameter(String),

    /// The node kind has no textual template.
    #[error("no render template for {0} nodes")]
    RenderUnsupported(&'static str),

    /// A distance query against a polyline with fewer than two points.
    #[error("target polyline has fewer than two points")]
    DegenerateTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_are_stable() {
        assert_eq!(
            Error::UndefinedParameter("A".into()).to_string(),
            "no parameter named `A`"
        );
        assert_eq!(
            Error::RenderUnsupported("Max").to_string(),
            "no render template for Max nodes"
        );
        assert_eq!(
            Error::DegenerateTarget.to_string(),
            "target polyline has fewer than two points"
        );
    }
}
