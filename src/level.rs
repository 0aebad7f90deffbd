use crate::compare::score;
use crate::{
    sample, Bindings, Error, Expression, FloatExt, Point, Polyline, Similarity, ViewRect,
    DEFAULT_SAMPLE_COUNT,
};

/// Slider setup for one parameter: the hidden correct value, the slider
/// bounds, and the value the slider starts at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterRange<Real> {
    pub right: Real,
    pub min: Real,
    pub max: Real,
    pub initial: Real,
}

impl<Real> ParameterRange<Real> {
    pub fn new(right: Real, min: Real, max: Real, initial: Real) -> Self {
        Self {
            right,
            min,
            max,
            initial,
        }
    }
}

/// A puzzle definition: the hidden expression, its adjustable parameters,
/// and the window its curves are sampled in. Built once when a level loads
/// and owned by the level for its whole lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Level<Real> {
    pub expression: Expression<Real>,
    pub parameters: Vec<(String, ParameterRange<Real>)>,
    pub view_rect: ViewRect<Real>,
}

impl<Real: FloatExt> Level<Real> {
    pub fn new(
        expression: Expression<Real>,
        parameters: Vec<(String, ParameterRange<Real>)>,
        view_rect: ViewRect<Real>,
    ) -> Self {
        Self {
            expression,
            parameters,
            view_rect,
        }
    }

    /// The hidden correct parameter values.
    pub fn right_bindings(&self) -> Bindings<Real> {
        self.parameters
            .iter()
            .map(|(name, range)| (name.clone(), range.right))
            .collect()
    }

    /// The parameter values the sliders start at.
    pub fn initial_bindings(&self) -> Bindings<Real> {
        self.parameters
            .iter()
            .map(|(name, range)| (name.clone(), range.initial))
            .collect()
    }
}

/// A started level. The target polyline is sampled once from the right
/// parameter values and cached; every guess re-samples only the current
/// curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Round<Real> {
    level: Level<Real>,
    target: Polyline<Real>,
}

impl<Real: FloatExt> Round<Real> {
    /// Samples and caches the target curve.
    ///
    /// Fails with [`Error::DegenerateTarget`] when the right-valued curve is
    /// finite at fewer than two sample points, since no guess could ever be
    /// scored against it.
    pub fn start(level: Level<Real>) -> Result<Self, Error> {
        let target = sample(
            &level.expression,
            &level.right_bindings(),
            level.view_rect,
            DEFAULT_SAMPLE_COUNT,
        )?;
        if target.len() < 2 {
            return Err(Error::DegenerateTarget);
        }
        Ok(Self { level, target })
    }

    pub fn level(&self) -> &Level<Real> {
        &self.level
    }

    pub fn target(&self) -> &[Point<Real>] {
        &self.target
    }

    /// Re-samples the curve under `bindings` and scores it against the
    /// cached target. Called on every slider change.
    pub fn guess(&self, bindings: &Bindings<Real>) -> Result<Similarity<Real>, Error> {
        let current = sample(
            &self.level.expression,
            bindings,
            self.level.view_rect,
            DEFAULT_SAMPLE_COUNT,
        )?;
        score(&current, &self.target)
    }
}
