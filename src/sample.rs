use crate::{Bindings, Error, Expression, FloatExt};

#[cfg(feature = "rayon")]
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

/// A point of a sampled curve, in normalized `[-1, 1]` coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<Real> {
    pub x: Real,
    pub y: Real,
}

/// An ordered polyline, ascending in x. May be shorter than the sample count
/// because non-finite samples are dropped, and legally empty if the
/// expression is finite nowhere on the domain.
pub type Polyline<Real> = Vec<Point<Real>>;

/// The window a level's curves are sampled in. The x span is the sampling
/// domain; both spans normalize their axis into `[-1, 1]`, which makes
/// polylines comparable across levels with different absolute windows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRect<Real> {
    pub x_min: Real,
    pub y_min: Real,
    pub width: Real,
    pub height: Real,
}

impl<Real: FloatExt> ViewRect<Real> {
    pub fn new(x_min: Real, y_min: Real, width: Real, height: Real) -> Self {
        Self {
            x_min,
            y_min,
            width,
            height,
        }
    }

    pub fn x_max(&self) -> Real {
        self.x_min + self.width
    }

    pub fn y_max(&self) -> Real {
        self.y_min + self.height
    }

    /// `(raw - min) / (max - min) * 2 - 1`, per axis.
    pub fn normalize(&self, point: Point<Real>) -> Point<Real> {
        let one = Real::one();
        let two = one + one;
        Point {
            x: (point.x - self.x_min) / self.width * two - one,
            y: (point.y - self.y_min) / self.height * two - one,
        }
    }
}

pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Samples `expression` at `sample_count + 1` evenly spaced x values across
/// the view's domain, both ends inclusive, and returns the surviving points
/// normalized into the view.
///
/// Each x is produced by linear interpolation rather than a stepped
/// accumulator, so the last sample lands exactly on the domain's end.
/// Samples whose y is NaN or infinite are dropped; an everywhere-non-finite
/// expression yields an empty polyline, not an error. A missing parameter
/// aborts the whole call.
pub fn sample<Real: FloatExt>(
    expression: &Expression<Real>,
    bindings: &Bindings<Real>,
    view: ViewRect<Real>,
    sample_count: usize,
) -> Result<Polyline<Real>, Error> {
    let x_min = view.x_min;
    let x_max = view.x_max();
    let count = Real::cast(sample_count);

    let evaluate_at = |i: usize| -> Result<(Real, Real), Error> {
        let t = Real::cast(i) / count;
        let x = lerp(x_min, x_max, t);
        Ok((x, expression.evaluate(bindings, x)?))
    };

    #[cfg(feature = "rayon")]
    let raw = (0..=sample_count)
        .into_par_iter()
        .map(evaluate_at)
        .collect::<Result<Vec<_>, Error>>()?;
    #[cfg(not(feature = "rayon"))]
    let raw = (0..=sample_count)
        .map(evaluate_at)
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(raw
        .into_iter()
        .filter(|&(_, y)| y.is_finite())
        .map(|(x, y)| view.normalize(Point { x, y }))
        .collect())
}

pub(crate) fn lerp<Real: FloatExt>(a: Real, b: Real, t: Real) -> Real {
    a + (b - a) * t
}
