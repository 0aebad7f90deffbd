use crate::sample::lerp;
use crate::{Error, FloatExt, Point};

/// The MSE below which a guess counts as exact and scores 100.
const WIN_MSE: f64 = 0.0001;

/// Minimum distance from `point` to any closed segment of `line`.
///
/// The projection parameter is clamped to `[0, 1]`, so beyond either end of
/// a segment the nearest endpoint wins, not the infinite line through it.
pub fn point_to_polyline_distance<Real: FloatExt>(
    point: Point<Real>,
    line: &[Point<Real>],
) -> Result<Real, Error> {
    if line.len() < 2 {
        return Err(Error::DegenerateTarget);
    }
    let mut min_distance = Real::infinity();
    for pair in line.windows(2) {
        let distance = point_to_segment_distance(point, pair[0], pair[1]);
        if distance < min_distance {
            min_distance = distance;
        }
    }
    Ok(min_distance)
}

fn point_to_segment_distance<Real: FloatExt>(
    point: Point<Real>,
    start: Point<Real>,
    end: Point<Real>,
) -> Real {
    let l2 = distance(start, end).powi(2);
    let t = clamp01(dot(sub(point, start), sub(end, start)) / l2);
    let foot = Point {
        x: lerp(start.x, end.x, t),
        y: lerp(start.y, end.y, t),
    };
    distance(point, foot)
}

/// Mean of squared point-to-target distances over `current`'s points.
///
/// Asymmetric by design: it measures how far the current curve's samples sit
/// from the target curve, not a symmetric curve-to-curve metric. An empty
/// `current` has no mean, which is reported as `+Infinity` (the worst score)
/// so downstream ordering stays total.
pub fn mean_squared_error<Real: FloatExt>(
    current: &[Point<Real>],
    target: &[Point<Real>],
) -> Result<Real, Error> {
    if target.len() < 2 {
        return Err(Error::DegenerateTarget);
    }
    if current.is_empty() {
        return Ok(Real::infinity());
    }
    let mut total = Real::zero();
    for &point in current {
        total = total + point_to_polyline_distance(point, target)?.powi(2);
    }
    Ok(total / Real::cast(current.len()))
}

/// How closely the current curve matches the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Similarity<Real> {
    /// Never negative. `+Infinity` when the curves cannot be compared
    /// meaningfully (empty current polyline).
    pub mse: Real,
}

impl<Real: FloatExt> Similarity<Real> {
    pub fn new(mse: Real) -> Self {
        Self { mse }
    }

    /// The score shown to the player, in `[0, 100]`.
    ///
    /// Below the win threshold the score is clamped to exactly 100 to avoid
    /// float edge cases at the peak. Above it the score is
    /// `floor(100 * exp(-((mse - 0.0001) * 100)^2))`: a deliberately steep
    /// bell curve that collapses near-misses toward zero and shapes the
    /// puzzle's difficulty.
    pub fn percent(&self) -> u8 {
        let win = Real::cast(WIN_MSE);
        if self.mse < win {
            return 100;
        }
        let hundred = Real::cast(100);
        let decay = (-((self.mse - win) * hundred).powi(2)).exp();
        (hundred * decay).trunc().to_u8().unwrap_or(0)
    }
}

/// Scores the current polyline against the target.
pub fn score<Real: FloatExt>(
    current: &[Point<Real>],
    target: &[Point<Real>],
) -> Result<Similarity<Real>, Error> {
    Ok(Similarity::new(mean_squared_error(current, target)?))
}

fn sub<Real: FloatExt>(a: Point<Real>, b: Point<Real>) -> Point<Real> {
    Point {
        x: a.x - b.x,
        y: a.y - b.y,
    }
}

fn dot<Real: FloatExt>(a: Point<Real>, b: Point<Real>) -> Real {
    a.x * b.x + a.y * b.y
}

fn distance<Real: FloatExt>(a: Point<Real>, b: Point<Real>) -> Real {
    let d = sub(a, b);
    dot(d, d).sqrt()
}

// Comparison-based so NaN passes through; a NaN parameter means a degenerate
// zero-length segment, whose NaN distance then loses every minimum test.
fn clamp01<Real: FloatExt>(t: Real) -> Real {
    if t < Real::zero() {
        Real::zero()
    } else if t > Real::one() {
        Real::one()
    } else {
        t
    }
}
