//! Expression trees and curve-similarity scoring for formula-guessing
//! puzzles.
//!
//! A level hides an algebraic [`Expression`] behind sliders bound to its
//! named parameters. On every slider change the curve is re-[`sample`]d into
//! a polyline normalized to `[-1, 1]` on both axes and [`score`]d against
//! the cached target curve; the score collapses steeply away from an exact
//! parameter match, which is what makes the puzzle a puzzle.
//!
//! The crate is a pure, synchronous library: no I/O, no logging, no shared
//! mutable state. Trees are immutable after construction and safe to share
//! across threads.
//!
//! # Example
//!
//! ```rust
//! use curve_guess::*;
//!
//! // y = A * x, with the hidden answer A = 0.3.
//! let expression = Expression::Mul(
//!     Box::new(Expression::parameter("A")),
//!     Box::new(Expression::X),
//! );
//! assert_eq!(expression.render().unwrap(), r"{{A}*{x}}");
//!
//! let view = ViewRect::new(-1.0, -1.0, 2.0, 2.0);
//! let target = sample(
//!     &expression,
//!     &Bindings::from([("A", 0.3_f64)]),
//!     view,
//!     DEFAULT_SAMPLE_COUNT,
//! )
//! .unwrap();
//!
//! // The player's current slider position.
//! let current = sample(
//!     &expression,
//!     &Bindings::from([("A", -0.5_f64)]),
//!     view,
//!     DEFAULT_SAMPLE_COUNT,
//! )
//! .unwrap();
//!
//! let similarity = score(&current, &target).unwrap();
//! assert!(similarity.percent() < 100);
//! ```

mod compare;
mod error;
mod evaluate;
mod expression;
mod level;
mod render;
mod sample;

pub use compare::*;
pub use error::Error;
pub use evaluate::Bindings;
pub use expression::Expression;
pub use level::*;
pub use sample::*;

/// The scalar the whole pipeline is generic over.
///
/// `f32` matches game-engine float math bit-for-bit; `f64` is the default
/// choice when engine parity does not matter. The two only disagree about
/// where NaN/Infinity boundaries fall at extreme parameter values.
pub trait FloatExt: num_traits::Float + std::fmt::Display + Send + Sync {
    /// Lossy conversion for sample indices and fixed constants. Values that
    /// do not fit become NaN, which the sampler then drops.
    fn cast<N: num_traits::ToPrimitive>(n: N) -> Self {
        num_traits::NumCast::from(n).unwrap_or_else(Self::nan)
    }
}
impl FloatExt for f32 {}
impl FloatExt for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    fn parabola() -> Expression<f64> {
        Expression::Mul(
            Box::new(Expression::parameter("A")),
            Box::new(Expression::Square(Box::new(Expression::X))),
        )
    }

    #[test]
    fn full_round_trip_for_a_level() {
        let level = Level::new(
            parabola(),
            vec![(
                "A".into(),
                ParameterRange::new(-0.5, -1.0, 1.0, 0.7),
            )],
            ViewRect::new(-1.0, -1.0, 2.0, 2.0),
        );
        assert_eq!(level.expression.render().unwrap(), r"{{A}*{{{x}^2}}}");

        let round = Round::start(level).unwrap();
        let mut sliders = round.level().initial_bindings();
        assert!(round.guess(&sliders).unwrap().percent() < 100);

        // Drag the slider onto the hidden value.
        sliders.set("A", -0.5);
        let similarity = round.guess(&sliders).unwrap();
        assert_eq!(similarity.percent(), 100);
    }

    #[test]
    fn f32_pipeline_works_end_to_end() {
        let expression = Expression::Mul(
            Box::new(Expression::parameter("A")),
            Box::new(Expression::X),
        );
        let view = ViewRect::new(-1.0_f32, -1.0, 2.0, 2.0);
        let target = sample(
            &expression,
            &Bindings::from([("A", 0.3_f32)]),
            view,
            DEFAULT_SAMPLE_COUNT,
        )
        .unwrap();
        let similarity = score(&target, &target).unwrap();
        assert_eq!(similarity.mse, 0.0_f32);
        assert_eq!(similarity.percent(), 100);
    }
}
