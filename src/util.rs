/// Numeric conversion helpers.
///
/// This module provides checked conversions between the integer types used
/// by variable values and the `f64` the evaluator computes with, plus the
/// truncation rule applied to array subscripts.
///
/// Conversions that can lose information return a `Result` or an `Option`
/// rather than silently saturating.
pub mod num;
