/// Evaluation errors.
///
/// Defines all error types that can be raised while the expression is
/// scanned and reduced: unknown variables, out-of-range subscripts, stack
/// underflow and characters outside the grammar.
pub mod eval_error;
/// Loading errors.
///
/// Contains the errors raised while reading variable values from a value
/// source, such as tokens that are not integers or incomplete records.
pub mod load_error;

pub use eval_error::EvalError;
pub use load_error::LoadError;
