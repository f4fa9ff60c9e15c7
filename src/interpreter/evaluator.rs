/// Core evaluation logic.
///
/// Contains the single-pass, three-stack evaluation engine and its result
/// type.
pub mod core;

/// Operator stack entries.
///
/// Defines the binary operators and the tagged entries that separate them
/// from `(` and `[` markers.
pub mod stack;
