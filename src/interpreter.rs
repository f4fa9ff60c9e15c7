/// Variable discovery.
///
/// Scans the raw expression once and registers every distinct name as a
/// scalar or an array, depending on whether it is followed by `[`.
pub mod discovery;
/// The evaluator module reduces an expression to a number.
///
/// The evaluator reads tokens from the lexer and reduces them with an
/// operand stack, an operator stack and a stack of array names awaiting
/// their subscript. No syntax tree is built.
///
/// # Responsibilities
/// - Applies operator precedence and left associativity.
/// - Resolves scalars immediately and array elements at the closing `]`.
/// - Reports unknown variables, bad subscripts and malformed input.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// Produces integer literals, identifiers, the four arithmetic operators
/// and both kinds of brackets, skipping spaces and tabs.
pub mod lexer;
/// The loader module reads variable values.
///
/// Parses the line-oriented value source (`name value` and
/// `name size (index,value)...` records) into an existing variable table.
pub mod loader;
/// The variables module defines the variable table.
///
/// Holds the scalars and arrays of one expression in discovery order and
/// keeps the two namespaces disjoint.
pub mod variables;
