//! # subscripta
//!
//! subscripta evaluates integer arithmetic expressions that mix constants,
//! scalar variables and array variables with arbitrary subscript
//! expressions, such as `A[b*2 - 1] + (c - 3) / 2`.
//!
//! Evaluation is a single left-to-right pass over the text using an operand
//! stack, an operator stack and a stack of array names waiting for their
//! subscript; no syntax tree is built.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::BufRead;

use crate::{
    error::LoadError,
    interpreter::{
        discovery::discover,
        evaluator::core::{EvalResult, evaluate},
        loader::{load_values, load_values_str},
        variables::VariableTable,
    },
};

/// Provides unified error types for loading and evaluation.
///
/// This module defines every error that can be raised while reading
/// variable values or while evaluating an expression, each carrying the
/// line or byte position needed to locate the problem.
///
/// # Responsibilities
/// - Defines error enums for both failure domains (loader, evaluator).
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates discovery, loading and evaluation.
///
/// This module ties together the lexer, the variable table, the discovery
/// pass, the value loader and the evaluation engine.
///
/// # Responsibilities
/// - Finds the variables an expression uses.
/// - Fills them from a value source.
/// - Reduces the expression to a number.
pub mod interpreter;
/// General numeric utilities.
///
/// Safe conversions between the integer values of variables and the `f64`
/// the evaluator computes with, and the subscript truncation rule.
pub mod util;

/// One expression and the variables it refers to.
///
/// The intended order is [`Expression::new`], [`Expression::discover`],
/// one of the loading methods, then [`Expression::evaluate`] as many times
/// as needed. Evaluation never changes the variables.
///
/// # Example
/// ```
/// use subscripta::Expression;
///
/// let mut expr = Expression::new("A[2] + B");
/// expr.discover();
/// expr.load_values_str("A 3 (2,7)\nB 5").unwrap();
/// assert_eq!(expr.evaluate().unwrap(), 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    text:      String,
    variables: VariableTable,
}

impl Expression {
    /// Wraps `text` with an empty variable table.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text:      text.into(),
               variables: VariableTable::new(), }
    }

    /// The expression text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The variables discovered so far, with their loaded values.
    #[must_use]
    pub const fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Registers every variable of the expression with a zero value.
    ///
    /// Any previously discovered or loaded state is discarded.
    pub fn discover(&mut self) {
        self.variables = discover(&self.text);
    }

    /// Loads values for the discovered variables from `reader`.
    pub fn load_values<R: BufRead>(&mut self, reader: R) -> Result<(), LoadError> {
        load_values(&mut self.variables, reader)
    }

    /// Loads values for the discovered variables from a string.
    pub fn load_values_str(&mut self, source: &str) -> Result<(), LoadError> {
        load_values_str(&mut self.variables, source)
    }

    /// Evaluates the expression with the current variable values.
    pub fn evaluate(&self) -> EvalResult<f64> {
        evaluate(&self.text, &self.variables)
    }
}

/// Returns the value of `expression` after loading `values`.
///
/// Runs the whole discover, load and evaluate cycle on a fresh
/// [`Expression`].
///
/// # Errors
/// Returns an error if the values cannot be loaded or the expression cannot
/// be evaluated.
///
/// # Examples
/// ```
/// use subscripta::evaluate_source;
///
/// let result = evaluate_source("(1+2)*(3-1)", "").unwrap();
/// assert_eq!(result, 6.0);
///
/// // `y` is never given a value, so it stays zero.
/// let result = evaluate_source("x / (y + 4)", "x 10").unwrap();
/// assert_eq!(result, 2.5);
///
/// // Subscript outside the declared size.
/// assert!(evaluate_source("A[5]", "A 3 (0,1)").is_err());
/// ```
pub fn evaluate_source(expression: &str, values: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let mut expr = Expression::new(expression);
    expr.discover();
    expr.load_values_str(values)?;
    Ok(expr.evaluate()?)
}
