use log::{debug, trace};
use logos::Logos;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::stack::{BinaryOperator, StackOp},
        lexer::Token,
        variables::{VariableKind, VariableTable},
    },
    util::num::{i64_to_f64_checked, subscript_to_index, truncate_subscript},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates `expression` against the variables in `table`.
///
/// The expression is scanned once, left to right. Operands go on one
/// stack, operators and grouping markers on another, and array names wait
/// on a third until their subscript is closed. `*` and `/` bind tighter
/// than `+` and `-`; all four are left-associative. Arithmetic is done in
/// `f64`, except that reductions forced by a closing `]` truncate toward
/// zero so subscripts stay integral.
///
/// The table is only read.
///
/// # Errors
/// - [`EvalError::UnknownVariable`] if a name is not registered with the
///   kind it is used as.
/// - [`EvalError::IndexOutOfRange`] if a subscript falls outside the array.
/// - [`EvalError::MalformedExpression`] on stack underflow or unbalanced
///   brackets.
/// - [`EvalError::UnexpectedCharacter`] / [`EvalError::LiteralTooLarge`] for
///   input the lexer rejects.
/// - [`EvalError::ValueTooLarge`] if a variable holds a value beyond the
///   exact range of `f64`.
///
/// # Example
/// ```
/// use subscripta::interpreter::{
///     discovery::discover, evaluator::core::evaluate, loader::load_values_str,
/// };
///
/// let mut table = discover("A[2] + B");
/// load_values_str(&mut table, "A 3 (2,7)\nB 5").unwrap();
/// assert_eq!(evaluate("A[2] + B", &table).unwrap(), 12.0);
/// ```
pub fn evaluate(expression: &str, table: &VariableTable) -> EvalResult<f64> {
    debug!("evaluating '{expression}'");
    let result = Evaluator::new(table).run(expression)?;
    debug!("'{expression}' = {result}");
    Ok(result)
}

/// State of one evaluation.
struct Evaluator<'t> {
    table:          &'t VariableTable,
    operands:       Vec<f64>,
    operators:      Vec<StackOp>,
    /// Array names whose subscript is still open, with their positions.
    pending_arrays: Vec<(String, usize)>,
    /// Byte offset of the token being processed.
    position:       usize,
}

impl<'t> Evaluator<'t> {
    const fn new(table: &'t VariableTable) -> Self {
        Self { table,
               operands: Vec::new(),
               operators: Vec::new(),
               pending_arrays: Vec::new(),
               position: 0 }
    }

    fn run(mut self, expression: &str) -> EvalResult<f64> {
        let mut lexer = Token::lexer(expression).spanned().peekable();
        let mut after_array_name = false;

        while let Some((token, span)) = lexer.next() {
            self.position = span.start;
            let token = token.map_err(|()| lex_error(&expression[span.clone()], span.start))?;
            let is_array_name = matches!(token, Token::Identifier(_))
                                && matches!(lexer.peek(), Some((Ok(Token::LBracket), _)));

            match token {
                Token::Integer(value) => {
                    let value = i64_to_f64_checked(value,
                                                   EvalError::LiteralTooLarge { position:
                                                                                    self.position })?;
                    self.operands.push(value);
                },
                Token::Identifier(name) => {
                    if is_array_name {
                        self.pending_arrays.push((name, self.position));
                    } else {
                        let value = self.scalar(&name)?;
                        self.operands.push(value);
                    }
                },
                Token::LParen => self.operators.push(StackOp::Paren),
                Token::RParen => self.close_group(StackOp::Paren)?,
                Token::LBracket => {
                    if !after_array_name {
                        return Err(EvalError::malformed("'[' is not preceded by an array name",
                                                        self.position));
                    }
                    self.operators.push(StackOp::Subscript);
                },
                Token::RBracket => {
                    self.close_group(StackOp::Subscript)?;
                    self.resolve_subscript()?;
                },
                Token::Plus => self.push_operator(BinaryOperator::Add)?,
                Token::Minus => self.push_operator(BinaryOperator::Sub)?,
                Token::Star => self.push_operator(BinaryOperator::Mul)?,
                Token::Slash => self.push_operator(BinaryOperator::Div)?,
                Token::Ignored => {},
            }
            after_array_name = is_array_name;
        }

        self.position = expression.len();
        self.finish()
    }

    /// Reduces every pending operator that binds at least as tightly as
    /// `op`, then pushes `op`.
    fn push_operator(&mut self, op: BinaryOperator) -> EvalResult<()> {
        while let Some(StackOp::Binary(top)) = self.operators.last().copied()
              && top.precedence() >= op.precedence()
        {
            self.operators.pop();
            self.reduce(top, false)?;
        }
        self.operators.push(StackOp::Binary(op));
        Ok(())
    }

    /// Reduces until the innermost `marker` and removes it.
    ///
    /// Reductions inside a subscript are truncated.
    fn close_group(&mut self, marker: StackOp) -> EvalResult<()> {
        let truncate = marker == StackOp::Subscript;
        loop {
            match self.operators.pop() {
                Some(StackOp::Binary(op)) => self.reduce(op, truncate)?,
                Some(found) if found == marker => return Ok(()),
                Some(_) => {
                    return Err(EvalError::malformed(format!("{} closes the wrong bracket",
                                                            closer(marker)),
                                                    self.position));
                },
                None => {
                    return Err(EvalError::malformed(format!("unmatched {}", closer(marker)),
                                                    self.position));
                },
            }
        }
    }

    /// Replaces the index on top of the operand stack with the element of
    /// the innermost pending array.
    fn resolve_subscript(&mut self) -> EvalResult<()> {
        let index = self.pop_operand()?;
        let (name, name_position) =
            self.pending_arrays
                .pop()
                .ok_or_else(|| EvalError::malformed("subscript without an array name",
                                                    self.position))?;

        let array = self.table
                        .array(&name)
                        .ok_or_else(|| EvalError::UnknownVariable { name:     name.clone(),
                                                                    kind:     VariableKind::Array,
                                                                    position: name_position, })?;

        let slot = subscript_to_index(index, array.size()).ok_or_else(|| {
                       EvalError::IndexOutOfRange { name: name.clone(),
                                                    index: truncate_subscript(index),
                                                    size: array.size(),
                                                    position: self.position }
                   })?;
        let stored = array.values[slot];
        let value = i64_to_f64_checked(stored, ()).map_err(|()| {
                                                      EvalError::ValueTooLarge { name:     name.clone(),
                                                                                 value:    stored,
                                                                                 position: self.position, }
                                                  })?;

        trace!("{name}[{slot}] = {value}");
        self.operands.push(value);
        Ok(())
    }

    /// Drains the operator stack and returns the single remaining operand.
    fn finish(mut self) -> EvalResult<f64> {
        while let Some(op) = self.operators.pop() {
            match op {
                StackOp::Binary(op) => self.reduce(op, false)?,
                StackOp::Paren => return Err(EvalError::malformed("unclosed '('", self.position)),
                StackOp::Subscript => {
                    return Err(EvalError::malformed("unclosed '['", self.position));
                },
            }
        }

        match self.operands.as_slice() {
            [result] => Ok(*result),
            [] => Err(EvalError::malformed("empty expression", self.position)),
            _ => Err(EvalError::malformed("operands without an operator between them",
                                          self.position)),
        }
    }

    /// Pops two operands, applies `op` and pushes the result.
    ///
    /// The operand pushed first is the left-hand side.
    fn reduce(&mut self, op: BinaryOperator, truncate: bool) -> EvalResult<()> {
        let right = self.pop_operand()?;
        let left = self.pop_operand()?;
        let mut result = op.apply(left, right);
        if truncate {
            result = truncate_subscript(result);
        }
        trace!("{left} {op} {right} = {result}");
        self.operands.push(result);
        Ok(())
    }

    fn pop_operand(&mut self) -> EvalResult<f64> {
        self.operands
            .pop()
            .ok_or_else(|| EvalError::malformed("missing operand", self.position))
    }

    fn scalar(&self, name: &str) -> EvalResult<f64> {
        let value =
            self.table
                .scalar_value(name)
                .ok_or_else(|| EvalError::UnknownVariable { name:     name.to_string(),
                                                            kind:     VariableKind::Scalar,
                                                            position: self.position, })?;
        i64_to_f64_checked(value, ()).map_err(|()| EvalError::ValueTooLarge { name: name.to_string(),
                                                                               value,
                                                                               position:
                                                                                   self.position })
    }
}

const fn closer(marker: StackOp) -> &'static str {
    match marker {
        StackOp::Subscript => "']'",
        StackOp::Paren | StackOp::Binary(_) => "')'",
    }
}

/// Classifies a slice the lexer could not turn into a token.
fn lex_error(slice: &str, position: usize) -> EvalError {
    if !slice.is_empty() && slice.chars().all(|c| c.is_ascii_digit()) {
        EvalError::LiteralTooLarge { position }
    } else {
        EvalError::UnexpectedCharacter { token: slice.to_string(),
                                         position }
    }
}
