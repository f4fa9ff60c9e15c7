use crate::interpreter::variables::VariableKind;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// An identifier was not registered as a variable of the expected kind.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// The kind the evaluator expected to find.
        kind:     VariableKind,
        /// Byte offset in the expression where the identifier starts.
        position: usize,
    },
    /// An array subscript resolved to an index outside the declared size.
    IndexOutOfRange {
        /// The name of the array.
        name:     String,
        /// The (already truncated) index that was requested.
        index:    f64,
        /// The declared size of the array.
        size:     usize,
        /// Byte offset of the closing `]`.
        position: usize,
    },
    /// A stack precondition was violated: missing operands, unbalanced
    /// brackets or an empty expression.
    MalformedExpression {
        /// What went wrong.
        details:  String,
        /// Byte offset where the problem was detected.
        position: usize,
    },
    /// A character outside the expression grammar.
    UnexpectedCharacter {
        /// The offending slice of input.
        token:    String,
        /// Byte offset of the slice.
        position: usize,
    },
    /// An integer literal does not fit the numeric range of the evaluator.
    LiteralTooLarge {
        /// Byte offset of the literal.
        position: usize,
    },
    /// A variable holds a value the evaluator cannot represent exactly.
    ValueTooLarge {
        /// The name of the variable.
        name:     String,
        /// The stored value.
        value:    i64,
        /// Byte offset where the variable was read.
        position: usize,
    },
}

impl EvalError {
    /// Shorthand for building a [`EvalError::MalformedExpression`].
    pub(crate) fn malformed(details: impl Into<String>, position: usize) -> Self {
        Self::MalformedExpression { details: details.into(),
                                    position }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, kind, position } => {
                write!(f, "Error at position {position}: Unknown {kind} variable '{name}'.")
            },
            Self::IndexOutOfRange { name,
                                    index,
                                    size,
                                    position, } => write!(f,
                                                          "Error at position {position}: Index {index} is out of range for array '{name}' of size {size}."),
            Self::MalformedExpression { details, position } => {
                write!(f, "Error at position {position}: Malformed expression: {details}.")
            },
            Self::UnexpectedCharacter { token, position } => {
                write!(f, "Error at position {position}: Unexpected character: {token}.")
            },
            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },
            Self::ValueTooLarge { name,
                                  value,
                                  position, } => write!(f,
                                                        "Error at position {position}: Value {value} of variable '{name}' is too large."),
        }
    }
}

impl std::error::Error for EvalError {}
