use std::fmt;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Binding strength; `*` and `/` bind tighter than `+` and `-`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Computes `left op right` in real arithmetic.
    ///
    /// Division by zero follows IEEE-754 and yields an infinity or NaN.
    ///
    /// # Example
    /// ```
    /// use subscripta::interpreter::evaluator::stack::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(7.0, 2.0), 5.0);
    /// assert_eq!(BinaryOperator::Div.apply(7.0, 2.0), 3.5);
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        };
        write!(f, "{symbol}")
    }
}

/// An entry of the operator stack.
///
/// Grouping markers are kept apart from operators so that `)` and `]`
/// can only close the scope that was opened with the matching bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    /// `(` grouping marker.
    Paren,
    /// `[` subscript marker.
    Subscript,
    /// A pending binary operator.
    Binary(BinaryOperator),
}
