use logos::Logos;

/// Represents a lexical token of an expression.
///
/// The evaluator pulls these one at a time while it reduces, so the
/// expression is scanned exactly once.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; scalar or array names such as `x` or `Data`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value if it fits.
/// - `None`: If the literal overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
