use logos::Logos;

/// Represents a lexical token in one input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// End of input is represented by the exhaustion of the lexer iterator. The
/// lexer is constructed fresh per line and never shared across lines.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `join` — the addition operator word.
    #[token("join", operator_is_word_bounded)]
    Join,
    /// `leave` — the subtraction operator word.
    #[token("leave", operator_is_word_bounded)]
    Leave,
    /// `group` — the multiplication operator word.
    #[token("group", operator_is_word_bounded)]
    Group,
    /// `split` — the division operator word.
    #[token("split", operator_is_word_bounded)]
    Split,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the digit run does not fit an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Checks that an operator word is bounded by whitespace on both sides.
///
/// Operator words are only valid when the character immediately before the
/// match and the character immediately after it are whitespace. A word at
/// the very start or very end of the line, or embedded in other text such as
/// `3joinfoo`, is rejected and becomes a lex error.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `true`: The word is surrounded by whitespace and the token is emitted.
/// - `false`: The word is not bounded, which turns the match into an error.
fn operator_is_word_bounded(lex: &logos::Lexer<Token>) -> bool {
    let source = lex.source();
    let span = lex.span();

    let before = source[..span.start].chars().next_back();
    let after = source[span.end..].chars().next();

    before.is_some_and(char::is_whitespace) && after.is_some_and(char::is_whitespace)
}
