/// Lexing errors.
///
/// Defines the error types that can occur while tokenizing an input line.
/// Lex errors include unrecognized characters, operator words that are not
/// bounded by whitespace, and integer literals too large to represent.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the error types that can occur while parsing the token stream.
/// Parse errors include unexpected tokens, missing operands, and trailing
/// tokens after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types that can be raised during evaluation, such as
/// division by zero or integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
