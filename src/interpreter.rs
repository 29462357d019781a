/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the expression tree, performs the arithmetic, and
/// produces a runtime value. It is the core execution engine of the
/// calculator.
///
/// # Responsibilities
/// - Evaluates expression nodes left to right.
/// - Promotes integers to real numbers where division is involved.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes an input line for further parsing.
///
/// The lexer (tokenizer) reads the raw line and produces a stream of tokens,
/// each corresponding to a meaningful element: an integer literal or one of
/// the four operator words. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens on demand.
/// - Enforces that operator words are bounded by whitespace.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an expression tree. An expression is an integer optionally followed by a
/// chain of same-category operators and further integers.
///
/// # Responsibilities
/// - Converts tokens into structured expression nodes.
/// - Validates the grammar, reporting errors with offset info.
/// - Rejects trailing tokens once a chain is complete.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types produced by evaluation: 64-bit
/// integers and double-precision real numbers. It also provides safe
/// promotion from integer to real and the display rules for results.
///
/// # Responsibilities
/// - Defines the `Value` enum and its variants.
/// - Provides safe promotion between numeric types.
/// - Formats integer results without a decimal point and real results with
///   one.
pub mod value;
