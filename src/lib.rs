//! # wordcalc
//!
//! wordcalc is a line-oriented calculator written in Rust.
//! It reads one arithmetic expression per line, written with word-based
//! operators ("join", "leave", "group" and "split" standing for addition,
//! subtraction, multiplication and division), and evaluates it to an integer
//! or real result.

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

use logos::Logos;

use crate::{
    error::LexError,
    interpreter::{
        evaluator::eval_expression, lexer::Token, parser::parse_expression, value::Value,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent the syntactic structure of one input line as a small tree. The
/// tree is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression nodes for integer literals and binary operations.
/// - Attaches source offsets to nodes for error reporting.
/// - Maps each operator to its source word for diagnostics.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while processing an
/// input line. It standardizes error reporting and carries detailed
/// information about failures, including the original input line and the
/// byte offset where available.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches the offending line and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation and the runtime
/// value representation to provide a complete pipeline for one input line.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used by the evaluator,
/// such as safe promotion of integers to floating-point values.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Evaluates one input line and returns the resulting value.
///
/// This function lexes and parses the provided line, then evaluates the
/// resulting expression. Each call owns its own lexer and parse state, so
/// evaluating the same line twice always yields the same result.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. The error message
/// always includes the original input line.
///
/// # Examples
/// ```
/// use wordcalc::eval_line;
///
/// // "join" stands for addition.
/// let value = eval_line("3 join 5").unwrap();
/// assert_eq!(value.to_string(), "8");
///
/// // "split" is true division, so the result may be fractional.
/// let value = eval_line("10 split 4").unwrap();
/// assert_eq!(value.to_string(), "2.5");
///
/// // Unrecognized words are lex errors.
/// let res = eval_line("3 plus 5");
/// assert!(res.is_err());
/// ```
pub fn eval_line(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            let slice = lexer.slice();
            return Err(Box::new(LexError::UnrecognizedInput { slice:  slice.to_string(),
                                                              input:  source.to_string(),
                                                              offset: lexer.span().start, }));
        }
    }

    let mut iter = tokens.iter().peekable();

    match parse_expression(&mut iter, source) {
        Ok(expr) => match eval_expression(&expr, source) {
            Ok(value) => Ok(value),
            Err(e) => Err(Box::new(e)),
        },
        Err(e) => Err(Box::new(e)),
    }
}
