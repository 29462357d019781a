use wordcalc::{
    error::{LexError, ParseError, RuntimeError},
    eval_line,
};

fn assert_result(src: &str, expected: &str) {
    match eval_line(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "Wrong result for: {src}"),
        Err(e) => panic!("Expression failed: {src}\nError: {e}"),
    }
}

fn assert_failure(src: &str) {
    if eval_line(src).is_ok() {
        panic!("Expression succeeded but was expected to fail: {src}")
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("3 join 5", "8");
    assert_result("7 leave 2", "5");
    assert_result("6 group 7", "42");
    assert_result("10 split 4", "2.5");
    assert_result("0 join 0", "0");
}

#[test]
fn division_is_true_division() {
    assert_result("10 split 5", "2.0");
    assert_result("1 split 4", "0.25");
    assert_result("0 split 5", "0.0");
    assert_result("7 split 2", "3.5");
}

#[test]
fn bare_integer_is_a_valid_expression() {
    assert_result("42", "42");
    assert_result("007", "7");
}

#[test]
fn results_can_be_negative() {
    assert_result("3 leave 5", "-2");
    assert_result("0 leave 9", "-9");
}

#[test]
fn additive_chains_fold_left_to_right() {
    assert_result("2 join 3 join 4", "9");
    assert_result("10 leave 3 join 1", "8");
    assert_result("1 join 2 leave 3", "0");
}

#[test]
fn multiplicative_chains_fold_left_to_right() {
    assert_result("2 group 3 group 4", "24");
    assert_result("12 split 3 group 2", "8.0");
    assert_result("10 split 4 split 2", "1.25");
    assert_result("2 group 10 split 4", "5.0");
}

#[test]
fn mixed_operator_categories_are_rejected() {
    assert_failure("2 join 3 group 4");
    assert_failure("2 group 3 join 4");
    assert_failure("2 join 3 split 4");
    assert_failure("2 split 3 leave 4");
}

#[test]
fn mixing_categories_is_a_trailing_token_error() {
    let err = eval_line("2 join 3 group 4").unwrap_err();
    assert!(matches!(err.downcast_ref::<ParseError>(),
                     Some(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn division_by_zero_is_reported() {
    let err = eval_line("5 split 0").unwrap_err();
    assert!(matches!(err.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::DivisionByZero { .. })));

    // Also when the left operand is already real mid-chain.
    let err = eval_line("8 split 2 split 0").unwrap_err();
    assert!(matches!(err.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn operator_words_must_be_whitespace_bounded() {
    let err = eval_line("3joinfoo 5").unwrap_err();
    assert!(matches!(err.downcast_ref::<LexError>(),
                     Some(LexError::UnrecognizedInput { .. })));

    assert_failure("3 join5");
    assert_failure("3join 5");
    assert_failure("join 5"); // nothing before the word counts as unbounded
    assert_failure("5 join"); // nothing after it does too
}

#[test]
fn unknown_words_are_lex_errors() {
    let err = eval_line("3 plus 5").unwrap_err();
    assert!(matches!(err.downcast_ref::<LexError>(),
                     Some(LexError::UnrecognizedInput { .. })));

    assert_failure("three join five");
    assert_failure("3 join 5 !");
}

#[test]
fn malformed_input_is_rejected() {
    // Missing right operand, with the operator word still bounded.
    let err = eval_line("5 join ").unwrap_err();
    assert!(matches!(err.downcast_ref::<ParseError>(),
                     Some(ParseError::UnexpectedEndOfInput { .. })));

    // Missing operator.
    let err = eval_line("5 5").unwrap_err();
    assert!(matches!(err.downcast_ref::<ParseError>(),
                     Some(ParseError::UnexpectedTrailingTokens { .. })));

    assert_failure("");
    assert_failure("   ");
}

#[test]
fn whitespace_runs_between_tokens_are_accepted() {
    assert_result("3  join  5", "8");
    assert_result("3\tjoin\t5", "8");
    assert_result("  3 join 5  ", "8");
}

#[test]
fn error_messages_include_the_input_line() {
    let err = eval_line("3 plus 5").unwrap_err();
    assert!(err.to_string().contains("3 plus 5"));

    let err = eval_line("5 split 0").unwrap_err();
    assert!(err.to_string().contains("5 split 0"));
}

#[test]
fn evaluation_is_idempotent() {
    let first = eval_line("10 split 4").unwrap().to_string();
    let second = eval_line("10 split 4").unwrap().to_string();
    assert_eq!(first, second);

    let first = eval_line("2 join 3 join 4").unwrap().to_string();
    let second = eval_line("2 join 3 join 4").unwrap().to_string();
    assert_eq!(first, second);
}

#[test]
fn integer_overflow_is_reported() {
    let err = eval_line("9223372036854775807 join 1").unwrap_err();
    assert!(matches!(err.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::Overflow { .. })));

    // A digit run that does not fit an i64 at all fails during lexing.
    let err = eval_line("99999999999999999999 join 1").unwrap_err();
    assert!(matches!(err.downcast_ref::<LexError>(),
                     Some(LexError::UnrecognizedInput { .. })));
}

#[test]
fn oversized_operands_cannot_be_promoted_for_division() {
    let err = eval_line("9223372036854775807 split 1").unwrap_err();
    assert!(matches!(err.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::LiteralTooLarge { .. })));
}
