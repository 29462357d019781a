use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::value::Value,
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree to a runtime value.
///
/// The tree built by the parser is left-associated, so the recursive walk
/// evaluates a chain left to right: `2 join 3 join 4` computes `(2 + 3) + 4`.
///
/// # Parameters
/// - `expr`: The expression to evaluate.
/// - `source`: The input line, for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
///
/// # Errors
/// - `DivisionByZero` if a division has a zero right operand.
/// - `Overflow` if integer arithmetic overflows.
/// - `LiteralTooLarge` if an integer cannot be promoted to a real exactly.
pub fn eval_expression(expr: &Expr, source: &str) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(Value::Integer(*value)),
        Expr::BinaryOp { left, op, right, .. } => {
            let left = eval_expression(left, source)?;
            let right = eval_expression(right, source)?;

            eval_binary_op(*op, &left, &right, source)
        },
    }
}

/// Evaluates a single binary arithmetic operation.
///
/// The function handles integer and real operands. Mixed types are promoted
/// to real as needed, and division always promotes both operands so that the
/// result is true (non-truncating) division. Division by zero is checked
/// explicitly for both numeric categories.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `source`: The input line, for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
///
/// # Example
/// ```
/// use wordcalc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::eval_binary_op, value::Value},
/// };
///
/// let x = Value::Integer(10);
/// let y = Value::Integer(4);
///
/// let result = eval_binary_op(BinaryOperator::Div, &x, &y, "10 split 4").unwrap();
/// assert_eq!(result, Value::Real(2.5));
/// ```
pub fn eval_binary_op(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      source: &str)
                      -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Value::{Integer, Real};

    match (left, right) {
        (Real(_), _) | (_, Real(_)) => {
            let left = left.as_real(source)?;
            let right = right.as_real(source)?;

            Ok(Real(match op {
                        Add => left + right,
                        Sub => left - right,
                        Mul => left * right,
                        Div => {
                            if right == 0.0 {
                                return Err(RuntimeError::DivisionByZero { input: source.to_string(), });
                            }
                            left / right
                        },
                    }))
        },
        (Integer(a), Integer(b)) => {
            let overflow = || RuntimeError::Overflow { input: source.to_string(), };

            match op {
                Add => a.checked_add(*b).map(Integer).ok_or_else(overflow),
                Sub => a.checked_sub(*b).map(Integer).ok_or_else(overflow),
                Mul => a.checked_mul(*b).map(Integer).ok_or_else(overflow),
                Div => {
                    if *b == 0 {
                        return Err(RuntimeError::DivisionByZero { input: source.to_string(), });
                    }
                    let left = left.as_real(source)?;
                    let right = right.as_real(source)?;

                    Ok(Real(left / right))
                },
            }
        },
    }
}
