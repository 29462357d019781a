use crate::{
    error::RuntimeError, interpreter::evaluator::EvalResult, util::num::i64_to_f64_checked,
};

/// Represents a runtime value produced by evaluation.
///
/// Addition, subtraction and multiplication of integers stay integers;
/// division always produces a real number, and any further arithmetic on a
/// real stays real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer value (64-bit integer).
    Integer(i64),
    /// A real value (double-precision floating-point).
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `source`: The input line, for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is real or a safely convertible integer.
    /// - `Err(RuntimeError::LiteralTooLarge)`: If the integer is not exactly
    ///   representable.
    ///
    /// # Example
    /// ```
    /// use wordcalc::interpreter::value::Value;
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_real("10").unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// ```
    pub fn as_real(&self, source: &str) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => {
                Ok(i64_to_f64_checked(*n,
                                      RuntimeError::LiteralTooLarge { input: source.to_string(), })?)
            },
        }
    }
}

impl std::fmt::Display for Value {
    /// Integer results print without a decimal point; real results always
    /// print with one, so `10 split 5` displays as `2.0` rather than `2`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => {
                if r.is_finite() && r.fract() == 0.0 {
                    write!(f, "{r:.1}")
                } else {
                    write!(f, "{r}")
                }
            },
        }
    }
}
