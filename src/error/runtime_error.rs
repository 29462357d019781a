#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The full input line.
        input: String,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The full input line.
        input: String,
    },
    /// A literal value was too large to be represented safely as a real
    /// number.
    LiteralTooLarge {
        /// The full input line.
        input: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { input } => {
                write!(f, "Error in line '{input}': Division by zero.")
            },
            Self::Overflow { input } => write!(f,
                                               "Error in line '{input}': Integer overflow while trying to compute result."),
            Self::LiteralTooLarge { input } => {
                write!(f, "Error in line '{input}': Literal is too large.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
