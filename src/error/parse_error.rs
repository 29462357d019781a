#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The full input line.
        input:  String,
        /// Byte offset of the token in the input line.
        offset: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The full input line.
        input: String,
    },
    /// Found extra tokens after parsing should have completed.
    ///
    /// This includes operators of the other category after a chain has been
    /// locked to additive or multiplicative operators.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token:  String,
        /// The full input line.
        input:  String,
        /// Byte offset of the token in the input line.
        offset: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, input, offset } => write!(f,
                                                                     "Error in line '{input}': Unexpected token '{token}' at offset {offset}."),

            Self::UnexpectedEndOfInput { input } => {
                write!(f, "Error in line '{input}': Unexpected end of input.")
            },

            Self::UnexpectedTrailingTokens { token, input, offset } => write!(f,
                                                                              "Error in line '{input}': Extra tokens after expression at offset {offset}: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
