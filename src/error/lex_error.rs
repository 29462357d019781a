#[derive(Debug)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// The input contains text that is not a recognized token.
    ///
    /// This covers stray characters, unknown words, operator words that are
    /// not bounded by whitespace on both sides, and digit runs too large to
    /// fit a 64-bit integer.
    UnrecognizedInput {
        /// The text that could not be tokenized.
        slice:  String,
        /// The full input line.
        input:  String,
        /// Byte offset of the unrecognized text in the input line.
        offset: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { slice, input, offset } => write!(f,
                                                                       "Error in line '{input}': Unrecognized input '{slice}' at offset {offset}."),
        }
    }
}

impl std::error::Error for LexError {}
