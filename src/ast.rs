/// An abstract syntax tree (AST) node representing an expression on one
/// input line.
///
/// `Expr` covers the two constructs of the language: integer literals and
/// binary operations. A chain such as `2 join 3 join 4` is represented as a
/// left-associated tree of `BinaryOp` nodes, so a plain recursive walk
/// evaluates it left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The literal value.
        value:  i64,
        /// Byte offset of the literal in the input line.
        offset: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator word in the input line.
        offset: usize,
    },
}

/// Represents a binary operator.
///
/// Each operator is written as a whitespace-bounded word in the source text.
/// The matched word is recoverable through [`BinaryOperator::word`] for
/// diagnostics; evaluation dispatches on the variant itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`join`)
    Add,
    /// Subtraction (`leave`)
    Sub,
    /// Multiplication (`group`)
    Mul,
    /// Division (`split`)
    Div,
}

impl BinaryOperator {
    /// Returns the source word this operator is written as.
    ///
    /// # Example
    /// ```
    /// use wordcalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Add.word(), "join");
    /// assert_eq!(BinaryOperator::Div.word(), "split");
    /// ```
    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Self::Add => "join",
            Self::Sub => "leave",
            Self::Mul => "group",
            Self::Div => "split",
        }
    }

    /// Returns `true` when the operator belongs to the additive category
    /// (`join`, `leave`).
    ///
    /// An expression chain is locked to one category by its first operator,
    /// so the parser uses this to decide which operators may continue a
    /// chain.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.word())
    }
}
