/// A binary arithmetic operator as written in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^` or `**`
    Pow,
}

impl BinaryOperator {
    /// Returns the symbol used as the head of symbolic expressions built by
    /// this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Operator chains keep every operand of one precedence level in a single
/// node; the evaluator folds them (left to right for additive and
/// multiplicative chains, right to left for exponentiation). Chains and calls
/// with a single operand are never built: the parser returns the operand
/// itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a symbol by name.
    Symbol {
        /// Name of the symbol.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A signed atom with a leading `-`.
    Negate {
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `a + b - c`
    Additive {
        /// The operands, at least two.
        operands:  Vec<Self>,
        /// The operators between consecutive operands.
        operators: Vec<BinaryOperator>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `a * b / c % d`
    Multiplicative {
        /// The operands, at least two.
        operands:  Vec<Self>,
        /// The operators between consecutive operands.
        operators: Vec<BinaryOperator>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `a ^ b ^ c`, right-associative.
    Exponential {
        /// The operands, at least two.
        operands: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Juxtaposed atoms such as `sin 0`, `f(x)` or `2 deg`.
    Call {
        /// The atoms of the chain, at least two.
        atoms: Vec<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A comma separated list, such as `(3, 2, 2)`.
    Tuple {
        /// Elements of the tuple, at least two.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
}

impl Expr {
    /// Returns the source line of the expression.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Symbol { line, .. }
            | Self::Negate { line, .. }
            | Self::Additive { line, .. }
            | Self::Multiplicative { line, .. }
            | Self::Exponential { line, .. }
            | Self::Call { line, .. }
            | Self::Tuple { line, .. } => *line,
        }
    }
}

/// A top-level statement of a program.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = value`
    Assignment {
        /// The bound name.
        name:  String,
        /// The right-hand side.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A bare expression whose value is printed.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Returns the source line of the statement.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Assignment { line, .. } | Self::Expression { line, .. } => *line,
        }
    }
}
