/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions produce a value when evaluated. Each variant carries the
/// line it started on so runtime errors can point back at the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal such as `42`.
    NumberLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal such as `"hi"`.
    StringLiteral {
        /// The unescaped text.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    VariableRef {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A prefix `+` or `-`.
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// An arithmetic operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An `is` / `isnt` comparison.
    Comparison {
        /// The operator.
        op:    ComparisonOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use polite::ast::Expr;
    ///
    /// let expr = Expr::VariableRef { name: "x".to_string(),
    ///                                line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::NumberLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::VariableRef { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Comparison { line, .. } => *line,
        }
    }
}

/// Represents one `please ... thankyou` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `call <name> <expr>`: binds a variable, replacing any earlier value.
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `say <expr>`: appends the value to the program output.
    Say {
        /// The expression whose value is output.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `perchance <test> naturally <statements>`.
    Conditional {
        /// Must evaluate to a boolean.
        test: Expr,
        /// Executed once when `test` is true.
        body: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `whilst <test> naturally <statements>`.
    WhileLoop {
        /// Must evaluate to a boolean; re-evaluated before every iteration.
        test: Expr,
        /// Executed for as long as `test` is true.
        body: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A bare expression, evaluated for its errors only.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `please thankyou`.
    NoOp {
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Assign { line, .. }
            | Self::Say { line, .. }
            | Self::Conditional { line, .. }
            | Self::WhileLoop { line, .. }
            | Self::Expression { line, .. }
            | Self::NoOp { line } => *line,
        }
    }
}

/// A whole `hello ... goodbye` program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents an arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`), always producing a real number.
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
}

/// Represents an equality operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Equal to (`is`)
    Is,
    /// Not equal to (`isnt`)
    IsNot,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Is => write!(f, "is"),
            Self::IsNot => write!(f, "isnt"),
        }
    }
}
