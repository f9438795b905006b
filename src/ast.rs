use std::rc::Rc;

/// A location in the source text.
///
/// Both fields are 1-based. The column counts bytes from the start of the
/// line, which matches characters for the ASCII-only grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number in the source code.
    pub line:   usize,
    /// Column number within the line.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A name as written in the source, together with where it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier text.
    pub name:     String,
    /// Where the identifier starts.
    pub position: Position,
}

impl Identifier {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self { name: name.into(),
               position }
    }
}

/// The root of the tree: `PROGRAM <name> { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The program's declared name.
    pub name: Identifier,
    /// The top-level statements.
    pub body: Block,
}

/// A braced sequence of statements.
///
/// The value of a block is the value of its last statement; a `return` in the
/// middle of a block does not stop the statements after it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// A `def` declaration.
///
/// Declarations are shared behind an [`Rc`]: binding one to its name stores a
/// reference to this node, not a copy.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The declared name.
    pub name:   Identifier,
    /// Formal parameters in order.
    pub params: Vec<Identifier>,
    /// The function body.
    pub body:   Block,
}

/// A `lambda (...): { ... }` expression.
///
/// Lambdas only appear on the right-hand side of an assignment. The
/// assignment target becomes the lambda's defining name, which is what a call
/// uses to find the frame the new scope is parented to.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    /// The name the lambda was assigned to.
    pub defining_name: Identifier,
    /// Formal parameters in order.
    pub params:        Vec<Identifier>,
    /// The lambda body.
    pub body:          Block,
}

/// A call such as `f(1, x + 2)`, used either as a statement or inside an
/// expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// The name being called.
    pub callee: Identifier,
    /// Argument expressions, evaluated left to right.
    pub args:   Vec<Expr>,
}

/// A statement inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `target = value`. The value may be a lambda.
    Assign {
        /// The name being bound.
        target: Identifier,
        /// The value expression.
        value:  Expr,
    },
    /// `def name(params) { ... }`.
    FunctionDecl(Rc<FunctionDecl>),
    /// A call evaluated for its effect and value.
    Call(FunctionCall),
    /// `if (predicate) { ... } else { ... }`. Both branches are mandatory.
    If {
        /// The condition.
        predicate:   Expr,
        /// Evaluated when the condition is true.
        then_branch: Block,
        /// Evaluated when the condition is false.
        else_branch: Block,
    },
    /// `while (predicate) { ... }`.
    While {
        /// The loop condition, re-evaluated before every iteration.
        predicate: Expr,
        /// The loop body.
        body:      Block,
    },
    /// `return value`.
    Return {
        /// The returned expression.
        value:    Expr,
        /// Position of the `return` keyword.
        position: Position,
    },
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal.
    Int {
        /// The literal value.
        value:    i64,
        /// Line and column in the source code.
        position: Position,
    },
    /// A floating-point literal.
    Float {
        /// The literal value.
        value:    f64,
        /// Line and column in the source code.
        position: Position,
    },
    /// `True` or `False`.
    Bool {
        /// The literal value.
        value:    bool,
        /// Line and column in the source code.
        position: Position,
    },
    /// Reference to a variable by name.
    Var(Identifier),
    /// Unary `+` or `-`.
    Unary {
        /// The operator.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// A binary arithmetic or relational operation.
    Binary {
        /// The operator.
        op:       BinaryOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// A call whose result is used as a value.
    Call(FunctionCall),
    /// A lambda expression; evaluates to itself.
    Lambda(Rc<Lambda>),
}

impl Expr {
    /// Gets the source position of the expression.
    ///
    /// ## Example
    /// ```
    /// use amython::ast::{Expr, Identifier, Position};
    ///
    /// let expr = Expr::Var(Identifier::new("x", Position::new(5, 3)));
    ///
    /// assert_eq!(expr.position(), Position::new(5, 3));
    /// ```
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Int { position, .. }
            | Self::Float { position, .. }
            | Self::Bool { position, .. }
            | Self::Unary { position, .. }
            | Self::Binary { position, .. } => *position,
            Self::Var(ident) => ident.position,
            Self::Call(call) => call.callee.position,
            Self::Lambda(lambda) => lambda.defining_name.position,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), truncating on two integers.
    Div,
    /// True division (`//`), always floating point.
    TrueDiv,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_relational(self) -> bool {
        matches!(self,
                 Self::Greater
                 | Self::Less
                 | Self::GreaterEqual
                 | Self::LessEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::TrueDiv => "//",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}
