use logos::Logos;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// Represents the kind of a lexical token, including its literal value.
///
/// The keyword, operator and delimiter tables of the language are the
/// `#[token]` attributes below; `logos` compiles them into a single static
/// automaton at build time.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum TokenKind {
    /// `PROGRAM`
    #[token("PROGRAM")]
    Program,
    /// `while`
    #[token("while")]
    While,
    /// `def`
    #[token("def")]
    Def,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `elif`, reserved but never accepted by the grammar.
    #[token("elif")]
    Elif,
    /// `for`, reserved but never accepted by the grammar.
    #[token("for")]
    For,
    /// `return`
    #[token("return")]
    Return,
    /// `lambda`
    #[token("lambda")]
    Lambda,
    /// Boolean literal tokens: `True` or `False`.
    #[token("True", |_| true)]
    #[token("False", |_| false)]
    Bool(bool),
    /// Numeric literal tokens such as `42`, `-7`, `3.14` or `.5`.
    ///
    /// Every run of digits, dots and minus signs is scanned as one literal. A
    /// `-` directly followed by a digit starts a literal instead of being an
    /// operator, so `x-1` lexes as `x` followed by `-1` while `--x` is two
    /// minus signs.
    #[regex(r"[0-9.][0-9.\-]*", parse_number)]
    #[regex(r"-[0-9][0-9.\-]*", parse_number)]
    Number(Number),
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `=`
    #[token("=")]
    Assign,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `:`
    #[token(":")]
    Colon,
    /// ```text
    /// /* Block comments, possibly spanning lines. */
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", skip_comment, allow_greedy = true)]
    Comment,
    /// A `/*` with no closing `*/`. Only matches when the full comment
    /// pattern does not, and always fails.
    #[token("/*", unterminated_comment)]
    UnterminatedComment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line      += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Program => write!(f, "PROGRAM"),
            Self::While => write!(f, "while"),
            Self::Def => write!(f, "def"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::Elif => write!(f, "elif"),
            Self::For => write!(f, "for"),
            Self::Return => write!(f, "return"),
            Self::Lambda => write!(f, "lambda"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Number(Number::Int(n)) => write!(f, "{n}"),
            Self::Number(Number::Float(x)) => write!(f, "{x:?}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::DoubleSlash => write!(f, "//"),
            Self::Assign => write!(f, "="),
            Self::Greater => write!(f, ">"),
            Self::Less => write!(f, "<"),
            Self::GreaterEqual => write!(f, ">="),
            Self::LessEqual => write!(f, "<="),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Colon => write!(f, ":"),
            Self::Comment => write!(f, "/* ... */"),
            Self::UnterminatedComment => write!(f, "/*"),
            Self::NewLine => write!(f, "\\n"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// The value of a numeric literal token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// The literal parsed as a 64-bit integer.
    Int(i64),
    /// The literal only parsed as a floating-point number.
    Float(f64),
}

/// Failure reasons reported by the generated automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token starts with the current character.
    #[default]
    InvalidCharacter,
    /// A numeric run parsed as neither an integer nor a float.
    InvalidNumeric,
    /// The source ended inside a block comment.
    UnterminatedComment,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so every
/// token can be given a line and column for diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// A token together with the position where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was read, including any literal value.
    pub kind:     TokenKind,
    /// Line and column of the first character.
    pub position: Position,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' at {}", self.kind, self.position)
    }
}

/// Converts source text into tokens on demand.
///
/// The lexer is lazy: each call to [`Lexer::next_token`] scans just far enough
/// to produce one token.
///
/// # Example
/// ```
/// use amython::interpreter::lexer::{Lexer, Number, TokenKind};
///
/// let mut lexer = Lexer::new("x = -3");
///
/// let x = lexer.next_token().unwrap().unwrap();
/// assert_eq!(x.kind, TokenKind::Identifier("x".to_string()));
///
/// let assign = lexer.next_token().unwrap().unwrap();
/// assert_eq!(assign.kind, TokenKind::Assign);
/// assert_eq!(assign.position.column, 3);
///
/// let number = lexer.next_token().unwrap().unwrap();
/// assert_eq!(number.kind, TokenKind::Number(Number::Int(-3)));
///
/// assert!(lexer.next_token().unwrap().is_none());
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras { line:       1,
                                                                          line_start: 0, }), }
    }

    /// Returns the next token, or `None` once the source is exhausted.
    ///
    /// # Errors
    /// Returns a `ParseError` for an invalid character, a malformed numeric
    /// literal or an unterminated comment.
    pub fn next_token(&mut self) -> ParseResult<Option<Token>> {
        let Some(result) = self.inner.next() else {
            return Ok(None);
        };

        let position = self.current_position();

        match result {
            Ok(kind) => Ok(Some(Token { kind, position })),
            Err(LexError::InvalidCharacter) => {
                let character = self.inner.slice().chars().next().unwrap_or('\0');
                Err(ParseError::InvalidCharacter { character, position })
            },
            Err(LexError::InvalidNumeric) => {
                Err(ParseError::InvalidNumeric { literal: self.inner.slice().to_string(),
                                                 position })
            },
            Err(LexError::UnterminatedComment) => {
                Err(ParseError::UnterminatedComment { position })
            },
        }
    }

    /// Position of the token most recently scanned.
    fn current_position(&self) -> Position {
        let extras = &self.inner.extras;
        Position::new(extras.line,
                      self.inner.span().start.saturating_sub(extras.line_start) + 1)
    }
}

impl Iterator for Lexer<'_> {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Parses a numeric literal from the current token slice.
///
/// The slice is tried as an `i64` first and as an `f64` second.
///
/// # Returns
/// - `Ok(Number::Int)` or `Ok(Number::Float)` on success.
/// - `Err(LexError::InvalidNumeric)` when neither parse succeeds (e.g.
///   `3.1.4` or `1-2`).
fn parse_number(lex: &mut logos::Lexer<TokenKind>) -> Result<Number, LexError> {
    let literal = lex.slice();

    literal.parse()
           .map(Number::Int)
           .or_else(|_| literal.parse().map(Number::Float))
           .map_err(|_| LexError::InvalidNumeric)
}

/// Skips a block comment, keeping the line counter in step with any newlines
/// inside it.
fn skip_comment(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    let comment = lex.slice();

    if let Some(last_newline) = comment.rfind('\n') {
        lex.extras.line += comment.matches('\n').count();
        lex.extras.line_start = lex.span().start + last_newline + 1;
    }

    logos::Skip
}

/// Rejects a comment opener that has no matching `*/`.
fn unterminated_comment(_: &mut logos::Lexer<TokenKind>) -> Result<(), LexError> {
    Err(LexError::UnterminatedComment)
}
