use amython::{
    ast::Position,
    error::ParseError,
    interpreter::lexer::{Lexer, Number, TokenKind},
};
use pretty_assertions::assert_eq;

fn kinds(src: &str) -> Vec<TokenKind> {
    Lexer::new(src).map(|token| token.map(|t| t.kind))
                   .collect::<Result<_, _>>()
                   .unwrap_or_else(|e| panic!("Lexing {src:?} failed: {e}"))
}

fn first_error(src: &str) -> ParseError {
    Lexer::new(src).find_map(Result::err)
                   .unwrap_or_else(|| panic!("Lexing {src:?} succeeded"))
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("PROGRAM while def if else elif for return lambda"),
               vec![TokenKind::Program,
                    TokenKind::While,
                    TokenKind::Def,
                    TokenKind::If,
                    TokenKind::Else,
                    TokenKind::Elif,
                    TokenKind::For,
                    TokenKind::Return,
                    TokenKind::Lambda]);

    assert_eq!(kinds("whilex _tmp True_ program x1"),
               vec![ident("whilex"), ident("_tmp"), ident("True_"), ident("program"), ident("x1")]);
}

#[test]
fn boolean_literals() {
    assert_eq!(kinds("True False"), vec![TokenKind::Bool(true), TokenKind::Bool(false)]);
}

#[test]
fn numeric_literals() {
    assert_eq!(kinds("42 3.25 .5 -7 -0.5"),
               vec![TokenKind::Number(Number::Int(42)),
                    TokenKind::Number(Number::Float(3.25)),
                    TokenKind::Number(Number::Float(0.5)),
                    TokenKind::Number(Number::Int(-7)),
                    TokenKind::Number(Number::Float(-0.5))]);
}

#[test]
fn minus_before_a_digit_starts_a_literal() {
    assert_eq!(kinds("x-1"), vec![ident("x"), TokenKind::Number(Number::Int(-1))]);
    assert_eq!(kinds("x - 1"),
               vec![ident("x"), TokenKind::Minus, TokenKind::Number(Number::Int(1))]);
    assert_eq!(kinds("-x"), vec![TokenKind::Minus, ident("x")]);
    assert_eq!(kinds("--"), vec![TokenKind::Minus, TokenKind::Minus]);
    assert_eq!(kinds("--x"), vec![TokenKind::Minus, TokenKind::Minus, ident("x")]);
    assert_eq!(kinds("-.5"), vec![TokenKind::Minus, TokenKind::Number(Number::Float(0.5))]);
}

#[test]
fn operators_and_delimiters() {
    assert_eq!(kinds("+ - * / // = > < >= <= == != ( ) , { } :"),
               vec![TokenKind::Plus,
                    TokenKind::Minus,
                    TokenKind::Star,
                    TokenKind::Slash,
                    TokenKind::DoubleSlash,
                    TokenKind::Assign,
                    TokenKind::Greater,
                    TokenKind::Less,
                    TokenKind::GreaterEqual,
                    TokenKind::LessEqual,
                    TokenKind::EqualEqual,
                    TokenKind::BangEqual,
                    TokenKind::LParen,
                    TokenKind::RParen,
                    TokenKind::Comma,
                    TokenKind::LBrace,
                    TokenKind::RBrace,
                    TokenKind::Colon]);
}

#[test]
fn whitespace_and_comments_are_skipped() {
    assert_eq!(kinds("a /* one */ b\r\n\t/* two\n * lines **/ c /**/"),
               vec![ident("a"), ident("b"), ident("c")]);
    assert!(kinds("  \n /* only a comment */ \n").is_empty());
}

#[test]
fn tokens_carry_line_and_column() {
    let positions = Lexer::new("PROGRAM demo {\n  x = 1\n}").map(|t| t.map(|t| t.position))
                                                            .collect::<Result<Vec<_>, _>>()
                                                            .unwrap();

    assert_eq!(positions,
               vec![Position::new(1, 1),
                    Position::new(1, 9),
                    Position::new(1, 14),
                    Position::new(2, 3),
                    Position::new(2, 5),
                    Position::new(2, 7),
                    Position::new(3, 1)]);
}

#[test]
fn comments_spanning_lines_advance_the_line_counter() {
    let token = Lexer::new("/* a\nb */ x").next().unwrap().unwrap();

    assert_eq!(token.kind, ident("x"));
    assert_eq!(token.position, Position::new(2, 6));
}

#[test]
fn invalid_character() {
    assert_eq!(first_error("x = !"),
               ParseError::InvalidCharacter { character: '!',
                                              position:  Position::new(1, 5), });
    assert!(matches!(first_error("x = 'a'"), ParseError::InvalidCharacter { character: '\'', .. }));
}

#[test]
fn invalid_numeric() {
    assert_eq!(first_error("3.1.4"),
               ParseError::InvalidNumeric { literal:  "3.1.4".to_string(),
                                            position: Position::new(1, 1), });
    assert!(matches!(first_error("1-2"), ParseError::InvalidNumeric { .. }));
    assert!(matches!(first_error("x = ."), ParseError::InvalidNumeric { .. }));
}

#[test]
fn unterminated_comment() {
    assert_eq!(first_error("x\n  /* never closed"),
               ParseError::UnterminatedComment { position: Position::new(2, 3) });
}
