//! Template syntax: a two-layer lexer and a recursive-descent parser.

pub mod lexer;
pub mod parser;

pub use lexer::{lex_inner, lex_outer, OuterMode, Token, TokenKind};
pub use parser::parse_template;
