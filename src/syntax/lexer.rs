//! Two-layer template lexer.
//!
//! The outer layer splits a template into `{{`, `}}` and text tokens. Text found between
//! braces is re-lexed by the inner layer into identifiers (bare or quoted). Both layers
//! are driven by `syntax/grammar.pest`.

use std::fmt;

use pest::{error::InputLocation, iterators::Pair, Parser};
use pest_derive::Parser;

use crate::{diagnostics::SourceArc, err_ctx, Span, WrapResult};

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
struct TemplateLexer;

// ============================================================================
// TOKENS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    OpenBrace,
    CloseBrace,
    Text,
    Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
    /// 1-based line of the first character.
    pub line: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.value.replace('\n', "\\n"))
    }
}

/// Selects how the outer layer treats C comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OuterMode {
    /// Braces are significant everywhere.
    Plain,
    /// `/* ... */` and `// ...` are emitted as opaque text tokens.
    CComments,
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Splits a whole template into brace and text tokens.
pub fn lex_outer(text: &str, mode: OuterMode, source: &SourceArc) -> WrapResult<Vec<Token>> {
    let rule = match mode {
        OuterMode::Plain => Rule::plain_template,
        OuterMode::CComments => Rule::c_template,
    };
    let pairs = TemplateLexer::parse(rule, text).map_err(|e| lex_error(e, 0, source))?;
    let lines = LineIndex::new(text);

    let mut tokens = Vec::new();
    for pair in pairs.flatten() {
        let kind = match pair.as_rule() {
            Rule::lbrace => TokenKind::OpenBrace,
            Rule::rbrace => TokenKind::CloseBrace,
            Rule::text | Rule::c_text | Rule::block_comment | Rule::line_comment => TokenKind::Text,
            _ => continue,
        };
        tokens.push(make_token(kind, &pair, pair.as_str(), 0, &lines));
    }
    Ok(tokens)
}

/// Re-lexes the text of an outer token found between braces into identifiers.
///
/// Quoted identifiers lose their surrounding quotes; escapes inside them are kept raw.
pub fn lex_inner(token: &Token, source: &SourceArc) -> WrapResult<Vec<Token>> {
    let base = token.span.start;
    let pairs = TemplateLexer::parse(Rule::macro_text, &token.value)
        .map_err(|e| lex_error(e, base, source))?;
    let lines = LineIndex::new(&token.value);

    let mut tokens = Vec::new();
    for pair in pairs.flatten() {
        let value = match pair.as_rule() {
            Rule::quoted => {
                let raw = pair.as_str();
                &raw[1..raw.len() - 1]
            }
            Rule::identifier => pair.as_str(),
            _ => continue,
        };
        let mut token_out = make_token(TokenKind::Identifier, &pair, value, base, &lines);
        token_out.line += token.line - 1;
        tokens.push(token_out);
    }
    Ok(tokens)
}

// ============================================================================
// HELPERS
// ============================================================================

fn make_token(kind: TokenKind, pair: &Pair<Rule>, value: &str, base: usize, lines: &LineIndex) -> Token {
    let span = pair.as_span();
    Token {
        kind,
        value: value.to_string(),
        span: Span::new(span.start(), span.end()).offset(base),
        line: lines.line_of(span.start()),
    }
}

fn lex_error(error: pest::error::Error<Rule>, base: usize, source: &SourceArc) -> crate::WrapError {
    let span = match error.location {
        InputLocation::Pos(pos) => Span::new(pos, pos),
        InputLocation::Span((start, end)) => Span::new(start, end),
    }
    .offset(base);
    err_ctx!(
        Syntax,
        "Unlexable template input",
        source,
        span,
        "check for an unterminated /* comment or quoted identifier"
    )
}

/// Maps byte offsets to 1-based line numbers.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset)
    }
}
