//! Recursive-descent template parser.
//!
//! Consumes the outer token stream and builds a [`Chunk`] tree. Whenever a text token
//! appears between braces it is re-lexed into identifiers and pushed back onto the front
//! of the stream, so `{{sub {{types}} "\*" ""}}` parses as one macro with a nested call.
//!
//! Rules enforced here:
//! - a bare number `{{2}}` is shorthand for `{{args 2}}`;
//! - a body macro consumes chunks until `{{end<name>}}`; running out of input first is an
//!   error, as is an `end<name>` tag with no open body;
//! - body macros cannot appear as arguments.

use std::collections::VecDeque;

use crate::{
    ast::{Arg, Chunk, MacroChunk, TextChunk},
    diagnostics::SourceArc,
    err_ctx,
    macros::MacroRegistry,
    syntax::lexer::{lex_inner, lex_outer, OuterMode, Token, TokenKind},
    Span, WrapResult,
};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Lexes and parses one template file.
pub fn parse_template(
    text: &str,
    source: &SourceArc,
    mode: OuterMode,
    registry: &MacroRegistry,
) -> WrapResult<Vec<Chunk>> {
    let tokens = lex_outer(text, mode, source)?;
    let mut parser = TemplateParser::new(tokens, source.clone(), registry, text.len());
    parser.text(None)
}

// ============================================================================
// PARSER
// ============================================================================

/// Closing tag a body is waiting for, with the span of the tag that opened it.
struct EndTag {
    name: String,
    opened_at: Span,
}

struct TemplateParser<'r> {
    tokens: VecDeque<Token>,
    next: Option<Token>,
    source: SourceArc,
    registry: &'r MacroRegistry,
    eof: usize,
}

impl<'r> TemplateParser<'r> {
    fn new(tokens: Vec<Token>, source: SourceArc, registry: &'r MacroRegistry, eof: usize) -> Self {
        let mut tokens: VecDeque<Token> = tokens.into();
        let next = tokens.pop_front();
        Self {
            tokens,
            next,
            source,
            registry,
            eof,
        }
    }

    fn advance(&mut self) {
        self.next = self.tokens.pop_front();
    }

    /// Puts `tokens` back in front of the lookahead token.
    fn push_tokens(&mut self, tokens: Vec<Token>) {
        if let Some(next) = self.next.take() {
            self.tokens.push_front(next);
        }
        for token in tokens.into_iter().rev() {
            self.tokens.push_front(token);
        }
        self.advance();
    }

    fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        if self.next.as_ref().is_some_and(|t| t.kind == kind) {
            let token = self.next.take();
            self.advance();
            token
        } else {
            None
        }
    }

    fn expect(&mut self, kind: TokenKind) -> WrapResult<Token> {
        if let Some(token) = self.accept(kind) {
            return Ok(token);
        }
        Err(self.unexpected())
    }

    fn unexpected(&self) -> crate::WrapError {
        match &self.next {
            Some(token) => err_ctx!(
                Syntax,
                format!("Unexpected token: {} on line {}", token, token.line),
                &self.source,
                token.span
            ),
            None => err_ctx!(Syntax, "Unexpected end of file.", &self.source, Span::new(self.eof, self.eof)),
        }
    }

    /// Re-lexes a text token found between braces and pushes the identifiers back.
    fn relex(&mut self, text: Token) -> WrapResult<()> {
        let tokens = lex_inner(&text, &self.source)?;
        self.push_tokens(tokens);
        Ok(())
    }

    /// Parses the rest of a macro after its opening `{{`.
    fn macro_chunk(&mut self, accept_body_macros: bool, open: Token) -> WrapResult<MacroChunk> {
        if let Some(text) = self.accept(TokenKind::Text) {
            self.relex(text)?;
        }
        let name = self.expect(TokenKind::Identifier)?;
        if !accept_body_macros && self.registry.is_body_macro(&name.value) {
            return Err(err_ctx!(
                Syntax,
                format!("Cannot use body macro '{}' in expression context.", name.value),
                &self.source,
                name.span,
                "body macros may only appear at statement level"
            ));
        }

        let mut args = Vec::new();
        loop {
            if let Some(nested) = self.accept(TokenKind::OpenBrace) {
                args.push(Arg::Nested(self.macro_chunk(false, nested)?));
            } else if let Some(ident) = self.accept(TokenKind::Identifier) {
                args.push(Arg::Literal(ident.value));
            } else if let Some(text) = self.accept(TokenKind::Text) {
                self.relex(text)?;
            } else {
                let close = self.expect(TokenKind::CloseBrace)?;
                return Ok(MacroChunk {
                    name: name.value,
                    args,
                    children: Vec::new(),
                    span: open.span.join(close.span),
                    line: open.line,
                });
            }
        }
    }

    /// Parses chunks until end of input or until the closing tag `end` names.
    fn text(&mut self, end: Option<EndTag>) -> WrapResult<Vec<Chunk>> {
        let mut chunks = Vec::new();
        while self.next.is_some() {
            if let Some(text) = self.accept(TokenKind::Text) {
                chunks.push(Chunk::Text(TextChunk {
                    text: text.value,
                    span: text.span,
                }));
            } else if let Some(open) = self.accept(TokenKind::OpenBrace) {
                let mut chunk = self.macro_chunk(true, open)?;

                if end.as_ref().is_some_and(|tag| tag.name == chunk.name) {
                    return Ok(chunks);
                }

                if chunk.name.parse::<i64>().is_ok() {
                    let index = std::mem::replace(&mut chunk.name, "args".to_string());
                    chunk.args = vec![Arg::Literal(index)];
                } else if self.registry.is_body_macro(&chunk.name) {
                    let tag = EndTag {
                        name: format!("end{}", chunk.name),
                        opened_at: chunk.span,
                    };
                    chunk.children = self.text(Some(tag))?;
                } else if let Some(opened) = chunk.name.strip_prefix("end") {
                    if self.registry.is_body_macro(opened) {
                        return Err(err_ctx!(
                            Syntax,
                            format!("Unmatched closing tag '{}' on line {}", chunk.name, chunk.line),
                            &self.source,
                            chunk.span
                        ));
                    }
                }
                chunks.push(Chunk::Macro(chunk));
            } else {
                return Err(self.unexpected());
            }
        }

        if let Some(tag) = end {
            return Err(err_ctx!(
                Syntax,
                format!("Unterminated body: expected {{{{{}}}}} before end of file.", tag.name),
                &self.source,
                tag.opened_at,
                "every body macro needs a matching end tag"
            ));
        }
        Ok(chunks)
    }
}
