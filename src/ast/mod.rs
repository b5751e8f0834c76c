//! Template syntax tree.
//!
//! A template parses into a flat sequence of [`Chunk`]s. Text chunks are copied to the
//! output verbatim; macro chunks name a binding, carry their arguments, and (for body
//! macros like `fn` or `foreachfn`) own the chunks between the opening tag and the
//! matching `end` tag.

use std::fmt;

use miette::SourceSpan;

// ============================================================================
// SOURCE LOCATIONS
// ============================================================================

/// Byte range into a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    pub fn join(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Shifts a span relative to `base` into absolute coordinates.
    pub fn offset(self, base: usize) -> Span {
        Span::new(self.start + base, self.end + base)
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

// ============================================================================
// CHUNKS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Text(TextChunk),
    Macro(MacroChunk),
}

/// Verbatim template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub text: String,
    pub span: Span,
}

/// A `{{name args...}}` invocation, possibly with a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroChunk {
    pub name: String,
    pub args: Vec<Arg>,
    pub children: Vec<Chunk>,
    pub span: Span,
    /// 1-based line of the opening `{{`.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Literal(String),
    Nested(MacroChunk),
}

impl Chunk {
    pub fn span(&self) -> Span {
        match self {
            Chunk::Text(text) => text.span,
            Chunk::Macro(mac) => mac.span,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Chunk::Text(text) => Some(&text.text),
            Chunk::Macro(_) => None,
        }
    }

    pub fn as_macro(&self) -> Option<&MacroChunk> {
        match self {
            Chunk::Macro(mac) => Some(mac),
            Chunk::Text(_) => None,
        }
    }

    /// Indented tree rendering, one chunk per line.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let indent = "    ".repeat(depth);
        match self {
            Chunk::Text(text) => {
                out.push_str(&indent);
                out.push_str(&format!("{:?}", text.text));
                out.push('\n');
            }
            Chunk::Macro(mac) => {
                out.push_str(&indent);
                out.push_str(&mac.to_string());
                out.push('\n');
                for child in &mac.children {
                    child.write_outline(out, depth + 1);
                }
            }
        }
    }
}

impl fmt::Display for MacroChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}", self.name)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        write!(f, "}}}}")
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Literal(text) => write!(f, "{text}"),
            Arg::Nested(mac) => write!(f, "{mac}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: Vec<Arg>) -> MacroChunk {
        MacroChunk {
            name: name.to_string(),
            args,
            children: Vec::new(),
            span: Span::default(),
            line: 1,
        }
    }

    #[test]
    fn macro_display_nests_arguments() {
        let inner = call("types", Vec::new());
        let outer = call("sub", vec![Arg::Nested(inner), Arg::Literal("\\*".into()), Arg::Literal("".into())]);
        assert_eq!(outer.to_string(), "{{sub {{types}} \\* }}");
    }

    #[test]
    fn outline_indents_children() {
        let mut body = call("fn", vec![Arg::Literal("f".into()), Arg::Literal("MPI_Send".into())]);
        body.children.push(Chunk::Text(TextChunk {
            text: "x\n".into(),
            span: Span::new(0, 2),
        }));
        let outline = Chunk::Macro(body).outline();
        assert_eq!(outline, "{{fn f MPI_Send}}\n    \"x\\n\"\n");
    }

    #[test]
    fn span_join_and_offset() {
        let a = Span::new(4, 6);
        let b = Span::new(1, 3);
        assert_eq!(a.join(b), Span::new(1, 6));
        assert_eq!(b.offset(10), Span::new(11, 13));
        assert_eq!(SourceSpan::from(a).len(), 2);
    }
}
