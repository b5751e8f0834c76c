//!
//! ****************************************************************************************
//! ** ERROR CONSTRUCTION RULES FOR wrapgen (`err_msg!`, `err_ctx!`)                      **
//! ****************************************************************************************
//!
//! # Overview
//!
//! This module defines the unified, `miette`-based diagnostic system for the generator.
//! Every failure in any stage (argument handling, header extraction, template lexing,
//! parsing, expansion, output) is a [`WrapError`]. There is no recovery anywhere: a
//! `WrapError` always aborts the run, and the variant decides the process exit code.
//!
//! # Error Construction Macros
//!
//! - **Use `err_msg!` for message-only errors.**
//!   - `err_msg!(Extraction, "MATCH FAILED FOR: '{}' in {}", arg, name)`
//!
//! - **Use `err_ctx!` for errors that point into a template.**
//!   - `err_ctx!(Syntax, "Unexpected token", &source, span)`
//!
//! - **Attach the function being expanded with [`WrapError::while_handling`].**
//!   The evaluator does this for every error raised inside a per-function scope.
//!
//! ****************************************************************************************

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

use crate::Span;

pub type SourceArc = Arc<NamedSource<String>>;

pub type WrapResult<T> = Result<T, WrapError>;

type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Type-safe error classification that corresponds to `WrapError` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Bad command-line usage.
    Usage,
    /// Header preprocessing or declaration parsing failed.
    Extraction,
    /// Template lexing, parsing or expansion failed.
    Syntax,
    /// Reading inputs or writing generated sources failed.
    Io,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Usage => "usage",
            ErrorType::Extraction => "extraction",
            ErrorType::Syntax => "syntax",
            ErrorType::Io => "io",
        }
    }

    /// Process exit status for this class of failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorType::Usage => 2,
            _ => 1,
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimal, composable error context for diagnostics.
#[derive(Debug, Default)]
pub struct ErrorContext {
    /// The template (or header) text the span points into.
    pub source: Option<SourceArc>,
    /// The primary span for this error (if any).
    pub span: Option<Span>,
    /// An optional help message.
    pub help: Option<String>,
    /// The API function being expanded when the error happened.
    pub function: Option<String>,
}

impl ErrorContext {
    /// Returns an empty error context.
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a context with both source and span.
    pub fn with_source_and_span(source: SourceArc, span: Span) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            ..Self::default()
        }
    }
}

/// Unified error type for every generator failure mode.
#[derive(Debug, Error)]
pub enum WrapError {
    #[error("Usage error: {message}")]
    Usage {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<BoxedCause>,
    },
    #[error("Extraction error: {message}")]
    Extraction {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<BoxedCause>,
    },
    #[error("Syntax error: {message}")]
    Syntax {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<BoxedCause>,
    },
    #[error("I/O error: {message}")]
    Io {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<BoxedCause>,
    },
}

impl WrapError {
    /// Wraps an I/O failure with a short description of what was being attempted.
    pub fn io(message: impl Into<String>, cause: std::io::Error) -> Self {
        WrapError::Io {
            message: message.into(),
            ctx: ErrorContext::none(),
            source: Some(Box::new(cause)),
        }
    }

    fn ctx(&self) -> &ErrorContext {
        match self {
            WrapError::Usage { ctx, .. }
            | WrapError::Extraction { ctx, .. }
            | WrapError::Syntax { ctx, .. }
            | WrapError::Io { ctx, .. } => ctx,
        }
    }

    fn ctx_mut(&mut self) -> &mut ErrorContext {
        match self {
            WrapError::Usage { ctx, .. }
            | WrapError::Extraction { ctx, .. }
            | WrapError::Syntax { ctx, .. }
            | WrapError::Io { ctx, .. } => ctx,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            WrapError::Usage { message, .. }
            | WrapError::Extraction { message, .. }
            | WrapError::Syntax { message, .. }
            | WrapError::Io { message, .. } => message,
        }
    }

    /// Returns the type-safe classification for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            WrapError::Usage { .. } => ErrorType::Usage,
            WrapError::Extraction { .. } => ErrorType::Extraction,
            WrapError::Syntax { .. } => ErrorType::Syntax,
            WrapError::Io { .. } => ErrorType::Io,
        }
    }

    /// The function that was being expanded, if the error was raised inside one.
    pub fn function(&self) -> Option<&str> {
        self.ctx().function.as_deref()
    }

    /// Records the function being expanded unless a more specific one is already set.
    pub fn while_handling(mut self, function: Option<&str>) -> Self {
        let ctx = self.ctx_mut();
        if ctx.function.is_none() {
            ctx.function = function.map(str::to_string);
        }
        self
    }

    /// Attaches a help line.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.ctx_mut().help = Some(help.into());
        self
    }
}

impl Diagnostic for WrapError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(format!("wrapgen::{}", self.error_type())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let ctx = self.ctx();
        let text = match (&ctx.function, &ctx.help) {
            (Some(function), Some(help)) => format!("while handling {function}. {help}"),
            (Some(function), None) => format!("while handling {function}."),
            (None, Some(help)) => help.clone(),
            (None, None) => return None,
        };
        Some(Box::new(text))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.ctx()
            .source
            .as_ref()
            .map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let ctx = self.ctx();
        // A span is meaningless without the text it points into.
        ctx.source.as_ref()?;
        let span = ctx.span?;
        let label = LabeledSpan::new(Some(self.message().to_string()), span.start, span.len().max(1));
        Some(Box::new(std::iter::once(label)))
    }
}

/// Converts a named text into an `Arc<NamedSource<String>>` for use in error contexts.
pub fn to_error_source(name: impl AsRef<str>, text: impl Into<String>) -> SourceArc {
    Arc::new(NamedSource::new(name.as_ref(), text.into()))
}

/// Constructs a `WrapError` variant with a formatted message and no context.
#[macro_export]
macro_rules! err_msg {
    ($variant:ident, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::WrapError::$variant {
            message: format!($fmt $(, $arg)*),
            ctx: $crate::ErrorContext::none(),
            source: None,
        }
    };
}

/// Constructs a `WrapError` variant pointing at a span of a named source.
///
/// Example:
///   err_ctx!(Syntax, "Unexpected end of file.", &source, span)
#[macro_export]
macro_rules! err_ctx {
    // Message, src, span, help
    ($variant:ident, $msg:expr, $src:expr, $span:expr, $help:expr) => {
        $crate::WrapError::$variant {
            message: $msg.to_string(),
            ctx: $crate::ErrorContext {
                source: Some($crate::diagnostics::SourceArc::clone($src)),
                span: Some($span),
                help: Some(format!("{}", $help)),
                function: None,
            },
            source: None,
        }
    };
    // Message, src, span
    ($variant:ident, $msg:expr, $src:expr, $span:expr) => {
        $crate::WrapError::$variant {
            message: $msg.to_string(),
            ctx: $crate::ErrorContext::with_source_and_span(
                $crate::diagnostics::SourceArc::clone($src),
                $span,
            ),
            source: None,
        }
    };
}

#[cfg(test)]
mod diagnostics_tests {
    use miette::Report;

    use super::*;

    #[test]
    fn report_includes_label_and_function() {
        let src = to_error_source("wrappers.w", "{{fn foo MPI_Nope}}{{endfn}}");
        let err = crate::err_ctx!(Syntax, "MPI_Nope is not an MPI function", &src, Span::new(0, 19))
            .while_handling(Some("MPI_Nope"));
        let output = format!("{:?}", Report::new(err));
        assert!(output.contains("MPI_Nope is not an MPI function"));
        assert!(output.contains("while handling MPI_Nope"));
    }

    #[test]
    fn while_handling_keeps_innermost_function() {
        let err = crate::err_msg!(Syntax, "Invalid macro: '{}'", "bogus")
            .while_handling(Some("MPI_Send"))
            .while_handling(Some("MPI_Recv"));
        assert_eq!(err.function(), Some("MPI_Send"));
    }

    #[test]
    fn exit_codes_follow_taxonomy() {
        assert_eq!(crate::err_msg!(Usage, "no templates").error_type().exit_code(), 2);
        assert_eq!(crate::err_msg!(Syntax, "bad").error_type().exit_code(), 1);
        let io = WrapError::io("writing wrap.c", std::io::Error::other("disk full"));
        assert_eq!(io.error_type(), ErrorType::Io);
        assert_eq!(io.error_type().exit_code(), 1);
    }

    #[test]
    fn help_without_source_has_no_labels() {
        let err = crate::err_msg!(Extraction, "MATCH FAILED FOR: '{}' in {}", "int int", "MPI_Foo")
            .with_help("check the preprocessed header");
        assert!(err.labels().is_none());
        let help = err.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("check the preprocessed header"));
    }
}
