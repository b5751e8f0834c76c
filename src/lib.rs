pub use crate::ast::Span;
pub use crate::diagnostics::{to_error_source, ErrorContext, ErrorType, WrapError, WrapResult};

pub mod ast;
pub mod cli;
pub mod codegen;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod macros;
pub mod mpi;
pub mod runtime;
pub mod syntax;
