//! Template expansion runtime: values, scopes, output sinks and the evaluator.

pub mod context;
pub mod eval;
pub mod output;
pub mod scope;
pub mod value;

pub use context::EvalContext;
pub use eval::{evaluate_chunk, evaluate_chunks, execute_chunk, execute_macro};
pub use output::{ArtifactGuard, OutputSet, SharedBuffer, Target};
pub use scope::Scope;
pub use value::{Binding, Value};
