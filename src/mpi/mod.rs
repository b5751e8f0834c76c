//! The MPI side of the generator: what functions exist, what their parameters look like,
//! and what the knowledge tables say each parameter does.

pub mod api;
pub mod decl;
pub mod extract;
pub mod knowledge;
pub mod param;
pub mod source;
mod tables;

pub use api::{HeaderQuirks, MpiApi};
pub use decl::{Declaration, EXTERN_C};
pub use extract::extract;
pub use knowledge::{Direction, KnowledgeBase, ParamTraits};
pub use param::{Param, ELLIPSIS, HANDLE_TYPES};
pub use source::{CompilerSource, PreprocessedFile, SignatureSource};

pub const MPI_INIT: &str = "MPI_Init";
pub const MPI_INIT_THREAD: &str = "MPI_Init_thread";
