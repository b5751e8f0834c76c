//! Run configuration shared by every stage of generation.

use std::path::PathBuf;

use crate::{codegen::FortranConvention, syntax::OuterMode};

/// Immutable settings for one generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Emit Fortran entry points next to each C wrapper.
    pub fortran: bool,
    /// Emit the `in_wrapper` reentry guard.
    pub guards: bool,
    /// Omit the front matter and lex templates without C comment awareness.
    pub skip_headers: bool,
    /// Fortran `PMPI_Init` spelling used when weak symbols are unavailable.
    pub init_binding: FortranConvention,
    /// Static-library mode: one source file per wrapped symbol in this directory.
    pub static_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn is_static(&self) -> bool {
        self.static_dir.is_some()
    }

    pub fn outer_mode(&self) -> OuterMode {
        if self.skip_headers {
            OuterMode::Plain
        } else {
            OuterMode::CComments
        }
    }
}
