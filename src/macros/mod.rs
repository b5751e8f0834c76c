//! Template macros.
//!
//! A macro is a named native handler with a declared arity. Body macros additionally
//! receive the chunks between their opening tag and `end<name>`; the parser consults the
//! registry to know which names open a body.
//!
//! - [`values`]: value macros (`sub`, `zip`, `def`, `list`, `filter`, `fn_num`) and `decls`.
//! - [`functions`]: the per-function iterators `fn`, `fnall`, `foreachfn`, `forallfn` and
//!   the bindings they install for each function.

use std::{fmt, rc::Rc};

use crate::{
    ast::Chunk,
    runtime::{EvalContext, Scope, Value},
    WrapResult,
};

pub mod functions;
pub mod registry;
pub mod values;

pub use registry::MacroRegistry;

/// Native macro handler: receives evaluated arguments and, for body macros, the body.
pub type MacroFn =
    Rc<dyn Fn(&mut EvalContext<'_>, &mut Scope<'_>, Vec<Value>, &[Chunk]) -> WrapResult<Option<Value>>>;

/// Accepted argument counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Exact(1) => write!(f, "exactly 1 argument"),
            Arity::Exact(n) => write!(f, "exactly {n} arguments"),
            Arity::AtLeast(1) => write!(f, "at least 1 argument"),
            Arity::AtLeast(n) => write!(f, "at least {n} arguments"),
            Arity::Any => write!(f, "any number of arguments"),
        }
    }
}

#[derive(Clone)]
pub struct Macro {
    pub name: String,
    pub arity: Arity,
    pub has_body: bool,
    pub handler: MacroFn,
}

impl Macro {
    pub fn new<F>(name: impl Into<String>, arity: Arity, handler: F) -> Self
    where
        F: Fn(&mut EvalContext<'_>, &mut Scope<'_>, Vec<Value>, &[Chunk]) -> WrapResult<Option<Value>> + 'static,
    {
        Self {
            name: name.into(),
            arity,
            has_body: false,
            handler: Rc::new(handler),
        }
    }

    /// Marks the macro as taking a body terminated by `end<name>`.
    pub fn with_body(mut self) -> Self {
        self.has_body = true;
        self
    }
}

impl fmt::Debug for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Macro")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("has_body", &self.has_body)
            .finish_non_exhaustive()
    }
}
