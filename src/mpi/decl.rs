//! Extracted function declarations and their rendered forms.

use std::fmt;

use crate::mpi::{Param, MPI_INIT, MPI_INIT_THREAD};

/// Storage-class prefix for generated C entry points.
pub const EXTERN_C: &[&str] = &["_EXTERN_C_"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub ret_type: String,
    pub name: String,
    params: Vec<Param>,
}

impl Declaration {
    /// Params must be in source order with positions `0..n`.
    pub fn new(ret_type: impl Into<String>, name: impl Into<String>, params: Vec<Param>) -> Self {
        debug_assert!(params.iter().enumerate().all(|(i, p)| p.pos == i));
        Self {
            ret_type: ret_type.into(),
            name: name.into(),
            params,
        }
    }

    /// Every parameter, including a trailing `...`.
    pub fn all_params(&self) -> &[Param] {
        &self.params
    }

    /// Parameters that can be named and forwarded.
    pub fn params(&self) -> impl Iterator<Item = &Param> {
        self.params.iter().filter(|p| !p.is_ellipsis())
    }

    pub fn param(&self, pos: usize) -> Option<&Param> {
        self.params.get(pos)
    }

    /// `MPI_Wtime` and `MPI_Wtick` return a `double` instead of an error code.
    pub fn returns_error_code(&self) -> bool {
        self.ret_type == "int"
    }

    pub fn formals(&self) -> Vec<String> {
        self.params.iter().map(Param::c_formal).collect()
    }

    pub fn types(&self) -> Vec<String> {
        self.params.iter().map(Param::c_type).collect()
    }

    pub fn arg_names(&self) -> Vec<String> {
        self.params().map(|p| p.name.clone()).collect()
    }

    /// Length arguments the Fortran compiler appends for each string parameter.
    pub fn hidden_args(&self) -> Vec<String> {
        self.params()
            .filter(|p| p.is_string())
            .map(|p| format!("{}_length", p.name))
            .collect()
    }

    pub fn fortran_formals(&self) -> Vec<String> {
        let mut formals: Vec<String> = match self.name.as_str() {
            MPI_INIT => Vec::new(),
            MPI_INIT_THREAD => vec!["MPI_Fint *required".into(), "MPI_Fint *provided".into()],
            _ => self.params().map(Param::fortran_formal).collect(),
        };
        if self.returns_error_code() {
            formals.push("MPI_Fint *ierr".into());
        }
        formals.extend(self.hidden_args().into_iter().map(|arg| format!("int {arg}")));
        formals
    }

    pub fn fortran_arg_names(&self) -> Vec<String> {
        let mut names = match self.name.as_str() {
            MPI_INIT => Vec::new(),
            MPI_INIT_THREAD => vec!["required".into(), "provided".into()],
            _ => self.arg_names(),
        };
        if self.returns_error_code() {
            names.push("ierr".into());
        }
        names.extend(self.hidden_args());
        names
    }

    pub fn prototype(&self, modifiers: &[&str]) -> String {
        format!(
            "{}{} {}({})",
            modifier_prefix(modifiers),
            self.ret_type,
            self.name,
            self.formals().join(", ")
        )
    }

    pub fn pmpi_prototype(&self, modifiers: &[&str]) -> String {
        format!(
            "{}{} P{}({})",
            modifier_prefix(modifiers),
            self.ret_type,
            self.name,
            self.formals().join(", ")
        )
    }

    /// Fortran-callable prototype named `name`; error codes travel through `ierr`.
    pub fn fortran_prototype(&self, name: &str, modifiers: &[&str]) -> String {
        let ret_type = if self.returns_error_code() { "void" } else { self.ret_type.as_str() };
        format!(
            "{}{} {}({})",
            modifier_prefix(modifiers),
            ret_type,
            name,
            self.fortran_formals().join(", ")
        )
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prototype(&[]))
    }
}

fn modifier_prefix(modifiers: &[&str]) -> String {
    modifiers.iter().map(|m| format!("{m} ")).collect()
}
