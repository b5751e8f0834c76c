//! Builder for the call inside a Fortran delegate.
//!
//! Three MPI ABI families need different call sites:
//!
//! - **mpich**: old MPICH without `MPI_*_c2f`, whose handles are plain integers. Handles
//!   are cast, never converted.
//! - **c2f**: MPICH with conversion routines but no `MPI_F_STATUS_IGNORE`.
//! - **mpi2**: everything else.
//!
//! Parameters add actuals, copies and writebacks to whichever variants they affect. When
//! all three collapse to the same text the call is emitted once; otherwise it is guarded
//! by the preprocessor tests MPICH defines.

use indexmap::IndexSet;

use crate::{codegen::c_wrapper::RETURN_VAL, mpi::Declaration};

#[derive(Debug, Clone, Default)]
pub struct FortranDelegation {
    temps: IndexSet<String>,
    copies: Vec<String>,
    c2f_copies: Vec<String>,
    writebacks: Vec<String>,
    c2f_writebacks: Vec<String>,
    actuals: Vec<String>,
    mpich_actuals: Vec<String>,
    c2f_actuals: Vec<String>,
}

impl FortranDelegation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a local once, however many parameters ask for it.
    pub fn add_temp(&mut self, ty: &str, name: &str) {
        self.temps.insert(format!("    {ty} {name};"));
    }

    pub fn add_actual(&mut self, actual: impl Into<String>) {
        let actual = actual.into();
        self.actuals.push(actual.clone());
        self.mpich_actuals.push(actual.clone());
        self.c2f_actuals.push(actual);
    }

    pub fn add_actual_mpich(&mut self, actual: impl Into<String>) {
        self.mpich_actuals.push(actual.into());
    }

    pub fn add_actual_c2f_only(&mut self, actual: impl Into<String>) {
        self.c2f_actuals.push(actual.into());
    }

    pub fn add_actual_mpi2(&mut self, actual: impl Into<String>) {
        self.actuals.push(actual.into());
    }

    /// Actual shared by the c2f and mpi2 variants.
    pub fn add_actual_c2f(&mut self, actual: impl Into<String>) {
        let actual = actual.into();
        self.actuals.push(actual.clone());
        self.c2f_actuals.push(actual);
    }

    pub fn add_copy(&mut self, stmt: &str) {
        self.copies.push(format!("    {stmt}"));
        self.c2f_copies.push(format!("    {stmt}"));
    }

    pub fn add_writeback(&mut self, stmt: &str) {
        self.writebacks.push(format!("    {stmt}"));
        self.c2f_writebacks.push(format!("    {stmt}"));
    }

    pub fn add_copy_mpi2(&mut self, stmt: &str) {
        self.copies.push(format!("    {stmt}"));
    }

    pub fn add_writeback_mpi2(&mut self, stmt: &str) {
        self.writebacks.push(format!("    {stmt}"));
    }

    pub fn add_copy_c2f(&mut self, stmt: &str) {
        self.c2f_copies.push(format!("    {stmt}"));
    }

    pub fn add_writeback_c2f(&mut self, stmt: &str) {
        self.c2f_writebacks.push(format!("    {stmt}"));
    }

    fn call(&self, decl: &Declaration, actuals: &[String]) -> String {
        format!("    {RETURN_VAL} = {}({});\n", decl.name, actuals.join(", "))
    }

    fn c2f_differs(&self, c2f_call: &str, mpi2_call: &str) -> bool {
        c2f_call != mpi2_call || self.c2f_copies != self.copies || self.c2f_writebacks != self.writebacks
    }

    /// Declares the return temporary and emits the call with its marshaling.
    pub fn render(&self, decl: &Declaration) -> String {
        debug_assert_eq!(self.actuals.len(), self.mpich_actuals.len());

        let mpich_call = self.call(decl, &self.mpich_actuals);
        let mpi2_call = self.call(decl, &self.actuals);
        let c2f_call = self.call(decl, &self.c2f_actuals);

        let mut out = format!("    {} {} = 0;\n", decl.ret_type, RETURN_VAL);
        let trivial = self.temps.is_empty() && self.copies.is_empty() && self.writebacks.is_empty();
        if mpich_call == mpi2_call && trivial {
            out.push_str(&mpich_call);
            return out;
        }

        out.push_str("#if (!defined(MPICH_HAS_C2F) && defined(MPICH_NAME) && (MPICH_NAME == 1)) /* MPICH test */\n");
        out.push_str(&mpich_call);
        out.push_str("#else /* MPI-2 safe call */\n");
        push_lines(&mut out, self.temps.iter());

        let c2f_differs = self.c2f_differs(&c2f_call, &mpi2_call);
        if c2f_differs {
            out.push_str("# if defined(MPICH_NAME) && (MPICH_NAME == 1) /* MPICH test */\n");
            push_lines(&mut out, self.c2f_copies.iter());
            out.push_str(&c2f_call);
            push_lines(&mut out, self.c2f_writebacks.iter());
            out.push_str("# else /* MPI-2 safe call */\n");
        }
        push_lines(&mut out, self.copies.iter());
        out.push_str(&mpi2_call);
        push_lines(&mut out, self.writebacks.iter());
        if c2f_differs {
            out.push_str("# endif /* MPICH test */\n");
        }
        out.push_str("#endif /* MPICH test */\n");
        out
    }
}

fn push_lines<'a>(out: &mut String, lines: impl Iterator<Item = &'a String>) {
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}
