//! C and Fortran text generation for a single MPI function.
//!
//! Everything here renders strings from a [`Declaration`](crate::mpi::Declaration) and the
//! run configuration; the `fn` family of macros decides where the text goes.

pub mod c_wrapper;
pub mod delegation;
pub mod fortran;
pub mod init;
pub mod mangle;
pub mod preamble;

pub use c_wrapper::RETURN_VAL;
pub use delegation::FortranDelegation;
pub use init::InitFlavor;
pub use mangle::FortranConvention;
