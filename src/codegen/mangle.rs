//! Fortran symbol-name conventions.
//!
//! Fortran compilers disagree on how `MPI_Send` is spelled at link level. The generator
//! emits one entry point per convention and, for `MPI_Init`, lets the user pick which
//! convention the underlying MPI library uses when weak symbols are unavailable.

use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FortranConvention {
    /// `MPI_SEND`
    Upper,
    /// `mpi_send`
    Lower,
    /// `mpi_send_`
    Underscore,
    /// `mpi_send__`
    DoubleUnderscore,
}

impl FortranConvention {
    /// Emission order; also the value stored in the `fortran_init` flags.
    pub const ALL: [FortranConvention; 4] = [
        FortranConvention::Upper,
        FortranConvention::Lower,
        FortranConvention::Underscore,
        FortranConvention::DoubleUnderscore,
    ];

    pub fn apply(self, name: &str) -> String {
        match self {
            FortranConvention::Upper => name.to_uppercase(),
            FortranConvention::Lower => name.to_lowercase(),
            FortranConvention::Underscore => format!("{}_", name.to_lowercase()),
            FortranConvention::DoubleUnderscore => format!("{}__", name.to_lowercase()),
        }
    }

    /// 1-based position in [`FortranConvention::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            FortranConvention::Upper => 1,
            FortranConvention::Lower => 2,
            FortranConvention::Underscore => 3,
            FortranConvention::DoubleUnderscore => 4,
        }
    }
}

impl Default for FortranConvention {
    fn default() -> Self {
        FortranConvention::Underscore
    }
}

impl fmt::Display for FortranConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.apply("PMPI_Init"))
    }
}

/// Parses one of the four spellings of the `PMPI_Init` Fortran binding.
impl FromStr for FortranConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|convention| convention.apply("PMPI_Init") == s)
            .ok_or_else(|| {
                let choices: Vec<String> = Self::ALL.iter().map(ToString::to_string).collect();
                format!("PMPI_Init binding must be one of: {}", choices.join(" "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spellings() {
        let names: Vec<String> = FortranConvention::ALL.iter().map(|c| c.apply("MPI_Barrier")).collect();
        assert_eq!(names, vec!["MPI_BARRIER", "mpi_barrier", "mpi_barrier_", "mpi_barrier__"]);
    }

    #[test]
    fn parses_init_bindings() {
        assert_eq!("PMPI_INIT".parse(), Ok(FortranConvention::Upper));
        assert_eq!("pmpi_init__".parse(), Ok(FortranConvention::DoubleUnderscore));
        let err = "pmpi_init___".parse::<FortranConvention>().unwrap_err();
        assert!(err.contains("PMPI_INIT pmpi_init pmpi_init_ pmpi_init__"));
    }

    #[test]
    fn thread_binding_follows_init_binding() {
        let convention: FortranConvention = "pmpi_init_".parse().expect("valid");
        assert_eq!(convention.apply("PMPI_Init_thread"), "pmpi_init_thread_");
        assert_eq!(FortranConvention::Upper.apply("PMPI_Init_thread"), "PMPI_INIT_THREAD");
    }
}
