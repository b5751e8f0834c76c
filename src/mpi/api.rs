//! The function table built once per run from the preprocessed MPI header.

use indexmap::IndexMap;

use crate::mpi::Declaration;

/// SGI MPT ships `PMPI_` prototypes for these that clash with ours; don't redeclare them.
const BAD_SGI_PMPI_DECLARATIONS: &[&str] = &[
    "MPI_File_set_view",
    "MPI_File_write_all_begin",
    "MPI_File_write_all_end",
    "MPI_File_write_at_all_begin",
    "MPI_File_write_at_all_end",
    "MPI_File_write_ordered_begin",
    "MPI_File_write_ordered_end",
];

/// Implementation traits noticed while scanning the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderQuirks {
    /// SGI MPT header.
    pub sgi: bool,
    /// Header defines `MPI_F_STATUS_IGNORE`.
    pub f_status_ignore: bool,
    /// Header defines `MPI_F_STATUSES_IGNORE`.
    pub f_statuses_ignore: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MpiApi {
    functions: IndexMap<String, Declaration>,
    pub quirks: HeaderQuirks,
}

impl MpiApi {
    pub fn new(quirks: HeaderQuirks) -> Self {
        Self {
            functions: IndexMap::new(),
            quirks,
        }
    }

    /// Adds or replaces a declaration; a replacement keeps the original position.
    pub fn insert(&mut self, decl: Declaration) {
        self.functions.insert(decl.name.clone(), decl);
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Declarations in header order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.functions.values()
    }

    /// Every function name except `excluded`, in header order.
    pub fn all_but(&self, excluded: &[String]) -> Vec<String> {
        self.functions
            .keys()
            .filter(|name| !excluded.contains(name))
            .cloned()
            .collect()
    }

    /// Whether the wrapper should declare the `PMPI_` prototype itself.
    pub fn needs_pmpi_prototype(&self, name: &str) -> bool {
        !self.quirks.sgi || !BAD_SGI_PMPI_DECLARATIONS.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(names: &[&str]) -> MpiApi {
        let mut api = MpiApi::default();
        for name in names {
            api.insert(Declaration::new("int", *name, Vec::new()));
        }
        api
    }

    #[test]
    fn all_but_keeps_header_order() {
        let api = api(&["MPI_Init", "MPI_Send", "MPI_Recv", "MPI_Finalize"]);
        assert_eq!(
            api.all_but(&["MPI_Init".to_string(), "MPI_Recv".to_string()]),
            vec!["MPI_Send", "MPI_Finalize"]
        );
    }

    #[test]
    fn sgi_suppresses_bad_prototypes_only() {
        let mut api = api(&["MPI_File_set_view", "MPI_Send"]);
        assert!(api.needs_pmpi_prototype("MPI_File_set_view"));
        api.quirks.sgi = true;
        assert!(!api.needs_pmpi_prototype("MPI_File_set_view"));
        assert!(api.needs_pmpi_prototype("MPI_Send"));
    }
}
