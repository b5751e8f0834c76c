//! Per-function parameter knowledge.
//!
//! Headers only tell us types. Whether a parameter is read, written, an array of handles,
//! or an index into one of those arrays comes from this table. The built-in tables cover
//! the MPI-3 API; a JSON or YAML file with the same shape can replace them.
//!
//! Functions absent from both direction tables are treated as [`Direction::Unknown`]: the
//! marshaling code converts such parameters on the way in *and* writes them back.

use std::{collections::BTreeMap, fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{err_msg, mpi::tables, WrapError, WrapResult};

pub const BUILTIN_REVISION: &str = "mpi-3.1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub revision: String,
    /// Positions each function reads.
    #[serde(default)]
    pub inputs: IndexMap<String, Vec<usize>>,
    /// Positions each function writes.
    #[serde(default)]
    pub outputs: IndexMap<String, Vec<usize>>,
    /// Handle-array position mapped to the position holding its element count.
    #[serde(default)]
    pub handle_arrays: IndexMap<String, BTreeMap<usize, usize>>,
    /// Position receiving a single array index, or `MPI_UNDEFINED`.
    #[serde(default)]
    pub index_outputs: IndexMap<String, usize>,
    /// Index-array position mapped to the position of its element count.
    #[serde(default)]
    pub index_array_outputs: IndexMap<String, BTreeMap<usize, usize>>,
}

/// Data-flow direction of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Known { input: bool, output: bool },
    /// The function is not in the tables; assume both directions.
    Unknown,
}

impl Direction {
    pub fn is_input(self) -> bool {
        match self {
            Direction::Known { input, .. } => input,
            Direction::Unknown => true,
        }
    }

    pub fn is_output(self) -> bool {
        match self {
            Direction::Known { output, .. } => output,
            Direction::Unknown => true,
        }
    }
}

/// Everything the marshaling code needs to know about one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamTraits {
    pub direction: Direction,
    /// Position of the element count when the parameter is an array of handles.
    pub handle_array_count: Option<usize>,
    pub index_output: bool,
    /// Position of the element count when the parameter receives an array of indices.
    pub index_array_count: Option<usize>,
}

impl KnowledgeBase {
    pub fn builtin() -> Self {
        fn positions(table: &[(&str, &[usize])]) -> IndexMap<String, Vec<usize>> {
            table.iter().map(|(name, pos)| (name.to_string(), pos.to_vec())).collect()
        }
        fn pairs(table: &[(&str, &[(usize, usize)])]) -> IndexMap<String, BTreeMap<usize, usize>> {
            table
                .iter()
                .map(|(name, pairs)| (name.to_string(), pairs.iter().copied().collect()))
                .collect()
        }

        Self {
            revision: BUILTIN_REVISION.to_string(),
            inputs: positions(tables::INPUTS),
            outputs: positions(tables::OUTPUTS),
            handle_arrays: pairs(tables::HANDLE_ARRAYS),
            index_outputs: tables::INDEX_OUTPUTS
                .iter()
                .map(|(name, pos)| (name.to_string(), *pos))
                .collect(),
            index_array_outputs: pairs(tables::INDEX_ARRAY_OUTPUTS),
        }
    }

    /// Loads a replacement table; `.yaml`/`.yml` files are read as YAML, anything else as JSON.
    pub fn load(path: &Path) -> WrapResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| WrapError::io(format!("cannot read knowledge base {}", path.display()), e))?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let parsed = if is_yaml {
            serde_yaml::from_str(&text).map_err(|e| {
                err_msg!(Usage, "invalid knowledge base {}: {}", path.display(), e)
            })
        } else {
            serde_json::from_str(&text).map_err(|e| {
                err_msg!(Usage, "invalid knowledge base {}: {}", path.display(), e)
            })
        }?;
        Ok(parsed)
    }

    /// Whether either direction table lists `function`.
    pub fn knows(&self, function: &str) -> bool {
        self.inputs.contains_key(function) || self.outputs.contains_key(function)
    }

    pub fn direction(&self, function: &str, pos: usize) -> Direction {
        if !self.knows(function) {
            return Direction::Unknown;
        }
        Direction::Known {
            input: self.inputs.get(function).map_or(true, |p| p.contains(&pos)),
            output: self.outputs.get(function).map_or(true, |p| p.contains(&pos)),
        }
    }

    pub fn classify(&self, function: &str, pos: usize) -> ParamTraits {
        ParamTraits {
            direction: self.direction(function, pos),
            handle_array_count: self
                .handle_arrays
                .get(function)
                .and_then(|m| m.get(&pos))
                .copied(),
            index_output: self.index_outputs.get(function) == Some(&pos),
            index_array_count: self
                .index_array_outputs
                .get(function)
                .and_then(|m| m.get(&pos))
                .copied(),
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_directions() {
        let kb = KnowledgeBase::builtin();
        // MPI_Recv(buf, count, datatype, source, tag, comm, status)
        assert!(kb.direction("MPI_Recv", 0).is_output());
        assert!(!kb.direction("MPI_Recv", 0).is_input());
        assert!(kb.direction("MPI_Recv", 5).is_input());
        assert!(kb.direction("MPI_Recv", 6).is_output());
    }

    #[test]
    fn unknown_function_is_both_directions() {
        let kb = KnowledgeBase::builtin();
        let direction = kb.direction("MPIX_Frobnicate", 3);
        assert_eq!(direction, Direction::Unknown);
        assert!(direction.is_input() && direction.is_output());
    }

    #[test]
    fn array_traits() {
        let kb = KnowledgeBase::builtin();
        let requests = kb.classify("MPI_Waitall", 1);
        assert_eq!(requests.handle_array_count, Some(0));
        let index = kb.classify("MPI_Waitany", 2);
        assert!(index.index_output);
        let indices = kb.classify("MPI_Waitsome", 3);
        assert_eq!(indices.index_array_count, Some(2));
        assert_eq!(kb.classify("MPI_Alltoallw", 3).handle_array_count, Some(8));
    }

    #[test]
    fn loads_json_and_yaml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let json = dir.path().join("kb.json");
        fs::write(
            &json,
            r#"{"revision": "site", "inputs": {"MPI_Foo": [0]}, "handle_arrays": {"MPI_Foo": {"1": 0}}}"#,
        )
        .expect("write");
        let kb = KnowledgeBase::load(&json).expect("json loads");
        assert_eq!(kb.revision, "site");
        assert_eq!(kb.classify("MPI_Foo", 1).handle_array_count, Some(0));
        assert!(kb.direction("MPI_Foo", 0).is_input());
        // no output table entry: every position counts as written
        assert!(kb.direction("MPI_Foo", 1).is_output());

        let yaml = dir.path().join("kb.yaml");
        fs::write(&yaml, "revision: y\noutputs:\n  MPI_Bar: [1]\n").expect("write");
        let kb = KnowledgeBase::load(&yaml).expect("yaml loads");
        assert!(!kb.direction("MPI_Bar", 0).is_output());
    }

    #[test]
    fn malformed_file_is_a_usage_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("kb.json");
        fs::write(&path, "{ not json").expect("write");
        let err = KnowledgeBase::load(&path).unwrap_err();
        assert_eq!(err.error_type(), crate::ErrorType::Usage);
    }
}
