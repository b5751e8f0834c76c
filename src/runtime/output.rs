//! Generated-source sinks.
//!
//! Expansion writes to the main output plus, in static mode, one `<symbol>.c` file per
//! wrapped symbol. Every file created on disk is tracked by an [`ArtifactGuard`]; unless
//! the run commits, dropping the set removes them so a failed run leaves no partial
//! sources behind.

use std::{
    cell::RefCell,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    rc::Rc,
};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{WrapError, WrapResult};

/// Where emitted text goes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Main,
    /// The per-symbol file of static mode.
    Static(String),
}

// ============================================================================
// ARTIFACT GUARD
// ============================================================================

/// Removes tracked files on drop unless committed.
#[derive(Debug, Default)]
pub struct ArtifactGuard {
    paths: Vec<PathBuf>,
    committed: bool,
}

impl ArtifactGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn commit(&mut self) {
        self.committed = true;
    }
}

impl Drop for ArtifactGuard {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        for path in &self.paths {
            match fs::remove_file(path) {
                Ok(()) => debug!(path = %path.display(), "removed partial output"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => warn!(path = %path.display(), error = %e, "could not remove partial output"),
            }
        }
    }
}

// ============================================================================
// SHARED BUFFER
// ============================================================================

/// In-memory main output that stays readable after the set is consumed.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// OUTPUT SET
// ============================================================================

pub struct OutputSet {
    main: Box<dyn Write>,
    main_name: String,
    static_dir: Option<PathBuf>,
    statics: IndexMap<String, BufWriter<File>>,
    // Declared last: file handles above are closed before the guard removes anything.
    guard: ArtifactGuard,
}

impl OutputSet {
    pub fn new(main: Box<dyn Write>, main_name: impl Into<String>) -> Self {
        Self {
            main,
            main_name: main_name.into(),
            static_dir: None,
            statics: IndexMap::new(),
            guard: ArtifactGuard::new(),
        }
    }

    /// Main output held in memory; read it back through the returned buffer.
    pub fn in_memory() -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::new();
        (Self::new(Box::new(buffer.clone()), "<memory>"), buffer)
    }

    /// Creates (truncating) a main output file on disk and tracks it.
    pub fn create_file(path: &Path) -> WrapResult<Self> {
        let file = File::create(path)
            .map_err(|e| WrapError::io(format!("cannot create {}", path.display()), e))?;
        let mut set = Self::new(Box::new(BufWriter::new(file)), path.display().to_string());
        set.guard.track(path);
        Ok(set)
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    pub fn static_dir(&self) -> Option<&Path> {
        self.static_dir.as_deref()
    }

    pub fn has_static(&self, symbol: &str) -> bool {
        self.statics.contains_key(symbol)
    }

    pub fn static_symbols(&self) -> impl Iterator<Item = &str> {
        self.statics.keys().map(String::as_str)
    }

    /// Creates `<dir>/<symbol>.c` and writes `preamble` into it.
    pub fn create_static(&mut self, symbol: &str, preamble: &str) -> WrapResult<()> {
        let Some(dir) = &self.static_dir else {
            return Err(crate::err_msg!(
                Io,
                "no static output directory configured for '{}'",
                symbol
            ));
        };
        let path = dir.join(format!("{symbol}.c"));
        let file = File::create(&path)
            .map_err(|e| WrapError::io(format!("cannot create {}", path.display()), e))?;
        self.guard.track(&path);
        debug!(path = %path.display(), "opened static output");

        let mut writer = BufWriter::new(file);
        writer
            .write_all(preamble.as_bytes())
            .map_err(|e| WrapError::io(format!("writing {}", path.display()), e))?;
        self.statics.insert(symbol.to_string(), writer);
        Ok(())
    }

    pub fn write(&mut self, target: &Target, text: &str) -> WrapResult<()> {
        match target {
            Target::Main => self
                .main
                .write_all(text.as_bytes())
                .map_err(|e| WrapError::io(format!("writing {}", self.main_name), e)),
            Target::Static(symbol) => {
                let writer = self.statics.get_mut(symbol).ok_or_else(|| {
                    crate::err_msg!(Io, "static output for '{}' was never opened", symbol)
                })?;
                writer
                    .write_all(text.as_bytes())
                    .map_err(|e| WrapError::io(format!("writing {symbol}.c"), e))
            }
        }
    }

    /// Flushes everything and keeps the files.
    pub fn finish(mut self) -> WrapResult<()> {
        self.main
            .flush()
            .map_err(|e| WrapError::io(format!("flushing {}", self.main_name), e))?;
        for (symbol, writer) in self.statics.iter_mut() {
            writer
                .flush()
                .map_err(|e| WrapError::io(format!("flushing {symbol}.c"), e))?;
        }
        self.guard.commit();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropped_set_removes_created_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let main_path = dir.path().join("wrap.c");
        {
            let mut set = OutputSet::create_file(&main_path)
                .expect("main")
                .with_static_dir(dir.path());
            set.create_static("MPI_Send", "/* preamble */\n").expect("static");
            set.write(&Target::Static("MPI_Send".into()), "int x;\n").expect("write");
            assert!(dir.path().join("MPI_Send.c").exists());
        }
        assert!(!main_path.exists());
        assert!(!dir.path().join("MPI_Send.c").exists());
    }

    #[test]
    fn finished_set_keeps_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let main_path = dir.path().join("wrap.c");
        let mut set = OutputSet::create_file(&main_path).expect("main");
        set.write(&Target::Main, "hello\n").expect("write");
        set.finish().expect("finish");
        assert_eq!(fs::read_to_string(&main_path).expect("read"), "hello\n");
    }

    #[test]
    fn writing_to_unopened_static_fails() {
        let (mut set, _buffer) = OutputSet::in_memory();
        let err = set.write(&Target::Static("MPI_Recv".into()), "x").unwrap_err();
        assert!(err.message().contains("never opened"));
    }

    #[test]
    fn in_memory_buffer_reads_back() {
        let (mut set, buffer) = OutputSet::in_memory();
        set.write(&Target::Main, "abc").expect("write");
        set.finish().expect("finish");
        assert_eq!(buffer.contents(), "abc");
    }
}
