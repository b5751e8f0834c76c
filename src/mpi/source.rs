//! Where preprocessed header text comes from.
//!
//! Normally the generator runs the MPI compiler wrapper (`mpicc -E`) over a scratch file
//! that includes `<mpi.h>`, or `gcc -E` over an explicit header. A pre-captured
//! preprocessor dump can be supplied instead, which keeps extraction testable without
//! an MPI installation.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::Command,
};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{err_msg, WrapError, WrapResult};

/// Produces preprocessed `mpi.h` text.
pub trait SignatureSource {
    /// Human-readable origin, used in logs and errors.
    fn describe(&self) -> String;

    fn read(&self) -> WrapResult<String>;
}

/// Runs a preprocessor command and captures its stdout.
#[derive(Debug)]
pub struct CompilerSource {
    command: String,
    // Keeps the scratch input alive until the command has run.
    _scratch: Option<NamedTempFile>,
}

impl CompilerSource {
    /// `<compiler> -E` over a scratch file containing `#include <mpi.h>`.
    pub fn for_compiler(compiler: &str) -> WrapResult<Self> {
        let mut scratch = tempfile::Builder::new()
            .prefix("wrapgen")
            .suffix(".c")
            .tempfile()
            .map_err(|e| WrapError::io("cannot create scratch source", e))?;
        writeln!(scratch, "#include <mpi.h>")
            .and_then(|_| scratch.flush())
            .map_err(|e| WrapError::io("cannot write scratch source", e))?;
        let command = format!("{} -E {}", compiler, scratch.path().display());
        Ok(Self {
            command,
            _scratch: Some(scratch),
        })
    }

    /// `gcc -E` over an explicit header file.
    pub fn for_header(header: &Path) -> WrapResult<Self> {
        if !header.is_file() {
            return Err(err_msg!(Extraction, "couldn't find MPI header file {}", header.display()));
        }
        Ok(Self {
            command: format!("gcc -E {}", header.display()),
            _scratch: None,
        })
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl SignatureSource for CompilerSource {
    fn describe(&self) -> String {
        format!("`{}`", self.command)
    }

    fn read(&self) -> WrapResult<String> {
        info!(command = %self.command, "preprocessing mpi.h");
        let output = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .output()
            .map_err(|e| WrapError::io(format!("couldn't run '{}' for parsing mpi.h", self.command), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output
                .status
                .code()
                .map_or_else(|| "a signal".to_string(), |c| format!("code {c}"));
            return Err(err_msg!(
                Extraction,
                "Couldn't run '{}' for parsing mpi.h. Process exited with {}",
                self.command,
                code
            )
            .with_help(stderr.trim().to_string()));
        }
        debug!(bytes = output.stdout.len(), "preprocessor output captured");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Preprocessor output saved to a file.
#[derive(Debug, Clone)]
pub struct PreprocessedFile {
    path: PathBuf,
}

impl PreprocessedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SignatureSource for PreprocessedFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> WrapResult<String> {
        fs::read_to_string(&self.path)
            .map_err(|e| WrapError::io(format!("cannot read {}", self.path.display()), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_header_is_an_extraction_error() {
        let err = CompilerSource::for_header(Path::new("/definitely/not/mpi.h")).unwrap_err();
        assert_eq!(err.error_type(), crate::ErrorType::Extraction);
    }

    #[test]
    fn compiler_command_targets_scratch_file() {
        let source = CompilerSource::for_compiler("mpicc").expect("scratch");
        assert!(source.command().starts_with("mpicc -E "));
        assert!(source.command().ends_with(".c"));
    }

    #[test]
    fn failing_command_reports_exit_code() {
        let source = CompilerSource::for_compiler("false").expect("scratch");
        let err = source.read().unwrap_err();
        assert!(err.message().contains("Process exited with code 1"), "{}", err.message());
    }

    #[test]
    fn preprocessed_file_reads_text() {
        let mut file = NamedTempFile::new().expect("tempfile");
        writeln!(file, "int MPI_Barrier(MPI_Comm comm);").expect("write");
        let source = PreprocessedFile::new(file.path());
        assert!(source.read().expect("reads").contains("MPI_Barrier"));
    }
}
