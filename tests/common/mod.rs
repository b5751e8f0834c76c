//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use wrapgen::{
    config::GeneratorConfig,
    engine::Generator,
    macros::MacroRegistry,
    mpi::{extract, KnowledgeBase, MpiApi},
    WrapResult,
};

/// Preprocessed header with a handful of representative MPI functions.
pub fn header_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/mpi.i")
}

pub fn header_text() -> String {
    std::fs::read_to_string(header_path()).expect("fixture header")
}

pub fn api() -> MpiApi {
    extract(&header_text()).expect("fixture header extracts")
}

/// Expands `template` against the fixture header and returns the main output.
pub fn generate(config: &GeneratorConfig, template: &str) -> WrapResult<String> {
    let api = api();
    let knowledge = KnowledgeBase::builtin();
    let registry = MacroRegistry::builtin();
    Generator::new(config, &api, &knowledge, &registry).expand_to_string("test.w", template)
}

pub fn fortran() -> GeneratorConfig {
    GeneratorConfig {
        fortran: true,
        ..GeneratorConfig::default()
    }
}

pub fn plain() -> GeneratorConfig {
    GeneratorConfig {
        skip_headers: true,
        ..GeneratorConfig::default()
    }
}

/// `wrapgen --preprocessed <fixture>` ready for more arguments.
pub fn wrapgen() -> Command {
    let mut cmd = Command::cargo_bin("wrapgen").expect("binary");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--preprocessed").arg(header_path());
    cmd
}
