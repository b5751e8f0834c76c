//! Defines the command-line arguments for the wrapgen CLI.
//!
//! This module uses the `clap` crate with its "derive" feature. The short flags follow
//! the established wrapper-generator conventions, which is why `-h` names the MPI
//! header and help is only reachable through `--help`.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::{codegen::FortranConvention, config::GeneratorConfig};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "wrapgen",
    version,
    about = "Generates PMPI interposition wrappers from double-brace templates.",
    disable_help_flag = true
)]
pub struct WrapArgs {
    /// Print the declarations extracted from the MPI header and exit.
    #[arg(short = 'd')]
    pub dump: bool,

    /// Generate Fortran bindings next to each C wrapper.
    #[arg(short = 'f')]
    pub fortran: bool,

    /// Guard against reentry with a global `in_wrapper` flag.
    #[arg(short = 'g')]
    pub guards: bool,

    /// Skip the front matter and lex templates without C comment handling.
    #[arg(short = 's')]
    pub skip_headers: bool,

    /// MPI compiler wrapper used to preprocess <mpi.h>.
    #[arg(short = 'c', value_name = "COMPILER", default_value = "mpicc", conflicts_with = "header")]
    pub compiler: String,

    /// Preprocess this MPI header with gcc instead of using the compiler wrapper.
    #[arg(short = 'h', value_name = "HEADER")]
    pub header: Option<PathBuf>,

    /// Fortran PMPI_Init spelling used when weak symbols are unavailable.
    #[arg(short = 'i', value_name = "BINDING", default_value = "pmpi_init_")]
    pub init_binding: FortranConvention,

    /// Write the generated wrappers here instead of stdout.
    #[arg(short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Static-library mode: one source file per wrapped symbol in this directory.
    #[arg(short = 'S', value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Read already preprocessed header text from this file.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["compiler", "header"])]
    pub preprocessed: Option<PathBuf>,

    /// Replace the built-in parameter tables with a JSON or YAML file.
    #[arg(long, value_name = "FILE")]
    pub knowledge_base: Option<PathBuf>,

    /// List the built-in macros and exit.
    #[arg(long)]
    pub list_macros: bool,

    /// Log progress to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Template files, expanded in order.
    #[arg(value_name = "TEMPLATE")]
    pub templates: Vec<PathBuf>,
}

impl WrapArgs {
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            fortran: self.fortran,
            guards: self.guards,
            skip_headers: self.skip_headers,
            init_binding: self.init_binding,
            static_dir: self.static_dir.clone(),
        }
    }

    /// Main output path: `-o`, else `wrap.c` inside the static directory, else stdout.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output
            .clone()
            .or_else(|| self.static_dir.as_ref().map(|dir| dir.join("wrap.c")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> WrapArgs {
        WrapArgs::try_parse_from(std::iter::once("wrapgen").chain(args.iter().copied())).expect("parse")
    }

    #[test]
    fn definition_is_consistent() {
        WrapArgs::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = parse(&["wrap.w"]);
        assert_eq!(args.compiler, "mpicc");
        assert_eq!(args.init_binding, FortranConvention::Underscore);
        assert_eq!(args.templates, vec![PathBuf::from("wrap.w")]);
        assert_eq!(args.output_path(), None);
    }

    #[test]
    fn short_flags_build_config() {
        let args = parse(&["-f", "-g", "-s", "-i", "PMPI_INIT", "-S", "out", "t.w"]);
        let config = args.config();
        assert!(config.fortran && config.guards && config.skip_headers);
        assert_eq!(config.init_binding, FortranConvention::Upper);
        assert_eq!(args.output_path(), Some(PathBuf::from("out/wrap.c")));
    }

    #[test]
    fn explicit_output_wins_over_static_dir() {
        let args = parse(&["-S", "out", "-o", "main.c", "t.w"]);
        assert_eq!(args.output_path(), Some(PathBuf::from("main.c")));
    }

    #[test]
    fn dash_h_is_the_header() {
        let args = parse(&["-h", "/usr/include/mpi.h", "t.w"]);
        assert_eq!(args.header, Some(PathBuf::from("/usr/include/mpi.h")));
    }

    #[test]
    fn rejects_unknown_binding() {
        let result = WrapArgs::try_parse_from(["wrapgen", "-i", "mpi_init", "t.w"]);
        assert!(result.is_err());
    }

    #[test]
    fn compiler_and_header_conflict() {
        let result = WrapArgs::try_parse_from(["wrapgen", "-c", "mpicc", "-h", "mpi.h", "t.w"]);
        assert!(result.is_err());
    }
}
