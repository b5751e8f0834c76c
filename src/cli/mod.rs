//! The wrapgen command-line interface.
//!
//! This module is the main entry point for the binary and orchestrates the library:
//! extract the MPI API, parse the templates, then expand them into the chosen outputs.

use std::{fs, io, process};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::args::WrapArgs,
    engine::{Generator, Template},
    err_msg,
    macros::MacroRegistry,
    mpi::{extract, CompilerSource, KnowledgeBase, PreprocessedFile, SignatureSource},
    runtime::OutputSet,
    WrapError, WrapResult,
};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = WrapArgs::parse();
    init_tracing(args.verbose);

    if let Err(error) = execute(&args) {
        let code = error.error_type().exit_code();
        eprintln!("{:?}", miette::Report::new(error));
        process::exit(code);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn execute(args: &WrapArgs) -> WrapResult<()> {
    let registry = MacroRegistry::builtin();
    if args.list_macros {
        return output::print_macros(&registry);
    }
    if args.templates.is_empty() && !args.dump {
        return Err(err_msg!(Usage, "no template files given")
            .with_help("usage: wrapgen [-fgsd] [-i pmpi_init_binding] [-c mpicc_name] [-o file] [-S dir] TEMPLATE..."));
    }

    let config = args.config();
    let knowledge = match &args.knowledge_base {
        Some(path) => KnowledgeBase::load(path)?,
        None => KnowledgeBase::builtin(),
    };

    let source = signature_source(args)?;
    info!(source = %source.describe(), "reading MPI declarations");
    let api = extract(&source.read()?)?;
    info!(functions = api.len(), "extracted declarations");

    if args.dump {
        return output::print_declarations(&api);
    }

    let generator = Generator::new(&config, &api, &knowledge, &registry);
    let templates = read_templates(&generator, args)?;

    let mut outputs = open_outputs(args)?;
    generator.expand(&templates, &mut outputs)?;
    outputs.finish()
}

fn signature_source(args: &WrapArgs) -> WrapResult<Box<dyn SignatureSource>> {
    if let Some(path) = &args.preprocessed {
        return Ok(Box::new(PreprocessedFile::new(path)));
    }
    let source = match &args.header {
        Some(header) => CompilerSource::for_header(header)?,
        None => CompilerSource::for_compiler(&args.compiler)?,
    };
    debug!(command = source.command(), "preprocessor command");
    Ok(Box::new(source))
}

/// Every template is parsed before any output is opened.
fn read_templates(generator: &Generator<'_>, args: &WrapArgs) -> WrapResult<Vec<Template>> {
    args.templates
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .map_err(|e| WrapError::io(format!("cannot read template {}", path.display()), e))?;
            generator.parse(&path.display().to_string(), &text)
        })
        .collect()
}

fn open_outputs(args: &WrapArgs) -> WrapResult<OutputSet> {
    if let Some(dir) = &args.static_dir {
        fs::create_dir_all(dir)
            .map_err(|e| WrapError::io(format!("cannot create directory {}", dir.display()), e))?;
    }
    let outputs = match args.output_path() {
        Some(path) => OutputSet::create_file(&path)?,
        None => OutputSet::new(Box::new(io::stdout()), "<stdout>"),
    };
    Ok(match &args.static_dir {
        Some(dir) => outputs.with_static_dir(dir),
        None => outputs,
    })
}
