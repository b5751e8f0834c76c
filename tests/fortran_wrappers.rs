//! Fortran entry points, `MPI_Init` dispatch and static-library mode.

mod common;

use std::fs;

use common::{api, generate};
use wrapgen::{
    config::GeneratorConfig,
    engine::Generator,
    macros::MacroRegistry,
    mpi::KnowledgeBase,
    runtime::OutputSet,
    WrapResult,
};

fn fortran_plain() -> GeneratorConfig {
    GeneratorConfig {
        fortran: true,
        skip_headers: true,
        ..GeneratorConfig::default()
    }
}

const WRAP_ALL: &str = "{{fn f MPI_Barrier MPI_Init}}    {{callfn}}\n{{endfn}}";

#[test]
fn barrier_gets_four_bindings_after_the_c_wrapper() {
    let out = generate(&fortran_plain(), "{{fn f MPI_Barrier}}    {{callfn}}\n{{endfn}}").expect("expand");
    let c_banner = out.find("/* ================== C Wrappers for MPI_Barrier").expect("C banner");
    let f_banner = out.find("/* =============== Fortran Wrappers for MPI_Barrier").expect("Fortran banner");
    let end = out.find("/* ================= End Wrappers for MPI_Barrier").expect("end banner");
    assert!(c_banner < f_banner && f_banner < end);

    for name in ["MPI_BARRIER", "mpi_barrier", "mpi_barrier_", "mpi_barrier__"] {
        assert!(
            out.contains(&format!(
                "_EXTERN_C_ void {name}(MPI_Fint *comm, MPI_Fint *ierr) {{ \n    MPI_Barrier_fortran_wrapper(comm, ierr);\n}}\n"
            )),
            "missing {name}"
        );
    }
    assert!(out.contains("    _wrap_return_val = MPI_Barrier(MPI_Comm_f2c(*comm));\n"));
}

#[test]
fn waitany_index_and_status() {
    let out = generate(&fortran_plain(), "{{fn f MPI_Waitany}}{{callfn}}{{endfn}}").expect("expand");
    assert!(out.contains("    if (*index != MPI_UNDEFINED) ++(*index);\n"));
    // the fixture header advertises MPI_F_STATUS_IGNORE
    assert!(out.contains("((status == MPI_F_STATUS_IGNORE) ? MPI_STATUS_IGNORE : &temp_status)"));
}

#[test]
fn output_strings_take_hidden_lengths() {
    let out = generate(&fortran_plain(), "{{fn f MPI_Get_processor_name}}{{callfn}}{{endfn}}").expect("expand");
    assert!(out.contains(
        "_EXTERN_C_ void mpi_get_processor_name_(char *name, MPI_Fint *resultlen, MPI_Fint *ierr, int name_length) { \n"
    ));
    assert!(out.contains("        memset(name+temp_name_length, ' ', name_length - temp_name_length);\n"));
}

#[test]
fn init_dispatches_on_the_entered_binding() {
    let out = generate(&fortran_plain(), WRAP_ALL).expect("expand");
    assert_eq!(out.matches("static int fortran_init = 0;\n").count(), 1);
    assert!(out.contains("    if (fortran_init) {\n#if (defined(PIC) || defined(__PIC__)) && !defined(STATIC)\n"));
    assert!(out.contains("_EXTERN_C_ void mpi_init__(MPI_Fint *ierr) { \n    fortran_init = 4;\n    MPI_Init_fortran_wrapper(ierr);\n}\n"));
    assert!(out.contains("    char ** argv = NULL;\n"));
}

#[test]
fn init_flag_is_defined_once_per_run() {
    let template = format!("{WRAP_ALL}{WRAP_ALL}");
    let out = generate(&fortran_plain(), &template).expect("expand");
    assert_eq!(out.matches("static int fortran_init = 0;\n").count(), 1);
    assert_eq!(out.matches("/* ================== C Wrappers for MPI_Init ").count(), 2);
}

#[test]
fn without_fortran_init_is_an_ordinary_wrapper() {
    let config = GeneratorConfig {
        skip_headers: true,
        ..GeneratorConfig::default()
    };
    let out = generate(&config, WRAP_ALL).expect("expand");
    assert!(!out.contains("fortran_init"));
    assert!(out.contains("    _wrap_return_val = PMPI_Init(argc, argv);\n"));
}

// ============================================================================
// STATIC LIBRARY MODE
// ============================================================================

fn expand_static(dir: &std::path::Path, config: &GeneratorConfig, template: &str) -> WrapResult<()> {
    let api = api();
    let knowledge = KnowledgeBase::builtin();
    let registry = MacroRegistry::builtin();
    let generator = Generator::new(config, &api, &knowledge, &registry);
    let template = generator.parse("static.w", template)?;
    let mut outputs = OutputSet::create_file(&dir.join("wrap.c"))?.with_static_dir(dir);
    generator.expand(std::slice::from_ref(&template), &mut outputs)?;
    outputs.finish()
}

fn static_config(dir: &std::path::Path) -> GeneratorConfig {
    GeneratorConfig {
        fortran: true,
        guards: true,
        static_dir: Some(dir.to_path_buf()),
        ..GeneratorConfig::default()
    }
}

#[test]
fn static_mode_writes_one_file_per_symbol() {
    let dir = tempfile::tempdir().expect("tempdir");
    let template = format!("{{{{decls}}}}#include \"tool.h\"\n{{{{enddecls}}}}{WRAP_ALL}");
    expand_static(dir.path(), &static_config(dir.path()), &template).expect("expand");

    let read = |name: &str| fs::read_to_string(dir.path().join(name)).unwrap_or_else(|e| panic!("{name}: {e}"));
    let main = read("wrap.c");
    assert!(main.contains("int in_wrapper = 0;\n"));
    assert!(main.contains("int fortran_init = 0;\n"));
    assert!(!main.contains("#pragma weak pmpi_init_\n"));

    let barrier = read("MPI_Barrier.c");
    assert!(barrier.starts_with("\n#include <mpi.h>\n"));
    assert!(barrier.contains("#include \"tool.h\"\nextern int in_wrapper;\n"));
    assert!(barrier.contains("_EXTERN_C_ void mpi_barrier_(MPI_Fint *comm, MPI_Fint *ierr)"));

    let init = read("MPI_Init.c");
    assert!(init.contains("extern int fortran_init;\n"));
    assert!(init.contains("#pragma weak real_pmpi_init_\n"));
    assert!(init.contains("real_pmpi_init_(&_wrap_return_val);"));

    for binding in ["PMPI_INIT", "pmpi_init", "pmpi_init_", "pmpi_init__"] {
        let text = read(&format!("{binding}.c"));
        assert!(
            text.contains(&format!(
                "_EXTERN_C_ void real_{binding}(MPI_Fint *ierr) {{ \n    {binding}(ierr);\n}}\n"
            )),
            "{binding}.c lacks its forwarder"
        );
        assert!(text.contains("static void MPI_Init_fortran_wrapper(MPI_Fint *ierr)"));
    }
}

#[test]
fn static_mode_removes_partial_outputs_on_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let template = "{{fn f MPI_Barrier}}{{callfn}}{{endfn}}{{fn f MPI_Bogus}}{{endfn}}";
    let err = expand_static(dir.path(), &static_config(dir.path()), template).unwrap_err();
    assert_eq!(err.message(), "MPI_Bogus is not an MPI function");

    let left: Vec<_> = fs::read_dir(dir.path()).expect("read_dir").collect();
    assert!(left.is_empty(), "leftover files: {left:?}");
}
