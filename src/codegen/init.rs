//! `MPI_Init` and `MPI_Init_thread`.
//!
//! Their Fortran signatures are not the C ones (no `argc`/`argv`), so the C wrapper cannot
//! simply call `PMPI_Init` when entered from Fortran: it must call the Fortran `pmpi_init`
//! binding the MPI library provides. Each Fortran entry point records its convention in a
//! flag (`fortran_init`, 1-4) before delegating, and the C wrapper's `callfn` dispatches
//! on that flag.
//!
//! Shared builds find the binding through weak symbols. Static builds go through
//! `real_<binding>` forwarders, one per file, that are themselves weak.

use crate::{
    codegen::{c_wrapper, fortran, FortranConvention, FortranDelegation, RETURN_VAL},
    config::GeneratorConfig,
    err_msg,
    mpi::{Declaration, EXTERN_C, MPI_INIT, MPI_INIT_THREAD},
    runtime::EvalContext,
    WrapResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitFlavor {
    Init,
    InitThread,
}

impl InitFlavor {
    pub fn of(function: &str) -> Option<Self> {
        match function {
            MPI_INIT => Some(InitFlavor::Init),
            MPI_INIT_THREAD => Some(InitFlavor::InitThread),
            _ => None,
        }
    }

    /// Process-wide flag recording which Fortran binding was entered.
    pub fn flag(self) -> &'static str {
        match self {
            InitFlavor::Init => "fortran_init",
            InitFlavor::InitThread => "fortran_init_thread",
        }
    }

    fn pmpi_name(self) -> &'static str {
        match self {
            InitFlavor::Init => "PMPI_Init",
            InitFlavor::InitThread => "PMPI_Init_thread",
        }
    }

    /// The MPI library's Fortran entry point under `convention`, e.g. `pmpi_init_`.
    pub fn binding(self, convention: FortranConvention) -> String {
        convention.apply(self.pmpi_name())
    }

    /// The user-facing entry point, e.g. `mpi_init_`.
    fn public_binding(self, convention: FortranConvention) -> String {
        convention.apply(&self.pmpi_name()[1..])
    }

    pub fn fortran_formals(self) -> &'static str {
        match self {
            InitFlavor::Init => "MPI_Fint *ierr",
            InitFlavor::InitThread => "MPI_Fint *required, MPI_Fint *provided, MPI_Fint *ierr",
        }
    }

    fn label(self) -> String {
        self.pmpi_name()[1..].to_uppercase()
    }

    /// Arguments for a Fortran binding called from the C wrapper.
    fn fortran_call_args(self, decl: &Declaration) -> WrapResult<String> {
        match self {
            InitFlavor::Init => Ok(format!("&{RETURN_VAL}")),
            InitFlavor::InitThread => {
                let names = decl.arg_names();
                match (names.get(2), names.get(3)) {
                    (Some(required), Some(provided)) => Ok(format!("&{required}, {provided}, &{RETURN_VAL}")),
                    _ => Err(err_msg!(
                        Extraction,
                        "{} must take (argc, argv, required, provided)",
                        decl.name
                    )),
                }
            }
        }
    }

    fn delegation(self) -> FortranDelegation {
        let mut call = FortranDelegation::new();
        call.add_actual("&argc");
        call.add_actual("&argv");
        if self == InitFlavor::InitThread {
            call.add_actual("*required");
            call.add_actual("provided");
        }
        call
    }
}

// ============================================================================
// C SIDE
// ============================================================================

/// Body of `{{callfn}}` inside the C wrapper.
pub fn callfn(flavor: InitFlavor, decl: &Declaration, config: &GeneratorConfig) -> WrapResult<String> {
    let args = flavor.fortran_call_args(decl)?;
    let mut out = format!("    if ({}) {{\n", flavor.flag());
    if config.is_static() {
        out.push_str(&dispatch(flavor, "real_", &args));
    } else {
        out.push_str("#if (defined(PIC) || defined(__PIC__)) && !defined(STATIC)\n");
        out.push_str(&dispatch(flavor, "", &args));
        out.push_str("#else /* !PIC */\n");
        out.push_str(&format!("        {}({args});\n", flavor.binding(config.init_binding)));
        out.push_str("#endif /* !PIC */\n");
    }
    out.push_str("    } else {\n");
    out.push_str(&format!("        {}\n", c_wrapper::pmpi_call(decl)));
    out.push_str("    }\n");
    Ok(out)
}

/// Fails loudly if no binding was linked, otherwise switches on the flag.
fn dispatch(flavor: InitFlavor, prefix: &str, args: &str) -> String {
    let symbols: Vec<String> = FortranConvention::ALL
        .iter()
        .map(|c| format!("{prefix}{}", flavor.binding(*c)))
        .collect();
    let missing: Vec<String> = symbols.iter().map(|s| format!("!{s}")).collect();
    let calls: Vec<String> = symbols.iter().map(|s| format!("{s}({args});")).collect();
    let width = calls.iter().map(String::len).max().unwrap_or(0) + 1;

    let mut out = format!("        if ({}) {{\n", missing.join(" && "));
    out.push_str(&format!(
        "            fprintf(stderr, \"ERROR: Couldn't find fortran {} function.  Link against static library instead.\\n\");\n",
        flavor.pmpi_name().to_lowercase()
    ));
    out.push_str("            exit(1);\n");
    out.push_str("        }\n");
    out.push_str(&format!("        switch ({}) {{\n", flavor.flag()));
    for (convention, call) in FortranConvention::ALL.iter().zip(&calls) {
        out.push_str(&format!("        case {}: {call:<width$}break;\n", convention.ordinal()));
    }
    out.push_str("        default:\n");
    out.push_str(&format!(
        "            fprintf(stderr, \"NO SUITABLE FORTRAN {} BINDING\\n\");\n",
        flavor.label()
    ));
    out.push_str("            break;\n");
    out.push_str("        }\n");
    out
}

/// Defines the flag the first time a wrapper for `flavor` is generated.
///
/// The definition goes to the main output; in static mode every file that uses the flag
/// also gets an `extern` declaration, and the file that defines it also declares the weak
/// `real_` forwarders.
pub fn declare_flag(ctx: &mut EvalContext<'_>, flavor: InitFlavor, decl: &Declaration) -> WrapResult<()> {
    let flag = flavor.flag();
    if ctx.first_time(flag) {
        if ctx.config.is_static() {
            ctx.emit_main(&format!("int {flag} = 0;\n"))?;
            if ctx.config.fortran {
                for convention in FortranConvention::ALL {
                    let binding = flavor.binding(convention);
                    ctx.emit(&format!(
                        "{};\n#pragma weak real_{binding}\n",
                        decl.fortran_prototype(&format!("real_{binding}"), EXTERN_C)
                    ))?;
                }
            }
        } else {
            ctx.emit_main(&format!("static int {flag} = 0;\n"))?;
        }
    }
    if ctx.config.is_static() {
        ctx.emit(&format!("extern int {flag};\n"))?;
    }
    Ok(())
}

// ============================================================================
// FORTRAN SIDE
// ============================================================================

fn delegate(flavor: InitFlavor, decl: &Declaration) -> String {
    let mut out = decl.fortran_prototype(&fortran::delegate_name(decl), &["static"]);
    out.push_str(" { \n");
    out.push_str("    int argc = 0;\n");
    out.push_str("    char ** argv = NULL;\n");
    out.push_str(&flavor.delegation().render(decl));
    out.push_str(&format!("    *ierr = {RETURN_VAL};\n"));
    out.push_str("}\n\n");
    out
}

fn entry_point(flavor: InitFlavor, decl: &Declaration, convention: FortranConvention) -> String {
    fortran::binding(
        decl,
        &fortran::delegate_name(decl),
        &flavor.public_binding(convention),
        &[format!("{} = {};", flavor.flag(), convention.ordinal())],
    )
}

/// Writes the delegate and Fortran entry points for an init function.
///
/// In static mode each convention lives in its own file named after the library binding,
/// together with the `real_` forwarder the C wrapper dispatches to.
pub fn write_wrappers(ctx: &mut EvalContext<'_>, flavor: InitFlavor, decl: &Declaration) -> WrapResult<()> {
    if !ctx.config.is_static() {
        ctx.emit(&delegate(flavor, decl))?;
        for convention in FortranConvention::ALL {
            ctx.emit(&entry_point(flavor, decl, convention))?;
        }
        return Ok(());
    }

    let previous = ctx.target().clone();
    for convention in FortranConvention::ALL {
        let target = ctx.static_target(&flavor.binding(convention))?;
        ctx.set_target(target);
        ctx.emit(&format!("{};\n", decl.prototype(EXTERN_C)))?;
        ctx.emit(&delegate(flavor, decl))?;
    }
    for convention in FortranConvention::ALL {
        let binding = flavor.binding(convention);
        let target = ctx.static_target(&binding)?;
        ctx.set_target(target);
        ctx.emit(&format!("extern int {};\n", flavor.flag()))?;
        ctx.emit(&entry_point(flavor, decl, convention))?;
        ctx.emit(&fortran::binding(decl, &binding, &format!("real_{binding}"), &[]))?;
    }
    ctx.set_target(previous);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mpi::Param;

    fn init() -> Declaration {
        Declaration::new(
            "int",
            MPI_INIT,
            vec![Param::new("int", "*", "argc", None, 0), Param::new("char", "***", "argv", None, 1)],
        )
    }

    fn init_thread() -> Declaration {
        Declaration::new(
            "int",
            MPI_INIT_THREAD,
            vec![
                Param::new("int", "*", "argc", None, 0),
                Param::new("char", "***", "argv", None, 1),
                Param::new("int", "", "required", None, 2),
                Param::new("int", "*", "provided", None, 3),
            ],
        )
    }

    #[test]
    fn flavors() {
        assert_eq!(InitFlavor::of("MPI_Init"), Some(InitFlavor::Init));
        assert_eq!(InitFlavor::of("MPI_Send"), None);
        assert_eq!(InitFlavor::InitThread.binding(FortranConvention::Upper), "PMPI_INIT_THREAD");
        assert_eq!(InitFlavor::Init.public_binding(FortranConvention::Underscore), "mpi_init_");
        assert_eq!(InitFlavor::InitThread.label(), "MPI_INIT_THREAD");
    }

    #[test]
    fn shared_callfn_uses_weak_symbols() {
        let config = GeneratorConfig {
            fortran: true,
            ..GeneratorConfig::default()
        };
        let text = callfn(InitFlavor::Init, &init(), &config).expect("callfn");
        assert!(text.starts_with("    if (fortran_init) {\n#if (defined(PIC) || defined(__PIC__)) && !defined(STATIC)\n"));
        assert!(text.contains("        if (!PMPI_INIT && !pmpi_init && !pmpi_init_ && !pmpi_init__) {\n"));
        assert!(text.contains("        case 1: PMPI_INIT(&_wrap_return_val);   break;\n"));
        assert!(text.contains("        case 3: pmpi_init_(&_wrap_return_val);  break;\n"));
        assert!(text.contains("        case 4: pmpi_init__(&_wrap_return_val); break;\n"));
        assert!(text.contains("#else /* !PIC */\n        pmpi_init_(&_wrap_return_val);\n#endif /* !PIC */\n"));
        assert!(text.ends_with("    } else {\n        _wrap_return_val = PMPI_Init(argc, argv);\n    }\n"));
    }

    #[test]
    fn static_thread_callfn_uses_real_forwarders() {
        let config = GeneratorConfig {
            fortran: true,
            static_dir: Some("lib".into()),
            init_binding: FortranConvention::Upper,
            ..GeneratorConfig::default()
        };
        let text = callfn(InitFlavor::InitThread, &init_thread(), &config).expect("callfn");
        assert!(!text.contains("#if"));
        assert!(text.contains("        case 2: real_pmpi_init_thread(&required, provided, &_wrap_return_val);   break;\n"));
        assert!(text.contains("NO SUITABLE FORTRAN MPI_INIT_THREAD BINDING"));
        assert!(text.contains("Couldn't find fortran pmpi_init_thread function."));
    }

    #[test]
    fn thread_binding_follows_selected_convention() {
        let config = GeneratorConfig {
            fortran: true,
            init_binding: FortranConvention::DoubleUnderscore,
            ..GeneratorConfig::default()
        };
        let text = callfn(InitFlavor::InitThread, &init_thread(), &config).expect("callfn");
        assert!(text.contains("#else /* !PIC */\n        pmpi_init_thread__(&required, provided, &_wrap_return_val);\n"));
    }

    #[test]
    fn delegate_supplies_empty_argv() {
        let text = delegate(InitFlavor::Init, &init());
        assert_eq!(
            text,
            "static void MPI_Init_fortran_wrapper(MPI_Fint *ierr) { \n\
             \x20   int argc = 0;\n\
             \x20   char ** argv = NULL;\n\
             \x20   int _wrap_return_val = 0;\n\
             \x20   _wrap_return_val = MPI_Init(&argc, &argv);\n\
             \x20   *ierr = _wrap_return_val;\n\
             }\n\n"
        );
    }

    #[test]
    fn entry_points_set_the_flag() {
        let text = entry_point(InitFlavor::InitThread, &init_thread(), FortranConvention::Lower);
        assert_eq!(
            text,
            "_EXTERN_C_ void mpi_init_thread(MPI_Fint *required, MPI_Fint *provided, MPI_Fint *ierr) { \n\
             \x20   fortran_init_thread = 2;\n\
             \x20   MPI_Init_thread_fortran_wrapper(required, provided, ierr);\n\
             }\n\n"
        );
    }

    #[test]
    fn short_thread_signature_is_rejected() {
        let decl = Declaration::new("int", MPI_INIT_THREAD, Vec::new());
        assert!(callfn(InitFlavor::InitThread, &decl, &GeneratorConfig::default()).is_err());
    }
}
