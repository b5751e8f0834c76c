//! Fixed C text written ahead of generated wrappers.
//!
//! The main output starts with the wrapper prelude (includes, `_EXTERN_C_`, the Fortran
//! sentinel symbols behind `BufferF2C`, and the Fortran string helper), the weak `PMPI`
//! Fortran init prototypes, and the reentry flag. Each static-mode file repeats the prelude
//! plus whatever the template declared in `{{decls}}`.

use crate::{
    codegen::{init::InitFlavor, FortranConvention},
    config::GeneratorConfig,
};

const INCLUDES: &str = r#"
#include <mpi.h>
#include <stdio.h>
#include <stdlib.h>
#include <string.h>

#ifndef _EXTERN_C_
#ifdef __cplusplus
#define _EXTERN_C_ extern "C"
#else /* __cplusplus */
#define _EXTERN_C_
#endif /* __cplusplus */
#endif /* _EXTERN_C_ */

#ifdef MPICH_HAS_C2F
_EXTERN_C_ void *MPIR_ToPointer(int);
#endif // MPICH_HAS_C2F

#if defined(__GNUC__) || defined(__INTEL_COMPILER) || defined(__PGI) || defined(_CRAYC)
#if defined(__GNUC__)
#define WEAK_POSTFIX __attribute__ ((weak))
#else
#define WEAK_POSTFIX
#define USE_WEAK_PRAGMA
#endif

#define WRAPPER_MPI_STATUS_SIZE (sizeof(MPI_Status)/sizeof(MPI_Fint))

"#;

const BUFFER_CONVERSION: &str = r#"

#if defined(MPICH_NAME) && (MPICH_NAME == 1) /* MPICH has no MPI_IN_PLACE */
#define BufferF2C(x) (IsBottom(x) ? MPI_BOTTOM : (x))
#else
#define BufferF2C(x) (IsBottom(x) ? MPI_BOTTOM : (IsInPlace(x) ? MPI_IN_PLACE : (x)))
#endif /* defined(MPICH_NAME) && (MPICH_NAME == 1) */

#else
#define BufferF2C(x) (x)
#endif /* defined(__GNUC__) || defined(__INTEL_COMPILER) || defined(__PGI) || defined(_CRAYC) */

/* Convert a Fortran string into a C string. The returned C string must be
 * explicitly freed with free() once it is no longer needed. */
static char* wrapper_fortran_to_c_string(const char *fortranStr, int length)
{
    const char *end;
    char *rtn;

    /* Discard leading blanks */
    while (' ' == *fortranStr && length > 0)
    {
        ++fortranStr;
        --length;
    }

    /* Discard trailing blanks */
    end = fortranStr + length -1;
    while (' ' == *end && length > 0)
    {
        --end;
        --length;
    }

    /* The caller must free this memory later. */
    rtn = (char*)malloc(length + 1);
    if (rtn)
    {
        strncpy(rtn, fortranStr, length);
        rtn[length] = '\0';
    }
    return rtn;
}

"#;

// ============================================================================
// FORTRAN SENTINELS
// ============================================================================

/// Addresses a Fortran caller passes for `MPI_BOTTOM` / `MPI_IN_PLACE`, grouped by the
/// MPI family that exports them.
struct SentinelGroup {
    family: &'static str,
    /// Integer sentinels, each exported in upper and lower case with 0, 1 and 2 underscores.
    integer_bases: &'static [&'static str],
    /// Integer sentinels exported under a single spelling.
    integers: &'static [&'static str],
    /// Pointer-valued sentinels, exported verbatim.
    pointers: &'static [&'static str],
}

const SENTINELS: &[SentinelGroup] = &[
    SentinelGroup {
        family: "Open MPI",
        integer_bases: &["mpi_fortran_in_place", "mpi_fortran_bottom"],
        integers: &[],
        pointers: &[],
    },
    SentinelGroup {
        family: "MPICH 2",
        integer_bases: &["mpifcmb3", "mpifcmb4"],
        integers: &[],
        pointers: &[],
    },
    SentinelGroup {
        family: "Argonne Fortran MPI wrappers",
        integer_bases: &[],
        integers: &[],
        pointers: &["MPIR_F_MPI_BOTTOM", "MPIR_F_MPI_IN_PLACE", "MPI_F_MPI_BOTTOM", "MPI_F_MPI_IN_PLACE"],
    },
    SentinelGroup {
        family: "SGI MPT",
        integer_bases: &[],
        integers: &[SGI_IN_PLACE],
        pointers: &[],
    },
];

const SGI_IN_PLACE: &str = "mpi_sgi_private_inplace_";

/// `base`, `BASE`, `base_`, `BASE_`, `base__`, `BASE__`.
fn spellings(base: &str) -> Vec<String> {
    ["", "_", "__"]
        .iter()
        .flat_map(|suffix| {
            [
                format!("{}{}", base.to_lowercase(), suffix),
                format!("{}{}", base.to_uppercase(), suffix),
            ]
        })
        .collect()
}

fn integer_sentinels(group: &SentinelGroup) -> Vec<String> {
    let mut names: Vec<String> = group.integer_bases.iter().flat_map(|b| spellings(b)).collect();
    names.extend(group.integers.iter().map(|n| n.to_string()));
    names
}

fn sentinel_definitions() -> String {
    let mut out = String::new();
    for group in SENTINELS {
        out.push_str(&format!("/* {} */\n", group.family));
        for name in integer_sentinels(group) {
            out.push_str(&format!("_EXTERN_C_ MPI_Fint {name} WEAK_POSTFIX = 0;\n"));
        }
        for name in group.pointers {
            out.push_str(&format!("_EXTERN_C_ void *{name} WEAK_POSTFIX = 0;\n"));
        }
    }

    out.push_str("\n\n#ifdef USE_WEAK_PRAGMA\n");
    for group in SENTINELS {
        out.push_str(&format!("/* {} */\n", group.family));
        for name in integer_sentinels(group) {
            out.push_str(&format!("#pragma weak {name}\n"));
        }
        for name in group.pointers {
            out.push_str(&format!("#pragma weak {name}\n"));
        }
    }
    out.push_str("#endif\n\n");
    out
}

/// `#define <name>(x) (a || \ b || \ c)` with aligned continuation lines.
fn predicate_macro(name: &str, tests: &[String]) -> String {
    let head = format!("#define {name}(x) (");
    let indent = " ".repeat(head.len());
    let body = tests.join(&format!(" || \\\n{indent}"));
    format!("{head}{body})\n")
}

fn sentinel_predicates() -> String {
    let address = |n: &String| format!("(x) == (void *) &{n}");

    let bottom: Vec<String> = spellings("mpi_fortran_bottom").iter().map(address).collect();

    let mut in_place: Vec<String> = spellings("mpi_fortran_in_place").iter().map(address).collect();
    in_place.extend(spellings("mpifcmb4").iter().map(address));
    for pointer in ["MPIR_F_MPI_IN_PLACE", "MPI_F_MPI_IN_PLACE"] {
        in_place.push(format!("(&{pointer} && {pointer} && (x) == {pointer})"));
    }
    in_place.push(address(&SGI_IN_PLACE.to_string()));

    format!(
        "/* MPICH 2 requires no special handling - MPI_BOTTOM may (must!) be passed through as-is. */\n{}{}",
        predicate_macro("IsBottom", &bottom),
        predicate_macro("IsInPlace", &in_place)
    )
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Includes, sentinel symbols, `BufferF2C` and the Fortran string helper.
pub fn wrapper_includes() -> String {
    format!("{INCLUDES}{}{}{BUFFER_CONVERSION}", sentinel_definitions(), sentinel_predicates())
}

/// Weak declarations of every Fortran `PMPI_Init`/`PMPI_Init_thread` spelling.
pub fn pmpi_init_decls() -> String {
    let flavors = [InitFlavor::Init, InitFlavor::InitThread];
    let mut out = String::from("\n#if (defined(PIC) || defined(__PIC__))\n");
    out.push_str("/* For shared libraries, declare these weak and figure out which one was linked\n");
    out.push_str("   based on which init wrapper was called.  See mpi_init wrappers.  */\n");
    for flavor in flavors {
        for convention in FortranConvention::ALL {
            out.push_str(&format!("#pragma weak {}\n", flavor.binding(convention)));
        }
    }
    out.push_str("#endif /* PIC */\n\n");
    for flavor in flavors {
        for convention in FortranConvention::ALL {
            out.push_str(&format!(
                "_EXTERN_C_ void {}({});\n",
                flavor.binding(convention),
                flavor.fortran_formals()
            ));
        }
    }
    out.push('\n');
    out
}

/// Text written at the top of the main output.
pub fn front_matter(config: &GeneratorConfig) -> String {
    let mut out = String::new();
    if config.skip_headers {
        return out;
    }
    out.push_str(&wrapper_includes());
    if !config.is_static() {
        out.push_str(&pmpi_init_decls());
    }
    if config.guards {
        out.push_str(if config.is_static() {
            "int in_wrapper = 0;\n"
        } else {
            "static int in_wrapper = 0;\n"
        });
    }
    out
}

/// Text written at the top of each static-mode `<symbol>.c` file.
pub fn static_preamble(config: &GeneratorConfig, declarations: Option<&str>) -> String {
    let mut out = wrapper_includes();
    if let Some(declarations) = declarations {
        out.push_str(declarations);
    }
    if config.guards {
        out.push_str("extern int in_wrapper;\n");
    }
    out
}
