//! Scans preprocessed `mpi.h` text for MPI function declarations.
//!
//! A declaration starts at a line matching `int|double MPI_xxx(` (conversion helpers
//! named `*c2f*`/`*f2c*` are skipped) and runs until a line containing `)...;`. Its
//! parameter list is split on commas and each formal is decomposed into type, pointers,
//! name and array suffix. Anything that doesn't fit that shape aborts extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    err_msg,
    mpi::{Declaration, HeaderQuirks, MpiApi, Param, ELLIPSIS},
    WrapResult,
};

static BEGIN_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(int|double)\s+(MPI_\w+)\s*\(").expect("valid regex"));
static EXCLUDE: Lazy<Regex> = Lazy::new(|| Regex::new(r"c2f|f2c").expect("valid regex"));
static END_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\).*;").expect("valid regex"));
static TRAILING_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\)\s*__attribute__\s*\(.*\)\s*;\s*$").expect("valid regex"));
static FORMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*((?:const)?\s*\w+)\s*((?:\s*\*(?:\s*const)?)*)\s*(?:(\w+)\s*)?(\[.*\])?\s*$")
        .expect("valid regex")
});

/// Builds the function table from preprocessed header text.
pub fn extract(text: &str) -> WrapResult<MpiApi> {
    let mut quirks = HeaderQuirks::default();
    let mut platform_mpi = false;
    let mut functions = Vec::new();

    let mut lines = text.lines().map(str::trim);
    while let Some(line) = lines.next() {
        if line.contains("mpi_sgi") {
            quirks.sgi = true;
        }
        // Platform MPI advertises the Fortran status sentinels but doesn't export them.
        if line.contains("HPMPI") || line.contains("platformmpi") {
            platform_mpi = true;
            quirks.f_status_ignore = false;
            quirks.f_statuses_ignore = false;
        }
        if !platform_mpi {
            if line.contains("MPI_F_STATUS_IGNORE") {
                quirks.f_status_ignore = true;
            } else if line.contains("MPI_F_STATUSES_IGNORE") {
                quirks.f_statuses_ignore = true;
            }
        }

        let Some(begin) = BEGIN_DECL.captures(line) else {
            continue;
        };
        if EXCLUDE.is_match(line) {
            continue;
        }
        let ret_type = begin[1].to_string();
        let name = begin[2].to_string();
        let open = begin.get(0).map_or(0, |m| m.end());

        let mut decl_text = line.to_string();
        while !END_DECL.is_match(&decl_text) {
            let Some(next) = lines.next() else {
                return Err(err_msg!(Extraction, "unterminated declaration of {}", name));
            };
            decl_text.push(' ');
            decl_text.push_str(next);
        }

        let decl_text = TRAILING_ATTRIBUTE.replace(&decl_text, ");");
        let decl = parse_declaration(&decl_text, open, ret_type, name)?;
        trace!(function = %decl.name, params = decl.all_params().len(), "extracted declaration");
        functions.push(decl);
    }

    let mut api = MpiApi::new(quirks);
    for decl in functions {
        api.insert(decl);
    }
    debug!(functions = api.len(), ?quirks, "extracted MPI API");
    Ok(api)
}

/// Parses the parameter list that starts at byte `open` (just past the `(`).
fn parse_declaration(text: &str, open: usize, ret_type: String, name: String) -> WrapResult<Declaration> {
    let args = text
        .get(open..)
        .and_then(|rest| rest.rfind(')').map(|close| &rest[..close]))
        .ok_or_else(|| err_msg!(Extraction, "no parameter list found for {}", name))?;

    let mut formals: Vec<&str> = args.split(',').map(str::trim).collect();
    if formals == ["void"] {
        formals.clear();
    }

    let mut params = Vec::with_capacity(formals.len());
    for (pos, formal) in formals.into_iter().enumerate() {
        params.push(parse_formal(formal, pos, &name)?);
    }
    Ok(Declaration::new(ret_type, name, params))
}

fn parse_formal(formal: &str, pos: usize, function: &str) -> WrapResult<Param> {
    if formal == ELLIPSIS {
        return Ok(Param::ellipsis(pos));
    }
    let caps = FORMAL
        .captures(formal)
        .ok_or_else(|| err_msg!(Extraction, "MATCH FAILED FOR: '{}' in {}", formal, function))?;

    let ty = caps.get(1).map_or("", |m| m.as_str()).trim();
    let pointers = caps.get(2).map_or("", |m| m.as_str());
    let name = caps
        .get(3)
        .map_or_else(|| format!("arg_{pos}"), |m| m.as_str().to_string());
    let array = caps.get(4).map(|m| m.as_str().to_string());
    Ok(Param::new(ty, pointers, name, array, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
typedef int MPI_Comm;
extern int MPI_F_STATUS_IGNORE;
int MPI_Send(const void *buf, int count, MPI_Datatype datatype, int dest,
             int tag, MPI_Comm comm) __attribute__((deprecated));
int MPI_Comm_set_name(MPI_Comm comm, const char *comm_name);
MPI_Fint MPI_Comm_c2f(MPI_Comm comm);
int MPI_Type_c2f(MPI_Datatype);
double MPI_Wtime(void);
int MPI_Pcontrol(const int level, ...);
int MPI_Waitall(int count, MPI_Request array_of_requests[], MPI_Status *array_of_statuses);
int MPI_Cart_create(MPI_Comm, int, const int[], const int[], int, MPI_Comm *);
"#;

    #[test]
    fn extracts_in_header_order() {
        let api = extract(HEADER).expect("extracts");
        let names: Vec<&str> = api.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "MPI_Send",
                "MPI_Comm_set_name",
                "MPI_Wtime",
                "MPI_Pcontrol",
                "MPI_Waitall",
                "MPI_Cart_create"
            ]
        );
        assert!(api.quirks.f_status_ignore);
        assert!(!api.quirks.sgi);
    }

    #[test]
    fn multiline_declaration_with_attribute() {
        let api = extract(HEADER).expect("extracts");
        let send = api.get("MPI_Send").expect("MPI_Send");
        assert_eq!(send.arg_names(), vec!["buf", "count", "datatype", "dest", "tag", "comm"]);
        assert_eq!(send.param(0).map(|p| p.type_name()), Some("const void"));
        assert_eq!(send.param(0).map(|p| p.pointers.as_str()), Some("*"));
    }

    #[test]
    fn unnamed_params_are_synthesized() {
        let api = extract(HEADER).expect("extracts");
        let cart = api.get("MPI_Cart_create").expect("MPI_Cart_create");
        assert_eq!(cart.arg_names(), vec!["arg_0", "arg_1", "arg_2", "arg_3", "arg_4", "arg_5"]);
        assert_eq!(cart.param(2).and_then(|p| p.array.clone()).as_deref(), Some("[]"));
        assert_eq!(cart.param(5).map(|p| p.c_formal()).as_deref(), Some("MPI_Comm *arg_5"));
    }

    #[test]
    fn void_and_ellipsis() {
        let api = extract(HEADER).expect("extracts");
        assert!(api.get("MPI_Wtime").expect("wtime").all_params().is_empty());
        let pcontrol = api.get("MPI_Pcontrol").expect("pcontrol");
        assert!(pcontrol.all_params()[1].is_ellipsis());
    }

    #[test]
    fn unparseable_formal_fails() {
        let err = extract("int MPI_Bad(int (*cb)(void));\n").unwrap_err();
        assert!(err.message().starts_with("MATCH FAILED FOR:"), "{}", err.message());
    }

    #[test]
    fn platform_mpi_disables_status_sentinels() {
        let api = extract("#define HPMPI 1\nextern int MPI_F_STATUS_IGNORE;\nextern int MPI_F_STATUSES_IGNORE;\n")
            .expect("extracts");
        assert!(!api.quirks.f_status_ignore);
        assert!(!api.quirks.f_statuses_ignore);
    }

    #[test]
    fn sgi_marker_is_detected() {
        let api = extract("extern int mpi_sgi_private_inplace_;\n").expect("extracts");
        assert!(api.quirks.sgi);
    }

    #[test]
    fn unterminated_declaration_fails() {
        let err = extract("int MPI_Send(int a,\n").unwrap_err();
        assert!(err.message().contains("unterminated declaration"));
    }
}
