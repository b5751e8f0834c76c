//! The C half of a wrapper: a function with the intercepted name that runs the template
//! body and returns whatever the body stored in the return temporary.

use crate::mpi::{Declaration, MpiApi, EXTERN_C};

/// Name of the local holding the wrapped call's result.
pub const RETURN_VAL: &str = "_wrap_return_val";

/// `_wrap_return_val = PMPI_Foo(a, b);`
pub fn pmpi_call(decl: &Declaration) -> String {
    format!("{RETURN_VAL} = P{}({});", decl.name, decl.arg_names().join(", "))
}

/// Everything up to the body: optional `PMPI_` prototype, signature, return temporary and
/// the reentry check.
pub fn open(decl: &Declaration, api: &MpiApi, guards: bool) -> String {
    let mut out = String::new();
    if api.needs_pmpi_prototype(&decl.name) {
        out.push_str(&decl.pmpi_prototype(EXTERN_C));
        out.push_str(";\n");
    }
    out.push_str(&decl.prototype(EXTERN_C));
    out.push_str(" { \n");
    out.push_str(&format!("    {} {} = 0;\n", decl.ret_type, RETURN_VAL));
    if guards {
        out.push_str(&format!(
            "    if (in_wrapper) return P{}({});\n",
            decl.name,
            decl.arg_names().join(", ")
        ));
        out.push_str("    in_wrapper = 1;\n");
    }
    out
}

/// Releases the reentry flag and returns.
pub fn close(guards: bool) -> String {
    let mut out = String::new();
    if guards {
        out.push_str("    in_wrapper = 0;\n");
    }
    out.push_str(&format!("    return {RETURN_VAL};\n}}\n\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mpi::{HeaderQuirks, Param};

    fn barrier() -> Declaration {
        Declaration::new("int", "MPI_Barrier", vec![Param::new("MPI_Comm", "", "comm", None, 0)])
    }

    #[test]
    fn unguarded_wrapper() {
        let api = MpiApi::default();
        let decl = barrier();
        let text = format!("{}BODY\n{}", open(&decl, &api, false), close(false));
        assert_eq!(
            text,
            "_EXTERN_C_ int PMPI_Barrier(MPI_Comm comm);\n\
             _EXTERN_C_ int MPI_Barrier(MPI_Comm comm) { \n\
             \x20   int _wrap_return_val = 0;\n\
             BODY\n\
             \x20   return _wrap_return_val;\n\
             }\n\n"
        );
    }

    #[test]
    fn guards_wrap_the_body() {
        let decl = barrier();
        let head = open(&decl, &MpiApi::default(), true);
        assert!(head.ends_with("    if (in_wrapper) return PMPI_Barrier(comm);\n    in_wrapper = 1;\n"));
        assert!(close(true).starts_with("    in_wrapper = 0;\n"));
    }

    #[test]
    fn sgi_clashing_prototypes_are_skipped() {
        let api = MpiApi::new(HeaderQuirks {
            sgi: true,
            ..HeaderQuirks::default()
        });
        let decl = Declaration::new("int", "MPI_File_set_view", Vec::new());
        assert!(open(&decl, &api, false).starts_with("_EXTERN_C_ int MPI_File_set_view() { \n"));
    }

    #[test]
    fn call_forwards_every_named_argument() {
        assert_eq!(pmpi_call(&barrier()), "_wrap_return_val = PMPI_Barrier(comm);");
    }
}
