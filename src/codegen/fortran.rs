//! Fortran entry points.
//!
//! Each wrapped function gets one `static` delegate that translates Fortran arguments
//! (everything by reference, handles as `MPI_Fint`, strings blank padded with a hidden
//! length, 1-based indices) into a call of the C wrapper, plus one thin forwarding
//! function per [`FortranConvention`].

use tracing::trace;

use crate::{
    codegen::{c_wrapper::RETURN_VAL, FortranConvention, FortranDelegation},
    err_msg,
    mpi::{Declaration, HeaderQuirks, KnowledgeBase, Param, ParamTraits, EXTERN_C},
    WrapResult,
};

pub const DELEGATE_SUFFIX: &str = "_fortran_wrapper";

/// Functions that never get Fortran entry points. Their `argv` string arrays are not
/// worth marshaling; MPI libraries forward the Fortran call to the (wrapped) C one.
pub const NO_FORTRAN_WRAPPERS: &[&str] = &["MPI_Comm_spawn", "MPI_Comm_spawn_multiple"];

pub fn delegate_name(decl: &Declaration) -> String {
    format!("{}{}", decl.name, DELEGATE_SUFFIX)
}

/// A Fortran-callable `name` that runs `stmts` and forwards to `delegate`.
pub fn binding(decl: &Declaration, delegate: &str, name: &str, stmts: &[String]) -> String {
    let mut out = decl.fortran_prototype(name, EXTERN_C);
    out.push_str(" { \n");
    for stmt in stmts {
        out.push_str(&format!("    {stmt}\n"));
    }
    let args = decl.fortran_arg_names().join(", ");
    if decl.returns_error_code() {
        out.push_str(&format!("    {delegate}({args});\n"));
    } else {
        out.push_str(&format!("    return {delegate}({args});\n"));
    }
    out.push_str("}\n\n");
    out
}

/// Delegate plus the four forwarding bindings for an ordinary MPI function.
pub fn wrappers(decl: &Declaration, knowledge: &KnowledgeBase, quirks: &HeaderQuirks) -> WrapResult<String> {
    if NO_FORTRAN_WRAPPERS.contains(&decl.name.as_str()) {
        return Ok(String::new());
    }
    let delegate = delegate_name(decl);
    let call = marshal(decl, knowledge, quirks)?;

    let mut out = decl.fortran_prototype(&delegate, &["static"]);
    out.push_str(" { \n");
    out.push_str(&call.render(decl));
    if decl.returns_error_code() {
        out.push_str(&format!("    *ierr = {RETURN_VAL};\n"));
    } else {
        out.push_str(&format!("    return {RETURN_VAL};\n"));
    }
    out.push_str("}\n\n");

    for convention in FortranConvention::ALL {
        out.push_str(&binding(decl, &delegate, &convention.apply(&decl.name), &[]));
    }
    Ok(out)
}

// ============================================================================
// MARSHALING
// ============================================================================

/// Builds the delegate's call by classifying every named parameter.
pub fn marshal(decl: &Declaration, knowledge: &KnowledgeBase, quirks: &HeaderQuirks) -> WrapResult<FortranDelegation> {
    let mut call = FortranDelegation::new();
    for param in decl.params() {
        let traits = knowledge.classify(&decl.name, param.pos);
        trace!(function = %decl.name, param = %param.name, ?traits, "marshaling");

        if !param.is_indirect() {
            by_value(&mut call, param);
        } else if param.is_string() {
            string(&mut call, decl, param, traits);
        } else if traits.index_output {
            call.add_actual(param.name.as_str());
            call.add_writeback(&format!("if (*{0} != MPI_UNDEFINED) ++(*{0});", param.name));
        } else if let Some(count_pos) = traits.index_array_count {
            let count = count_param(decl, count_pos)?;
            call.add_temp("int", "i");
            call.add_actual(param.name.as_str());
            call.add_writeback(&format!("if (*{} != MPI_UNDEFINED) {{", count.name));
            call.add_writeback(&format!("    for (i=0; i < *{}; ++i)", count.name));
            call.add_writeback(&format!("        ++{}[i];", param.name));
            call.add_writeback("}");
        } else if !param.is_handle() {
            call.add_actual(format!("BufferF2C(({}){})", param.cast_type(), param.name));
        } else {
            call.add_actual_mpich(format!("({}*){}", param.type_name(), param.name));
            match traits.handle_array_count {
                None if param.is_status() => status(&mut call, param, traits, quirks),
                None => handle(&mut call, param, traits),
                Some(count_pos) => {
                    let count = count_param(decl, count_pos)?;
                    handle_array(&mut call, param, count, traits, quirks);
                }
            }
        }
    }
    Ok(call)
}

fn count_param(decl: &Declaration, pos: usize) -> WrapResult<&Param> {
    decl.param(pos)
        .filter(|p| !p.is_ellipsis())
        .ok_or_else(|| err_msg!(Extraction, "{} has no count parameter at position {}", decl.name, pos))
}

fn by_value(call: &mut FortranDelegation, param: &Param) {
    if param.is_handle() {
        call.add_actual_c2f(format!("{}_f2c(*{})", param.conversion_prefix(), param.name));
        call.add_actual_mpich(format!("({})(*{})", param.type_name(), param.name));
    } else {
        call.add_actual(format!("*{}", param.name));
    }
}

fn string(call: &mut FortranDelegation, decl: &Declaration, param: &Param, traits: ParamTraits) {
    let name = &param.name;
    let temp = format!("temp_{name}");
    let length = format!("{name}_length");

    call.add_temp("char*", &temp);
    call.add_copy(&format!("{temp} = wrapper_fortran_to_c_string({name}, {length});"));
    call.add_copy(&format!("if (!{temp})"));
    call.add_copy("{");
    call.add_copy(&format!(
        "    fprintf(stderr, \"Error in MPI Fortran wrapper for {} - unable to allocate (at most) %i+1 bytes for copy of the {} argument string\\n\", {});",
        decl.name, name, length
    ));
    call.add_copy("    abort();");
    call.add_copy("}");
    call.add_actual(temp.as_str());

    if !param.type_name().starts_with("const") && traits.direction.is_output() {
        let temp_length = format!("{temp}_length");
        call.add_writeback(&format!("strncpy({name},{temp},{length});"));
        call.add_temp("int", &temp_length);
        call.add_writeback(&format!("{temp_length} = strlen({temp});"));
        call.add_writeback(&format!("if ({temp_length} < {length})"));
        call.add_writeback(&format!("    memset({name}+{temp_length}, ' ', {length} - {temp_length});"));
    }
    call.add_writeback(&format!("free({temp});"));
}

/// A single `MPI_Status *`, which may be `MPI_F_STATUS_IGNORE`.
fn status(call: &mut FortranDelegation, param: &Param, traits: ParamTraits, quirks: &HeaderQuirks) {
    let name = &param.name;
    let conv = param.conversion_prefix();
    let temp = format!("temp_{name}");
    call.add_temp(param.type_name(), &temp);

    if quirks.f_status_ignore {
        call.add_actual_mpi2(format!("(({name} == MPI_F_STATUS_IGNORE) ? MPI_STATUS_IGNORE : &{temp})"));
        call.add_copy_mpi2(&format!("if ({name} != MPI_F_STATUS_IGNORE) {conv}_f2c({name}, &{temp});"));
    } else {
        call.add_actual_mpi2(format!("(&{temp})"));
        call.add_copy_mpi2(&format!("{conv}_f2c({name}, &{temp});"));
    }
    call.add_actual_c2f_only(format!("&{temp}"));
    call.add_copy_c2f(&format!("{conv}_f2c({name}, &{temp});"));

    if traits.direction.is_output() {
        if quirks.f_status_ignore {
            call.add_writeback_mpi2(&format!("if ({name} != MPI_F_STATUS_IGNORE) {conv}_c2f(&{temp}, {name});"));
        } else {
            call.add_writeback_mpi2(&format!("{conv}_c2f(&{temp}, {name});"));
        }
        call.add_writeback_c2f(&format!("{conv}_c2f(&{temp}, {name});"));
    }
}

/// A pointer to one handle.
fn handle(call: &mut FortranDelegation, param: &Param, traits: ParamTraits) {
    let name = &param.name;
    let conv = param.conversion_prefix();
    let temp = format!("temp_{name}");
    call.add_temp(param.type_name(), &temp);
    call.add_actual_c2f(format!("&{temp}"));
    if traits.direction.is_input() {
        call.add_copy(&format!("{temp} = {conv}_f2c(*{name});"));
    }
    if traits.direction.is_output() {
        call.add_writeback(&format!("*{name} = {conv}_c2f({temp});"));
    }
}

/// An array of handles whose length lives in `count`.
fn handle_array(call: &mut FortranDelegation, param: &Param, count: &Param, traits: ParamTraits, quirks: &HeaderQuirks) {
    let name = &param.name;
    let ty = param.type_name();
    let conv = param.conversion_prefix();
    let temp = format!("temp_{name}");
    let array_type = format!("{ty}*");
    call.add_temp(&array_type, &temp);
    call.add_temp("int", "i");

    let (copy, writeback) = if param.is_status() {
        (
            format!("    {conv}_f2c(&{name}[WRAPPER_MPI_STATUS_SIZE*i], &{temp}[i])"),
            format!("    {conv}_c2f(&{temp}[i], &{name}[WRAPPER_MPI_STATUS_SIZE*i])"),
        )
    } else {
        (
            format!("    {temp}[i] = {conv}_f2c({name}[i])"),
            format!("    {name}[i] = {conv}_c2f({temp}[i])"),
        )
    };

    // A communicator in the count position means "one element per rank".
    let length = if count.type_name() == "MPI_Comm" {
        let length = format!("temp_count_{name}");
        call.add_temp("int", &length);
        call.add_copy(&format!("MPI_Comm_size(MPI_Comm_f2c(*{}), &{length});", count.name));
        length
    } else {
        format!("*{}", count.name)
    };
    let allocate = format!("{temp} = ({array_type})malloc(sizeof({ty}) * {length});");
    let direction = traits.direction;

    if param.is_status() && quirks.f_statuses_ignore {
        call.add_copy(&format!("if ({name} == MPI_F_STATUSES_IGNORE)"));
        call.add_copy(&format!("    {temp} = MPI_STATUSES_IGNORE;"));
        call.add_copy("else");
        call.add_copy(&format!("    {allocate}"));
        if direction.is_input() {
            call.add_copy(&format!("if ({name} != MPI_F_STATUSES_IGNORE) {{"));
            call.add_copy(&format!("    for (i=0; i < {length}; i++)"));
            call.add_copy(&format!("    {copy};"));
            call.add_copy("}");
        }
        call.add_actual_c2f(temp.as_str());
        if direction.is_output() {
            call.add_writeback(&format!("if ({name} != MPI_F_STATUSES_IGNORE) {{"));
            call.add_writeback(&format!("    for (i=0; i < {length}; i++)"));
            call.add_writeback(&format!("    {writeback};"));
            call.add_writeback("}");
        }
        call.add_writeback(&format!("if ({name} != MPI_F_STATUSES_IGNORE)"));
        call.add_writeback(&format!("    free({temp});"));
    } else {
        call.add_copy(&allocate);
        if direction.is_input() {
            call.add_copy(&format!("for (i=0; i < {length}; i++)"));
            call.add_copy(&format!("{copy};"));
        }
        call.add_actual_c2f(temp.as_str());
        if direction.is_output() {
            call.add_writeback(&format!("for (i=0; i < {length}; i++)"));
            call.add_writeback(&format!("{writeback};"));
        }
        call.add_writeback(&format!("free({temp});"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn barrier() -> Declaration {
        Declaration::new("int", "MPI_Barrier", vec![Param::new("MPI_Comm", "", "comm", None, 0)])
    }

    #[test]
    fn barrier_wrappers() {
        let text = wrappers(&barrier(), &KnowledgeBase::builtin(), &HeaderQuirks::default()).expect("wrappers");
        let expected = "static void MPI_Barrier_fortran_wrapper(MPI_Fint *comm, MPI_Fint *ierr) { \n\
            \x20   int _wrap_return_val = 0;\n\
            #if (!defined(MPICH_HAS_C2F) && defined(MPICH_NAME) && (MPICH_NAME == 1)) /* MPICH test */\n\
            \x20   _wrap_return_val = MPI_Barrier((MPI_Comm)(*comm));\n\
            #else /* MPI-2 safe call */\n\
            \x20   _wrap_return_val = MPI_Barrier(MPI_Comm_f2c(*comm));\n\
            #endif /* MPICH test */\n\
            \x20   *ierr = _wrap_return_val;\n\
            }\n\n\
            _EXTERN_C_ void MPI_BARRIER(MPI_Fint *comm, MPI_Fint *ierr) { \n\
            \x20   MPI_Barrier_fortran_wrapper(comm, ierr);\n\
            }\n\n";
        assert!(text.starts_with(expected), "{text}");
        for name in ["mpi_barrier(", "mpi_barrier_(", "mpi_barrier__("] {
            assert!(text.contains(&format!("_EXTERN_C_ void {name}MPI_Fint *comm, MPI_Fint *ierr) {{ \n")));
        }
    }

    #[test]
    fn double_returning_functions_return_the_value() {
        let decl = Declaration::new("double", "MPI_Wtime", Vec::new());
        let text = wrappers(&decl, &KnowledgeBase::builtin(), &HeaderQuirks::default()).expect("wrappers");
        assert!(text.contains("static double MPI_Wtime_fortran_wrapper() { \n    double _wrap_return_val = 0;\n    _wrap_return_val = MPI_Wtime();\n    return _wrap_return_val;\n"));
        assert!(text.contains("_EXTERN_C_ double mpi_wtime_() { \n    return MPI_Wtime_fortran_wrapper();\n}\n"));
    }

    #[test]
    fn spawn_is_not_wrapped() {
        let decl = Declaration::new("int", "MPI_Comm_spawn", Vec::new());
        let text = wrappers(&decl, &KnowledgeBase::builtin(), &HeaderQuirks::default()).expect("wrappers");
        assert!(text.is_empty());
    }

    #[test]
    fn index_output_keeps_undefined() {
        // MPI_Waitany(count, array_of_requests, index, status)
        let decl = Declaration::new(
            "int",
            "MPI_Waitany",
            vec![
                Param::new("int", "", "count", None, 0),
                Param::new("MPI_Request", "", "array_of_requests", Some("[]".into()), 1),
                Param::new("int", "*", "index", None, 2),
                Param::new("MPI_Status", "*", "status", None, 3),
            ],
        );
        let call = marshal(&decl, &KnowledgeBase::builtin(), &HeaderQuirks::default()).expect("marshal");
        let text = call.render(&decl);
        assert!(text.contains("    if (*index != MPI_UNDEFINED) ++(*index);\n"));
        assert!(text.contains("    temp_array_of_requests = (MPI_Request*)malloc(sizeof(MPI_Request) * *count);\n"));
        assert!(text.contains("    free(temp_array_of_requests);\n"));
    }

    #[test]
    fn output_strings_are_blank_padded() {
        // MPI_Comm_get_name(comm, comm_name, resultlen)
        let decl = Declaration::new(
            "int",
            "MPI_Comm_get_name",
            vec![
                Param::new("MPI_Comm", "", "comm", None, 0),
                Param::new("char", "*", "comm_name", None, 1),
                Param::new("int", "*", "resultlen", None, 2),
            ],
        );
        let text = marshal(&decl, &KnowledgeBase::builtin(), &HeaderQuirks::default())
            .expect("marshal")
            .render(&decl);
        assert!(text.contains("    temp_comm_name = wrapper_fortran_to_c_string(comm_name, comm_name_length);\n"));
        assert!(text.contains("    strncpy(comm_name,temp_comm_name,comm_name_length);\n"));
        assert!(text.contains(
            "    if (temp_comm_name_length < comm_name_length)\n        memset(comm_name+temp_comm_name_length, ' ', comm_name_length - temp_comm_name_length);\n    free(temp_comm_name);\n"
        ));
    }

    #[test]
    fn const_strings_are_only_freed() {
        let decl = Declaration::new(
            "int",
            "MPI_Comm_set_name",
            vec![
                Param::new("MPI_Comm", "", "comm", None, 0),
                Param::new("const char", "*", "comm_name", None, 1),
            ],
        );
        let text = marshal(&decl, &KnowledgeBase::builtin(), &HeaderQuirks::default())
            .expect("marshal")
            .render(&decl);
        assert!(!text.contains("strncpy"));
        assert!(text.contains("    free(temp_comm_name);\n"));
    }

    #[test]
    fn status_honours_ignore_sentinel() {
        let decl = Declaration::new("int", "MPI_Wait", vec![
            Param::new("MPI_Request", "*", "request", None, 0),
            Param::new("MPI_Status", "*", "status", None, 1),
        ]);
        let quirks = HeaderQuirks {
            f_status_ignore: true,
            ..HeaderQuirks::default()
        };
        let text = marshal(&decl, &KnowledgeBase::builtin(), &quirks).expect("marshal").render(&decl);
        assert!(text.contains("((status == MPI_F_STATUS_IGNORE) ? MPI_STATUS_IGNORE : &temp_status)"));
        assert!(text.contains("    if (status != MPI_F_STATUS_IGNORE) MPI_Status_c2f(&temp_status, status);\n"));
        assert!(text.contains("    *request = MPI_Request_c2f(temp_request);\n"));

        let plain = marshal(&decl, &KnowledgeBase::builtin(), &HeaderQuirks::default())
            .expect("marshal")
            .render(&decl);
        assert!(plain.contains("(&temp_status)"));
        assert!(!plain.contains("MPI_F_STATUS_IGNORE"));
    }

    #[test]
    fn communicator_sized_arrays_use_comm_size() {
        // MPI_Alltoallw: sendtypes (3) and recvtypes (7) are sized by comm (8)
        let kb = KnowledgeBase::builtin();
        let decl = Declaration::new(
            "int",
            "MPI_Alltoallw",
            vec![
                Param::new("const void", "*", "sendbuf", None, 0),
                Param::new("const int", "", "sendcounts", Some("[]".into()), 1),
                Param::new("const int", "", "sdispls", Some("[]".into()), 2),
                Param::new("const MPI_Datatype", "", "sendtypes", Some("[]".into()), 3),
                Param::new("void", "*", "recvbuf", None, 4),
                Param::new("const int", "", "recvcounts", Some("[]".into()), 5),
                Param::new("const int", "", "rdispls", Some("[]".into()), 6),
                Param::new("MPI_Datatype", "", "recvtypes", Some("[]".into()), 7),
                Param::new("MPI_Comm", "", "comm", None, 8),
            ],
        );
        let text = marshal(&decl, &kb, &HeaderQuirks::default()).expect("marshal").render(&decl);
        assert!(text.contains("BufferF2C((const void*)sendbuf)"));
        assert!(text.contains("BufferF2C((const int*)sendcounts)"));
        assert!(!text.contains("temp_sendtypes"), "const handle types are not converted:\n{text}");
        assert!(text.contains("    MPI_Comm_size(MPI_Comm_f2c(*comm), &temp_count_recvtypes);\n"));
        assert!(text.contains(
            "    temp_recvtypes = (MPI_Datatype*)malloc(sizeof(MPI_Datatype) * temp_count_recvtypes);\n    for (i=0; i < temp_count_recvtypes; i++)\n        temp_recvtypes[i] = MPI_Type_f2c(recvtypes[i]);\n"
        ));
        // input only: nothing is converted back
        assert!(!text.contains("MPI_Type_c2f"));
    }

    #[test]
    fn missing_count_parameter_is_an_error() {
        let mut kb = KnowledgeBase::builtin();
        kb.handle_arrays.insert("MPI_Foo".into(), [(0, 5)].into_iter().collect());
        let decl = Declaration::new("int", "MPI_Foo", vec![Param::new("MPI_Request", "", "reqs", Some("[]".into()), 0)]);
        let err = marshal(&decl, &kb, &HeaderQuirks::default()).unwrap_err();
        assert!(err.message().contains("no count parameter at position 5"));
    }
}
