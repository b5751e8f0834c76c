//! Per-function iteration macros.
//!
//! - `{{foreachfn var MPI_Send MPI_Recv}}body{{endforeachfn}}` evaluates the body once per
//!   named function with that function's bindings in scope.
//! - `{{forallfn var MPI_Init}}...{{endforallfn}}` does the same for every extracted
//!   function except those listed.
//! - `{{fn var MPI_Send}}body{{endfn}}` generates a complete wrapper: the body becomes the
//!   C wrapper's body and, with Fortran output on, the Fortran entry points follow.
//!   Names ending in `?` are skipped when the header doesn't declare them.
//! - `{{fnall var ...}}` is `fn` over every function except those listed.
//!
//! Inside a function body these names are bound: `ret_type`, `args`, `types`, `formals`,
//! `apply_to_type`, plus for `fn` only `ret_val` and `callfn`. The older spellings
//! `retType`, `get_arg`, `applyToType`, `argList`, `argTypeList` and `returnVal` remain
//! available.

use tracing::debug;

use crate::{
    ast::Chunk,
    codegen::{c_wrapper, fortran, init, InitFlavor, RETURN_VAL},
    err_msg,
    macros::{Arity, Macro, MacroRegistry},
    mpi::Declaration,
    runtime::{evaluate_chunks, EvalContext, Scope, Value},
    WrapResult,
};

pub fn register_function_macros(registry: &mut MacroRegistry) {
    registry.register(
        Macro::new("foreachfn", Arity::AtLeast(1), |ctx, scope, args, children| {
            let (var, names) = split_args(args);
            for_each_function(ctx, scope, &var, &names, children)?;
            Ok(None)
        })
        .with_body(),
    );
    registry.register(
        Macro::new("forallfn", Arity::AtLeast(1), |ctx, scope, args, children| {
            let (var, excluded) = split_args(args);
            let names = ctx.api.all_but(&excluded);
            for_each_function(ctx, scope, &var, &names, children)?;
            Ok(None)
        })
        .with_body(),
    );
    registry.register(
        Macro::new("fn", Arity::AtLeast(1), |ctx, scope, args, children| {
            let (var, names) = split_args(args);
            wrap_functions(ctx, scope, &var, &names, children)?;
            Ok(None)
        })
        .with_body(),
    );
    registry.register(
        Macro::new("fnall", Arity::AtLeast(1), |ctx, scope, args, children| {
            let (var, excluded) = split_args(args);
            let names = ctx.api.all_but(&excluded);
            wrap_functions(ctx, scope, &var, &names, children)?;
            Ok(None)
        })
        .with_body(),
    );
}

/// Loop variable name, then function names with list arguments flattened.
fn split_args(args: Vec<Value>) -> (String, Vec<String>) {
    let mut args = args.into_iter();
    let var = args.next().map(|v| v.to_string()).unwrap_or_default();
    (var, args.flat_map(Value::into_items).collect())
}

/// Runs `each` with `name` as the current function, attributing errors to it.
fn with_function<T>(
    ctx: &mut EvalContext<'_>,
    name: &str,
    each: impl FnOnce(&mut EvalContext<'_>) -> WrapResult<T>,
) -> WrapResult<T> {
    let previous = ctx.enter_function(Some(name.to_string()));
    let result = each(ctx).map_err(|e| e.while_handling(Some(name)));
    ctx.enter_function(previous);
    result
}

fn lookup<'a>(api: &'a crate::mpi::MpiApi, name: &str) -> WrapResult<&'a Declaration> {
    api.get(name)
        .ok_or_else(|| err_msg!(Syntax, "{} is not an MPI function", name))
}

// ============================================================================
// ITERATION
// ============================================================================

fn for_each_function(
    ctx: &mut EvalContext<'_>,
    scope: &Scope<'_>,
    var: &str,
    names: &[String],
    children: &[Chunk],
) -> WrapResult<()> {
    let api = ctx.api;
    for name in names {
        with_function(ctx, name, |ctx| {
            let decl = lookup(api, name)?;
            let mut fn_scope = Scope::child(scope);
            fn_scope.set_value(var, name.clone());
            include_decl(&mut fn_scope, decl);
            evaluate_chunks(children, ctx, &mut fn_scope)
        })?;
    }
    Ok(())
}

fn wrap_functions(
    ctx: &mut EvalContext<'_>,
    scope: &Scope<'_>,
    var: &str,
    names: &[String],
    children: &[Chunk],
) -> WrapResult<()> {
    let api = ctx.api;
    for raw in names {
        let (name, optional) = match raw.strip_suffix('?') {
            Some(name) => (name, true),
            None => (raw.as_str(), false),
        };
        if optional && !api.contains(name) {
            debug!(function = name, "optional function not declared, skipping");
            continue;
        }
        with_function(ctx, name, |ctx| {
            let decl = lookup(api, name)?;
            wrap_function(ctx, scope, var, decl, children)
        })?;
    }
    Ok(())
}

/// Generates the C wrapper, and optionally the Fortran wrappers, for one function.
fn wrap_function(
    ctx: &mut EvalContext<'_>,
    scope: &Scope<'_>,
    var: &str,
    decl: &Declaration,
    children: &[Chunk],
) -> WrapResult<()> {
    debug!(function = %decl.name, "generating wrapper");
    let mut fn_scope = Scope::child(scope);
    fn_scope.set_value(var, decl.name.clone());
    include_decl(&mut fn_scope, decl);
    fn_scope.set_value("ret_val", RETURN_VAL);
    fn_scope.set_value("returnVal", RETURN_VAL);

    let previous = if ctx.config.is_static() {
        let target = ctx.static_target(&decl.name)?;
        Some(ctx.set_target(target))
    } else {
        None
    };

    let flavor = InitFlavor::of(&decl.name).filter(|_| ctx.config.fortran);
    match flavor {
        Some(flavor) => {
            let dispatch = init::callfn(flavor, decl, ctx.config)?;
            fn_scope.set(
                "callfn",
                Macro::new("callfn", Arity::Any, move |ctx, _, _, _| {
                    ctx.emit(&dispatch)?;
                    Ok(None)
                }),
            );
            init::declare_flag(ctx, flavor, decl)?;
        }
        None => fn_scope.set_value("callfn", c_wrapper::pmpi_call(decl)),
    }

    ctx.emit(&format!("/* ================== C Wrappers for {} ================== */\n", decl.name))?;
    ctx.emit(&c_wrapper::open(decl, ctx.api, ctx.config.guards))?;
    evaluate_chunks(children, ctx, &mut fn_scope)?;
    ctx.emit(&c_wrapper::close(ctx.config.guards))?;

    if ctx.config.fortran {
        ctx.emit(&format!("/* =============== Fortran Wrappers for {} =============== */\n", decl.name))?;
        match flavor {
            Some(flavor) => init::write_wrappers(ctx, flavor, decl)?,
            None => {
                let text = fortran::wrappers(decl, ctx.knowledge, &ctx.api.quirks)?;
                ctx.emit(&text)?;
            }
        }
        ctx.emit(&format!("/* ================= End Wrappers for {} ================= */\n\n\n", decl.name))?;
    }

    if let Some(previous) = previous {
        ctx.set_target(previous);
    }
    Ok(())
}

// ============================================================================
// BINDINGS
// ============================================================================

/// Binds the attributes of `decl` that templates can refer to.
fn include_decl(scope: &mut Scope<'_>, decl: &Declaration) {
    let args = decl.arg_names();
    let formals = decl.formals();

    scope.set_value("ret_type", decl.ret_type.clone());
    scope.set_value("retType", decl.ret_type.clone());
    scope.set_value("args", args.clone());
    scope.set_value("get_arg", args.clone());
    scope.set_value("types", decl.types());
    scope.set_value("argList", format!("({})", args.join(", ")));
    scope.set_value("argTypeList", format!("({})", formals.join(", ")));
    scope.set_value("formals", formals);

    let applier = type_applier(decl);
    scope.set("applyToType", applier.clone());
    scope.set("apply_to_type", applier);
}

/// `{{apply_to_type <c type> <macro>}}` writes `macro(arg);` for each argument of that type.
fn type_applier(decl: &Declaration) -> Macro {
    let params: Vec<(String, String)> = decl
        .all_params()
        .iter()
        .map(|p| (p.c_type(), p.name.clone()))
        .collect();
    Macro::new("apply_to_type", Arity::Exact(2), move |ctx, _, args, _| {
        let ty = args[0].to_string();
        let callee = args[1].to_string();
        for (_, name) in params.iter().filter(|(c_type, _)| *c_type == ty) {
            ctx.emit(&format!("{callee}({name});\n"))?;
        }
        Ok(None)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_function_lists() {
        let (var, names) = split_args(vec![
            Value::Text("f".into()),
            Value::Text("MPI_Send".into()),
            Value::Sequence(vec!["MPI_Recv".into(), "MPI_Bcast?".into()]),
        ]);
        assert_eq!(var, "f");
        assert_eq!(names, vec!["MPI_Send", "MPI_Recv", "MPI_Bcast?"]);
    }

    #[test]
    fn decl_bindings() {
        let decl = Declaration::new(
            "int",
            "MPI_Comm_rank",
            vec![
                crate::mpi::Param::new("MPI_Comm", "", "comm", None, 0),
                crate::mpi::Param::new("int", "*", "rank", None, 1),
            ],
        );
        let mut scope = Scope::root();
        include_decl(&mut scope, &decl);
        for name in ["ret_type", "args", "types", "formals", "apply_to_type", "argList", "argTypeList", "get_arg"] {
            assert!(scope.contains(name), "{name} not bound");
        }
        match scope.get("argTypeList") {
            Some(crate::runtime::Binding::Value(v)) => assert_eq!(v.to_string(), "(MPI_Comm comm, int *rank)"),
            other => panic!("unexpected binding {other:?}"),
        }
    }
}
