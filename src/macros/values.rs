//! Value macros: string and list helpers usable anywhere in a template.
//!
//! ```text
//! {{sub {{formals}} "const " ""}}     strip a prefix from every formal
//! {{zip {{types}} {{args}}}}          "MPI_Comm comm", ...
//! {{filter "^MPI_Comm" {{types}}}}    keep matching items
//! {{def sig {{argTypeList}}}}         bind a name in the current scope
//! {{list a {{args}} b}}               flatten into one list
//! {{fn_num}}                          0, 1, 2, ... across the whole run
//! ```
//!
//! `decls` is the one body macro here: its literal body is written in place and repeated at
//! the top of every static-mode source file created afterwards.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    ast::Chunk,
    err_msg,
    macros::{Arity, Macro, MacroRegistry},
    runtime::{Scope, Value},
    WrapResult,
};

static BACKREF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\(\d+)|\$").expect("valid regex"));

pub fn register_value_macros(registry: &mut MacroRegistry) {
    registry.register(Macro::new("sub", Arity::Exact(3), |_, _, args, _| sub(args).map(Some)));
    registry.register(Macro::new("zip", Arity::Exact(2), |_, _, args, _| zip(args).map(Some)));
    registry.register(Macro::new("def", Arity::Exact(2), |_, scope, args, _| {
        def(scope, args);
        Ok(None)
    }));
    registry.register(Macro::new("list", Arity::Any, |_, _, args, _| Ok(Some(list(args)))));
    registry.register(Macro::new("filter", Arity::Exact(2), |_, _, args, _| filter(args).map(Some)));
    registry.register(Macro::new("fn_num", Arity::Exact(0), |ctx, _, _, _| {
        Ok(Some(Value::Number(ctx.next_fn_num())))
    }));
    registry.register(
        Macro::new("decls", Arity::Exact(0), |ctx, _, _, children| {
            let text = decls_text(children)?;
            ctx.emit(&text)?;
            ctx.set_declarations(text);
            Ok(None)
        })
        .with_body(),
    );
}

// ============================================================================
// HANDLERS
// ============================================================================

/// `{{sub <string|list> <regex> <replacement>}}`; `\1` in the replacement is a capture group.
fn sub(args: Vec<Value>) -> WrapResult<Value> {
    let [subject, pattern, replacement]: [Value; 3] = args
        .try_into()
        .map_err(|_| err_msg!(Syntax, "'sub' macro takes exactly 3 arguments."))?;
    let Value::Text(pattern) = pattern else {
        return Err(err_msg!(Syntax, "Invalid regular expression in 'sub' macro: '{}'", pattern));
    };
    let regex = compile(&pattern, "sub")?;
    let replacement = backref_replacement(&replacement.to_string());
    let apply = |s: &str| regex.replace_all(s, replacement.as_str()).into_owned();

    Ok(match subject {
        Value::Sequence(items) => Value::Sequence(items.iter().map(|s| apply(s)).collect()),
        other => Value::Text(apply(&other.to_string())),
    })
}

fn zip(args: Vec<Value>) -> WrapResult<Value> {
    match args.as_slice() {
        [Value::Sequence(a), Value::Sequence(b)] => Ok(Value::Sequence(
            a.iter().zip(b).map(|(x, y)| format!("{x} {y}")).collect(),
        )),
        _ => Err(err_msg!(Syntax, "Arguments to 'zip' macro must be lists.")),
    }
}

fn def(scope: &mut Scope<'_>, args: Vec<Value>) {
    let mut args = args.into_iter();
    if let (Some(name), Some(value)) = (args.next(), args.next()) {
        scope.set_value(name.to_string(), value);
    }
}

fn list(args: Vec<Value>) -> Value {
    Value::Sequence(args.into_iter().flat_map(Value::into_items).collect())
}

/// `{{filter <regex> <list>}}`: items the regex matches anywhere.
fn filter(args: Vec<Value>) -> WrapResult<Value> {
    match args.as_slice() {
        [Value::Text(pattern), Value::Sequence(items)] => {
            let regex = compile(pattern, "filter")?;
            Ok(Value::Sequence(items.iter().filter(|s| regex.is_match(s)).cloned().collect()))
        }
        [Value::Text(_), other] => Err(err_msg!(Syntax, "Invalid list in 'filter' macro: '{}'", other)),
        [other, _] => Err(err_msg!(Syntax, "Invalid regex in 'filter' macro: '{}'", other)),
        _ => Err(err_msg!(Syntax, "'filter' macro takes exactly 2 arguments.")),
    }
}

fn decls_text(children: &[Chunk]) -> WrapResult<String> {
    children
        .iter()
        .map(|child| {
            child
                .as_text()
                .ok_or_else(|| err_msg!(Syntax, "'decls' body may only contain text, found '{}'.", child.outline()))
        })
        .collect()
}

// ============================================================================
// HELPERS
// ============================================================================

fn compile(pattern: &str, macro_name: &str) -> WrapResult<Regex> {
    Regex::new(pattern).map_err(|e| {
        err_msg!(Syntax, "Invalid regular expression in '{}' macro: '{}'", macro_name, pattern).with_help(e.to_string())
    })
}

/// Rewrites `\N` group references into the `${N}` form and escapes literal `$`.
fn backref_replacement(replacement: &str) -> String {
    BACKREF
        .replace_all(replacement, |caps: &regex::Captures<'_>| match caps.get(1) {
            Some(group) => format!("${{{}}}", group.as_str()),
            None => "$$".to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn seq(items: &[&str]) -> Value {
        Value::Sequence(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn sub_maps_over_lists() {
        let result = sub(vec![seq(&["const int *a", "int b"]), text("const "), text("")]).expect("sub");
        assert_eq!(result, seq(&["int *a", "int b"]));
    }

    #[test]
    fn sub_supports_group_references() {
        let result = sub(vec![text("MPI_Send"), text("MPI_(\\w+)"), text("P\\1$")]).expect("sub");
        assert_eq!(result, text("PSend$"));
    }

    #[test]
    fn sub_rejects_bad_patterns() {
        let err = sub(vec![text("x"), text("("), text("")]).unwrap_err();
        assert!(err.message().starts_with("Invalid regular expression in 'sub' macro"));
        let err = sub(vec![text("x"), seq(&["a"]), text("")]).unwrap_err();
        assert!(err.message().contains("Invalid regular expression"));
    }

    #[test]
    fn zip_pairs_items() {
        let result = zip(vec![seq(&["int", "MPI_Comm"]), seq(&["n", "comm", "extra"])]).expect("zip");
        assert_eq!(result, seq(&["int n", "MPI_Comm comm"]));
        assert!(zip(vec![text("a"), seq(&[])]).is_err());
    }

    #[test]
    fn list_flattens() {
        assert_eq!(list(vec![text("a"), seq(&["b", "c"]), Value::Number(1)]), seq(&["a", "b", "c", "1"]));
        assert_eq!(list(Vec::new()), seq(&[]));
    }

    #[test]
    fn filter_keeps_matches() {
        let result = filter(vec![text("^MPI_"), seq(&["MPI_Comm", "int", "MPI_Op"])]).expect("filter");
        assert_eq!(result, seq(&["MPI_Comm", "MPI_Op"]));
        let err = filter(vec![text("x"), text("not a list")]).unwrap_err();
        assert!(err.message().starts_with("Invalid list in 'filter' macro"));
    }

    #[test]
    fn def_binds_in_current_scope() {
        let mut scope = Scope::root();
        def(&mut scope, vec![text("name"), seq(&["a", "b"])]);
        assert!(scope.contains("name"));
    }

    #[test]
    fn backrefs_are_rewritten() {
        assert_eq!(backref_replacement(r"\1_\12"), "${1}_${12}");
        assert_eq!(backref_replacement("$x"), "$$x");
    }
}
