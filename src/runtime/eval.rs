//! Chunk evaluation.
//!
//! `execute` produces an optional value; `evaluate` executes and writes whatever came back.
//! Names resolve through the scope chain: macros run their handler, sequences are indexed
//! by their single argument, and any other value is returned as-is.

use crate::{
    ast::{Arg, Chunk, MacroChunk},
    runtime::{Binding, EvalContext, Scope, Value},
    Span, WrapResult,
};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Executes `chunk` and writes its value, if any, to the current target.
pub fn evaluate_chunk(chunk: &Chunk, ctx: &mut EvalContext<'_>, scope: &mut Scope<'_>) -> WrapResult<()> {
    if let Some(value) = execute_chunk(chunk, ctx, scope)? {
        ctx.emit(&value.to_string())?;
    }
    Ok(())
}

/// Evaluates a body in order.
pub fn evaluate_chunks(chunks: &[Chunk], ctx: &mut EvalContext<'_>, scope: &mut Scope<'_>) -> WrapResult<()> {
    for chunk in chunks {
        evaluate_chunk(chunk, ctx, scope)?;
    }
    Ok(())
}

pub fn execute_chunk(chunk: &Chunk, ctx: &mut EvalContext<'_>, scope: &mut Scope<'_>) -> WrapResult<Option<Value>> {
    match chunk {
        Chunk::Text(text) => {
            ctx.emit(&text.text)?;
            Ok(None)
        }
        Chunk::Macro(mac) => execute_macro(mac, ctx, scope),
    }
}

pub fn execute_macro(
    chunk: &MacroChunk,
    ctx: &mut EvalContext<'_>,
    scope: &mut Scope<'_>,
) -> WrapResult<Option<Value>> {
    let Some(binding) = scope.get(&chunk.name).cloned() else {
        return Err(ctx.error(
            format!("Invalid macro: '{}' on line {}", chunk.name, chunk.line),
            chunk.span,
        ));
    };

    match binding {
        Binding::Macro(mac) => {
            let args = evaluate_args(chunk, ctx, scope)?;
            if !mac.arity.accepts(args.len()) {
                return Err(ctx.error(
                    format!("'{}' macro takes {}, got {}.", mac.name, mac.arity, args.len()),
                    chunk.span,
                ));
            }
            (mac.handler)(ctx, scope, args, &chunk.children)
                .map_err(|e| e.while_handling(ctx.current_function()))
        }
        Binding::Value(Value::Sequence(items)) => {
            let args = evaluate_args(chunk, ctx, scope)?;
            index_sequence(ctx, &chunk.name, &items, &args, chunk.span).map(Some)
        }
        Binding::Value(value) => Ok(Some(value)),
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn evaluate_args(chunk: &MacroChunk, ctx: &mut EvalContext<'_>, scope: &mut Scope<'_>) -> WrapResult<Vec<Value>> {
    let mut values = Vec::with_capacity(chunk.args.len());
    for arg in &chunk.args {
        match arg {
            Arg::Literal(text) => values.push(Value::Text(text.clone())),
            Arg::Nested(inner) => match execute_macro(inner, ctx, scope)? {
                Some(value) => values.push(value),
                None => {
                    return Err(ctx.error(
                        format!("'{}' produced no value as an argument to '{}'.", inner.name, chunk.name),
                        inner.span,
                    ))
                }
            },
        }
    }
    Ok(values)
}

/// `{{name}}` yields the whole sequence, `{{name i}}` one element; negative `i` counts
/// from the end.
fn index_sequence(
    ctx: &EvalContext<'_>,
    name: &str,
    items: &[String],
    args: &[Value],
    span: Span,
) -> WrapResult<Value> {
    match args {
        [] => Ok(Value::Sequence(items.to_vec())),
        [index] => {
            let raw = index.to_string();
            let n: i64 = raw
                .trim()
                .parse()
                .map_err(|_| ctx.error(format!("Invalid index value: '{raw}'"), span))?;
            let len = items.len() as i64;
            let resolved = if n < 0 { len + n } else { n };
            if (0..len).contains(&resolved) {
                Ok(Value::Text(items[resolved as usize].clone()))
            } else {
                Err(ctx.error(format!("Index out of range in '{name}': {n}"), span))
            }
        }
        _ => Err(ctx.error(
            format!("Wrong number of args for list expression '{name}'."),
            span,
        )),
    }
}
