//! Lexical scopes for template expansion.
//!
//! Scopes form a chain through borrowed parents: the root of a template file holds the
//! registered macros and `fileno`, each top-level chunk evaluates in a child of the root,
//! and every function expanded by `fn`/`foreachfn` gets its own child. Writes always go
//! to the innermost scope, so a `def` inside one function body never leaks into the next.

use std::collections::HashMap;

use crate::{
    macros::MacroRegistry,
    runtime::{Binding, Value},
};

#[derive(Debug, Default)]
pub struct Scope<'p> {
    bindings: HashMap<String, Binding>,
    parent: Option<&'p Scope<'p>>,
}

impl Scope<'static> {
    pub fn root() -> Self {
        Self::default()
    }
}

impl<'p> Scope<'p> {
    pub fn child(parent: &'p Scope<'p>) -> Self {
        Self {
            bindings: HashMap::new(),
            parent: Some(parent),
        }
    }

    /// Resolves `name` here or in the nearest enclosing scope.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        match self.bindings.get(name) {
            Some(binding) => Some(binding),
            None => self.parent.and_then(|parent| parent.get(name)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Binds in this scope, shadowing any outer binding of the same name.
    pub fn set(&mut self, name: impl Into<String>, binding: impl Into<Binding>) {
        self.bindings.insert(name.into(), binding.into());
    }

    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.set(name, Binding::Value(value.into()));
    }

    /// Binds every macro in `registry` under its own name.
    pub fn include(&mut self, registry: &MacroRegistry) {
        for mac in registry.iter() {
            self.set(mac.name.clone(), mac.clone());
        }
    }

    pub fn depth(&self) -> usize {
        self.parent.map_or(0, |parent| parent.depth() + 1)
    }
}
