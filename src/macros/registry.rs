//! Macro registry for storage and lookup of built-in macros.
//!
//! Registration order is kept so listings (`--list-macros`) are stable. Registering a name
//! twice replaces the earlier definition and returns it.
//!
//! # Example
//! ```rust
//! use wrapgen::macros::MacroRegistry;
//! let registry = MacroRegistry::builtin();
//! assert!(registry.is_body_macro("fn"));
//! assert!(!registry.is_body_macro("sub"));
//! ```

use indexmap::IndexMap;

use crate::macros::{functions, values, Macro};

#[derive(Debug, Clone, Default)]
pub struct MacroRegistry {
    macros: IndexMap<String, Macro>,
}

impl MacroRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated with every built-in macro.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        functions::register_function_macros(&mut registry);
        values::register_value_macros(&mut registry);
        registry
    }

    pub fn register(&mut self, mac: Macro) -> Option<Macro> {
        self.macros.insert(mac.name.clone(), mac)
    }

    pub fn get(&self, name: &str) -> Option<&Macro> {
        self.macros.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    pub fn is_body_macro(&self, name: &str) -> bool {
        self.macros.get(name).is_some_and(|m| m.has_body)
    }

    pub fn len(&self) -> usize {
        self.macros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.macros.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Macro> {
        self.macros.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::Arity;

    #[test]
    fn builtin_body_macros() {
        let registry = MacroRegistry::builtin();
        for name in ["fn", "fnall", "foreachfn", "forallfn", "decls"] {
            assert!(registry.is_body_macro(name), "{name} should take a body");
        }
        for name in ["sub", "zip", "def", "list", "filter", "fn_num"] {
            assert!(registry.contains(name), "{name} missing");
            assert!(!registry.is_body_macro(name));
        }
    }

    #[test]
    fn register_replaces_and_returns_previous() {
        let mut registry = MacroRegistry::new();
        let first = Macro::new("x", Arity::Any, |_, _, _, _| Ok(None));
        let second = Macro::new("x", Arity::Exact(1), |_, _, _, _| Ok(None)).with_body();
        assert!(registry.register(first).is_none());
        let replaced = registry.register(second).expect("replaced");
        assert_eq!(replaced.arity, Arity::Any);
        assert!(registry.is_body_macro("x"));
        assert_eq!(registry.len(), 1);
    }
}
