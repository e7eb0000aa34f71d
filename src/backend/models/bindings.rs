//! Per-match binding environment
//!
//! A [`Bindings`] value is seeded from a [`NameRegistry`] with every alias
//! unbound, threaded by `&mut` through one recursive match, and dropped when
//! the match returns. It is never shared between matches.
//!
//! Slot tables are small vectors searched linearly: patterns rarely name more
//! than a handful of aliases, and a `SmallVec` keeps them on the stack.

use smallvec::SmallVec;

use super::NameRegistry;
use crate::expr::Expr;

/// Alias name to optional bound value, in registry order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SlotTable<'p, T> {
    slots: SmallVec<[(&'p str, Option<T>); 8]>,
}

impl<'p, T> SlotTable<'p, T> {
    /// Create a table with one unbound slot per name
    pub(crate) fn seeded<I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'p str>,
    {
        SlotTable {
            slots: names.into_iter().map(|name| (name, None)).collect(),
        }
    }

    /// Current binding of `name`, `None` when unbound or unknown
    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&T> {
        self.slots
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Mutable slot for `name`.
    ///
    /// # Panics
    /// Panics when `name` was not seeded. The compiler registers every alias
    /// it emits, so a miss means the pattern and its registry disagree.
    #[inline]
    pub(crate) fn slot_mut(&mut self, name: &str) -> &mut Option<T> {
        match self.slots.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => slot,
            None => panic!(
                "alias '{}' is not in the pattern's name registry; pattern and registry are out of sync",
                name
            ),
        }
    }

    /// Number of seeded names
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Number of names currently bound
    pub(crate) fn bound_count(&self) -> usize {
        self.slots.iter().filter(|(_, v)| v.is_some()).count()
    }
}

/// Binding environment for a single match call.
///
/// `'p` borrows alias names from the pattern's registry, `'a` borrows bound
/// subtrees and variable names from the candidate.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Bindings<'p, 'a> {
    pub(crate) trees: SlotTable<'p, &'a Expr>,
    pub(crate) consts: SlotTable<'p, f64>,
    pub(crate) vars: SlotTable<'p, &'a str>,
}

impl<'p, 'a> Bindings<'p, 'a> {
    /// Fresh environment with every registered alias unbound
    pub(crate) fn seeded(registry: &'p NameRegistry) -> Self {
        Bindings {
            trees: SlotTable::seeded(registry.tree_names().map(String::as_str)),
            consts: SlotTable::seeded(registry.const_names().map(String::as_str)),
            vars: SlotTable::seeded(registry.var_names().map(String::as_str)),
        }
    }

    /// Number of aliases bound so far across all three tables
    pub(crate) fn bound_count(&self) -> usize {
        self.trees.bound_count() + self.consts.bound_count() + self.vars.bound_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_table_is_unbound() {
        let table: SlotTable<'_, f64> = SlotTable::seeded(["a", "b"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.bound_count(), 0);
        assert_eq!(table.get("a"), None);
    }

    #[test]
    fn test_slot_mut_binds() {
        let mut table: SlotTable<'_, f64> = SlotTable::seeded(["a", "b"]);
        *table.slot_mut("b") = Some(2.5);
        assert_eq!(table.get("b"), Some(&2.5));
        assert_eq!(table.get("a"), None);
        assert_eq!(table.bound_count(), 1);
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let names: Vec<String> = (0..20).map(|i| format!("v{}", i)).collect();
        let mut table: SlotTable<'_, f64> = SlotTable::seeded(names.iter().map(String::as_str));
        for i in 0..20 {
            *table.slot_mut(&format!("v{}", i)) = Some(i as f64);
        }
        assert_eq!(table.bound_count(), 20);
        assert_eq!(table.get("v19"), Some(&19.0));
    }

    #[test]
    #[should_panic(expected = "not in the pattern's name registry")]
    fn test_unknown_alias_is_fatal() {
        let mut table: SlotTable<'_, f64> = SlotTable::seeded(["a"]);
        table.slot_mut("zzz");
    }

    #[test]
    fn test_bindings_seeded_from_registry() {
        let mut registry = NameRegistry::new();
        registry.register_tree("t");
        registry.register_const("c");
        registry.register_var("x");
        registry.register_var("y");

        let bindings = Bindings::seeded(&registry);
        assert_eq!(bindings.trees.len(), 1);
        assert_eq!(bindings.consts.len(), 1);
        assert_eq!(bindings.vars.len(), 2);
        assert_eq!(bindings.bound_count(), 0);
    }
}
