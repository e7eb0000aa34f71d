use std::collections::BTreeSet;

/// Alias names declared by a compiled pattern, one set per placeholder kind.
///
/// Built once by the compiler and read-only afterwards. Each match seeds its
/// binding environment from these sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRegistry {
    tree_names: BTreeSet<String>,
    const_names: BTreeSet<String>,
    var_names: BTreeSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register_tree(&mut self, alias: &str) {
        if !self.tree_names.contains(alias) {
            self.tree_names.insert(alias.to_string());
        }
    }

    pub(crate) fn register_const(&mut self, alias: &str) {
        if !self.const_names.contains(alias) {
            self.const_names.insert(alias.to_string());
        }
    }

    pub(crate) fn register_var(&mut self, alias: &str) {
        if !self.var_names.contains(alias) {
            self.var_names.insert(alias.to_string());
        }
    }

    pub fn tree_names(&self) -> impl Iterator<Item = &String> {
        self.tree_names.iter()
    }

    pub fn const_names(&self) -> impl Iterator<Item = &String> {
        self.const_names.iter()
    }

    pub fn var_names(&self) -> impl Iterator<Item = &String> {
        self.var_names.iter()
    }

    pub fn contains_tree(&self, alias: &str) -> bool {
        self.tree_names.contains(alias)
    }

    pub fn contains_const(&self, alias: &str) -> bool {
        self.const_names.contains(alias)
    }

    pub fn contains_var(&self, alias: &str) -> bool {
        self.var_names.contains(alias)
    }

    /// Total number of registered aliases across all kinds
    pub fn len(&self) -> usize {
        self.tree_names.len() + self.const_names.len() + self.var_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
