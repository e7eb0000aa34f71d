use smallvec::SmallVec;

use super::NameRegistry;
use crate::expr::OpKind;

/// Ordered alias list of a named placeholder.
///
/// Declaration order decides which free alias is bound first.
pub type Aliases = SmallVec<[String; 2]>;

/// A node of a compiled pattern
#[derive(Debug, Clone, PartialEq)]
pub enum PatternNode {
    /// Matches a constant numerically close to the value
    ConstLiteral(f64),
    /// Matches a variable with exactly this name
    VarLiteral(String),
    /// Matches an operator of the same kind and arity, operand-wise
    OpNode(OpKind, Vec<PatternNode>),
    /// Matches any subtree
    AnyTree,
    /// Matches any constant
    AnyConst,
    /// Matches any variable
    AnyVar,
    /// Matches any subtree, consistently across occurrences of its aliases
    NamedTree(Aliases),
    /// Matches any constant, consistently across occurrences of its aliases
    NamedConst(Aliases),
    /// Matches any variable, consistently across occurrences of its aliases
    NamedVar(Aliases),
}

impl PatternNode {
    /// Whether this node or any descendant is a placeholder
    pub fn has_placeholders(&self) -> bool {
        match self {
            PatternNode::ConstLiteral(_) | PatternNode::VarLiteral(_) => false,
            PatternNode::OpNode(_, children) => children.iter().any(PatternNode::has_placeholders),
            _ => true,
        }
    }
}

/// A compiled, immutable pattern together with its name registry.
///
/// Only the compiler constructs patterns, which guarantees that every alias
/// referenced by a node is present in the registry. A pattern is `Send` and
/// `Sync` and can be matched against any number of candidates concurrently.
///
/// The binding environment of a match stays inside the crate:
///
/// ```compile_fail
/// use exprmatch::backend::models::bindings::Bindings;
/// ```
///
/// ```compile_fail
/// use exprmatch::backend::models::SlotTable;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    root: PatternNode,
    registry: NameRegistry,
}

impl Pattern {
    pub(crate) fn from_parts(root: PatternNode, registry: NameRegistry) -> Self {
        Pattern { root, registry }
    }

    #[inline]
    pub fn root(&self) -> &PatternNode {
        &self.root
    }

    #[inline]
    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    /// Split into the root node and the name registry.
    pub fn into_parts(self) -> (PatternNode, NameRegistry) {
        (self.root, self.registry)
    }
}
