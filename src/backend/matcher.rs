//! Structural matching of compiled patterns against expression trees.
//!
//! The matcher walks a [`Pattern`] and a candidate [`Expr`] in lockstep while
//! threading a fresh binding environment through the recursion.
//!
//! # Named placeholders
//!
//! A named placeholder carries an ordered alias list. Walking the aliases in
//! declaration order:
//! 1. a bound alias that agrees with the candidate succeeds the node,
//! 2. a bound alias that disagrees is skipped,
//! 3. the first unbound alias is bound to the candidate and succeeds the node.
//!
//! The node fails only when every alias is bound and none agrees.
//!
//! Already-bound constants are compared with `==`, while constant literals use
//! the [`LITERAL_EPSILON`] tolerance. Both behaviours are kept distinct.
//!
//! # No backtracking
//!
//! The first viable binding is final. Bindings made inside a subtree that
//! later fails are not rolled back, and no alternative alias assignment is
//! tried. A pattern whose only successful assignment requires revisiting an
//! earlier choice reports no match.
//!
//! # Recursion depth
//!
//! Compilation and matching both recurse once per tree level, and there is
//! no depth guard. On a 2 MiB thread stack (the default for spawned and rayon
//! worker threads) a debug build holds roughly 1-2k levels for compilation
//! and 3-5k levels for matching; release builds go several times deeper, and
//! the 8 MiB main-thread stack about four times deeper again. Templates in
//! this domain are tens of levels deep.

use rayon::prelude::*;
use tracing::trace;

use crate::backend::models::{Bindings, Pattern, PatternNode, SlotTable};
use crate::expr::{identical, Expr};

/// Tolerance for constant literals in patterns.
///
/// Absorbs numeric noise only; for ordinary magnitudes this is exact equality.
pub const LITERAL_EPSILON: f64 = 1e-29;

/// Match a compiled pattern against a candidate tree.
///
/// Every call seeds its own binding environment, so a pattern can be matched
/// from many threads at once.
pub fn match_pattern(pattern: &Pattern, candidate: &Expr) -> bool {
    let mut bindings = Bindings::seeded(pattern.registry());
    let matched = match_node(pattern.root(), candidate, &mut bindings);
    trace!(
        target: "exprmatch::backend::matcher::match_pattern",
        %candidate,
        matched,
        bound = bindings.bound_count()
    );
    matched
}

/// Recursive matching step. Bindings committed on a failing path stay set.
pub(crate) fn match_node<'a>(
    node: &PatternNode,
    candidate: &'a Expr,
    bindings: &mut Bindings<'_, 'a>,
) -> bool {
    match node {
        PatternNode::ConstLiteral(value) => match candidate {
            Expr::Constant(c) => (c - value).abs() < LITERAL_EPSILON,
            _ => false,
        },

        PatternNode::VarLiteral(name) => match candidate {
            Expr::Variable(v) => v == name,
            _ => false,
        },

        PatternNode::OpNode(op, children) => match candidate {
            Expr::Operator(operation) => {
                if operation.op() != *op || operation.arity() != children.len() {
                    return false;
                }
                for (child, operand) in children.iter().zip(operation.operands()) {
                    if !match_node(child, operand, bindings) {
                        return false;
                    }
                }
                true
            }
            _ => false,
        },

        PatternNode::AnyTree => true,
        PatternNode::AnyConst => matches!(candidate, Expr::Constant(_)),
        PatternNode::AnyVar => matches!(candidate, Expr::Variable(_)),

        PatternNode::NamedTree(aliases) => {
            bind_aliases(&mut bindings.trees, aliases, candidate, |a, b| identical(a, b))
        }

        PatternNode::NamedConst(aliases) => match candidate {
            Expr::Constant(c) => bind_aliases(&mut bindings.consts, aliases, *c, |a, b| a == b),
            _ => false,
        },

        PatternNode::NamedVar(aliases) => match candidate {
            Expr::Variable(v) => {
                bind_aliases(&mut bindings.vars, aliases, v.as_str(), |a, b| a == b)
            }
            _ => false,
        },
    }
}

/// Try each alias in order: agree with a bound one or claim the first free one.
fn bind_aliases<T: Copy>(
    slots: &mut SlotTable<'_, T>,
    aliases: &[String],
    candidate: T,
    same: impl Fn(T, T) -> bool,
) -> bool {
    for alias in aliases {
        let slot = slots.slot_mut(alias);
        match *slot {
            Some(bound) if same(bound, candidate) => return true,
            Some(_) => continue,
            None => {
                *slot = Some(candidate);
                return true;
            }
        }
    }
    false
}

impl Pattern {
    /// Match this pattern against a candidate tree.
    #[inline]
    pub fn matches(&self, candidate: &Expr) -> bool {
        match_pattern(self, candidate)
    }

    /// Match every candidate in parallel, preserving input order.
    pub fn matches_all(&self, candidates: &[Expr]) -> Vec<bool> {
        candidates
            .par_iter()
            .map(|candidate| match_pattern(self, candidate))
            .collect()
    }

    /// Number of candidates this pattern matches.
    pub fn count_matches(&self, candidates: &[Expr]) -> usize {
        candidates
            .par_iter()
            .filter(|candidate| match_pattern(self, candidate))
            .count()
    }
}
