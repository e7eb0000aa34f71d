//! exprmatch - Structural Pattern Matching over Symbolic Expressions
//!
//! This library decides whether a concrete expression tree has the same shape
//! as a template. Templates are ordinary expression trees in which specially
//! named variables act as placeholders.
//!
//! # Architecture
//!
//! The engine consists of two stages:
//!
//! 1. **Compilation** (`backend::compile`)
//!    - Classifies every template node into an immutable `PatternNode`
//!    - Turns `TREE`, `CONST`, `VAR` into anonymous wildcards
//!    - Turns `TREE_a`, `CONST_a_b`, `VAR_x`, ... into named placeholders and
//!      records their aliases in a `NameRegistry`
//!
//! 2. **Matching** (`backend::matcher`)
//!    - Walks pattern and candidate in lockstep
//!    - Seeds a fresh binding environment from the registry on every call
//!    - Enforces consistency between occurrences of the same alias
//!    - Never backtracks: the first viable binding is final
//!
//! # Example
//!
//! ```rust
//! use exprmatch::{compile, Expr, OpKind};
//!
//! // Template: VAR_foo + sin(CONST * VAR_foo)
//! let template = Expr::add(
//!     Expr::variable("VAR_foo").unwrap(),
//!     Expr::apply(
//!         OpKind::Sin,
//!         Expr::mul(
//!             Expr::variable("CONST").unwrap(),
//!             Expr::variable("VAR_foo").unwrap(),
//!         ),
//!     )
//!     .unwrap(),
//! );
//! let pattern = compile(&template);
//!
//! // a + sin(5 * a)
//! let a = Expr::variable("a").unwrap();
//! let candidate = Expr::add(
//!     a.clone(),
//!     Expr::apply(OpKind::Sin, Expr::mul(Expr::constant(5.0), a)).unwrap(),
//! );
//! assert!(pattern.matches(&candidate));
//! ```
//!
//! # Placeholder Vocabulary
//!
//! - **`TREE`** matches any subtree, **`CONST`** any constant, **`VAR`** any variable
//! - **`TREE_<aliases>`** / **`CONST_<aliases>`** / **`VAR_<aliases>`**: named
//!   placeholders; `<aliases>` is split on `_` and each alias behaves as an
//!   OR-candidate for binding
//! - Any other variable is a literal matched by exact name
//! - The vocabulary can be changed with `PlaceholderConfig` (TOML-loadable)

pub mod backend;
pub mod expr;

pub use backend::{
    compile, compile_with, match_pattern, ConfigError, NameRegistry, Pattern, PatternNode,
    PlaceholderConfig, LITERAL_EPSILON,
};
pub use expr::{identical, Arity, Expr, ExprError, OpKind, Operation};
