// Backend module for template compilation and structural matching
//
// This module provides the two-stage engine:
// - `compile`: template expression → immutable Pattern + NameRegistry
// - `matcher`: Pattern × candidate expression → bool, with a fresh binding
//   environment per call
// - `config`: placeholder vocabulary used by the compiler

pub mod compile;
pub mod config;
pub mod matcher;
pub mod models;

pub use compile::{compile, compile_with};
pub use config::{ConfigError, PlaceholderConfig};
pub use matcher::{match_pattern, LITERAL_EPSILON};
pub use models::{Aliases, NameRegistry, Pattern, PatternNode};
