pub(crate) mod bindings;
pub mod pattern;
pub mod registry;

pub(crate) use bindings::{Bindings, SlotTable};
pub use pattern::{Aliases, Pattern, PatternNode};
pub use registry::NameRegistry;
