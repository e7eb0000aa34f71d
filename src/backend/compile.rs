// Compile function: template expression → Pattern
//
// The compiler walks a template expression tree and classifies every node:
// - constants become ConstLiteral, operators become OpNode
// - variables named exactly like a marker (TREE, CONST, VAR) become wildcards
// - variables named <marker><sep><aliases> become named placeholders, with the
//   alias list registered in the pattern's NameRegistry
// - every other variable is a literal to be matched by name
//
// No validation happens beyond string matching: empty alias segments such as
// the one in `VAR_a__b` are kept as literal (empty) alias names.

use tracing::debug;

use crate::backend::config::{ConfigError, PlaceholderConfig};
use crate::backend::models::{Aliases, NameRegistry, Pattern, PatternNode};
use crate::expr::Expr;

/// Compile a template using the default placeholder vocabulary
pub fn compile(template: &Expr) -> Pattern {
    build_pattern(template, &PlaceholderConfig::default())
}

/// Compile a template using a custom placeholder vocabulary.
///
/// The vocabulary is validated first; an empty marker, an empty separator or
/// a marker shared by two kinds is rejected before any node is classified.
pub fn compile_with(template: &Expr, config: &PlaceholderConfig) -> Result<Pattern, ConfigError> {
    config.validate()?;
    Ok(build_pattern(template, config))
}

fn build_pattern(template: &Expr, config: &PlaceholderConfig) -> Pattern {
    let mut registry = NameRegistry::new();
    let root = expr_to_pattern_node(template, config, &mut registry);
    debug!(
        target: "exprmatch::backend::compile",
        trees = registry.tree_names().count(),
        consts = registry.const_names().count(),
        vars = registry.var_names().count(),
        "compiled pattern"
    );
    Pattern::from_parts(root, registry)
}

/// Convert one template node, registering any aliases it declares
fn expr_to_pattern_node(
    expr: &Expr,
    config: &PlaceholderConfig,
    registry: &mut NameRegistry,
) -> PatternNode {
    match expr {
        Expr::Constant(value) => PatternNode::ConstLiteral(*value),
        Expr::Operator(operation) => PatternNode::OpNode(
            operation.op(),
            operation
                .operands()
                .iter()
                .map(|operand| expr_to_pattern_node(operand, config, registry))
                .collect(),
        ),
        Expr::Variable(name) => classify_variable(name, config, registry),
    }
}

fn classify_variable(
    name: &str,
    config: &PlaceholderConfig,
    registry: &mut NameRegistry,
) -> PatternNode {
    if name == config.tree {
        return PatternNode::AnyTree;
    }
    if name == config.constant {
        return PatternNode::AnyConst;
    }
    if name == config.variable {
        return PatternNode::AnyVar;
    }

    if let Some(aliases) = split_aliases(name, &config.tree, &config.separator) {
        aliases.iter().for_each(|alias| registry.register_tree(alias));
        return PatternNode::NamedTree(aliases);
    }
    if let Some(aliases) = split_aliases(name, &config.constant, &config.separator) {
        aliases.iter().for_each(|alias| registry.register_const(alias));
        return PatternNode::NamedConst(aliases);
    }
    if let Some(aliases) = split_aliases(name, &config.variable, &config.separator) {
        aliases.iter().for_each(|alias| registry.register_var(alias));
        return PatternNode::NamedVar(aliases);
    }

    PatternNode::VarLiteral(name.to_string())
}

/// Split `<marker><sep>a<sep>b...` into `[a, b, ...]`.
///
/// Returns `None` when `name` does not start with `<marker><sep>`.
fn split_aliases(name: &str, marker: &str, separator: &str) -> Option<Aliases> {
    let rest = name.strip_prefix(marker)?.strip_prefix(separator)?;
    Some(rest.split(separator).map(str::to_string).collect())
}
