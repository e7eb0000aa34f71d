//! End-to-end matching scenarios
//!
//! Each test compiles a template and matches it against concrete formulas.

mod common;

use common::*;
use exprmatch::{compile, match_pattern};

#[test]
fn test_named_var_inside_function() {
    init_tracing();

    // VAR_foo + sin(CONST * VAR_foo)
    let pattern = compile(&add(
        var("VAR_foo"),
        sin(mul(var("CONST"), var("VAR_foo"))),
    ));

    // a + sin(5 * a)
    assert!(match_pattern(
        &pattern,
        &add(var("a"), sin(mul(num(5.0), var("a"))))
    ));
    // a + sin(5 * b): VAR_foo is already bound to a
    assert!(!match_pattern(
        &pattern,
        &add(var("a"), sin(mul(num(5.0), var("b"))))
    ));
}

#[test]
fn test_named_tree_repeated() {
    init_tracing();

    // TREE_a + 5 * TREE_a
    let pattern = compile(&add(var("TREE_a"), mul(num(5.0), var("TREE_a"))));
    let inner = add(var("b"), var("c"));

    // sin(b + c) + 5 * sin(b + c)
    assert!(pattern.matches(&add(
        sin(inner.clone()),
        mul(num(5.0), sin(inner.clone()))
    )));
    // sin(b + c) + 5 * cos(b + c)
    assert!(!pattern.matches(&add(
        sin(inner.clone()),
        mul(num(5.0), cos(inner))
    )));
}

#[test]
fn test_named_const_repeated() {
    init_tracing();

    // CONST_foo * a + atan(CONST_foo)
    let pattern = compile(&add(
        mul(var("CONST_foo"), var("a")),
        atan(var("CONST_foo")),
    ));

    // 0.5 * a + atan(0.5)
    assert!(pattern.matches(&add(mul(num(0.5), var("a")), atan(num(0.5)))));
    // 2 * a + atan(0.5)
    assert!(!pattern.matches(&add(mul(num(2.0), var("a")), atan(num(0.5)))));
}

#[test]
fn test_named_var_twice() {
    init_tracing();

    // VAR_x + VAR_x
    let pattern = compile(&add(var("VAR_x"), var("VAR_x")));
    assert!(pattern.matches(&add(var("a"), var("a"))));
    assert!(!pattern.matches(&add(var("a"), var("b"))));
}

#[test]
fn test_multi_alias_placeholder() {
    init_tracing();

    // VAR_a * CONST + VAR_b * CONST + VAR_a_b * CONST
    let term = |v: &str| mul(var(v), var("CONST"));
    let pattern = compile(&exprmatch::Expr::operator(
        exprmatch::OpKind::Add,
        vec![term("VAR_a"), term("VAR_b"), term("VAR_a_b")],
    )
    .unwrap());

    let candidate = |third: &str| {
        exprmatch::Expr::operator(
            exprmatch::OpKind::Add,
            vec![
                mul(var("x"), num(1.0)),
                mul(var("y"), num(2.0)),
                mul(var(third), num(3.0)),
            ],
        )
        .unwrap()
    };

    // The combined placeholder agrees with either alias
    assert!(pattern.matches(&candidate("x")));
    assert!(pattern.matches(&candidate("y")));
    assert!(!pattern.matches(&candidate("z")));
}

#[test]
fn test_literal_variable_name_is_exact() {
    init_tracing();

    // sin(x) only matches sin of the variable named x
    let pattern = compile(&sin(var("x")));
    assert!(pattern.matches(&sin(var("x"))));
    assert!(!pattern.matches(&sin(var("y"))));
    assert!(!pattern.matches(&cos(var("x"))));
}
