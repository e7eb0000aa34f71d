//! Test utilities for exprmatch integration tests
//!
//! This module provides shared builders for expression trees so tests read
//! close to the formulas they encode, plus one-time tracing setup.
#![allow(dead_code)]

use exprmatch::{Expr, OpKind};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-writer tracing subscriber once per test binary
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

pub fn var(name: &str) -> Expr {
    Expr::variable(name).unwrap()
}

pub fn num(value: f64) -> Expr {
    Expr::constant(value)
}

pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    Expr::add(lhs, rhs)
}

pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
    Expr::mul(lhs, rhs)
}

pub fn call(op: OpKind, operand: Expr) -> Expr {
    Expr::apply(op, operand).unwrap()
}

pub fn sin(operand: Expr) -> Expr {
    call(OpKind::Sin, operand)
}

pub fn cos(operand: Expr) -> Expr {
    call(OpKind::Cos, operand)
}

pub fn atan(operand: Expr) -> Expr {
    call(OpKind::Atan, operand)
}

/// A mixed bag of candidate trees covering every node kind
pub fn sample_trees() -> Vec<Expr> {
    vec![
        num(0.0),
        num(-2.5),
        num(5.0),
        var("a"),
        var("b"),
        var("TREE"),
        add(var("a"), var("b")),
        add(var("b"), var("a")),
        mul(num(5.0), var("a")),
        Expr::operator(OpKind::Add, vec![var("a"), var("b"), var("c")]).unwrap(),
        Expr::sub(var("a"), num(1.0)),
        Expr::pow(var("x"), num(2.0)),
        Expr::neg(var("x")),
        sin(add(var("b"), var("c"))),
        cos(add(var("b"), var("c"))),
        atan(num(0.5)),
        add(var("a"), sin(mul(num(5.0), var("a")))),
    ]
}
