//! Symbolic expression trees
//!
//! The tree shape consumed by the pattern compiler and matcher: a constant,
//! a variable, or an operator applied to an ordered list of operands.
//!
//! Operator nodes can only be built through [`Operation::new`], which checks
//! the operand count against [`OpKind::arity`], so every operator node has a
//! valid arity. [`Expr::variable`] rejects empty names, but the
//! `Expr::Variable` variant is public and can still hold one; the matching
//! core treats such a leaf as an ordinary literal name.

use std::fmt;

/// Operator kinds understood by expression trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Neg,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Exp,
    Ln,
    Sqrt,
    Abs,
}

/// Number of operands an operator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    /// Check whether `count` operands satisfy this arity
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

impl OpKind {
    /// Operand count accepted by this operator.
    ///
    /// Sums and products are n-ary; the operand count of a concrete node is
    /// still part of its identity when matching.
    pub fn arity(self) -> Arity {
        match self {
            OpKind::Add | OpKind::Mul => Arity::AtLeast(2),
            OpKind::Sub | OpKind::Div | OpKind::Pow => Arity::Exactly(2),
            OpKind::Neg
            | OpKind::Sin
            | OpKind::Cos
            | OpKind::Tan
            | OpKind::Asin
            | OpKind::Acos
            | OpKind::Atan
            | OpKind::Exp
            | OpKind::Ln
            | OpKind::Sqrt
            | OpKind::Abs => Arity::Exactly(1),
        }
    }

    /// Infix symbol for binary/n-ary operators, `None` for prefix functions
    fn infix_symbol(self) -> Option<&'static str> {
        match self {
            OpKind::Add => Some("+"),
            OpKind::Sub => Some("-"),
            OpKind::Mul => Some("*"),
            OpKind::Div => Some("/"),
            OpKind::Pow => Some("^"),
            _ => None,
        }
    }

    /// Textual name of the operator (`+`, `sin`, ...)
    pub fn name(self) -> &'static str {
        match self {
            OpKind::Add => "+",
            OpKind::Sub => "-",
            OpKind::Mul => "*",
            OpKind::Div => "/",
            OpKind::Pow => "^",
            OpKind::Neg => "neg",
            OpKind::Sin => "sin",
            OpKind::Cos => "cos",
            OpKind::Tan => "tan",
            OpKind::Asin => "asin",
            OpKind::Acos => "acos",
            OpKind::Atan => "atan",
            OpKind::Exp => "exp",
            OpKind::Ln => "ln",
            OpKind::Sqrt => "sqrt",
            OpKind::Abs => "abs",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while constructing an expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    /// Operator applied to the wrong number of operands
    Arity {
        op: OpKind,
        expected: Arity,
        got: usize,
    },
    /// Variable leaf with an empty name
    EmptyVariableName,
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity { op, expected, got } => write!(
                f,
                "Invalid arity for {}: expected {} operand(s), got {}",
                op, expected, got
            ),
            Self::EmptyVariableName => write!(f, "Variable name must not be empty"),
        }
    }
}

impl std::error::Error for ExprError {}

/// An operator node: kind plus ordered operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    op: OpKind,
    operands: Vec<Expr>,
}

impl Operation {
    /// Build an operator node, checking the operand count.
    pub fn new(op: OpKind, operands: Vec<Expr>) -> Result<Self, ExprError> {
        let expected = op.arity();
        if !expected.accepts(operands.len()) {
            return Err(ExprError::Arity {
                op,
                expected,
                got: operands.len(),
            });
        }
        Ok(Operation { op, operands })
    }

    #[inline]
    pub fn op(&self) -> OpKind {
        self.op
    }

    #[inline]
    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.operands.len()
    }
}

/// A symbolic expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant
    Constant(f64),
    /// A named variable
    Variable(String),
    /// An operator applied to operands
    Operator(Operation),
}

impl Expr {
    pub fn constant(value: f64) -> Self {
        Expr::Constant(value)
    }

    pub fn variable(name: impl Into<String>) -> Result<Self, ExprError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ExprError::EmptyVariableName);
        }
        Ok(Expr::Variable(name))
    }

    pub fn operator(op: OpKind, operands: Vec<Expr>) -> Result<Self, ExprError> {
        Operation::new(op, operands).map(Expr::Operator)
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Expr::Operator(Operation {
            op: OpKind::Add,
            operands: vec![lhs, rhs],
        })
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Expr::Operator(Operation {
            op: OpKind::Sub,
            operands: vec![lhs, rhs],
        })
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Expr::Operator(Operation {
            op: OpKind::Mul,
            operands: vec![lhs, rhs],
        })
    }

    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Expr::Operator(Operation {
            op: OpKind::Div,
            operands: vec![lhs, rhs],
        })
    }

    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Expr::Operator(Operation {
            op: OpKind::Pow,
            operands: vec![base, exponent],
        })
    }

    pub fn neg(operand: Expr) -> Self {
        Expr::Operator(Operation {
            op: OpKind::Neg,
            operands: vec![operand],
        })
    }

    /// Apply a unary function (`sin`, `atan`, ...) to one operand.
    pub fn apply(op: OpKind, operand: Expr) -> Result<Self, ExprError> {
        Self::operator(op, vec![operand])
    }

    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Expr::Constant(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Expr::Variable(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            Expr::Operator(operation) => Some(operation),
            _ => None,
        }
    }

    /// Deep structural equality, see [`identical`].
    #[inline]
    pub fn identical(&self, other: &Expr) -> bool {
        identical(self, other)
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Variable(_) => 1,
            Expr::Operator(operation) => {
                1 + operation
                    .operands
                    .iter()
                    .map(Expr::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

/// Deep, order-sensitive structural equality with exact comparison of
/// constants.
pub fn identical(a: &Expr, b: &Expr) -> bool {
    match (a, b) {
        (Expr::Constant(x), Expr::Constant(y)) => x == y,
        (Expr::Variable(x), Expr::Variable(y)) => x == y,
        (Expr::Operator(x), Expr::Operator(y)) => {
            x.op == y.op
                && x.operands.len() == y.operands.len()
                && x
                    .operands
                    .iter()
                    .zip(y.operands.iter())
                    .all(|(a, b)| identical(a, b))
        }
        _ => false,
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(v) => write!(f, "{}", v),
            Expr::Variable(name) => f.write_str(name),
            Expr::Operator(operation) => write!(f, "{}", operation),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op.infix_symbol() {
            Some(symbol) => {
                for (i, operand) in self.operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", symbol)?;
                    }
                    match operand {
                        Expr::Operator(inner) if inner.op.infix_symbol().is_some() => {
                            write!(f, "({})", inner)?
                        }
                        _ => write!(f, "{}", operand)?,
                    }
                }
                Ok(())
            }
            None => {
                write!(f, "{}(", self.op)?;
                for (i, operand) in self.operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", operand)?;
                }
                f.write_str(")")
            }
        }
    }
}
