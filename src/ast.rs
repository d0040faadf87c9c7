use std::fmt;

use crate::interpreter::value::{
    complex::{Complex, ONE},
    core::Value,
};

/// Represents an expression node in the abstract syntax tree (AST).
///
/// Trees are rebuilt by value on every rewrite; no node is shared or mutated
/// in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric constant.
    Number {
        /// The constant value.
        value: Complex,
    },
    /// A variable scaled by a constant coefficient, such as `x` or `3x`.
    Variable {
        /// Single-letter name, never `e` or `i`.
        name:        char,
        /// Constant factor; `1` for a bare variable.
        coefficient: Complex,
    },
    /// Binary operation (e.g. `x + y`).
    Operator {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// An ordered list of constants, produced by multi-valued roots.
    List {
        /// The elements.
        values: Vec<Complex>,
    },
}

impl Expr {
    /// A numeric constant node.
    #[must_use]
    pub fn number(value: impl Into<Complex>) -> Self {
        Self::Number { value: value.into() }
    }

    /// A bare variable with coefficient `1`.
    #[must_use]
    pub const fn variable(name: char) -> Self {
        Self::Variable { name,
                         coefficient: ONE }
    }

    /// A binary operation node.
    #[must_use]
    pub fn operator(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Operator { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Returns `true` if a `Variable` node occurs anywhere in the tree.
    #[must_use]
    pub fn contains_variable(&self) -> bool {
        match self {
            Self::Variable { .. } => true,
            Self::Operator { left, right, .. } => left.contains_variable() || right.contains_variable(),
            Self::Number { .. } | Self::List { .. } => false,
        }
    }

    /// The value of a `Number` or `List` node.
    #[must_use]
    pub fn as_constant(&self) -> Option<Value> {
        match self {
            Self::Number { value } => Some(Value::Scalar(*value)),
            Self::List { values } => Some(Value::List(values.clone())),
            Self::Variable { .. } | Self::Operator { .. } => None,
        }
    }

    /// Returns `true` for a `Number` or `List` node.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Number { .. } | Self::List { .. })
    }

    /// Returns `true` if this is the `Number` node holding `value`.
    #[must_use]
    pub fn is_number(&self, value: Complex) -> bool {
        matches!(self, Self::Number { value: v } if *v == value)
    }

    /// Returns `true` for an `Operator` node.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator { .. })
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        match value {
            Value::Scalar(value) => Self::Number { value },
            Value::List(values) => Self::List { values },
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value } if value.real() != 0.0 && value.imaginary() != 0.0 => {
                write!(f, "({value})")
            },
            Self::Number { value } => write!(f, "{value}"),
            Self::Variable { name, coefficient } => {
                if *coefficient == ONE {
                    write!(f, "{name}")
                } else if *coefficient == -ONE {
                    write!(f, "-{name}")
                } else if coefficient.imaginary() == 0.0 {
                    write!(f, "{coefficient}{name}")
                } else {
                    write!(f, "({coefficient}){name}")
                }
            },
            Self::Operator { op, left, right } => {
                write_operand(f, left)?;
                write!(f, " {op} ")?;
                write_operand(f, right)
            },
            Self::List { values } => write!(f, "{}", Value::List(values.clone())),
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Expr) -> fmt::Result {
    match operand {
        Expr::Operator { .. } => write!(f, "({operand})"),
        Expr::Variable { coefficient, .. } if *coefficient != ONE => write!(f, "({operand})"),
        _ => write!(f, "{operand}"),
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Applies the operator to two numbers.
    ///
    /// # Example
    /// ```
    /// use complexa::{ast::BinaryOperator, interpreter::value::complex::Complex};
    ///
    /// let sum = BinaryOperator::Add.apply(Complex::from(2), Complex::new(0.0, 1.0));
    /// assert_eq!(sum, Complex::new(2.0, 1.0));
    /// ```
    #[must_use]
    pub fn apply(self, left: Complex, right: Complex) -> Complex {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.pow(right),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}
