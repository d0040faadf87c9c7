use std::{fmt, slice};

use crate::interpreter::value::complex::Complex;

/// A runtime value: one complex number or an ordered list of them.
///
/// Lists appear when an equation has several roots (`x^2 = 4`) and flow
/// through later arithmetic element-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A single complex number.
    Scalar(Complex),
    /// An ordered sequence of complex numbers.
    List(Vec<Complex>),
}

impl Value {
    /// The complex numbers carried by this value, in order.
    #[must_use]
    pub fn values(&self) -> &[Complex] {
        match self {
            Self::Scalar(value) => slice::from_ref(value),
            Self::List(values) => values,
        }
    }

    /// Returns the number if this is a scalar.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<Complex> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::List(_) => None,
        }
    }

    /// Applies `f` to every number, keeping the shape.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
        where F: Fn(Complex) -> Complex
    {
        match self {
            Self::Scalar(value) => Self::Scalar(f(*value)),
            Self::List(values) => Self::List(values.iter().copied().map(f).collect()),
        }
    }

    /// Combines two values element-wise.
    ///
    /// Two scalars give a scalar. Otherwise the result is the flattened cross
    /// product of both sides, with the left side varying slowest: a list of
    /// `m` against a list of `n` yields `m * n` numbers.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::{complex::Complex, core::Value};
    ///
    /// let left = Value::List(vec![Complex::from(1), Complex::from(2)]);
    /// let right = Value::List(vec![Complex::from(10), Complex::from(20)]);
    /// let sum = left.broadcast(&right, |a, b| a + b);
    ///
    /// assert_eq!(sum,
    ///            Value::List(vec![Complex::from(11),
    ///                             Complex::from(21),
    ///                             Complex::from(12),
    ///                             Complex::from(22)]));
    /// ```
    #[must_use]
    pub fn broadcast<F>(&self, other: &Self, f: F) -> Self
        where F: Fn(Complex, Complex) -> Complex
    {
        if let (Self::Scalar(left), Self::Scalar(right)) = (self, other) {
            return Self::Scalar(f(*left, *right));
        }

        let mut results = Vec::with_capacity(self.values().len() * other.values().len());
        for left in self.values() {
            for right in other.values() {
                results.push(f(*left, *right));
            }
        }
        Self::List(results)
    }

    /// All `degree`-th roots of every number, concatenated in order.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::{complex::Complex, core::Value};
    ///
    /// let roots = Value::from(Complex::from(9)).nth_roots(2);
    /// assert_eq!(roots, Value::List(vec![Complex::from(3), Complex::from(-3)]));
    /// ```
    #[must_use]
    pub fn nth_roots(&self, degree: u32) -> Self {
        Self::List(self.values().iter().flat_map(|value| value.nth_roots(degree)).collect())
    }
}

impl From<Complex> for Value {
    fn from(value: Complex) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<Complex>> for Value {
    fn from(values: Vec<Complex>) -> Self {
        Self::List(values)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value}"),
            Self::List(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
        }
    }
}
