use std::{
    cmp::Ordering,
    f64::consts,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    ops,
};

use ordered_float::OrderedFloat;

use crate::util::num::{round_decimals, snap};

/// `0` as a complex number.
pub const ZERO: Complex = Complex::raw(0.0, 0.0);
/// `1` as a complex number.
pub const ONE: Complex = Complex::raw(1.0, 0.0);
/// `2` as a complex number.
pub const TWO: Complex = Complex::raw(2.0, 0.0);
/// `1/2` as a complex number.
pub const HALF: Complex = Complex::raw(0.5, 0.0);
/// Euler's number `e`.
pub const E: Complex = Complex::raw(consts::E, 0.0);
/// The circle constant `π`.
pub const PI: Complex = Complex::raw(consts::PI, 0.0);
/// The imaginary unit `i`.
pub const I: Complex = Complex::raw(0.0, 1.0);
/// Not a number.
pub const NAN: Complex = Complex::raw(f64::NAN, 0.0);
/// Positive infinity.
pub const INFINITY: Complex = Complex::raw(f64::INFINITY, 0.0);
/// Negative infinity.
pub const NEG_INFINITY: Complex = Complex::raw(f64::NEG_INFINITY, 0.0);

/// An immutable complex number with real and imaginary parts.
///
/// Every value is built through [`Complex::new`], which rounds away the
/// floating-point noise of intermediate results. Two values are equal when
/// both components are equal; `NaN` compares equal to `NaN`.
#[derive(Debug, Clone, Copy)]
pub struct Complex {
    real:      f64,
    imaginary: f64,
}

impl Complex {
    const fn raw(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Constructs a normalized complex number.
    ///
    /// Each component goes through [`snap`](crate::util::num::snap). A `NaN`
    /// in either component yields [`NAN`]; an infinite component yields
    /// [`INFINITY`] or [`NEG_INFINITY`].
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::{Complex, NAN};
    ///
    /// let c = Complex::new(5.000000000000001, 1e-17);
    /// assert_eq!(c.real(), 5.0);
    /// assert_eq!(c.imaginary(), 0.0);
    ///
    /// assert_eq!(Complex::new(1.0, f64::NAN), NAN);
    /// ```
    #[must_use]
    pub fn new(real: f64, imaginary: f64) -> Self {
        if real.is_nan() || imaginary.is_nan() {
            return NAN;
        }
        for component in [real, imaginary] {
            if component == f64::INFINITY {
                return INFINITY;
            }
            if component == f64::NEG_INFINITY {
                return NEG_INFINITY;
            }
        }
        Self::raw(snap(real), snap(imaginary))
    }

    /// The real part.
    #[must_use]
    pub const fn real(&self) -> f64 {
        self.real
    }

    /// The imaginary part.
    #[must_use]
    pub const fn imaginary(&self) -> f64 {
        self.imaginary
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }

    /// Returns `true` if this value is `NaN`.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        self.real.is_nan()
    }

    /// Returns the value as a whole number if it is real and integral.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::Complex;
    ///
    /// assert_eq!(Complex::from(3).as_integer(), Some(3.0));
    /// assert_eq!(Complex::new(3.0, 1.0).as_integer(), None);
    /// assert_eq!(Complex::from(2.5).as_integer(), None);
    /// ```
    #[must_use]
    pub fn as_integer(&self) -> Option<f64> {
        (self.imaginary == 0.0 && self.real.is_finite() && self.real.fract() == 0.0).then_some(self.real)
    }

    /// Returns the magnitude.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::Complex;
    /// assert_eq!(Complex::new(3.0, 4.0).abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the magnitude `sqrt(a² + b²)` as a real complex number.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::Complex;
    /// assert_eq!(Complex::new(3.0, -4.0).absolute(), Complex::from(5));
    /// ```
    #[must_use]
    pub fn absolute(&self) -> Self {
        Self::new((self.real * self.real + self.imaginary * self.imaginary).sqrt(), 0.0)
    }

    /// Returns the principal argument in radians.
    #[must_use]
    pub fn arg(&self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Rounds both components to `decimals` decimal places.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::Complex;
    /// let c = Complex::new(1.234, 5.678);
    /// assert_eq!(c.round(1), Complex::new(1.2, 5.7));
    /// ```
    #[must_use]
    pub fn round(self, decimals: i32) -> Self {
        Self::new(round_decimals(self.real, decimals), round_decimals(self.imaginary, decimals))
    }

    /// Rounds both components down.
    #[must_use]
    pub fn floor(self) -> Self {
        Self::new(self.real.floor(), self.imaginary.floor())
    }

    /// `e` raised to this number.
    #[must_use]
    pub fn exp(self) -> Self {
        let magnitude = self.real.exp();
        Self::new(magnitude * self.imaginary.cos(), magnitude * self.imaginary.sin())
    }

    /// Principal natural logarithm `(ln|z|, arg z)`.
    ///
    /// The logarithm of zero is [`NEG_INFINITY`].
    #[must_use]
    pub fn ln(self) -> Self {
        Self::new(self.abs().ln(), self.arg())
    }

    /// Principal power `exp(ln(self) · exponent)`.
    ///
    /// A zero base is handled directly: `0^0 = 1`, and `0^y` is `0` or
    /// infinity depending on the sign of the real part of `y`.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::{Complex, I};
    ///
    /// assert_eq!(Complex::new(3.0, 2.0).pow(2), Complex::new(5.0, 12.0));
    /// assert_eq!(Complex::from(-1).pow(0.5), I);
    /// ```
    #[must_use]
    pub fn pow(self, exponent: impl Into<Self>) -> Self {
        let exponent = exponent.into();
        if self == ZERO {
            if exponent == ZERO {
                return ONE;
            }
            return match exponent.real.partial_cmp(&0.0) {
                Some(Ordering::Greater) => ZERO,
                Some(Ordering::Less) => INFINITY,
                _ => NAN,
            };
        }
        (self.ln() * exponent).exp()
    }

    /// Principal `degree`-th root, `self^(1/degree)`.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::{Complex, I};
    /// assert_eq!(Complex::from(-1).root(2), I);
    /// ```
    #[must_use]
    pub fn root(self, degree: impl Into<Self>) -> Self {
        self.pow(ONE / degree.into())
    }

    /// Principal square root.
    #[must_use]
    pub fn sqrt(self) -> Self {
        self.root(TWO)
    }

    /// All `n` complex `n`-th roots, starting from the principal one and
    /// moving counter-clockwise in steps of `2π/n`.
    ///
    /// Returns an empty list for `n = 0`.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::Complex;
    ///
    /// let roots = Complex::from(4).nth_roots(2);
    /// assert_eq!(roots, vec![Complex::from(2), Complex::from(-2)]);
    /// ```
    #[must_use]
    pub fn nth_roots(self, n: u32) -> Vec<Self> {
        let degree = f64::from(n);
        let magnitude = self.real
                            .mul_add(self.real, self.imaginary * self.imaginary)
                            .powf(1.0 / (2.0 * degree));
        let angle = self.arg();

        (0..n).map(|k| {
                  let theta = consts::TAU.mul_add(f64::from(k), angle) / degree;
                  Self::new(magnitude * theta.cos(), magnitude * theta.sin())
              })
              .collect()
    }

    /// Sine.
    #[must_use]
    pub fn sin(self) -> Self {
        Self::new(self.real.sin() * self.imaginary.cosh(),
                  self.real.cos() * self.imaginary.sinh())
    }

    /// Cosine.
    #[must_use]
    pub fn cos(self) -> Self {
        Self::new(self.real.cos() * self.imaginary.cosh(),
                  -self.real.sin() * self.imaginary.sinh())
    }

    /// Tangent, `sin / cos`.
    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Cotangent, `cos / sin`.
    #[must_use]
    pub fn cot(self) -> Self {
        self.cos() / self.sin()
    }

    /// Secant, `1 / cos`.
    #[must_use]
    pub fn sec(self) -> Self {
        ONE / self.cos()
    }

    /// Cosecant, `1 / sin`.
    #[must_use]
    pub fn csc(self) -> Self {
        ONE / self.sin()
    }

    fn sum(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }

    fn difference(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }

    // Plain products keep multiplication exactly commutative.
    fn product(self, rhs: Self) -> Self {
        Self::new(self.real * rhs.real - self.imaginary * rhs.imaginary,
                  self.real * rhs.imaginary + self.imaginary * rhs.real)
    }

    fn quotient(self, rhs: Self) -> Self {
        let denominator = rhs.real * rhs.real + rhs.imaginary * rhs.imaginary;
        Self::new((self.real * rhs.real + self.imaginary * rhs.imaginary) / denominator,
                  (self.imaginary * rhs.real - self.real * rhs.imaginary) / denominator)
    }

    fn remainder(self, rhs: Self) -> Self {
        self - self.quotient(rhs).floor() * rhs
    }
}

fn write_component(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        write!(f, "NaN")
    } else if value.is_infinite() {
        write!(f, "{}Infinity", if value < 0.0 { "-" } else { "" })
    } else {
        write!(f, "{value}")
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.real == 0.0 && self.imaginary == 0.0 {
            return write!(f, "0");
        }
        if self.real != 0.0 {
            write_component(f, self.real)?;
        }
        if self.imaginary != 0.0 {
            if self.imaginary < 0.0 {
                write!(f, "-")?;
            } else if self.real != 0.0 {
                write!(f, "+")?;
            }
            let magnitude = self.imaginary.abs();
            if magnitude != 1.0 {
                write_component(f, magnitude)?;
            }
            write!(f, "i")?;
        }
        Ok(())
    }
}

impl ops::Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.imaginary)
    }
}

macro_rules! mixed_binary_op {
    ($trait:ident, $method:ident, $implementation:ident) => {
        impl<T> ops::$trait<T> for Complex where T: Into<Complex>
        {
            type Output = Self;

            fn $method(self, rhs: T) -> Self::Output {
                self.$implementation(rhs.into())
            }
        }

        impl ops::$trait<Complex> for f64 {
            type Output = Complex;

            fn $method(self, rhs: Complex) -> Self::Output {
                Complex::from(self).$implementation(rhs)
            }
        }
    };
}

mixed_binary_op!(Add, add, sum);
mixed_binary_op!(Sub, sub, difference);
mixed_binary_op!(Mul, mul, product);
mixed_binary_op!(Div, div, quotient);
mixed_binary_op!(Rem, rem, remainder);

macro_rules! from_real {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Complex {
                fn from(value: $source) -> Self {
                    Self::new(f64::from(value), 0.0)
                }
            }
        )*
    };
}

from_real!(f64, f32, i32, u32, i16, u16, i8, u8);

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imaginary).hash(state);
    }
}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Complex {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.real).cmp(&OrderedFloat(other.real))
                               .then_with(|| OrderedFloat(self.imaginary).cmp(&OrderedFloat(other.imaginary)))
    }
}
