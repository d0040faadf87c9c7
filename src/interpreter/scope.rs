use std::{collections::BTreeMap, fmt};

use crate::interpreter::value::core::Value;

/// The variable binding table.
///
/// Maps single-letter variable names to a number or a list of numbers.
/// Evaluation and simplification only read it; resolving an equation writes
/// the derived binding back, so a sequence of equations can build on each
/// other's results.
///
/// Bindings are kept ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    bindings: BTreeMap<char, Value>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: char) -> Option<&Value> {
        self.bindings.get(&name)
    }

    /// Binds `name` to `value`, returning the previous binding.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::{scope::Scope, value::complex::Complex};
    ///
    /// let mut scope = Scope::new();
    /// scope.bind('x', Complex::from(2));
    /// assert_eq!(scope.to_string(), "{x = 2}");
    /// ```
    pub fn bind(&mut self, name: char, value: impl Into<Value>) -> Option<Value> {
        self.bindings.insert(name, value.into())
    }

    /// Removes the binding of `name`.
    pub fn unbind(&mut self, name: char) -> Option<Value> {
        self.bindings.remove(&name)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: char) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Iterates over the bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Value)> {
        self.bindings.iter().map(|(name, value)| (*name, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(char, Value)> for Scope {
    fn from_iter<T: IntoIterator<Item = (char, Value)>>(iter: T) -> Self {
        Self { bindings: iter.into_iter().collect() }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name} = {value}")?;
        }
        write!(f, "}}")
    }
}
