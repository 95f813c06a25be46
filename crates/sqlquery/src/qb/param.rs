//! Flavor-aware parameter collection.

use crate::flavor::Flavor;
use crate::value::Value;

/// Ordered arguments collected while rendering one statement.
///
/// Every call to [`ParamList::bind`] appends the value and returns the
/// placeholder text to splice into the SQL at that exact position, so the
/// Nth placeholder written always refers to the Nth argument.
#[derive(Clone, Debug)]
pub struct ParamList {
    flavor: Flavor,
    params: Vec<Value>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            params: Vec::new(),
        }
    }

    /// Flavor used to render placeholders.
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Add a parameter and return its placeholder.
    pub fn bind(&mut self, value: impl Into<Value>) -> String {
        self.params.push(value.into());
        self.flavor.placeholder(self.params.len())
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Borrow the collected arguments.
    pub fn as_slice(&self) -> &[Value] {
        &self.params
    }

    /// Take the collected arguments.
    pub fn into_values(self) -> Vec<Value> {
        self.params
    }
}
