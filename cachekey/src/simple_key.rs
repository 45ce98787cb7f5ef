use std::{fmt, slice};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Param;

/// The key for a call with no arguments.
///
/// Built at compile time and shared by every zero-argument call.
pub static EMPTY: SimpleKey = SimpleKey { params: Vec::new() };

/// A key over the ordered arguments of a call.
///
/// Two keys are equal if they hold the same number of params and the params
/// are pairwise equal, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SimpleKey {
    params: Vec<Param>,
}

impl SimpleKey {
    /// Create a new [SimpleKey].
    pub fn new(params: impl Into<Vec<Param>>) -> SimpleKey {
        SimpleKey {
            params: params.into(),
        }
    }

    /// Get the shared [EMPTY] key.
    pub fn empty() -> &'static SimpleKey {
        &EMPTY
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Param> {
        self.params.iter()
    }
}

impl<'a> IntoIterator for &'a SimpleKey {
    type Item = &'a Param;
    type IntoIter = slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for SimpleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SimpleKey [")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str("]")
    }
}
