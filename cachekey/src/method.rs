use std::fmt;

/// Identity of an intercepted method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Method {
    owner: &'static str,
    name: &'static str,
}

impl Method {
    pub const fn new(owner: &'static str, name: &'static str) -> Method {
        Method { owner, name }
    }

    /// Name of the type the method belongs to.
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.owner, self.name)
    }
}
