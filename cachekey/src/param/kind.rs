use std::fmt;

/// The variant of a [`Param`](crate::Param), without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Null,
    Bool,
    Int,
    UInt,
    Float,
    Char,
    Str,
    Bytes,
    Array,
    Custom,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Null => "null",
            ParamKind::Bool => "bool",
            ParamKind::Int => "int",
            ParamKind::UInt => "uint",
            ParamKind::Float => "float",
            ParamKind::Char => "char",
            ParamKind::Str => "str",
            ParamKind::Bytes => "bytes",
            ParamKind::Array => "array",
            ParamKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
