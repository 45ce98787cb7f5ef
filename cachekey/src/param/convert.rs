use std::sync::Arc;

use super::{Param, ParamValue};

crate::param_conversions! {
    Bool => bool: [bool],
    Int => i64: [i8, i16, i32, i64],
    UInt => u64: [u8, u16, u32, u64],
    Float => f64: [f32, f64],
    Char => char: [char],
    Str => Arc<str>: [&str, String, Arc<str>],
    Bytes => Arc<[u8]>: [],
    Array => Arc<[Param]>: [],
}

impl From<isize> for Param {
    fn from(value: isize) -> Self {
        Param::Int(value as i64)
    }
}

impl From<usize> for Param {
    fn from(value: usize) -> Self {
        Param::UInt(value as u64)
    }
}

impl From<()> for Param {
    fn from(_: ()) -> Self {
        Param::Null
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Param::Null, Into::into)
    }
}

impl<T: Into<Param>> From<Vec<T>> for Param {
    fn from(values: Vec<T>) -> Self {
        Param::array(values)
    }
}

impl<T: Into<Param>, const N: usize> From<[T; N]> for Param {
    fn from(values: [T; N]) -> Self {
        Param::array(values)
    }
}

impl<T: Into<Param> + Clone> From<&[T]> for Param {
    fn from(values: &[T]) -> Self {
        Param::array(values.iter().cloned())
    }
}

impl From<Arc<dyn ParamValue>> for Param {
    fn from(value: Arc<dyn ParamValue>) -> Self {
        match (*value).as_any().downcast_ref::<Param>() {
            Some(param) => param.clone(),
            None => Param::Custom(value),
        }
    }
}

impl TryFrom<&Param> for String {
    type Error = crate::Error;

    fn try_from(param: &Param) -> crate::Result<Self> {
        Arc::<str>::try_from(param).map(|value| value.to_string())
    }
}

impl TryFrom<Param> for String {
    type Error = crate::Error;

    fn try_from(param: Param) -> crate::Result<Self> {
        String::try_from(&param)
    }
}
