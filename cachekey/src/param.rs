mod convert;
mod custom;
mod kind;

pub use custom::ParamValue;
pub use kind::ParamKind;

use std::{
    any::Any,
    fmt,
    hash::{Hash, Hasher},
    mem,
    sync::Arc,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single, dynamically typed argument of a method call.
///
/// Equality is type-sensitive: `Int(1)`, `UInt(1)`, `Float(1.0)` and `Str("1")`
/// are four different params. Floats compare by bit pattern with all NaNs
/// collapsed, so `NaN == NaN` and `0.0 != -0.0`. Arrays compare element by
/// element.
///
/// Shared payloads are reference counted. Cloning a param never copies a
/// string, byte string, array or custom value.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Param {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(Arc<str>),
    Bytes(Arc<[u8]>),
    Array(Arc<[Param]>),
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(Arc<dyn ParamValue>),
}

impl Param {
    /// Wrap a user value.
    ///
    /// # Examples
    /// ```
    /// use cachekey::Param;
    ///
    /// #[derive(Debug, PartialEq, Eq, Hash)]
    /// struct UserId(u32);
    ///
    /// let param = Param::custom(UserId(7));
    /// assert_eq!(param, Param::custom(UserId(7)));
    /// assert_eq!(param.downcast_ref::<UserId>(), Some(&UserId(7)));
    /// ```
    ///
    /// A `Param` passed in is returned as is, so `Param::custom(Param::Null)`
    /// is still null.
    ///
    /// The value is opaque: a custom `[T; N]` is one scalar compared with its
    /// own `Eq`, not a sequence. Use [`Param::array`] for an argument that must
    /// be treated as an array.
    pub fn custom<T: ParamValue>(value: T) -> Self {
        if let Some(param) = (&value as &dyn Any).downcast_ref::<Param>() {
            return param.clone();
        }
        Param::Custom(Arc::new(value))
    }

    /// Wrap a byte string.
    ///
    /// `Vec<u8>` converts into an array of integers through `From`, use this to
    /// keep the bytes as one scalar instead.
    pub fn bytes(value: impl Into<Arc<[u8]>>) -> Self {
        Param::Bytes(value.into())
    }

    /// Build an array param.
    pub fn array<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Param>,
    {
        Param::Array(values.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> ParamKind {
        match self {
            Param::Null => ParamKind::Null,
            Param::Bool(_) => ParamKind::Bool,
            Param::Int(_) => ParamKind::Int,
            Param::UInt(_) => ParamKind::UInt,
            Param::Float(_) => ParamKind::Float,
            Param::Char(_) => ParamKind::Char,
            Param::Str(_) => ParamKind::Str,
            Param::Bytes(_) => ParamKind::Bytes,
            Param::Array(_) => ParamKind::Array,
            Param::Custom(_) => ParamKind::Custom,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Param::Null)
    }

    /// Returns `true` for params that hold an ordered run of elements,
    /// [`Param::Array`] and [`Param::Bytes`].
    pub fn is_sequence(&self) -> bool {
        matches!(self, Param::Array(_) | Param::Bytes(_))
    }

    /// Downcast a custom value to its concrete type.
    pub fn downcast_ref<T: ParamValue>(&self) -> Option<&T> {
        match self {
            Param::Custom(value) => (**value).as_any().downcast_ref::<T>(),
            _ => None,
        }
    }
}

crate::param_accessors! {
    bool: Bool => bool,
    int: Int => i64,
    uint: UInt => u64,
    float: Float => f64,
    char: Char => char,
    str: Str => str,
    bytes: Bytes => [u8],
    array: Array => [Param],
    custom: Custom => dyn ParamValue,
}

/// Bits of a float with every NaN mapped onto the canonical one.
fn float_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Param::Null, Param::Null) => true,
            (Param::Bool(a), Param::Bool(b)) => a == b,
            (Param::Int(a), Param::Int(b)) => a == b,
            (Param::UInt(a), Param::UInt(b)) => a == b,
            (Param::Float(a), Param::Float(b)) => float_bits(*a) == float_bits(*b),
            (Param::Char(a), Param::Char(b)) => a == b,
            (Param::Str(a), Param::Str(b)) => a == b,
            (Param::Bytes(a), Param::Bytes(b)) => a == b,
            (Param::Array(a), Param::Array(b)) => a == b,
            (Param::Custom(a), Param::Custom(b)) => a.dyn_eq(&**b),
            _ => false,
        }
    }
}

impl Eq for Param {}

impl Hash for Param {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Param::Null => {}
            Param::Bool(value) => value.hash(state),
            Param::Int(value) => value.hash(state),
            Param::UInt(value) => value.hash(state),
            Param::Float(value) => float_bits(*value).hash(state),
            Param::Char(value) => value.hash(state),
            Param::Str(value) => value.hash(state),
            Param::Bytes(value) => value.hash(state),
            Param::Array(value) => value.hash(state),
            Param::Custom(value) => value.dyn_hash(state),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Null => f.write_str("null"),
            Param::Bool(value) => write!(f, "{value}"),
            Param::Int(value) => write!(f, "{value}"),
            Param::UInt(value) => write!(f, "{value}"),
            Param::Float(value) => write!(f, "{value}"),
            Param::Char(value) => write!(f, "{value}"),
            Param::Str(value) => f.write_str(value),
            Param::Bytes(value) => {
                for byte in value.iter() {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Param::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            Param::Custom(value) => write!(f, "{value:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Param;
    use crate::{params, test_utils::hash_of, ParamKind};

    #[derive(Debug, PartialEq, Eq, Hash)]
    struct OrderId(u64);

    #[derive(Debug, PartialEq, Eq, Hash)]
    struct InvoiceId(u64);

    #[test]
    fn test_type_sensitive_equality() {
        let values = params![1, 1u32, 1.0, "1", '1', true];
        for (i, a) in values.iter().enumerate() {
            for (j, b) in values.iter().enumerate() {
                assert_eq!(i == j, a == b, "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_float_equality() {
        assert_eq!(Param::Float(f64::NAN), Param::Float(-f64::NAN));
        assert_eq!(hash_of(&Param::Float(f64::NAN)), hash_of(&Param::Float(-f64::NAN)));
        assert_ne!(Param::Float(0.0), Param::Float(-0.0));
        assert_eq!(Param::from(1.5f32), Param::Float(1.5));
    }

    #[test]
    fn test_array_value_equality() {
        let a = Param::array([1, 2, 3]);
        let b = Param::from(vec![1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, Param::array([3, 2, 1]));
        assert_ne!(a, Param::array([1, 2]));
    }

    #[test]
    fn test_nested_arrays() {
        let a = Param::array([Param::array(["x"]), Param::Null]);
        let b = Param::array([Param::array(["x"]), Param::Null]);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "[[x],null]");
    }

    #[test]
    fn test_custom_equality() {
        let order = Param::custom(OrderId(7));
        assert_eq!(order, Param::custom(OrderId(7)));
        assert_eq!(hash_of(&order), hash_of(&Param::custom(OrderId(7))));
        assert_ne!(order, Param::custom(OrderId(8)));
        // Same payload, different type.
        assert_ne!(order, Param::custom(InvoiceId(7)));
        assert_ne!(order, Param::UInt(7));
    }

    #[test]
    fn test_sequences() {
        assert!(Param::array([1]).is_sequence());
        assert!(Param::bytes(vec![1u8]).is_sequence());
        assert!(!Param::from("abc").is_sequence());
        assert!(!Param::custom([1u8, 2]).is_sequence());
    }

    #[test]
    fn test_custom_param_is_unwrapped() {
        assert_eq!(Param::custom(Param::Null), Param::Null);
        assert!(Param::custom(Param::Null).is_null());
        assert_eq!(Param::custom(Param::Int(3)).kind(), ParamKind::Int);
    }

    #[test]
    fn test_downcast() {
        let order = Param::custom(OrderId(7));
        assert_eq!(order.downcast_ref::<OrderId>(), Some(&OrderId(7)));
        assert_eq!(order.downcast_ref::<InvoiceId>(), None);
        assert_eq!(Param::UInt(7).downcast_ref::<u64>(), None);
    }

    #[test]
    fn test_accessors() {
        let param = Param::from("foo");
        assert!(param.is_str());
        assert_eq!(param.as_str(), Some("foo"));
        assert_eq!(param.as_int(), None);
        assert_eq!(Param::array([1]).as_array(), Some([Param::Int(1)].as_slice()));
        assert_eq!(Param::bytes(b"ab".as_slice()).as_bytes(), Some(b"ab".as_slice()));
        assert!(Param::from(None::<&str>).is_null());
        assert_eq!(Param::from(()).kind(), ParamKind::Null);
    }

    #[test]
    fn test_display() {
        assert_eq!(Param::Null.to_string(), "null");
        assert_eq!(Param::from(-3).to_string(), "-3");
        assert_eq!(Param::from("foo").to_string(), "foo");
        assert_eq!(Param::bytes(vec![0x0a, 0xff]).to_string(), "0aff");
        assert_eq!(Param::array(["a", "b"]).to_string(), "[a,b]");
        assert_eq!(Param::custom(OrderId(7)).to_string(), "OrderId(7)");
    }
}
