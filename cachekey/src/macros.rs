/// Build a `Vec<Param>` from a list of expressions.
///
/// Every expression is converted with `Param::from`, so the list may mix types.
///
/// # Examples
/// ```
/// use cachekey::{params, Param};
///
/// let params = params![1, "two", None::<i32>];
/// assert_eq!(params, vec![Param::Int(1), Param::from("two"), Param::Null]);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::<$crate::Param>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Param::from($value)),+]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! param_accessors {
    ($($name:ident: $variant:ident => $ty:ty),+ $(,)?) => {
        paste::paste! {
            impl $crate::Param {
                $(
                    #[doc = concat!("Returns `true` if this is a [`Param::", stringify!($variant), "`].")]
                    pub fn [<is_ $name>](&self) -> bool {
                        matches!(self, $crate::Param::$variant(_))
                    }

                    #[doc = concat!("Borrow the payload of a [`Param::", stringify!($variant), "`].")]
                    pub fn [<as_ $name>](&self) -> Option<&$ty> {
                        match self {
                            $crate::Param::$variant(value) => {
                                Some(<_ as ::std::borrow::Borrow<$ty>>::borrow(value))
                            }
                            _ => None,
                        }
                    }
                )+
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! param_conversions {
    ($($variant:ident => $ty:ty: [$($from:ty),*]),+ $(,)?) => {
        $(
            $(
                impl From<$from> for $crate::Param {
                    fn from(value: $from) -> Self {
                        $crate::Param::$variant(<$ty>::from(value))
                    }
                }
            )*

            impl TryFrom<&$crate::Param> for $ty {
                type Error = $crate::Error;

                fn try_from(param: &$crate::Param) -> $crate::Result<Self> {
                    match param {
                        $crate::Param::$variant(value) => Ok(value.clone()),
                        other => Err($crate::Error::UnexpectedKind {
                            expected: $crate::ParamKind::$variant,
                            found: other.kind(),
                        }),
                    }
                }
            }

            impl TryFrom<$crate::Param> for $ty {
                type Error = $crate::Error;

                fn try_from(param: $crate::Param) -> $crate::Result<Self> {
                    <$ty>::try_from(&param)
                }
            }
        )+
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! async_test {
    ($(async fn $name:ident () $body:block)+) => {
        $(
            paste::paste! {
                #[tokio::test(flavor = "current_thread")]
                async fn [<$name _ st>] () $body

                #[tokio::test(flavor = "multi_thread")]
                async fn [<$name _ mt>] () $body
            }
        )+
    };
}
