use crate::ParamKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Expected a {expected} param, found {found}.")]
    UnexpectedKind {
        expected: ParamKind,
        found: ParamKind,
    },
    #[error("Key is a composite key, not a single param.")]
    NotAParam,
}

pub type Result<T> = std::result::Result<T, Error>;
