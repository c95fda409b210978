use thiserror::Error;

pub type Result<T> = std::result::Result<T, TwoPointerError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TwoPointerError {
    #[error("need at least {required} elements, got {actual}")]
    TooShort { required: usize, actual: usize },
    #[error("value {value} at index {index} is not allowed (expected {allowed})")]
    InvalidValue {
        index: usize,
        value: u8,
        allowed: &'static str,
    },
    #[error("element at index {index} is zero; window products need positive elements")]
    ZeroElement { index: usize },
}
