use thiserror::Error;

pub type Result<T> = std::result::Result<T, RadixError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RadixError {
    #[error("Invalid base: {0}")]
    InvalidBase(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Division by zero")]
    DivisionByZero,
}
