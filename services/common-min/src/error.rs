use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommonMinError>;

#[derive(Error, Debug)]
pub enum CommonMinError {
    #[error("Array {array} is empty")]
    EmptyArray { array: char },

    #[error("Array {array} has {len} elements, at most {max} allowed")]
    TooManyElements { array: char, len: usize, max: usize },

    #[error("Array {array} has non-positive value {value} at index {index}")]
    NonPositive { array: char, index: usize, value: i32 },

    #[error("Invalid strategy: {0}")]
    InvalidStrategy(String),

    #[error("Invalid array: {0}")]
    InvalidArray(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}
