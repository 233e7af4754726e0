#![warn(clippy::pedantic)]

pub mod annotations;
pub mod labels;
pub mod pairs;
pub mod property;

/*
 * ============================================================================
 * Error
 * ============================================================================
 */
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// A comma delimited segment did not contain a `key:value` pair.
    InvalidFormat(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidFormat(segment) => {
                write!(f, "invalid format: {segment}, expected key:value pair")
            }
        }
    }
}

/*
 * ============================================================================
 * Result
 * ============================================================================
 */
pub type Result<T, E = Error> = std::result::Result<T, E>;
