//! Errors for the checked retrieval path.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptError {
    #[error("optional value is empty")]
    Empty,
}

pub type Result<T> = core::result::Result<T, OptError>;
