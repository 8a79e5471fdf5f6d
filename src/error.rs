// src/error.rs

//! Error taxonomy shared by the symbolic engine and the kernel generator.
//!
//! Every failure is local to the operation that raised it. Nothing is retried
//! and no operation substitutes a default value on error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("unsupported exponent {0}: only squaring is defined")]
    UnsupportedExponent(u32),
    #[error("cannot invert {0}")]
    NotInvertible(String),
    #[error("grade is undefined for an empty or mixed-grade multivector")]
    EmptyOrMixedGrade,
    #[error("malformed blade: {0}")]
    MalformedBlade(String),
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AlgebraError>;
