//! Symbolic conformal geometric algebra.
//!
//! Polynomials with exact rational coefficients, multivectors over the
//! `- + x y z` metric with polynomial coefficients, and a generator that
//! emits per-grade blade multiplication kernels as Rust source.

/// Blade canonicalization and metrics.
pub mod blade;
/// Kernel generator and Rust source emission.
pub mod codegen;
/// Configuration for the generator binary.
pub mod config;
/// Conformal embedding helpers.
pub mod conformal;
/// Error types.
pub mod error;
/// Multivector algebra.
pub mod multivector;
/// Output notations.
pub mod notation;
/// Polynomial ring.
pub mod polynomial;

pub use blade::{Axis, Metric, Sign};
pub use codegen::{Generator, GeneratorConfig, Kernel, KernelOp};
pub use error::{AlgebraError, Result};
pub use multivector::Multivector;
pub use notation::Notation;
pub use polynomial::{Coefficient, Monomial, Polynomial};
