// src/conformal.rs

//! Conformal embedding helpers for the `- + x y z` algebra.
//!
//! `NI` is the point at infinity and `NO` the origin. A Euclidean point maps
//! to the null vector `NO + x + NI * |x|^2 / 2`; spheres and flat points are
//! built from that.

use num_rational::Rational64;
use once_cell::sync::Lazy;

use crate::blade::{Axis, E_MINUS, E_PLUS, E_X, E_Y, E_Z};
use crate::error::Result;
use crate::multivector::Multivector;
use crate::polynomial::Polynomial;

fn half() -> Rational64 {
    Rational64::new(1, 2)
}

fn basis(axes: &[Axis], coef: Polynomial) -> Multivector {
    Multivector::from_axes([(axes.to_vec(), coef)])
}

/// Point at infinity: `e- + e+`.
pub static NI: Lazy<Multivector> =
    Lazy::new(|| basis(&[E_MINUS], Polynomial::one()) + basis(&[E_PLUS], Polynomial::one()));

/// Origin: `(e- - e+) / 2`.
pub static NO: Lazy<Multivector> = Lazy::new(|| {
    basis(&[E_MINUS], Polynomial::from_coefficient(half()))
        + basis(&[E_PLUS], Polynomial::from_coefficient(-half()))
});

/// The Minkowski plane bivector `e- e+`.
pub static MINKOWSKI_PLANE: Lazy<Multivector> =
    Lazy::new(|| basis(&[E_MINUS, E_PLUS], Polynomial::one()));

pub static X: Lazy<Multivector> = Lazy::new(|| basis(&[E_X], Polynomial::one()));
pub static Y: Lazy<Multivector> = Lazy::new(|| basis(&[E_Y], Polynomial::one()));
pub static Z: Lazy<Multivector> = Lazy::new(|| basis(&[E_Z], Polynomial::one()));

/// Conformal embedding of the Euclidean point `(x, y, z)`.
pub fn point_at(
    x: impl Into<Polynomial>,
    y: impl Into<Polynomial>,
    z: impl Into<Polynomial>,
) -> Multivector {
    let (x, y, z) = (x.into(), y.into(), z.into());
    let mag2 = &x * &x + &y * &y + &z * &z;
    &*NO + &basis(&[E_X], x)
        + basis(&[E_Y], y)
        + basis(&[E_Z], z)
        + &*NI * &mag2.scale(half())
}

/// A point whose coordinates are the variables `a`, `b`, `c`, suffixed with
/// `_subscript` when `subscript` is nonempty.
pub fn point(subscript: &str) -> Multivector {
    let name = |base: &str| {
        if subscript.is_empty() {
            base.to_string()
        } else {
            format!("{}_{}", base, subscript)
        }
    };
    point_at(
        Polynomial::variable(name("a")),
        Polynomial::variable(name("b")),
        Polynomial::variable(name("c")),
    )
}

/// Dual sphere (IPNS form) about `center` with radius `radius`.
pub fn sphere_at(center: &Multivector, radius: impl Into<Polynomial>) -> Multivector {
    let radius = radius.into();
    center - &*NI * &(&radius * &radius).scale(half())
}

/// Flat point through `point`: `point ^ NI`.
pub fn flat_point(point: &Multivector) -> Result<Multivector> {
    point ^ &*NI
}
