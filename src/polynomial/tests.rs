// src/polynomial/tests.rs

//! Unit tests for polynomial arithmetic and rendering.

use num_rational::Rational64;

use super::{Monomial, Polynomial};
use crate::error::AlgebraError;
use crate::notation::Notation;

// --- Test Helpers ---

fn var(name: &str) -> Polynomial {
    Polynomial::variable(name)
}

fn int(n: i64) -> Rational64 {
    Rational64::from_integer(n)
}

fn half() -> Rational64 {
    Rational64::new(1, 2)
}

/// A few small polynomials mixing constants, variables and repeated factors.
fn samples() -> Vec<Polynomial> {
    vec![
        Polynomial::zero(),
        Polynomial::constant(3),
        var("a"),
        var("a") + var("b"),
        var("a") * var("a") - Polynomial::constant(2),
        var("b") * var("c") + Polynomial::from_coefficient(half()),
    ]
}

// --- Construction ---

#[test_log::test]
fn test_zero_terms_are_dropped_on_construction() {
    let poly = Polynomial::from_terms([
        (Monomial::new(["a"]), Rational64::from_integer(0)),
        (Monomial::one(), Rational64::from_integer(4)),
    ]);
    assert_eq!(poly.len(), 1);
    assert!(poly.eq_scalar(Rational64::from_integer(4)));
    assert!(Polynomial::constant(0).is_zero());
}

#[test_log::test]
fn test_repeated_monomials_are_summed() {
    let poly = Polynomial::from_terms([
        (Monomial::new(["b", "a"]), Rational64::from_integer(2)),
        (Monomial::new(["a", "b"]), Rational64::from_integer(-2)),
    ]);
    assert!(poly.is_zero(), "a*b and b*a share a key and cancel");
}

// --- Ring Laws ---

#[test_log::test]
fn test_additive_inverse_is_empty() {
    for p in samples() {
        let sum = &p + &(-&p);
        assert!(sum.is_zero(), "p + (-p) should be zero for {}", p);
        assert_eq!(sum.len(), 0);
    }
}

#[test_log::test]
fn test_multiplication_is_commutative_and_associative() {
    let polys = samples();
    for p in &polys {
        for q in &polys {
            assert_eq!(p * q, q * p, "commutativity for ({}) ({})", p, q);
            for r in &polys {
                assert_eq!((p * q) * r, p * (q * r), "associativity");
            }
        }
    }
}

#[test_log::test]
fn test_multiplication_distributes_over_addition() {
    let polys = samples();
    for p in &polys {
        for q in &polys {
            for r in &polys {
                assert_eq!((p + q) * r, p * r + q * r);
            }
        }
    }
}

#[test_log::test]
fn test_square_collects_cross_terms() {
    let sum = var("a") + var("b");
    let square = sum.pow(2).expect("squaring is supported");
    assert_eq!(square.coefficient(&Monomial::new(["a", "b"])), int(2));
    assert_eq!(square.coefficient(&Monomial::new(["a", "a"])), int(1));
    assert_eq!(square.len(), 3);
}

#[test_log::test]
fn test_other_exponents_are_rejected() {
    assert_eq!(var("a").pow(3), Err(AlgebraError::UnsupportedExponent(3)));
    assert_eq!(var("a").pow(0), Err(AlgebraError::UnsupportedExponent(0)));
}

// --- Scalars ---

#[test_log::test]
fn test_scale_and_divide() {
    let p = var("a") * Rational64::from_integer(4);
    let q = p.div_scalar(Rational64::from_integer(8)).expect("nonzero divisor");
    assert_eq!(q, var("a") * half());
    assert_eq!(
        p.div_scalar(Rational64::from_integer(0)),
        Err(AlgebraError::DivisionByZero)
    );
    assert!(p.scale(Rational64::from_integer(0)).is_zero());
}

#[test_log::test]
fn test_eq_scalar_requires_single_constant_term() {
    assert!(Polynomial::constant(1).eq_scalar(int(1)));
    assert!(!Polynomial::zero().eq_scalar(int(0)));
    assert!(!(Polynomial::constant(1) + var("a")).eq_scalar(int(1)));
    assert!(!var("a").eq_scalar(int(1)));
}

#[test_log::test]
fn test_reciprocal_of_constant() {
    let two = Polynomial::constant(2);
    assert_eq!(two.recip(), Ok(Polynomial::from_coefficient(half())));
}

#[test_log::test]
fn test_reciprocal_failures() {
    assert!(matches!(
        Polynomial::zero().recip(),
        Err(AlgebraError::NotInvertible(_))
    ));
    assert!(matches!(var("a").recip(), Err(AlgebraError::NotInvertible(_))));
    assert!(matches!(
        (Polynomial::constant(1) + var("a")).recip(),
        Err(AlgebraError::NotInvertible(_))
    ));
}

// --- Queries ---

#[test_log::test]
fn test_monomial_degree_and_powers() {
    let m = Monomial::new(["b", "a", "a"]);
    assert_eq!(m.degree(), 3);
    assert_eq!(m.variables(), ["a", "a", "b"]);
    assert_eq!(m.powers(), vec![("a", 2), ("b", 1)]);
    assert_eq!(Monomial::one().degree(), 0);
    assert!(Monomial::one().is_one());
    assert_eq!(m.product(&Monomial::new(["a"])).degree(), 4);
}

#[test_log::test]
fn test_constant_queries() {
    assert!(Polynomial::zero().is_constant());
    assert_eq!(Polynomial::zero().constant_term(), int(0));
    assert!(Polynomial::from_coefficient(half()).is_constant());
    assert_eq!(Polynomial::from_coefficient(half()).constant_term(), half());

    let p = var("a") * var("a") + Polynomial::constant(-4);
    assert!(!p.is_constant());
    assert_eq!(p.constant_term(), int(-4));
    assert_eq!(p.coefficient(&Monomial::new(["a", "a"])), int(1));
    assert_eq!(var("a").constant_term(), int(0));
}

#[test_log::test]
fn test_large_coefficients_stay_exact() {
    // Products up to 2^62 fit in the i64 numerator.
    let big = Polynomial::constant(1 << 31);
    assert_eq!(big.pow(2), Ok(Polynomial::constant(1 << 62)));
    let frac = Polynomial::from_coefficient(Rational64::new(1, 1 << 31));
    assert_eq!(&big * &frac, Polynomial::one());
}

// --- Rendering ---

#[test_log::test]
fn test_render_plain() {
    let a = var("a");
    let b = var("b");
    let poly = &a * &a * &a * Rational64::from_integer(2) - &a * &b + Polynomial::constant(-1);
    assert_eq!(poly.to_string(), "-1 + 2 * a**3 - a * b");
}

#[test_log::test]
fn test_render_latex() {
    let a = var("a");
    let poly = &a * &a * half() + var("b") * Rational64::new(-3, 4);
    assert_eq!(
        poly.render(Notation::Latex),
        "\\frac{1}{2} {a}^2 - \\frac{3}{4} b"
    );
}

#[test_log::test]
fn test_render_unit_coefficients_and_zero() {
    assert_eq!(Polynomial::zero().to_string(), "0");
    assert_eq!((-var("x")).to_string(), "-x");
    assert_eq!(Polynomial::from_coefficient(Rational64::new(-1, 2)).to_string(), "-1/2");
}
