// src/polynomial/mod.rs

//! Sparse multivariate polynomials over named scalar variables.
//!
//! A `Polynomial` maps each `Monomial` (a sorted multiset of variable names)
//! to a nonzero exact rational coefficient. Terms whose coefficient sums to
//! zero are removed as soon as they appear, so an empty map is the additive
//! identity and nothing else is.

mod render;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::{Add, Mul, Neg, Sub};

use num_rational::Rational64;
use num_traits::{One, Zero};

use crate::error::{AlgebraError, Result};

/// Exact numeric coefficient.
///
/// Numerators and denominators are `i64`. Arithmetic whose reduced result
/// does not fit overflows the way `i64` does (a panic in debug builds), so
/// coefficients are expected to stay small, as they do for blade products
/// and conformal embeddings.
pub type Coefficient = Rational64;

/// Sorted multiset of variable names. The empty monomial is the constant `1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monomial(Vec<String>);

impl Monomial {
    /// The constant monomial (no variables).
    pub fn one() -> Self {
        Monomial(Vec::new())
    }

    pub fn new<I, S>(variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vars: Vec<String> = variables.into_iter().map(Into::into).collect();
        vars.sort();
        Monomial(vars)
    }

    pub fn is_one(&self) -> bool {
        self.0.is_empty()
    }

    pub fn variables(&self) -> &[String] {
        &self.0
    }

    /// Total degree.
    pub fn degree(&self) -> usize {
        self.0.len()
    }

    /// Product of two monomials: concatenation, re-sorted.
    pub fn product(&self, rhs: &Monomial) -> Monomial {
        let mut vars = Vec::with_capacity(self.0.len() + rhs.0.len());
        vars.extend_from_slice(&self.0);
        vars.extend_from_slice(&rhs.0);
        vars.sort();
        Monomial(vars)
    }

    /// Distinct variables paired with their exponents, in sorted order.
    pub fn powers(&self) -> Vec<(&str, u32)> {
        let mut powers: Vec<(&str, u32)> = Vec::new();
        for var in &self.0 {
            match powers.last_mut() {
                Some((last, exp)) if *last == var.as_str() => *exp += 1,
                _ => powers.push((var.as_str(), 1)),
            }
        }
        powers
    }
}

/// Sparse polynomial with exact rational coefficients.
///
/// Values are immutable: every operation builds a new polynomial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, Coefficient>,
}

impl Polynomial {
    // --- Construction ---

    /// The additive identity.
    pub fn zero() -> Self {
        Polynomial::default()
    }

    pub fn one() -> Self {
        Polynomial::constant(1)
    }

    /// A constant integer polynomial. Zero yields the additive identity.
    pub fn constant(value: i64) -> Self {
        Polynomial::from_coefficient(Coefficient::from_integer(value))
    }

    /// A constant rational polynomial. Zero yields the additive identity.
    pub fn from_coefficient(value: Coefficient) -> Self {
        Polynomial::from_terms([(Monomial::one(), value)])
    }

    /// A single named variable with coefficient 1.
    pub fn variable(name: impl Into<String>) -> Self {
        Polynomial::from_terms([(Monomial::new([name.into()]), Coefficient::one())])
    }

    /// Builds a polynomial from explicit terms. Repeated monomials are summed
    /// and zero coefficients are dropped.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (Monomial, Coefficient)>,
    {
        let mut poly = Polynomial::zero();
        for (monomial, coef) in terms {
            poly.accumulate(monomial, coef);
        }
        poly
    }

    fn accumulate(&mut self, monomial: Monomial, coef: Coefficient) {
        if coef.is_zero() {
            return;
        }
        match self.terms.entry(monomial) {
            Entry::Vacant(slot) => {
                slot.insert(coef);
            }
            Entry::Occupied(mut slot) => {
                *slot.get_mut() += coef;
                if slot.get().is_zero() {
                    slot.remove();
                }
            }
        }
    }

    // --- Queries ---

    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Coefficient)> {
        self.terms.iter()
    }

    /// Number of stored (nonzero) terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True iff there are no stored terms.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// True iff the polynomial has at most a constant term.
    pub fn is_constant(&self) -> bool {
        self.terms.keys().all(Monomial::is_one)
    }

    /// Coefficient of the constant term, zero if absent.
    pub fn constant_term(&self) -> Coefficient {
        self.terms
            .get(&Monomial::one())
            .copied()
            .unwrap_or_else(Coefficient::zero)
    }

    /// Coefficient of `monomial`, zero if absent.
    pub fn coefficient(&self, monomial: &Monomial) -> Coefficient {
        self.terms
            .get(monomial)
            .copied()
            .unwrap_or_else(Coefficient::zero)
    }

    /// True iff this is exactly one constant term equal to `scalar`.
    ///
    /// The zero polynomial compares equal to nothing, including zero.
    pub fn eq_scalar(&self, scalar: Coefficient) -> bool {
        self.terms.len() == 1 && self.terms.get(&Monomial::one()) == Some(&scalar)
    }

    // --- Arithmetic ---

    /// Multiplies every coefficient by `factor`.
    pub fn scale(&self, factor: Coefficient) -> Polynomial {
        if factor.is_zero() {
            return Polynomial::zero();
        }
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), *c * factor))
                .collect(),
        }
    }

    pub fn div_scalar(&self, divisor: Coefficient) -> Result<Polynomial> {
        if divisor.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(self.scale(divisor.recip()))
    }

    /// Raises to a power. Only squaring is defined.
    pub fn pow(&self, exponent: u32) -> Result<Polynomial> {
        match exponent {
            2 => Ok(self * self),
            other => Err(AlgebraError::UnsupportedExponent(other)),
        }
    }

    /// Multiplicative inverse of a nonzero constant polynomial.
    pub fn recip(&self) -> Result<Polynomial> {
        if self.is_zero() {
            return Err(AlgebraError::NotInvertible("0".to_string()));
        }
        match self.terms.get(&Monomial::one()) {
            Some(c) if self.terms.len() == 1 => Ok(Polynomial::from_coefficient(c.recip())),
            _ => Err(AlgebraError::NotInvertible(self.to_string())),
        }
    }

    fn add_ref(&self, rhs: &Polynomial) -> Polynomial {
        let mut sum = self.clone();
        for (monomial, coef) in &rhs.terms {
            sum.accumulate(monomial.clone(), *coef);
        }
        sum
    }

    fn sub_ref(&self, rhs: &Polynomial) -> Polynomial {
        self.add_ref(&-rhs)
    }

    fn mul_ref(&self, rhs: &Polynomial) -> Polynomial {
        let mut product = Polynomial::zero();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &rhs.terms {
                product.accumulate(m1.product(m2), *c1 * *c2);
            }
        }
        product
    }
}

impl From<i64> for Polynomial {
    fn from(value: i64) -> Self {
        Polynomial::constant(value)
    }
}

impl From<i32> for Polynomial {
    fn from(value: i32) -> Self {
        Polynomial::constant(i64::from(value))
    }
}

impl From<Coefficient> for Polynomial {
    fn from(value: Coefficient) -> Self {
        Polynomial::from_coefficient(value)
    }
}

// ============================================================================
// Operator overloads
// ============================================================================

/// Implements a binary operator for every owned/borrowed operand combination
/// by forwarding to a by-reference method.
macro_rules! impl_poly_binop {
    ($trait:ident, $method:ident, $body:expr) => {
        impl $trait<&Polynomial> for &Polynomial {
            type Output = Polynomial;
            fn $method(self, rhs: &Polynomial) -> Polynomial {
                $body(self, rhs)
            }
        }

        impl $trait<Polynomial> for Polynomial {
            type Output = Polynomial;
            fn $method(self, rhs: Polynomial) -> Polynomial {
                $body(&self, &rhs)
            }
        }

        impl $trait<&Polynomial> for Polynomial {
            type Output = Polynomial;
            fn $method(self, rhs: &Polynomial) -> Polynomial {
                $body(&self, rhs)
            }
        }

        impl $trait<Polynomial> for &Polynomial {
            type Output = Polynomial;
            fn $method(self, rhs: Polynomial) -> Polynomial {
                $body(self, &rhs)
            }
        }
    };
}

impl_poly_binop!(Add, add, Polynomial::add_ref);
impl_poly_binop!(Mul, mul, Polynomial::mul_ref);
impl_poly_binop!(Sub, sub, Polynomial::sub_ref);

impl Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        self.scale(-Coefficient::one())
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        -&self
    }
}

impl Mul<Coefficient> for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Coefficient) -> Polynomial {
        self.scale(rhs)
    }
}

impl Mul<Coefficient> for &Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Coefficient) -> Polynomial {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests;
