// src/multivector/mod.rs

//! Symbolic multivectors over the `- + x y z` conformal basis.
//!
//! A `Multivector` maps canonical blade labels to nonzero `Polynomial`
//! coefficients. Every key is canonical on insertion (see
//! `Metric::canonicalize`), so two expressions that are equal as algebra
//! elements are equal as maps.
//!
//! Grade-dependent operations (`wedge`, `left_contract`, `dual`) need
//! homogeneous operands and report `EmptyOrMixedGrade` otherwise. A zero
//! operand short-circuits to zero without asking for its grade.

mod render;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::{Add, BitXor, Mul, Neg, Shl, Sub};

use log::trace;

use crate::blade::{Axis, Metric};
use crate::error::{AlgebraError, Result};
use crate::polynomial::{Coefficient, Polynomial};

/// Sum of canonical blades with polynomial coefficients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Multivector {
    terms: BTreeMap<Vec<Axis>, Polynomial>,
}

impl Multivector {
    // --- Construction ---

    /// The additive identity.
    pub fn zero() -> Self {
        Multivector::default()
    }

    /// A grade-0 multivector.
    pub fn scalar(value: impl Into<Polynomial>) -> Self {
        Multivector::from_axes([(Vec::new(), value.into())])
    }

    /// A single blade with coefficient 1. The label need not be canonical:
    /// `blade("x-")` is `-blade("-x")`.
    pub fn blade(label: &str) -> Result<Self> {
        Multivector::from_terms([(label, Polynomial::one())])
    }

    /// Builds a multivector from `(label, coefficient)` pairs. Each label is
    /// canonicalized and its sign applied; zero coefficients are dropped.
    pub fn from_terms<'a, I, P>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, P)>,
        P: Into<Polynomial>,
    {
        let metric = Self::metric();
        let mut mv = Multivector::zero();
        for (label, coef) in terms {
            let (axes, sign) = metric.canonicalize(&metric.parse(label)?)?;
            mv.accumulate(axes, coef.into().scale(sign.to_coefficient()));
        }
        Ok(mv)
    }

    /// `coef` times the basis vector `axis`.
    pub fn vector(axis: Axis, coef: impl Into<Polynomial>) -> Result<Self> {
        let metric = Self::metric();
        let (axes, sign) = metric.canonicalize(&[axis])?;
        let mut mv = Multivector::zero();
        mv.accumulate(axes, coef.into().scale(sign.to_coefficient()));
        Ok(mv)
    }

    /// Builds from axis sequences known to lie inside the alphabet.
    pub(crate) fn from_axes<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (Vec<Axis>, Polynomial)>,
    {
        let metric = Self::metric();
        let mut mv = Multivector::zero();
        for (axes, coef) in terms {
            let (canonical, sign) = metric.canonicalize_known(&axes);
            mv.accumulate(canonical, coef.scale(sign.to_coefficient()));
        }
        mv
    }

    fn accumulate(&mut self, axes: Vec<Axis>, coef: Polynomial) {
        if coef.is_zero() {
            return;
        }
        match self.terms.entry(axes) {
            Entry::Vacant(slot) => {
                slot.insert(coef);
            }
            Entry::Occupied(mut slot) => {
                let sum = &*slot.get() + &coef;
                if sum.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }

    /// The metric every multivector is expressed in.
    pub fn metric() -> &'static Metric {
        Metric::cga3()
    }

    // --- Queries ---

    /// Stored terms as `(canonical axes, coefficient)`, in key order.
    pub fn terms(&self) -> impl Iterator<Item = (&[Axis], &Polynomial)> {
        self.terms.iter().map(|(k, v)| (k.as_slice(), v))
    }

    /// Number of stored blades.
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

    /// Coefficient of the blade spelled `label`, with the canonicalization
    /// sign applied. Absent blades have coefficient zero.
    pub fn coefficient(&self, label: &str) -> Result<Polynomial> {
        let metric = Self::metric();
        let (axes, sign) = metric.canonicalize(&metric.parse(label)?)?;
        Ok(self
            .terms
            .get(&axes)
            .map(|c| c.scale(sign.to_coefficient()))
            .unwrap_or_default())
    }

    pub(crate) fn coefficient_of(&self, axes: &[Axis]) -> Polynomial {
        self.terms.get(axes).cloned().unwrap_or_default()
    }

    /// Coefficient of the empty blade.
    pub fn scalar_part(&self) -> Polynomial {
        self.coefficient_of(&[])
    }

    /// Grade of a homogeneous multivector.
    pub fn grade(&self) -> Result<usize> {
        let mut lengths = self.terms.keys().map(Vec::len);
        let first = lengths.next().ok_or(AlgebraError::EmptyOrMixedGrade)?;
        if lengths.all(|g| g == first) {
            Ok(first)
        } else {
            Err(AlgebraError::EmptyOrMixedGrade)
        }
    }

    // --- Products ---

    /// Keeps only the terms of grade `grade`.
    pub fn grade_project(&self, grade: usize) -> Multivector {
        Multivector {
            terms: self
                .terms
                .iter()
                .filter(|(k, _)| k.len() == grade)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Geometric product, fully distributed over both operands.
    pub fn geometric_product(&self, rhs: &Multivector) -> Multivector {
        let metric = Self::metric();
        let mut product = Multivector::zero();
        for (lhs_axes, lhs_coef) in &self.terms {
            for (rhs_axes, rhs_coef) in &rhs.terms {
                let mut axes = Vec::with_capacity(lhs_axes.len() + rhs_axes.len());
                axes.extend_from_slice(lhs_axes);
                axes.extend_from_slice(rhs_axes);
                let (canonical, sign) = metric.canonicalize_known(&axes);
                trace!(
                    "{} * {} = {}{}",
                    metric.label(lhs_axes),
                    metric.label(rhs_axes),
                    sign,
                    metric.label(&canonical)
                );
                let coef = (lhs_coef * rhs_coef).scale(sign.to_coefficient());
                product.accumulate(canonical, coef);
            }
        }
        product
    }

    /// Outer product: the geometric product projected to the summed grade.
    pub fn wedge(&self, rhs: &Multivector) -> Result<Multivector> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Multivector::zero());
        }
        let grade = self.grade()? + rhs.grade()?;
        Ok(self.geometric_product(rhs).grade_project(grade))
    }

    /// Left contraction: the geometric product projected to
    /// `grade(rhs) - grade(self)`. Zero when that difference is negative.
    pub fn left_contract(&self, rhs: &Multivector) -> Result<Multivector> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Multivector::zero());
        }
        let (lhs_grade, rhs_grade) = (self.grade()?, rhs.grade()?);
        match rhs_grade.checked_sub(lhs_grade) {
            Some(grade) => Ok(self.geometric_product(rhs).grade_project(grade)),
            None => Ok(Multivector::zero()),
        }
    }

    /// Multiplies by itself. Only squaring is defined.
    pub fn pow(&self, exponent: u32) -> Result<Multivector> {
        match exponent {
            2 => Ok(self.geometric_product(self)),
            other => Err(AlgebraError::UnsupportedExponent(other)),
        }
    }

    /// Scales every coefficient by a polynomial.
    pub fn scale(&self, factor: &Polynomial) -> Multivector {
        let mut scaled = Multivector::zero();
        for (axes, coef) in &self.terms {
            scaled.accumulate(axes.clone(), coef * factor);
        }
        scaled
    }

    pub fn div_scalar(&self, divisor: Coefficient) -> Result<Multivector> {
        let mut quotient = Multivector::zero();
        for (axes, coef) in &self.terms {
            quotient.accumulate(axes.clone(), coef.div_scalar(divisor)?);
        }
        Ok(quotient)
    }

    // --- Involutions and Duals ---

    /// Reverses the axis order of every blade and re-canonicalizes, which
    /// yields the reversion sign `(-1)^(g(g-1)/2)`.
    pub fn rev(&self) -> Multivector {
        Multivector::from_axes(self.terms.iter().map(|(axes, coef)| {
            let reversed: Vec<Axis> = axes.iter().rev().copied().collect();
            (reversed, coef.clone())
        }))
    }

    /// Left contraction onto the unit pseudoscalar `- + x y z`.
    pub fn dual(&self) -> Result<Multivector> {
        let pseudoscalar =
            Multivector::from_axes([(Self::metric().pseudoscalar(), Polynomial::one())]);
        self.left_contract(&pseudoscalar)
    }

    /// `rev(A) / <A rev(A)>_0`, defined when the denominator is a nonzero
    /// constant. For a blade the denominator is `A ⌋ rev(A)`; taking the
    /// scalar part of the full product also covers mixed-grade versors.
    pub fn inverse(&self) -> Result<Multivector> {
        let reversed = self.rev();
        let norm = self.geometric_product(&reversed).scalar_part();
        let recip = norm.recip()?;
        Ok(reversed.scale(&recip))
    }

    fn add_ref(&self, rhs: &Multivector) -> Multivector {
        let mut sum = self.clone();
        for (axes, coef) in &rhs.terms {
            sum.accumulate(axes.clone(), coef.clone());
        }
        sum
    }

    fn sub_ref(&self, rhs: &Multivector) -> Multivector {
        self.add_ref(&-rhs)
    }
}

// ============================================================================
// Operator overloads
// ============================================================================

macro_rules! impl_mv_binop {
    ($trait:ident, $method:ident, $output:ty, $body:expr) => {
        impl $trait<&Multivector> for &Multivector {
            type Output = $output;
            fn $method(self, rhs: &Multivector) -> $output {
                $body(self, rhs)
            }
        }

        impl $trait<Multivector> for Multivector {
            type Output = $output;
            fn $method(self, rhs: Multivector) -> $output {
                $body(&self, &rhs)
            }
        }

        impl $trait<&Multivector> for Multivector {
            type Output = $output;
            fn $method(self, rhs: &Multivector) -> $output {
                $body(&self, rhs)
            }
        }

        impl $trait<Multivector> for &Multivector {
            type Output = $output;
            fn $method(self, rhs: Multivector) -> $output {
                $body(self, &rhs)
            }
        }
    };
}

impl_mv_binop!(Add, add, Multivector, Multivector::add_ref);
impl_mv_binop!(Sub, sub, Multivector, Multivector::sub_ref);
impl_mv_binop!(Mul, mul, Multivector, Multivector::geometric_product);
// `^` and `<<` need homogeneous operands, so they return `Result`.
impl_mv_binop!(BitXor, bitxor, Result<Multivector>, Multivector::wedge);
impl_mv_binop!(Shl, shl, Result<Multivector>, Multivector::left_contract);

impl Neg for &Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        self.scale(&-Polynomial::one())
    }
}

impl Neg for Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        -&self
    }
}

impl Mul<Polynomial> for Multivector {
    type Output = Multivector;
    fn mul(self, rhs: Polynomial) -> Multivector {
        self.scale(&rhs)
    }
}

impl Mul<&Polynomial> for &Multivector {
    type Output = Multivector;
    fn mul(self, rhs: &Polynomial) -> Multivector {
        self.scale(rhs)
    }
}

impl Mul<Multivector> for Polynomial {
    type Output = Multivector;
    fn mul(self, rhs: Multivector) -> Multivector {
        rhs.scale(&self)
    }
}

impl Mul<Coefficient> for Multivector {
    type Output = Multivector;
    fn mul(self, rhs: Coefficient) -> Multivector {
        self.scale(&Polynomial::from_coefficient(rhs))
    }
}

impl Mul<Coefficient> for &Multivector {
    type Output = Multivector;
    fn mul(self, rhs: Coefficient) -> Multivector {
        self.scale(&Polynomial::from_coefficient(rhs))
    }
}

impl Add<Polynomial> for Multivector {
    type Output = Multivector;
    fn add(self, rhs: Polynomial) -> Multivector {
        &self + &Multivector::scalar(rhs)
    }
}

impl From<Polynomial> for Multivector {
    fn from(value: Polynomial) -> Self {
        Multivector::scalar(value)
    }
}
