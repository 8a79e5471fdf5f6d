// src/blade/mod.rs

//! Blade canonicalization.
//!
//! A blade label is a sequence of axes drawn from a `Metric`'s ordered
//! alphabet. Canonicalizing it sorts the axes into alphabet order, counting
//! one sign flip per transposition, then contracts repeated axes through the
//! metric: each contracted pair of a negative-square axis flips the sign once
//! more. The result has every axis at most once, in order.
//!
//! Both the symbolic engine (`Metric::cga3`) and the kernel generator
//! (`Metric::conformal`) go through the same routine.

use std::fmt;
use std::ops::{Mul, Neg};

use num_rational::Rational64;
use once_cell::sync::Lazy;

use crate::error::{AlgebraError, Result};

/// Index of a basis vector within its metric's alphabet.
pub type Axis = u8;

/// Axes of the symbolic engine's `- + x y z` metric.
pub const E_MINUS: Axis = 0;
pub const E_PLUS: Axis = 1;
pub const E_X: Axis = 2;
pub const E_Y: Axis = 3;
pub const E_Z: Axis = 4;

/// Sign of a canonicalized product, or of an axis's square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Negative iff `count` is odd.
    pub fn from_parity(count: usize) -> Self {
        if count % 2 == 0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    pub fn to_i64(self) -> i64 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }

    pub fn to_coefficient(self) -> Rational64 {
        Rational64::from_integer(self.to_i64())
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        self * Sign::Negative
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Positive => f.write_str("+"),
            Sign::Negative => f.write_str("-"),
        }
    }
}

/// Result of the alphabet walk before validation.
struct Reordered {
    canonical: Vec<Axis>,
    sign: Sign,
    /// Axes the walk never reached (out-of-alphabet indices).
    unconsumed: Vec<Axis>,
}

/// Ordered axis alphabet with the square of each axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    symbols: Vec<char>,
    squares: Vec<Sign>,
}

static CGA3: Lazy<Metric> = Lazy::new(|| Metric {
    symbols: vec!['-', '+', 'x', 'y', 'z'],
    squares: vec![
        Sign::Negative,
        Sign::Positive,
        Sign::Positive,
        Sign::Positive,
        Sign::Positive,
    ],
});

impl Metric {
    /// Builds a metric from `(symbol, square)` pairs in alphabet order.
    pub fn new<I>(axes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, Sign)>,
    {
        let (symbols, squares): (Vec<char>, Vec<Sign>) = axes.into_iter().unzip();
        if symbols.len() > Axis::MAX as usize {
            return Err(AlgebraError::InvalidConfig(format!(
                "{} axes exceed the supported maximum",
                symbols.len()
            )));
        }
        for (i, c) in symbols.iter().enumerate() {
            if symbols[..i].contains(c) {
                return Err(AlgebraError::InvalidConfig(format!(
                    "axis symbol '{}' appears twice",
                    c
                )));
            }
        }
        Ok(Metric { symbols, squares })
    }

    /// The symbolic engine's metric: `- + x y z`, where `-` squares to -1.
    pub fn cga3() -> &'static Metric {
        &CGA3
    }

    /// Every symbol squares to +1 except `negative`, which squares to -1.
    pub fn conformal(symbols: &str, negative: char) -> Result<Self> {
        if !symbols.contains(negative) {
            return Err(AlgebraError::InvalidConfig(format!(
                "negative-square axis '{}' is not in alphabet \"{}\"",
                negative, symbols
            )));
        }
        Metric::new(symbols.chars().map(|c| {
            let square = if c == negative {
                Sign::Negative
            } else {
                Sign::Positive
            };
            (c, square)
        }))
    }

    /// Number of axes.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Symbol of `axis`, or `?` when out of range.
    pub fn symbol(&self, axis: Axis) -> char {
        self.symbols.get(axis as usize).copied().unwrap_or('?')
    }

    /// What `axis` squares to. Out-of-range axes are treated as positive.
    pub fn square(&self, axis: Axis) -> Sign {
        self.squares
            .get(axis as usize)
            .copied()
            .unwrap_or(Sign::Positive)
    }

    pub fn axis_of(&self, symbol: char) -> Option<Axis> {
        self.symbols
            .iter()
            .position(|&c| c == symbol)
            .map(|i| i as Axis)
    }

    /// Every axis once, in order.
    pub fn pseudoscalar(&self) -> Vec<Axis> {
        (0..self.len() as Axis).collect()
    }

    /// Parses a label string into axes without reordering it.
    pub fn parse(&self, label: &str) -> Result<Vec<Axis>> {
        label
            .chars()
            .map(|c| {
                self.axis_of(c).ok_or_else(|| {
                    AlgebraError::MalformedBlade(format!(
                        "symbol '{}' in \"{}\" is not one of \"{}\"",
                        c,
                        label,
                        self.symbols.iter().collect::<String>()
                    ))
                })
            })
            .collect()
    }

    /// Spells axes with this metric's symbols.
    pub fn label(&self, axes: &[Axis]) -> String {
        axes.iter().map(|&a| self.symbol(a)).collect()
    }

    /// Sorts `axes` into alphabet order and contracts repeats.
    ///
    /// Returns the canonical label and the accumulated sign. Fails with
    /// `MalformedBlade` if any axis lies outside the alphabet.
    pub fn canonicalize(&self, axes: &[Axis]) -> Result<(Vec<Axis>, Sign)> {
        let reordered = self.reorder(axes);
        if !reordered.unconsumed.is_empty() {
            return Err(AlgebraError::MalformedBlade(format!(
                "axes {:?} are outside a {}-axis alphabet",
                reordered.unconsumed,
                self.len()
            )));
        }
        Ok((reordered.canonical, reordered.sign))
    }

    /// Canonicalizes a label given as a symbol string.
    pub fn canonicalize_label(&self, label: &str) -> Result<(String, Sign)> {
        let axes = self.parse(label)?;
        let (canonical, sign) = self.canonicalize(&axes)?;
        Ok((self.label(&canonical), sign))
    }

    /// Canonicalizes axes already known to lie inside the alphabet, such as
    /// concatenations of stored canonical labels.
    pub(crate) fn canonicalize_known(&self, axes: &[Axis]) -> (Vec<Axis>, Sign) {
        let reordered = self.reorder(axes);
        debug_assert!(
            reordered.unconsumed.is_empty(),
            "axes {:?} outside the alphabet",
            reordered.unconsumed
        );
        (reordered.canonical, reordered.sign)
    }

    fn reorder(&self, axes: &[Axis]) -> Reordered {
        let mut remaining = axes.to_vec();
        let mut placed = Vec::with_capacity(axes.len());
        let mut swaps = 0usize;

        // Bubble every occurrence of each axis to the front, one at a time.
        // Its index in what remains is the number of transpositions.
        for axis in 0..self.len() as Axis {
            while let Some(index) = remaining.iter().position(|&a| a == axis) {
                swaps += index;
                remaining.remove(index);
                placed.push(axis);
            }
        }

        // Runs of one axis reduce by pairs until 0 or 1 remain.
        let mut canonical = Vec::with_capacity(placed.len());
        let mut start = 0;
        while start < placed.len() {
            let axis = placed[start];
            let run = placed[start..].iter().take_while(|&&a| a == axis).count();
            if self.square(axis).is_negative() {
                swaps += run / 2;
            }
            if run % 2 == 1 {
                canonical.push(axis);
            }
            start += run;
        }

        Reordered {
            canonical,
            sign: Sign::from_parity(swaps),
            unconsumed: remaining,
        }
    }
}

/// All `k`-element subsets of `items`, in lexicographic index order.
pub fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    fn extend<T: Copy>(
        items: &[T],
        k: usize,
        start: usize,
        current: &mut Vec<T>,
        out: &mut Vec<Vec<T>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..items.len() {
            current.push(items[i]);
            extend(items, k, i + 1, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    if k <= items.len() {
        extend(items, k, 0, &mut Vec::with_capacity(k), &mut out);
    }
    out
}

/// Every subset of `items`: the empty set, then singletons, then pairs, and
/// so on, each size in lexicographic order.
pub fn powerset<T: Copy>(items: &[T]) -> Vec<Vec<T>> {
    (0..=items.len())
        .flat_map(|k| combinations(items, k))
        .collect()
}
