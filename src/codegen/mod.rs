// src/codegen/mod.rs

//! Blade-multiplication kernel generator.
//!
//! For `dimensions` spatial axes plus two conformal axes, enumerates every
//! basis blade by grade and derives, for each pair of grades, the outer
//! product and left contraction as flat lists of signed coefficient
//! products. `emit` turns those lists into a Rust module: one record per
//! grade and one function per kernel.
//!
//! The generator reuses `Metric::canonicalize`, so its kernels agree term
//! for term with the symbolic engine's `^` and `<<` restricted to basis
//! blades.

mod emit;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::blade::{combinations, Axis, Metric, Sign};
use crate::error::{AlgebraError, Result};

pub use emit::field_name;

/// Settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of Euclidean axes. Two conformal axes are added on top.
    pub dimensions: usize,
    /// Axis alphabet in canonical order. The first two symbols are the
    /// conformal axes; only the first `dimensions + 2` symbols are used.
    pub symbols: String,
    /// Which of the two conformal axes squares to -1.
    pub negative_axis: char,
    /// Scalar type of every record field.
    pub scalar_type: String,
    /// Record names are this prefix followed by the grade.
    pub record_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            dimensions: 3,
            symbols: "mpxyzwvutsrq".to_string(),
            negative_axis: 'm',
            scalar_type: "f64".to_string(),
            record_prefix: "Grade".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Checks the settings and builds the metric they describe.
    pub fn metric(&self) -> Result<Metric> {
        if self.dimensions == 0 {
            return Err(AlgebraError::InvalidConfig(
                "at least one spatial dimension is required".to_string(),
            ));
        }
        let available = self.symbols.chars().count();
        let needed = match self.dimensions.checked_add(2) {
            Some(needed) if needed <= available => needed,
            _ => {
                return Err(AlgebraError::InvalidConfig(format!(
                    "{} dimensions need more axis symbols than the {} in \"{}\"",
                    self.dimensions, available, self.symbols
                )));
            }
        };
        let symbols: String = self.symbols.chars().take(needed).collect();
        if let Some(bad) = symbols.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(AlgebraError::InvalidConfig(format!(
                "axis symbol '{}' is not an ASCII lowercase letter",
                bad
            )));
        }
        if !symbols.chars().take(2).any(|c| c == self.negative_axis) {
            return Err(AlgebraError::InvalidConfig(format!(
                "negative axis '{}' must be one of the two conformal axes \"{}\"",
                self.negative_axis,
                symbols.chars().take(2).collect::<String>()
            )));
        }
        if self.scalar_type.trim().is_empty() || self.record_prefix.trim().is_empty() {
            return Err(AlgebraError::InvalidConfig(
                "scalar type and record prefix must be nonempty".to_string(),
            ));
        }
        Metric::conformal(&symbols, self.negative_axis)
    }
}

/// Every basis blade, grouped by grade, each grade in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasisEnumeration {
    grades: Vec<Vec<Vec<Axis>>>,
}

impl BasisEnumeration {
    pub fn new(metric: &Metric) -> Self {
        let axes = metric.pseudoscalar();
        BasisEnumeration {
            grades: (0..=axes.len()).map(|g| combinations(&axes, g)).collect(),
        }
    }

    /// Highest grade (the pseudoscalar's).
    pub fn max_grade(&self) -> usize {
        self.grades.len() - 1
    }

    /// Blades of `grade`; empty past the pseudoscalar.
    pub fn grade(&self, grade: usize) -> &[Vec<Axis>] {
        self.grades.get(grade).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Position of a canonical blade within its grade.
    pub fn index_of(&self, blade: &[Axis]) -> Option<usize> {
        self.grade(blade.len()).iter().position(|b| b == blade)
    }
}

/// Which graded product a kernel computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelOp {
    /// Outer product; result grade is the sum.
    Wedge,
    /// Left contraction; result grade is `rhs - lhs`.
    LeftContraction,
}

impl KernelOp {
    pub const ALL: [KernelOp; 2] = [KernelOp::Wedge, KernelOp::LeftContraction];

    /// Function-name stem of the emitted kernel.
    pub fn name(self) -> &'static str {
        match self {
            KernelOp::Wedge => "wedge",
            KernelOp::LeftContraction => "left_contract",
        }
    }

    /// Result grade, or `None` if it is negative.
    pub fn target_grade(self, lhs: usize, rhs: usize) -> Option<usize> {
        match self {
            KernelOp::Wedge => Some(lhs + rhs),
            KernelOp::LeftContraction => rhs.checked_sub(lhs),
        }
    }
}

/// One accumulation step: `out += sign * lhs * rhs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelTerm {
    pub sign: Sign,
    pub lhs: Vec<Axis>,
    pub rhs: Vec<Axis>,
    pub out: Vec<Axis>,
}

/// A graded product between two homogeneous records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    pub op: KernelOp,
    pub lhs_grade: usize,
    pub rhs_grade: usize,
    pub out_grade: usize,
    pub terms: Vec<KernelTerm>,
}

impl Kernel {
    /// Emitted function name, e.g. `wedge_1_2`.
    pub fn function_name(&self) -> String {
        format!("{}_{}_{}", self.op.name(), self.lhs_grade, self.rhs_grade)
    }
}

/// Batch generator for one configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    metric: Metric,
    basis: BasisEnumeration,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let metric = config.metric()?;
        let basis = BasisEnumeration::new(&metric);
        debug!(
            "Generator for {} dimensions over \"{}\" ({} negative), max grade {}",
            config.dimensions,
            metric.symbols().iter().collect::<String>(),
            config.negative_axis,
            basis.max_grade()
        );
        Ok(Generator {
            config,
            metric,
            basis,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn metric(&self) -> &Metric {
        &self.metric
    }

    pub fn basis(&self) -> &BasisEnumeration {
        &self.basis
    }

    pub fn max_grade(&self) -> usize {
        self.basis.max_grade()
    }

    /// Derives one kernel. Returns `None` when the target grade is not
    /// positive or exceeds the pseudoscalar's, since there is nothing to
    /// generate.
    pub fn kernel(
        &self,
        op: KernelOp,
        lhs_grade: usize,
        rhs_grade: usize,
    ) -> Result<Option<Kernel>> {
        let out_grade = match op.target_grade(lhs_grade, rhs_grade) {
            Some(g) if g > 0 && g <= self.max_grade() => g,
            other => {
                debug!(
                    "Skipping {}_{}_{}: target grade {:?} has no blades to fill",
                    op.name(),
                    lhs_grade,
                    rhs_grade,
                    other
                );
                return Ok(None);
            }
        };

        let mut terms = Vec::new();
        for lhs in self.basis.grade(lhs_grade) {
            for rhs in self.basis.grade(rhs_grade) {
                let mut axes = Vec::with_capacity(lhs.len() + rhs.len());
                axes.extend_from_slice(lhs);
                axes.extend_from_slice(rhs);
                let (out, sign) = self.metric.canonicalize(&axes)?;
                if out.len() != out_grade {
                    continue;
                }
                trace!(
                    "{}: {} {} -> {}{}",
                    op.name(),
                    self.metric.label(lhs),
                    self.metric.label(rhs),
                    sign,
                    self.metric.label(&out)
                );
                terms.push(KernelTerm {
                    sign,
                    lhs: lhs.clone(),
                    rhs: rhs.clone(),
                    out,
                });
            }
        }

        debug!(
            "{}_{}_{}: {} terms into grade {}",
            op.name(),
            lhs_grade,
            rhs_grade,
            terms.len(),
            out_grade
        );
        Ok(Some(Kernel {
            op,
            lhs_grade,
            rhs_grade,
            out_grade,
            terms,
        }))
    }

    /// Every kernel for grades `1..=max` on both sides, outer product before
    /// left contraction for each pair.
    pub fn kernels(&self) -> Result<Vec<Kernel>> {
        let mut kernels = Vec::new();
        for lhs_grade in 1..=self.max_grade() {
            for rhs_grade in 1..=self.max_grade() {
                for op in KernelOp::ALL {
                    if let Some(kernel) = self.kernel(op, lhs_grade, rhs_grade)? {
                        kernels.push(kernel);
                    }
                }
            }
        }
        Ok(kernels)
    }

    /// Renders the full module: records for every grade, then every kernel.
    pub fn emit(&self) -> Result<String> {
        let kernels = self.kernels()?;
        Ok(emit::emit_module(self, &kernels))
    }
}

#[cfg(test)]
mod tests;
