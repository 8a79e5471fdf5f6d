// src/multivector/render.rs

//! Text rendering for multivectors.
//!
//! Terms are listed in powerset order of the alphabet, not in map order.
//! In LaTeX notation the two non-Euclidean axes are rewritten in the
//! conformal basis, using fixed display formulas:
//!
//! - origin `o`:          `c[- a] - c[+ a]`
//! - infinity `\infty`:   `(c[- a] + c[+ a]) / 2`
//! - Minkowski plane `E`: `c[- + a]`
//!
//! where `a` ranges over subsets of the Euclidean axes.

use std::fmt;

use num_rational::Rational64;
use num_traits::{One, Signed};

use super::Multivector;
use crate::blade::{powerset, Axis, E_MINUS, E_PLUS};
use crate::notation::Notation;
use crate::polynomial::Polynomial;

/// Conformal relabeling applied in front of a Euclidean subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConformalPart {
    Raw,
    Origin,
    Infinity,
    Plane,
}

const CONFORMAL_PARTS: [ConformalPart; 4] = [
    ConformalPart::Raw,
    ConformalPart::Origin,
    ConformalPart::Infinity,
    ConformalPart::Plane,
];

/// A term ready for joining: its sign is pulled out so the joiner can
/// choose between `+` and `-`.
struct RenderedTerm {
    negative: bool,
    body: String,
}

impl Multivector {
    /// Renders in the given notation. The zero multivector renders as `0`.
    pub fn render(&self, notation: Notation) -> String {
        let terms = match notation {
            Notation::Ganja => self.ganja_terms(),
            Notation::Latex => self.latex_terms(),
        };
        if terms.is_empty() {
            return "0".to_string();
        }

        let (first_prefix, plus, minus) = match notation {
            Notation::Ganja => ("", " + ", " - "),
            Notation::Latex => ("&= ", "\\\\\n&+ ", "\\\\\n&- "),
        };
        let mut out = String::from(first_prefix);
        for (i, term) in terms.into_iter().enumerate() {
            match (i, term.negative) {
                (0, true) => out.push('-'),
                (0, false) => {}
                (_, true) => out.push_str(minus),
                (_, false) => out.push_str(plus),
            }
            out.push_str(&term.body);
        }
        out
    }

    fn ganja_terms(&self) -> Vec<RenderedTerm> {
        let metric = Self::metric();
        powerset(&metric.pseudoscalar())
            .into_iter()
            .filter_map(|axes| {
                let name = axes
                    .iter()
                    .map(|&a| ganja_axis_name(metric.symbol(a), a))
                    .collect::<Vec<_>>()
                    .join("*");
                render_term(&self.coefficient_of(&axes), &name, Notation::Ganja)
            })
            .collect()
    }

    fn latex_terms(&self) -> Vec<RenderedTerm> {
        let metric = Self::metric();
        let euclidean: Vec<Axis> = metric.pseudoscalar().into_iter().skip(2).collect();
        let mut terms = Vec::new();
        for subset in powerset(&euclidean) {
            let tail = metric.label(&subset);
            for part in CONFORMAL_PARTS {
                let coef = self.conformal_coefficient(part, &subset);
                let name = match part {
                    ConformalPart::Raw => tail.clone(),
                    ConformalPart::Origin => format!("o{}", tail),
                    ConformalPart::Infinity if tail.is_empty() => "\\infty".to_string(),
                    ConformalPart::Infinity => format!("\\infty {}", tail),
                    ConformalPart::Plane => format!("E{}", tail),
                };
                terms.extend(render_term(&coef, &name, Notation::Latex));
            }
        }
        terms
    }

    fn conformal_coefficient(&self, part: ConformalPart, euclidean: &[Axis]) -> Polynomial {
        let with = |prefix: &[Axis]| {
            let mut axes = prefix.to_vec();
            axes.extend_from_slice(euclidean);
            self.coefficient_of(&axes)
        };
        match part {
            ConformalPart::Raw => with(&[]),
            ConformalPart::Origin => with(&[E_MINUS]) - with(&[E_PLUS]),
            ConformalPart::Infinity => {
                (with(&[E_MINUS]) + with(&[E_PLUS])).scale(Rational64::new(1, 2))
            }
            ConformalPart::Plane => with(&[E_MINUS, E_PLUS]),
        }
    }
}

impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Notation::Ganja))
    }
}

/// ganja.js spelling: `eminus`, `eplus`, then `1e1`, `1e2`, ... for the
/// Euclidean axes.
fn ganja_axis_name(symbol: char, axis: Axis) -> String {
    match symbol {
        '-' => "eminus".to_string(),
        '+' => "eplus".to_string(),
        _ => format!("1e{}", axis - 1),
    }
}

fn render_term(coef: &Polynomial, blade: &str, notation: Notation) -> Option<RenderedTerm> {
    if coef.is_zero() {
        return None;
    }
    if coef.len() > 1 {
        let body = if blade.is_empty() {
            format!("({})", coef.render(notation))
        } else {
            format!(
                "({}){}{}",
                coef.render(notation),
                notation.product_separator(),
                blade
            )
        };
        return Some(RenderedTerm {
            negative: false,
            body,
        });
    }

    // Single term: pull the sign out so the joiner can use ` - `.
    let negative = coef.terms().any(|(_, c)| c.is_negative());
    let magnitude = if negative { -coef } else { coef.clone() };
    let body = if blade.is_empty() {
        magnitude.render(notation)
    } else if magnitude.eq_scalar(Rational64::one()) {
        blade.to_string()
    } else {
        format!(
            "{}{}{}",
            magnitude.render(notation),
            notation.product_separator(),
            blade
        )
    };
    Some(RenderedTerm { negative, body })
}
