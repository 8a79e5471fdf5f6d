// src/polynomial/render.rs

//! Deterministic text rendering for polynomials.

use std::fmt;

use num_traits::{One, Signed};

use super::{Coefficient, Monomial, Polynomial};
use crate::notation::Notation;

impl Polynomial {
    /// Renders as a sum of products in monomial order.
    ///
    /// Exponents are collapsed (`a**3`, `{a}^3`), a coefficient of exactly
    /// 1 or -1 is not written, and terms after the first that are negative
    /// are joined with ` - `. The zero polynomial renders as `0`.
    pub fn render(&self, notation: Notation) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut out = String::new();
        for (i, (monomial, coef)) in self.terms.iter().enumerate() {
            match (i, coef.is_negative()) {
                (0, true) => out.push('-'),
                (0, false) => {}
                (_, true) => out.push_str(" - "),
                (_, false) => out.push_str(" + "),
            }
            out.push_str(&render_term(monomial, coef.abs(), notation));
        }
        out
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Notation::Ganja))
    }
}

/// Renders one term given the magnitude of its coefficient.
fn render_term(monomial: &Monomial, magnitude: Coefficient, notation: Notation) -> String {
    if monomial.is_one() {
        return render_coefficient(magnitude, notation);
    }
    let vars = render_monomial(monomial, notation);
    if magnitude.is_one() {
        vars
    } else {
        format!(
            "{}{}{}",
            render_coefficient(magnitude, notation),
            notation.product_separator(),
            vars
        )
    }
}

fn render_monomial(monomial: &Monomial, notation: Notation) -> String {
    let factors: Vec<String> = monomial
        .powers()
        .into_iter()
        .map(|(var, exp)| match (exp, notation) {
            (1, _) => var.to_string(),
            (_, Notation::Ganja) => format!("{}**{}", var, exp),
            (_, Notation::Latex) => format!("{{{}}}^{}", var, exp),
        })
        .collect();
    factors.join(notation.product_separator())
}

fn render_coefficient(value: Coefficient, notation: Notation) -> String {
    if value.is_integer() {
        return value.numer().to_string();
    }
    match notation {
        Notation::Ganja => value.to_string(),
        Notation::Latex => {
            let sign = if value.is_negative() { "-" } else { "" };
            format!(
                "{}\\frac{{{}}}{{{}}}",
                sign,
                value.numer().abs(),
                value.denom()
            )
        }
    }
}
