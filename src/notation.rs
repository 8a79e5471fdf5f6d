// src/notation.rs

//! Text notations for rendering polynomials and multivectors.
//!
//! The rendered text is an observable contract: golden tests assert against
//! it literally, so any change here is a breaking change.

/// Selects how `Polynomial::render` and `Multivector::render` spell their
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    /// Plain text that pastes into ganja.js: `a**2 * b`, blades spelled
    /// `eminus*eplus*1e1` over the raw basis.
    #[default]
    Ganja,
    /// LaTeX `align` body over the conformal basis: origin `o`, infinity
    /// `\infty` and the Minkowski plane `E` replace the raw `e-`/`e+` terms.
    Latex,
}

impl Notation {
    /// Separator between a coefficient and what it multiplies.
    pub(crate) fn product_separator(self) -> &'static str {
        match self {
            Notation::Ganja => " * ",
            Notation::Latex => " ",
        }
    }
}
