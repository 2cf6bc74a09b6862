//! Algorithms over type expressions.
//!
//! - [`instantiate`]: substitute type arguments into a generic template
//! - [`Canonicalizer`]: reduce an expression to its [`CanonicalKey`](crate::CanonicalKey)

mod canonicalize;
mod instantiate;

pub use canonicalize::Canonicalizer;
pub use instantiate::instantiate;
