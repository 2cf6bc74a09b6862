//! Core type model.
//!
//! - [`TypeExpr`] and [`TypeTemplate`]: declarations as parsed
//! - [`CanonicalKey`]: alias-free, substitution-free structural form
//! - [`Identity`]: the integer a canonical key is interned to
//!
//! See the [`traversal`] submodule for folding and visiting type expressions.

mod expr;
mod key;
pub mod traversal;

pub use expr::{Name, TypeExpr, TypeTemplate, is_matrix_name, is_primitive_name};
pub use key::{CanonicalKey, Identity};
