//! Type canonicalization and interning for thiol.
//!
//! Declarations are turned into [`CanonicalKey`]s (aliases looked through,
//! generic templates instantiated) and interned into a [`TypeContext`], which
//! assigns every distinct shape a small integer [`Identity`].
//!
//! # Example
//!
//! ```
//! use thiol_types::{Declarations, ResolveOptions, TypeContext, TypeExpr, TypeTemplate};
//!
//! let decls = Declarations::from_templates([
//!     TypeTemplate::new("A", TypeExpr::EmptyRecord),
//!     TypeTemplate::new("B", TypeExpr::alias(TypeExpr::named("A"))),
//! ])
//! .unwrap();
//!
//! let mut ctx = TypeContext::new();
//! let resolved = thiol_types::resolve_declarations(&decls, &mut ctx, ResolveOptions::default())
//!     .unwrap();
//!
//! assert_eq!(resolved[0].identity, resolved[1].identity);
//! ```

pub mod algo;
pub mod core;

mod context;
mod decls;
mod error;
mod options;
mod resolve;

pub use crate::core::{
    CanonicalKey, Identity, Name, TypeExpr, TypeTemplate, is_matrix_name, is_primitive_name,
};
pub use context::{SharedTypeContext, TypeContext};
pub use decls::Declarations;
pub use error::{ResolveError, TypeError};
pub use options::{ResolveOptions, ResolveOptionsOverride};
pub use resolve::{ResolvedDeclaration, Resolver, resolve_declarations};
