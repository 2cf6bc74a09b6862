//! thiol - structural type identities for shader interface declarations
//!
//! # Overview
//!
//! A thiol file declares record types, aliases, generic templates and tagged
//! vector types. Every declaration is reduced to its canonical structural
//! shape and interned, so that two declarations with the same shape share an
//! [`Identity`] no matter how they were spelled.
//!
//! # Quick Start
//!
//! ```
//! let source = "
//!     type Option<T> = record is_some: bool; value: T end
//!     type A = record end
//!     type B = A
//!     type C = Option<B>
//! ";
//!
//! let checked = thiol::check(source, Default::default()).unwrap();
//! assert_eq!(checked.dump(), "\
//! A = (0) record end
//! B = (0) record end
//! C = (2) record
//!     is_some : (1) bool
//!     value : (0) record end
//! end
//! ");
//! ```
//!
//! Errors carry the source span of the offending declaration and can be
//! rendered with [`render_error`] or [`render_error_to`].

mod dump;
mod error;
pub mod error_renderer;

pub use dump::{Dump, dump};
pub use error::Error;
pub use error_renderer::{RenderConfig, render_error, render_error_to};

// Re-export the building blocks.
pub use thiol_syntax::{ParseError, ParsedFile, Span, parse};
pub use thiol_types::{
    CanonicalKey, Declarations, Identity, Name, ResolveError, ResolveOptions,
    ResolveOptionsOverride, ResolvedDeclaration, Resolver, SharedTypeContext, TypeContext,
    TypeError, TypeExpr, TypeTemplate, resolve_declarations,
};

/// A successfully resolved source file.
#[derive(Debug, Clone)]
pub struct Checked {
    /// Non-generic declarations in source order.
    pub declarations: Vec<ResolvedDeclaration>,
    pub context: TypeContext,
}

impl Checked {
    /// The type context dump, one entry per declaration.
    pub fn dump(&self) -> String {
        dump(&self.declarations, &self.context)
    }
}

/// Parse `source` and resolve every declaration in a fresh context.
pub fn check(source: &str, options: ResolveOptions) -> Result<Checked, Error> {
    let parsed = parse(source)?;

    let mut context = TypeContext::new();
    let declarations =
        resolve_declarations(&parsed.decls, &mut context, options).map_err(|error| {
            let span = parsed.span_of(&error.declaration);
            Error::Resolve { error, span }
        })?;

    tracing::debug!(
        declarations = declarations.len(),
        identities = context.len(),
        "checked source"
    );
    Ok(Checked {
        declarations,
        context,
    })
}
