//! Errors raised while building the declaration table or resolving types.

use thiserror::Error;

use crate::core::Name;

/// A single type-level failure.
///
/// None of these are recovered from: the first one aborts the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("undefined type `{name}`")]
    UnknownTemplate { name: Name },

    #[error("type `{name}` expects {expected} generic argument(s), but {given} were given")]
    ArityMismatch {
        name: Name,
        expected: usize,
        given: usize,
    },

    #[error("type `{name}` contains itself")]
    CyclicType { name: Name },

    #[error("type `{name}` is defined more than once")]
    DuplicateDeclaration { name: Name },

    #[error("generic parameter `{param}` is declared more than once")]
    DuplicateParameter { param: Name },

    #[error("field `{field}` is declared more than once")]
    DuplicateField { field: Name },

    #[error("generic parameter `{name}` cannot take generic arguments")]
    HigherKindedParameter { name: Name },

    #[error("generic parameter `{name}` is not bound")]
    UnboundParameter { name: Name },

    #[error("instantiating `{name}` exceeds the maximum depth of {max_depth}")]
    DepthExceeded { name: Name, max_depth: usize },

    /// Roles and spaces go on primitives, transforms on matrices.
    #[error("`{base}` cannot be tagged with `{tag}`")]
    InvalidTagBase { base: String, tag: String },
}

/// A [`TypeError`] together with the top-level declaration being processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("in type `{declaration}`: {error}")]
pub struct ResolveError {
    pub declaration: Name,
    pub error: TypeError,
}

impl ResolveError {
    pub fn new(declaration: Name, error: TypeError) -> Self {
        Self { declaration, error }
    }
}
