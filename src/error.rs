use thiol_syntax::{ParseError, Span};
use thiol_types::{ResolveError, TypeError};

/// Any failure while checking a source file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{error}")]
    Resolve {
        error: ResolveError,
        span: Option<Span>,
    },
}

impl Error {
    /// Source span to point at, if the error can be located.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Parse(e) => Some(e.span()),
            Error::Resolve { span, .. } => *span,
        }
    }

    /// The type-level failure, if this is not a syntax error.
    pub fn type_error(&self) -> Option<&TypeError> {
        match self {
            Error::Parse(ParseError::Declaration { error, .. }) | Error::Resolve { error, .. } => {
                Some(&error.error)
            }
            Error::Parse(ParseError::Syntax { .. }) => None,
        }
    }

    /// Short stable code shown in rendered diagnostics.
    pub fn code(&self) -> &'static str {
        let Some(error) = self.type_error() else {
            return "P001";
        };
        match error {
            TypeError::UnknownTemplate { .. } => "T001",
            TypeError::ArityMismatch { .. } => "T002",
            TypeError::CyclicType { .. } => "T003",
            TypeError::DuplicateDeclaration { .. } => "T004",
            TypeError::DuplicateParameter { .. } => "T005",
            TypeError::DuplicateField { .. } => "T006",
            TypeError::HigherKindedParameter { .. } => "T007",
            TypeError::UnboundParameter { .. } => "T008",
            TypeError::DepthExceeded { .. } => "T009",
            TypeError::InvalidTagBase { .. } => "T010",
        }
    }
}

impl From<ResolveError> for Error {
    fn from(error: ResolveError) -> Self {
        Error::Resolve { error, span: None }
    }
}
