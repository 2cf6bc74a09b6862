use pest::error::InputLocation;
use thiserror::Error;
use thiol_types::ResolveError;

use crate::parser::Rule;

/// Byte range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(span: pest::Span<'_>) -> Self {
        Self::new(span.start(), span.end())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The source does not match the grammar.
    #[error("{message}")]
    Syntax { message: String, span: Span },

    /// A declaration is well-formed but conflicts with the rest of the file.
    #[error("{error}")]
    Declaration { error: ResolveError, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Syntax { span, .. } | ParseError::Declaration { span, .. } => *span,
        }
    }
}

pub(crate) fn convert_pest_error(error: pest::error::Error<Rule>) -> ParseError {
    let error = error.renamed_rules(|rule| {
        let name = match rule {
            Rule::EOI => "end of input",
            Rule::ident => "identifier",
            Rule::declaration => "`type` declaration",
            Rule::params => "generic parameters",
            Rule::args => "generic arguments",
            Rule::type_expr | Rule::tagged | Rule::named => "type",
            Rule::record | Rule::record_kw => "record",
            Rule::field => "field",
            Rule::tag => "`is` tag",
            Rule::transform => "`from` transform",
            Rule::dim => "array dimension",
            Rule::size => "array size",
            Rule::file => "file",
            other => return format!("{other:?}"),
        };
        name.to_string()
    });

    let span = match error.location {
        InputLocation::Pos(pos) => Span::new(pos, pos),
        InputLocation::Span((start, end)) => Span::new(start, end),
    };

    ParseError::Syntax {
        message: error.variant.message().into_owned(),
        span,
    }
}
