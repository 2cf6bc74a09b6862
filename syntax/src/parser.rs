use hashbrown::HashMap;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest_derive::Parser;
use thiol_types::{Declarations, Name, TypeExpr, TypeTemplate, is_primitive_name};

use crate::error::{ParseError, Span, convert_pest_error};

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct DeclarationParser;

/// A parsed source file.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub decls: Declarations,
    spans: HashMap<Name, Span>,
}

impl ParsedFile {
    /// Source span of the declaration called `name`.
    pub fn span_of(&self, name: &Name) -> Option<Span> {
        self.spans.get(name).copied()
    }
}

/// Parse `source` into a declaration table.
///
/// Duplicate declarations, parameters and fields are rejected here;
/// references between declarations are checked when they are resolved.
pub fn parse(source: &str) -> Result<ParsedFile, ParseError> {
    let mut pairs = DeclarationParser::parse(Rule::file, source).map_err(|e| {
        tracing::debug!("Pest parser failed with: {:?}", e);
        convert_pest_error(e)
    })?;
    let file = next_pair(&mut pairs, Span::new(0, source.len()))?;

    let mut decls = Declarations::new();
    let mut spans = HashMap::new();

    for pair in file.into_inner() {
        if pair.as_rule() != Rule::declaration {
            continue;
        }
        let span = Span::from(pair.as_span());
        let template = lower_declaration(pair)?;
        spans.insert(template.name.clone(), span);
        decls
            .insert(template)
            .map_err(|error| ParseError::Declaration { error, span })?;
    }

    tracing::debug!(count = decls.len(), "parsed declarations");
    Ok(ParsedFile { decls, spans })
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, span: Span) -> Result<Pair<'i, Rule>, ParseError> {
    pairs.next().ok_or_else(|| ParseError::Syntax {
        message: "missing expected pair in rule".into(),
        span,
    })
}

fn unexpected(pair: &Pair<Rule>) -> ParseError {
    ParseError::Syntax {
        message: format!("Unhandled rule: {:?}", pair.as_rule()),
        span: Span::from(pair.as_span()),
    }
}

fn lower_declaration(pair: Pair<Rule>) -> Result<TypeTemplate, ParseError> {
    let span = Span::from(pair.as_span());
    let mut inner = pair.into_inner();
    let name = Name::from(next_pair(&mut inner, span)?.as_str());

    let mut params = Vec::new();
    let mut rhs = next_pair(&mut inner, span)?;
    if rhs.as_rule() == Rule::params {
        params = rhs.into_inner().map(|p| Name::from(p.as_str())).collect();
        rhs = next_pair(&mut inner, span)?;
    }

    let body = match lower_type_expr(rhs, &params)? {
        body @ (TypeExpr::Record(_) | TypeExpr::EmptyRecord) => body,
        other => TypeExpr::alias(other),
    };

    Ok(TypeTemplate { name, params, body })
}

fn lower_type_expr(pair: Pair<Rule>, params: &[Name]) -> Result<TypeExpr, ParseError> {
    let span = Span::from(pair.as_span());
    let mut inner = pair.into_inner();
    let first = next_pair(&mut inner, span)?;
    let mut expr = match first.as_rule() {
        Rule::record => lower_record(first, params)?,
        Rule::tagged => lower_tagged(first, params)?,
        _ => return Err(unexpected(&first)),
    };

    // `T[2][3]` applies the dimensions left to right.
    for dim in inner {
        expr = match dim.into_inner().next() {
            None => TypeExpr::open_array(expr),
            Some(size) => TypeExpr::array(expr, lower_size(&size)?),
        };
    }
    Ok(expr)
}

fn lower_size(pair: &Pair<Rule>) -> Result<usize, ParseError> {
    let invalid = |message: String| ParseError::Syntax {
        message,
        span: Span::from(pair.as_span()),
    };
    match pair.as_str().parse::<usize>() {
        Ok(0) => Err(invalid("array size must be at least 1".into())),
        Ok(size) => Ok(size),
        Err(_) => Err(invalid(format!("array size `{}` is too large", pair.as_str()))),
    }
}

fn lower_record(pair: Pair<Rule>, params: &[Name]) -> Result<TypeExpr, ParseError> {
    let mut fields = Vec::new();
    for field in pair.into_inner() {
        if field.as_rule() != Rule::field {
            continue;
        }
        let span = Span::from(field.as_span());
        let mut inner = field.into_inner();
        let name = Name::from(next_pair(&mut inner, span)?.as_str());
        let ty = lower_type_expr(next_pair(&mut inner, span)?, params)?;
        fields.push((name, ty));
    }
    if fields.is_empty() {
        Ok(TypeExpr::EmptyRecord)
    } else {
        Ok(TypeExpr::Record(fields))
    }
}

fn lower_tagged(pair: Pair<Rule>, params: &[Name]) -> Result<TypeExpr, ParseError> {
    let span = Span::from(pair.as_span());
    let mut inner = pair.into_inner();
    let base = lower_named(next_pair(&mut inner, span)?, params)?;

    let Some(tag) = inner.next() else {
        return Ok(base);
    };
    let rule = tag.as_rule();
    let mut parts = tag.into_inner();
    let first = next_pair(&mut parts, span)?.as_str();
    let second = next_pair(&mut parts, span)?.as_str();
    match rule {
        Rule::transform => Ok(TypeExpr::transform(base, first, second)),
        _ => Ok(TypeExpr::tagged(base, first, second)),
    }
}

fn lower_named(pair: Pair<Rule>, params: &[Name]) -> Result<TypeExpr, ParseError> {
    let span = Span::from(pair.as_span());
    let mut inner = pair.into_inner();
    let name = Name::from(next_pair(&mut inner, span)?.as_str());

    let args = match inner.next() {
        Some(args) => args
            .into_inner()
            .map(|arg| lower_type_expr(arg, params))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    if args.is_empty() && params.contains(&name) {
        Ok(TypeExpr::Param(name))
    } else if args.is_empty() && is_primitive_name(&name) {
        Ok(TypeExpr::Primitive(name))
    } else {
        Ok(TypeExpr::GenericRef(name, args))
    }
}
