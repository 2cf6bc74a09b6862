//! Session-level resolution: expressions and declarations to identities.

use crate::algo::Canonicalizer;
use crate::context::TypeContext;
use crate::core::{CanonicalKey, Identity, Name, TypeExpr};
use crate::decls::Declarations;
use crate::error::{ResolveError, TypeError};
use crate::options::ResolveOptions;

/// A top-level declaration together with its identity and canonical shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDeclaration {
    pub name: Name,
    pub identity: Identity,
    pub key: CanonicalKey,
}

/// Resolves type expressions against one declaration table into one
/// [`TypeContext`].
///
/// The resolver keeps the instantiation memo for its lifetime, so reusing
/// one resolver for a whole session avoids re-expanding generic types.
#[derive(Debug)]
pub struct Resolver<'d, 'c> {
    canon: Canonicalizer<'d>,
    ctx: &'c mut TypeContext,
}

impl<'d, 'c> Resolver<'d, 'c> {
    pub fn new(decls: &'d Declarations, ctx: &'c mut TypeContext, options: ResolveOptions) -> Self {
        Self {
            canon: Canonicalizer::new(decls, options),
            ctx,
        }
    }

    /// Canonicalize `expr` and intern the result.
    pub fn resolve(&mut self, expr: &TypeExpr) -> Result<Identity, TypeError> {
        self.resolve_key(expr).map(|(id, _)| id)
    }

    /// Like [`Resolver::resolve`], also returning the canonical key.
    pub fn resolve_key(&mut self, expr: &TypeExpr) -> Result<(Identity, CanonicalKey), TypeError> {
        let key = self.canon.canonicalize(expr)?;
        let id = self.ctx.intern(&key);
        Ok((id, key))
    }

    pub fn context(&self) -> &TypeContext {
        &*self.ctx
    }
}

/// Resolve every non-generic declaration of `decls` in source order.
///
/// Generic templates are validated but only resolved through their uses.
/// The first error aborts the whole session; no partial result is returned.
pub fn resolve_declarations(
    decls: &Declarations,
    ctx: &mut TypeContext,
    options: ResolveOptions,
) -> Result<Vec<ResolvedDeclaration>, ResolveError> {
    decls.validate()?;

    let mut resolver = Resolver::new(decls, ctx, options);
    let mut resolved = Vec::with_capacity(decls.len());

    for template in decls.iter().filter(|template| !template.is_generic()) {
        let _span = tracing::debug_span!("resolve", name = %template.name).entered();

        // Resolving through a reference puts the declaration itself under
        // cycle detection.
        let reference = TypeExpr::GenericRef(template.name.clone(), Vec::new());
        let (identity, key) = resolver
            .resolve_key(&reference)
            .map_err(|error| ResolveError::new(template.name.clone(), error))?;

        tracing::debug!(%identity, "resolved");
        resolved.push(ResolvedDeclaration {
            name: template.name.clone(),
            identity,
            key,
        });
    }

    Ok(resolved)
}
