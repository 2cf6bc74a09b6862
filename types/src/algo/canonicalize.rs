use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use super::instantiate;
use crate::core::{CanonicalKey, Name, TypeExpr, is_matrix_name};
use crate::decls::Declarations;
use crate::error::TypeError;
use crate::options::ResolveOptions;

/// A declaration applied to canonical arguments.
///
/// Used both as the memo key for finished instantiations and as the
/// in-progress marker for cycle detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Instance {
    name: Name,
    args: SmallVec<[CanonicalKey; 2]>,
}

/// Reduces type expressions to [`CanonicalKey`]s.
///
/// Aliases are looked through, generic references are instantiated on
/// demand and memoized by template and canonical arguments. One
/// canonicalizer is used per session; it never touches the
/// [`TypeContext`](crate::TypeContext).
#[derive(Debug)]
pub struct Canonicalizer<'d> {
    decls: &'d Declarations,
    options: ResolveOptions,
    memo: HashMap<Instance, CanonicalKey>,
    in_progress: HashSet<Instance>,
    depth: usize,
}

impl<'d> Canonicalizer<'d> {
    pub fn new(decls: &'d Declarations, options: ResolveOptions) -> Self {
        Self {
            decls,
            options,
            memo: HashMap::new(),
            in_progress: HashSet::new(),
            depth: 0,
        }
    }

    pub fn canonicalize(&mut self, expr: &TypeExpr) -> Result<CanonicalKey, TypeError> {
        match expr {
            TypeExpr::Primitive(name) => Ok(CanonicalKey::Primitive(name.clone())),
            TypeExpr::EmptyRecord => Ok(CanonicalKey::EmptyRecord),
            TypeExpr::Record(fields) if fields.is_empty() => Ok(CanonicalKey::EmptyRecord),
            TypeExpr::Record(fields) => {
                let mut keys = Vec::with_capacity(fields.len());
                for (name, ty) in fields {
                    keys.push((name.clone(), self.canonicalize(ty)?));
                }
                Ok(CanonicalKey::Record(keys))
            }
            TypeExpr::Alias(target) => self.canonicalize(target),
            TypeExpr::GenericRef(name, args) => self.instance(name, args),
            TypeExpr::Tagged { base, role, space } => {
                let base = self.canonicalize(base)?;
                if !matches!(base, CanonicalKey::Primitive(_)) {
                    return Err(TypeError::InvalidTagBase {
                        base: base.to_string(),
                        tag: format!("is {role} in {space}"),
                    });
                }
                Ok(CanonicalKey::Tagged {
                    base: Box::new(base),
                    role: role.clone(),
                    space: space.clone(),
                })
            }
            TypeExpr::Transform { base, from, to } => {
                let base = self.canonicalize(base)?;
                if !matches!(&base, CanonicalKey::Primitive(name) if is_matrix_name(name)) {
                    return Err(TypeError::InvalidTagBase {
                        base: base.to_string(),
                        tag: format!("from {from} to {to}"),
                    });
                }
                Ok(CanonicalKey::Transform {
                    base: Box::new(base),
                    from: from.clone(),
                    to: to.clone(),
                })
            }
            TypeExpr::Array { base, size } => Ok(CanonicalKey::Array {
                base: Box::new(self.canonicalize(base)?),
                size: *size,
            }),
            TypeExpr::OpenArray(base) => Ok(CanonicalKey::OpenArray(Box::new(
                self.canonicalize(base)?,
            ))),
            TypeExpr::Param(name) => Err(TypeError::UnboundParameter { name: name.clone() }),
        }
    }

    fn instance(&mut self, name: &Name, args: &[TypeExpr]) -> Result<CanonicalKey, TypeError> {
        let arg_keys = args
            .iter()
            .map(|arg| self.canonicalize(arg))
            .collect::<Result<SmallVec<_>, _>>()?;
        let instance = Instance {
            name: name.clone(),
            args: arg_keys,
        };

        if let Some(key) = self.memo.get(&instance) {
            tracing::trace!(%name, "instantiation memo hit");
            return Ok(key.clone());
        }

        if !self.in_progress.insert(instance.clone()) {
            return Err(TypeError::CyclicType { name: name.clone() });
        }

        let result = self.expand(name, args);
        self.in_progress.remove(&instance);

        let key = result?;
        self.memo.insert(instance, key.clone());
        Ok(key)
    }

    fn expand(&mut self, name: &Name, args: &[TypeExpr]) -> Result<CanonicalKey, TypeError> {
        let body = instantiate(self.decls, name, args)?;

        // Plain references range over the finite set of declarations and
        // are cut off by the in-progress markers; only instantiations with
        // arguments can keep producing new instances.
        if args.is_empty() {
            return self.canonicalize(&body);
        }

        if self.depth >= self.options.max_depth {
            return Err(TypeError::DepthExceeded {
                name: name.clone(),
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = self.canonicalize(&body);
        self.depth -= 1;
        result
    }
}
