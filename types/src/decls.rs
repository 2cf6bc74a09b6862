//! The declaration table.

use hashbrown::{HashMap, HashSet};

use crate::core::traversal::{Visit, walk_expr};
use crate::core::{Name, TypeExpr, TypeTemplate};
use crate::error::{ResolveError, TypeError};

/// All top-level declarations of a session, in source order.
///
/// Declarations are immutable once inserted.
#[derive(Debug, Default, Clone)]
pub struct Declarations {
    templates: Vec<TypeTemplate>,
    by_name: HashMap<Name, usize>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `templates` and validate every reference in it.
    pub fn from_templates(
        templates: impl IntoIterator<Item = TypeTemplate>,
    ) -> Result<Self, ResolveError> {
        let mut decls = Self::new();
        for template in templates {
            decls.insert(template)?;
        }
        decls.validate()?;
        Ok(decls)
    }

    /// Add a declaration after checking it for duplicate names, parameters
    /// and fields.
    ///
    /// References to other declarations are not checked here since they may
    /// be declared later; see [`Declarations::validate`].
    pub fn insert(&mut self, template: TypeTemplate) -> Result<(), ResolveError> {
        let fail = |error| Err(ResolveError::new(template.name.clone(), error));

        if self.by_name.contains_key(&template.name) {
            return fail(TypeError::DuplicateDeclaration {
                name: template.name.clone(),
            });
        }

        if let Some(param) = first_duplicate(&template.params) {
            return fail(TypeError::DuplicateParameter { param });
        }

        if let Err(error) = walk_expr(&template.body, &mut FieldChecker) {
            return fail(error);
        }

        self.by_name
            .insert(template.name.clone(), self.templates.len());
        self.templates.push(template);
        Ok(())
    }

    /// Check that every reference in every declaration names a declared
    /// template with the right number of arguments, and that parameters are
    /// only used inside their own template.
    ///
    /// Generic templates are checked without being instantiated.
    pub fn validate(&self) -> Result<(), ResolveError> {
        for template in &self.templates {
            let mut checker = RefChecker {
                decls: self,
                params: &template.params,
            };
            walk_expr(&template.body, &mut checker)
                .map_err(|error| ResolveError::new(template.name.clone(), error))?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TypeTemplate> {
        self.by_name
            .get(&Name::from(name))
            .map(|&index| &self.templates[index])
    }

    /// Declarations in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, TypeTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a> IntoIterator for &'a Declarations {
    type Item = &'a TypeTemplate;
    type IntoIter = std::slice::Iter<'a, TypeTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

fn first_duplicate(names: &[Name]) -> Option<Name> {
    let mut seen = HashSet::with_capacity(names.len());
    names.iter().find(|name| !seen.insert(*name)).cloned()
}

struct FieldChecker;

impl Visit for FieldChecker {
    type Error = TypeError;

    fn visit(&mut self, expr: &TypeExpr) -> Result<bool, TypeError> {
        if let TypeExpr::Record(fields) = expr {
            let names: Vec<Name> = fields.iter().map(|(name, _)| name.clone()).collect();
            if let Some(field) = first_duplicate(&names) {
                return Err(TypeError::DuplicateField { field });
            }
        }
        Ok(true)
    }
}

struct RefChecker<'a> {
    decls: &'a Declarations,
    params: &'a [Name],
}

impl Visit for RefChecker<'_> {
    type Error = TypeError;

    fn visit(&mut self, expr: &TypeExpr) -> Result<bool, TypeError> {
        match expr {
            TypeExpr::GenericRef(name, args) if self.params.contains(name) => {
                if !args.is_empty() {
                    return Err(TypeError::HigherKindedParameter { name: name.clone() });
                }
            }
            TypeExpr::GenericRef(name, args) => {
                let template = self
                    .decls
                    .get(name)
                    .ok_or_else(|| TypeError::UnknownTemplate { name: name.clone() })?;
                if template.params.len() != args.len() {
                    return Err(TypeError::ArityMismatch {
                        name: name.clone(),
                        expected: template.params.len(),
                        given: args.len(),
                    });
                }
            }
            TypeExpr::Param(name) if !self.params.contains(name) => {
                return Err(TypeError::UnboundParameter { name: name.clone() });
            }
            _ => {}
        }
        Ok(true)
    }
}
