use hashbrown::HashMap;

use crate::core::traversal::{ExprFolder, FoldStep, fold_expr};
use crate::core::{Name, TypeExpr};
use crate::decls::Declarations;
use crate::error::TypeError;

/// Instantiate the template `name` with `args`.
///
/// Returns the template body with every parameter replaced by its argument,
/// at any depth. Generic references inside the result are left as they are;
/// they are expanded when the result is canonicalized.
pub fn instantiate(
    decls: &Declarations,
    name: &Name,
    args: &[TypeExpr],
) -> Result<TypeExpr, TypeError> {
    let template = decls
        .get(name)
        .ok_or_else(|| TypeError::UnknownTemplate { name: name.clone() })?;

    if template.params.len() != args.len() {
        return Err(TypeError::ArityMismatch {
            name: name.clone(),
            expected: template.params.len(),
            given: args.len(),
        });
    }

    if args.is_empty() {
        return Ok(template.body.clone());
    }

    let bindings = template.params.iter().zip(args).collect();
    Ok(fold_expr(&template.body, &mut Substitution { bindings }))
}

struct Substitution<'a> {
    bindings: HashMap<&'a Name, &'a TypeExpr>,
}

impl ExprFolder for Substitution<'_> {
    fn fold_expr(&mut self, expr: &TypeExpr) -> FoldStep {
        let bound = match expr {
            TypeExpr::Param(name) => self.bindings.get(name),
            // Parameters shadow declarations of the same name.
            TypeExpr::GenericRef(name, args) if args.is_empty() => self.bindings.get(name),
            _ => None,
        };
        match bound {
            Some(arg) => FoldStep::Done((*arg).clone()),
            None => FoldStep::Recurse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TypeTemplate;
    use pretty_assertions::assert_eq;

    fn decls() -> Declarations {
        Declarations::from_templates([
            TypeTemplate::generic(
                "Option",
                ["T"],
                TypeExpr::record([
                    ("is_some", TypeExpr::primitive("bool")),
                    ("value", TypeExpr::param("T")),
                ]),
            ),
            TypeTemplate::generic(
                "Pair",
                ["A", "B"],
                TypeExpr::record([("first", TypeExpr::param("A")), ("second", TypeExpr::param("B"))]),
            ),
            TypeTemplate::generic(
                "Nested",
                ["T"],
                TypeExpr::record([
                    ("inner", TypeExpr::generic("Option", [TypeExpr::param("T")])),
                    (
                        "pos",
                        TypeExpr::tagged(TypeExpr::param("T"), "Point", "World"),
                    ),
                ]),
            ),
            TypeTemplate::new("A", TypeExpr::EmptyRecord),
        ])
        .unwrap()
    }

    #[test]
    fn test_substitutes_parameters() {
        let result = instantiate(&decls(), &Name::from("Option"), &[TypeExpr::named("A")]).unwrap();
        assert_eq!(
            result,
            TypeExpr::record([
                ("is_some", TypeExpr::primitive("bool")),
                ("value", TypeExpr::named("A")),
            ])
        );
    }

    #[test]
    fn test_outside_in() {
        // Option<Pair<bool, bool>> keeps the Pair reference unexpanded.
        let pair = TypeExpr::generic(
            "Pair",
            [TypeExpr::primitive("bool"), TypeExpr::primitive("bool")],
        );
        let result = instantiate(&decls(), &Name::from("Option"), &[pair.clone()]).unwrap();
        assert_eq!(
            result,
            TypeExpr::record([("is_some", TypeExpr::primitive("bool")), ("value", pair)])
        );
    }

    #[test]
    fn test_deep_substitution() {
        let result =
            instantiate(&decls(), &Name::from("Nested"), &[TypeExpr::primitive("float3")]).unwrap();
        assert_eq!(
            result,
            TypeExpr::record([
                (
                    "inner",
                    TypeExpr::generic("Option", [TypeExpr::primitive("float3")])
                ),
                (
                    "pos",
                    TypeExpr::tagged(TypeExpr::primitive("float3"), "Point", "World")
                ),
            ])
        );
    }

    #[test]
    fn test_template_is_unchanged() {
        let decls = decls();
        let before = decls.get("Pair").unwrap().clone();
        instantiate(
            &decls,
            &Name::from("Pair"),
            &[TypeExpr::primitive("int"), TypeExpr::primitive("uint")],
        )
        .unwrap();
        assert_eq!(decls.get("Pair").unwrap(), &before);
    }

    #[test]
    fn test_unknown_template() {
        let err = instantiate(&decls(), &Name::from("Missing"), &[]).unwrap_err();
        assert_eq!(
            err,
            TypeError::UnknownTemplate {
                name: Name::from("Missing")
            }
        );
    }

    #[test]
    fn test_arity_mismatch() {
        let err = instantiate(
            &decls(),
            &Name::from("Option"),
            &[TypeExpr::primitive("bool"), TypeExpr::primitive("bool")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TypeError::ArityMismatch {
                name: Name::from("Option"),
                expected: 1,
                given: 2,
            }
        );
    }
}
