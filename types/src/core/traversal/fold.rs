//! Rebuilding fold over [`TypeExpr`].

use crate::core::TypeExpr;

/// Control flow for [`fold_expr`].
pub enum FoldStep {
    /// Rebuild this node from its folded children.
    Recurse,
    /// Use this expression as the result and skip the children.
    Done(TypeExpr),
}

/// A `TypeExpr -> TypeExpr` transformation.
pub trait ExprFolder {
    fn fold_expr(&mut self, expr: &TypeExpr) -> FoldStep;
}

/// Fold an expression with `folder`, producing a new expression.
///
/// The input is never modified.
pub fn fold_expr<F: ExprFolder>(expr: &TypeExpr, folder: &mut F) -> TypeExpr {
    if let FoldStep::Done(out) = folder.fold_expr(expr) {
        return out;
    }

    match expr {
        TypeExpr::Primitive(_) | TypeExpr::EmptyRecord | TypeExpr::Param(_) => expr.clone(),
        TypeExpr::Record(fields) => TypeExpr::Record(
            fields
                .iter()
                .map(|(name, ty)| (name.clone(), fold_expr(ty, folder)))
                .collect(),
        ),
        TypeExpr::GenericRef(name, args) => TypeExpr::GenericRef(
            name.clone(),
            args.iter().map(|arg| fold_expr(arg, folder)).collect(),
        ),
        TypeExpr::Alias(target) => TypeExpr::Alias(Box::new(fold_expr(target, folder))),
        TypeExpr::Tagged { base, role, space } => TypeExpr::Tagged {
            base: Box::new(fold_expr(base, folder)),
            role: role.clone(),
            space: space.clone(),
        },
        TypeExpr::Transform { base, from, to } => TypeExpr::Transform {
            base: Box::new(fold_expr(base, folder)),
            from: from.clone(),
            to: to.clone(),
        },
        TypeExpr::Array { base, size } => TypeExpr::Array {
            base: Box::new(fold_expr(base, folder)),
            size: *size,
        },
        TypeExpr::OpenArray(base) => TypeExpr::OpenArray(Box::new(fold_expr(base, folder))),
    }
}
