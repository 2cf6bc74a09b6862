use crate::core::TypeExpr;

/// Read-only pre-order traversal of a type expression.
pub trait Visit {
    type Error;

    /// Called before the children of `expr`. Return `Ok(false)` to skip them.
    fn visit(&mut self, expr: &TypeExpr) -> Result<bool, Self::Error>;
}

/// Walk `expr` and its descendants in source order, stopping at the first
/// error.
pub fn walk_expr<V: Visit>(expr: &TypeExpr, visitor: &mut V) -> Result<(), V::Error> {
    if visitor.visit(expr)? {
        for child in expr.children() {
            walk_expr(child, visitor)?;
        }
    }
    Ok(())
}
