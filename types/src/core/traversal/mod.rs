//! Traversal utilities for type expressions.
//!
//! - [`ExprFolder`]: rebuilds an expression, replacing nodes on the way down
//! - [`Visit`]: read-only pre-order walk that can fail

mod fold;
mod visit;

pub use fold::{ExprFolder, FoldStep, fold_expr};
pub use visit::{Visit, walk_expr};
