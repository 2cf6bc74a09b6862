//! Textual dump of resolved declarations and their identities.

use std::fmt;

use thiol_types::{CanonicalKey, ResolvedDeclaration, TypeContext};

const INDENT: &str = "    ";

/// Renders declarations as
///
/// ```text
/// Name = (Identity) record
///     field : (Identity) kind
/// end
/// ```
///
/// one entry per declaration. Nested records are indented four spaces per
/// level and closed at the indentation of the line that opened them. Array
/// dimensions follow the element, after `end` for arrays of records.
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a> {
    declarations: &'a [ResolvedDeclaration],
    context: &'a TypeContext,
}

impl<'a> Dump<'a> {
    pub fn new(declarations: &'a [ResolvedDeclaration], context: &'a TypeContext) -> Self {
        Self {
            declarations,
            context,
        }
    }

    /// `suffix` holds the `[N]` / `[]` dimensions of enclosing arrays, which
    /// follow the element like they do in declarations.
    fn write_kind(
        &self,
        f: &mut fmt::Formatter<'_>,
        key: &CanonicalKey,
        depth: usize,
        suffix: &str,
    ) -> fmt::Result {
        match key {
            CanonicalKey::Record(fields) => {
                writeln!(f, "record")?;
                for (name, field) in fields {
                    write!(f, "{}{name} : ", INDENT.repeat(depth + 1))?;
                    match self.context.lookup(field) {
                        Some(id) => write!(f, "({id}) ")?,
                        None => write!(f, "(?) ")?,
                    }
                    self.write_kind(f, field, depth + 1, "")?;
                }
                writeln!(f, "{}end{suffix}", INDENT.repeat(depth))
            }
            CanonicalKey::Array { base, size } => {
                self.write_kind(f, base, depth, &format!("[{size}]{suffix}"))
            }
            CanonicalKey::OpenArray(base) => self.write_kind(f, base, depth, &format!("[]{suffix}")),
            // Primitives, empty records and tags fit on one line.
            other => writeln!(f, "{other}{suffix}"),
        }
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decl in self.declarations {
            write!(f, "{} = ({}) ", decl.name, decl.identity)?;
            self.write_kind(f, &decl.key, 0, "")?;
        }
        Ok(())
    }
}

/// Render the dump of `declarations` to a string.
pub fn dump(declarations: &[ResolvedDeclaration], context: &TypeContext) -> String {
    Dump::new(declarations, context).to_string()
}
