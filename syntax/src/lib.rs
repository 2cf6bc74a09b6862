//! Parser for thiol type declarations.
//!
//! Turns source text into a [`Declarations`](thiol_types::Declarations) table
//! ready for resolution.
//!
//! ```
//! let parsed = thiol_syntax::parse("type A = record end\ntype B = A").unwrap();
//! assert_eq!(parsed.decls.len(), 2);
//! ```

mod error;
mod parser;

pub use error::{ParseError, Span};
pub use parser::{DeclarationParser, ParsedFile, Rule, parse};
