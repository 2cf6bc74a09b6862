use std::fmt;

use super::expr::Name;

/// Structural form of a type after alias resolution and generic
/// substitution.
///
/// Keys are plain values: two keys are equal iff they have the same shape,
/// the same field names in the same order and the same tags at every depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalKey {
    Primitive(Name),

    /// Never equal to a primitive or to a record with fields.
    EmptyRecord,

    /// Fields in declaration order (never empty).
    Record(Vec<(Name, CanonicalKey)>),

    /// A primitive with a role and a space; the base is always a
    /// [`CanonicalKey::Primitive`].
    Tagged {
        base: Box<CanonicalKey>,
        role: Name,
        space: Name,
    },

    /// A matrix primitive mapping between two spaces.
    Transform {
        base: Box<CanonicalKey>,
        from: Name,
        to: Name,
    },

    Array {
        base: Box<CanonicalKey>,
        size: usize,
    },

    OpenArray(Box<CanonicalKey>),
}

impl CanonicalKey {
    /// Field keys of a record, empty for every other shape.
    pub fn fields(&self) -> &[(Name, CanonicalKey)] {
        match self {
            CanonicalKey::Record(fields) => fields,
            _ => &[],
        }
    }

    /// Keys that get an identity of their own before this one: record
    /// fields and array elements. Tag and transform bases are not included.
    pub fn components(&self) -> Box<dyn Iterator<Item = &CanonicalKey> + '_> {
        match self {
            CanonicalKey::Record(fields) => Box::new(fields.iter().map(|(_, key)| key)),
            CanonicalKey::Array { base, .. } | CanonicalKey::OpenArray(base) => {
                Box::new(std::iter::once(base.as_ref()))
            }
            _ => Box::new(std::iter::empty()),
        }
    }
}

/// Renders the shape on one line: `bool`, `record end`,
/// `record a : bool; b : float4[Point]{World} end`, `float4x4{Model->World}`,
/// `int[4]`, `bool[]`.
impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalKey::Primitive(name) => write!(f, "{name}"),
            CanonicalKey::EmptyRecord => write!(f, "record end"),
            CanonicalKey::Record(fields) => {
                write!(f, "record")?;
                for (i, (name, key)) in fields.iter().enumerate() {
                    let sep = if i + 1 == fields.len() { "" } else { ";" };
                    write!(f, " {name} : {key}{sep}")?;
                }
                write!(f, " end")
            }
            CanonicalKey::Tagged { base, role, space } => write!(f, "{base}[{role}]{{{space}}}"),
            CanonicalKey::Transform { base, from, to } => write!(f, "{base}{{{from}->{to}}}"),
            CanonicalKey::Array { base, size } => write!(f, "{base}[{size}]"),
            CanonicalKey::OpenArray(base) => write!(f, "{base}[]"),
        }
    }
}

/// Session-local integer identity of a canonical key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity(usize);

impl Identity {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
