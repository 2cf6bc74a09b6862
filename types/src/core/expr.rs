use string_cache::DefaultAtom;

/// Interned name used for declarations, fields, parameters and tags.
pub type Name = DefaultAtom;

/// A type expression as written in a declaration.
///
/// This is the input side of the engine. It may contain aliases, generic
/// references and parameter placeholders, none of which survive
/// canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// Built-in scalar, vector or matrix type (`bool`, `float4`, `double3x3`).
    Primitive(Name),

    /// The record with no fields.
    EmptyRecord,

    /// Record with fields in declaration order.
    ///
    /// Field order is significant: reordering fields gives a different type.
    Record(Vec<(Name, TypeExpr)>),

    /// Reference to a declaration, with type arguments for generic templates.
    ///
    /// References to non-generic declarations carry no arguments.
    GenericRef(Name, Vec<TypeExpr>),

    /// Transparent alias of another type.
    Alias(Box<TypeExpr>),

    /// A base type annotated with a geometric role and a coordinate space,
    /// e.g. `float4 is Point in ObjectSpace`.
    Tagged {
        base: Box<TypeExpr>,
        role: Name,
        space: Name,
    },

    /// A matrix annotated with the coordinate spaces it maps between,
    /// e.g. `float4x4 from ObjectSpace to WorldSpace`.
    Transform {
        base: Box<TypeExpr>,
        from: Name,
        to: Name,
    },

    /// Fixed-size array, `T[N]`.
    Array { base: Box<TypeExpr>, size: usize },

    /// Array whose length is only known at runtime, `T[]`.
    OpenArray(Box<TypeExpr>),

    /// Placeholder for a template parameter inside a template body.
    Param(Name),
}

impl TypeExpr {
    pub fn primitive(name: impl AsRef<str>) -> Self {
        TypeExpr::Primitive(Name::from(name.as_ref()))
    }

    /// Builds a record, collapsing to [`TypeExpr::EmptyRecord`] when there
    /// are no fields.
    pub fn record<N: AsRef<str>>(fields: impl IntoIterator<Item = (N, TypeExpr)>) -> Self {
        let fields: Vec<_> = fields
            .into_iter()
            .map(|(name, ty)| (Name::from(name.as_ref()), ty))
            .collect();
        if fields.is_empty() {
            TypeExpr::EmptyRecord
        } else {
            TypeExpr::Record(fields)
        }
    }

    /// Reference to a non-generic declaration.
    pub fn named(name: impl AsRef<str>) -> Self {
        TypeExpr::GenericRef(Name::from(name.as_ref()), Vec::new())
    }

    pub fn generic(name: impl AsRef<str>, args: impl IntoIterator<Item = TypeExpr>) -> Self {
        TypeExpr::GenericRef(Name::from(name.as_ref()), args.into_iter().collect())
    }

    pub fn alias(target: TypeExpr) -> Self {
        TypeExpr::Alias(Box::new(target))
    }

    pub fn tagged(base: TypeExpr, role: impl AsRef<str>, space: impl AsRef<str>) -> Self {
        TypeExpr::Tagged {
            base: Box::new(base),
            role: Name::from(role.as_ref()),
            space: Name::from(space.as_ref()),
        }
    }

    pub fn transform(base: TypeExpr, from: impl AsRef<str>, to: impl AsRef<str>) -> Self {
        TypeExpr::Transform {
            base: Box::new(base),
            from: Name::from(from.as_ref()),
            to: Name::from(to.as_ref()),
        }
    }

    pub fn array(base: TypeExpr, size: usize) -> Self {
        TypeExpr::Array {
            base: Box::new(base),
            size,
        }
    }

    pub fn open_array(base: TypeExpr) -> Self {
        TypeExpr::OpenArray(Box::new(base))
    }

    pub fn param(name: impl AsRef<str>) -> Self {
        TypeExpr::Param(Name::from(name.as_ref()))
    }

    /// Direct sub-expressions in source order.
    pub fn children(&self) -> Box<dyn Iterator<Item = &TypeExpr> + '_> {
        match self {
            TypeExpr::Primitive(_) | TypeExpr::EmptyRecord | TypeExpr::Param(_) => {
                Box::new(std::iter::empty())
            }
            TypeExpr::Record(fields) => Box::new(fields.iter().map(|(_, ty)| ty)),
            TypeExpr::GenericRef(_, args) => Box::new(args.iter()),
            TypeExpr::Alias(inner)
            | TypeExpr::Tagged { base: inner, .. }
            | TypeExpr::Transform { base: inner, .. }
            | TypeExpr::Array { base: inner, .. }
            | TypeExpr::OpenArray(inner) => Box::new(std::iter::once(inner.as_ref())),
        }
    }
}

/// A named declaration, possibly generic.
///
/// Non-generic declarations are templates with no parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTemplate {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: TypeExpr,
}

impl TypeTemplate {
    pub fn new(name: impl AsRef<str>, body: TypeExpr) -> Self {
        Self {
            name: Name::from(name.as_ref()),
            params: Vec::new(),
            body,
        }
    }

    pub fn generic<P: AsRef<str>>(
        name: impl AsRef<str>,
        params: impl IntoIterator<Item = P>,
        body: TypeExpr,
    ) -> Self {
        Self {
            name: Name::from(name.as_ref()),
            params: params
                .into_iter()
                .map(|param| Name::from(param.as_ref()))
                .collect(),
            body,
        }
    }

    pub fn is_generic(&self) -> bool {
        !self.params.is_empty()
    }
}

const SCALARS: [&str; 5] = ["bool", "int", "uint", "float", "double"];

/// Returns true for built-in type names: scalars, vectors with 2 to 4
/// components (`float3`) and floating-point matrices (`float4x4`).
pub fn is_primitive_name(name: &str) -> bool {
    SCALARS.iter().any(|scalar| match name.strip_prefix(scalar) {
        Some(shape) => is_shape_suffix(scalar, shape),
        None => false,
    })
}

/// Returns true for `float` and `double` matrices such as `float4x4`.
pub fn is_matrix_name(name: &str) -> bool {
    ["float", "double"].iter().any(|scalar| {
        name.strip_prefix(scalar)
            .is_some_and(|shape| shape.len() == 3 && is_shape_suffix(scalar, shape))
    })
}

fn is_shape_suffix(scalar: &str, shape: &str) -> bool {
    let dim = |b: u8| (b'2'..=b'4').contains(&b);
    match shape.as_bytes() {
        [] => true,
        [n] => dim(*n),
        [cols, b'x', rows] => matches!(scalar, "float" | "double") && dim(*cols) && dim(*rows),
        _ => false,
    }
}
