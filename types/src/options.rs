//! Resolution options.

/// Options controlling a resolution session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Maximum nesting of generic instantiations before giving up with
    /// [`TypeError::DepthExceeded`](crate::TypeError::DepthExceeded).
    pub max_depth: usize,
}

impl ResolveOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Apply the fields set in `overrides`, keeping the rest.
    pub fn override_with(&self, overrides: &ResolveOptionsOverride) -> Self {
        Self {
            max_depth: overrides.max_depth.unwrap_or(self.max_depth),
        }
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Partial [`ResolveOptions`]; `None` keeps the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptionsOverride {
    pub max_depth: Option<usize>,
}
