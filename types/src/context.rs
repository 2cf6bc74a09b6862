//! The type context: canonical keys interned to identities.

use std::sync::{Mutex, MutexGuard, PoisonError};

use hashbrown::HashMap;

use crate::core::{CanonicalKey, Identity};

/// Session-wide table of canonical keys and their identities.
///
/// Identities are handed out in post-order, first-occurrence order: record
/// fields are interned left to right before the record itself, and a key
/// that is already known never consumes a new identity. Entries are never
/// removed.
///
/// # Example
///
/// ```
/// use thiol_types::{CanonicalKey, Name, TypeContext};
///
/// let mut ctx = TypeContext::new();
/// let flag = CanonicalKey::Primitive(Name::from("bool"));
/// let rec = CanonicalKey::Record(vec![(Name::from("flag"), flag.clone())]);
///
/// let rec_id = ctx.intern(&rec);
/// assert_eq!(ctx.lookup(&flag).map(|id| id.index()), Some(0));
/// assert_eq!(rec_id.index(), 1);
/// assert_eq!(ctx.intern(&rec), rec_id);
/// ```
#[derive(Debug, Default, Clone)]
pub struct TypeContext {
    ids: HashMap<CanonicalKey, Identity>,
    keys: Vec<CanonicalKey>,
}

impl TypeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `key`, interning record fields and array elements first.
    ///
    /// The base of a tagged type is part of the tagged key and gets no
    /// identity of its own.
    pub fn intern(&mut self, key: &CanonicalKey) -> Identity {
        for component in key.components() {
            self.intern(component);
        }
        self.lookup_or_insert(key)
    }

    fn lookup_or_insert(&mut self, key: &CanonicalKey) -> Identity {
        if let Some(&id) = self.ids.get(key) {
            return id;
        }
        let id = Identity::new(self.keys.len());
        tracing::debug!(%id, shape = %key, "new type identity");
        self.keys.push(key.clone());
        self.ids.insert(key.clone(), id);
        id
    }

    /// Identity of an already interned key.
    pub fn lookup(&self, key: &CanonicalKey) -> Option<Identity> {
        self.ids.get(key).copied()
    }

    /// Key interned as `id`.
    pub fn key(&self, id: Identity) -> Option<&CanonicalKey> {
        self.keys.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All entries in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (Identity, &CanonicalKey)> {
        self.keys
            .iter()
            .enumerate()
            .map(|(index, key)| (Identity::new(index), key))
    }
}

/// A [`TypeContext`] that can be shared between threads.
///
/// Each [`intern`](SharedTypeContext::intern) runs entirely under one lock,
/// so two threads interning the same new shape get the same identity.
/// The numbering then depends on which thread gets there first.
#[derive(Debug, Default)]
pub struct SharedTypeContext {
    inner: Mutex<TypeContext>,
}

impl SharedTypeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&self, key: &CanonicalKey) -> Identity {
        self.lock().intern(key)
    }

    pub fn lookup(&self, key: &CanonicalKey) -> Option<Identity> {
        self.lock().lookup(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn into_inner(self) -> TypeContext {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // A panic while interning leaves the table consistent.
    fn lock(&self) -> MutexGuard<'_, TypeContext> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<TypeContext> for SharedTypeContext {
    fn from(ctx: TypeContext) -> Self {
        Self {
            inner: Mutex::new(ctx),
        }
    }
}
