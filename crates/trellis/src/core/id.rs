//! Node identifiers.

use std::marker::PhantomData;

use slotmap::new_key_type;

new_key_type! {
    /// A generation-checked handle to a node in the tree arena. Handles
    /// to removed nodes go stale rather than aliasing whatever reuses
    /// the slot, so holding an id across structural changes is safe.
    pub struct NodeId;
}

/// A node handle that remembers the concrete widget type of the node
/// it points at. Purely a compile-time convenience over [`NodeId`];
/// the type is still checked at the point of access.
pub struct TypedId<T> {
    id: NodeId,
    _type: PhantomData<fn() -> T>,
}

impl<T> TypedId<T> {
    /// Wrap a raw node id. The caller asserts the node holds a `T`.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            _type: PhantomData,
        }
    }

    /// The underlying untyped id.
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> std::fmt::Debug for TypedId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypedId({:?})", self.id)
    }
}

impl<T> From<TypedId<T>> for NodeId {
    fn from(t: TypedId<T>) -> NodeId {
        t.id
    }
}
