// 🗄️ In-Memory Repository
//
// Authoritative store for one entity type, for the lifetime of the process.
// Nothing is persisted: every restart begins again at identifier 1.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::entities::{Book, Entity, EntityId, Order};

pub type BookRepository = InMemoryRepository<Book>;
pub type OrderRepository = InMemoryRepository<Order>;

struct Store<T> {
    /// Insertion order is preserved
    items: Vec<T>,
    /// Next identifier to hand out - only ever increments
    next_id: EntityId,
}

/// Ordered collection + identifier counter behind a single lock
///
/// Writers hold the write lock for the whole lookup-and-mutate, so concurrent
/// updates to the same entity serialize (last writer wins) and identifier
/// assignment is atomic with the append.
pub struct InMemoryRepository<T> {
    store: RwLock<Store<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        InMemoryRepository {
            store: RwLock::new(Store {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    // Every mutation is a single push/assign/remove, so a panic elsewhere
    // cannot leave the store half-written; recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, Store<T>> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store<T>> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every entity, in insertion order
    pub fn list(&self) -> Vec<T> {
        self.read().items.clone()
    }

    /// Linear scan by identifier
    pub fn get(&self, id: EntityId) -> Option<T> {
        self.read().items.iter().find(|e| e.id() == id).cloned()
    }

    /// Assign the next identifier, append, and return the stored entity
    pub fn add(&self, mut entity: T) -> T {
        let mut store = self.write();

        entity.set_id(store.next_id);
        store.next_id += 1;
        store.items.push(entity.clone());

        entity
    }

    /// Overwrite every field except the identifier; `None` if `id` is absent
    pub fn update(&self, id: EntityId, entity: T) -> Option<T> {
        let mut store = self.write();

        let existing = store.items.iter_mut().find(|e| e.id() == id)?;
        existing.overwrite_from(entity);

        Some(existing.clone())
    }

    /// Remove by identifier; `false` if `id` is absent
    pub fn delete(&self, id: EntityId) -> bool {
        let mut store = self.write();

        match store.items.iter().position(|e| e.id() == id) {
            Some(index) => {
                store.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
