// Entity Models
//
// Each entity has:
// - Integer identity assigned by its repository, never changed afterwards
// - Plain scalar values that an update overwrites in place

pub mod book;
pub mod order;

pub use book::{Book, BookPayload};
pub use order::{Order, OrderPayload};

/// Repository-assigned identifier
pub type EntityId = i32;

/// A record that can live in an `InMemoryRepository`
pub trait Entity: Clone {
    /// Current identifier (0 until the repository assigns one)
    fn id(&self) -> EntityId;

    fn set_id(&mut self, id: EntityId);

    /// Copy every value from `other`, keeping this entity's identifier
    fn overwrite_from(&mut self, other: Self);
}
