// Service Layer
//
// One capability trait per entity type; controllers depend on the trait.
// The repository-backed implementations borrow the shared repository and are
// built fresh for every request.

pub mod book;
pub mod order;

pub use book::{BookService, RepositoryBookService};
pub use order::{OrderService, RepositoryOrderService};
