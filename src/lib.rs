// Bookstore API - Core Library
// Exposes all modules for use in the server binary and tests

pub mod entities;
pub mod repository;
pub mod services;
pub mod controllers;
pub mod error;
pub mod config;
pub mod logging;
pub mod server;

// Re-export commonly used types
pub use entities::{Book, BookPayload, Entity, EntityId, Order, OrderPayload};
pub use repository::{BookRepository, InMemoryRepository, OrderRepository};
pub use services::{BookService, OrderService, RepositoryBookService, RepositoryOrderService};
pub use error::{ApiError, ValidationProblem};
pub use config::ServerConfig;
pub use logging::init_logging;
pub use server::{router, serve, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
