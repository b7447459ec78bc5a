// 📚 Book Entity
//
// Wire shape: { "bookId": int, "bookName": string, "category": string, "price": number }
// Prices keep every digit and their scale: "12.50" in, "12.50" out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId};

// ============================================================================
// BOOK ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Assigned by the repository on add - never changes
    pub book_id: EntityId,

    pub book_name: String,

    pub category: String,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl Book {
    /// Create an unsaved book (identifier 0 until added to a repository)
    pub fn new(book_name: impl Into<String>, category: impl Into<String>, price: Decimal) -> Self {
        Book {
            book_id: 0,
            book_name: book_name.into(),
            category: category.into(),
            price,
        }
    }
}

impl Entity for Book {
    fn id(&self) -> EntityId {
        self.book_id
    }

    fn set_id(&mut self, id: EntityId) {
        self.book_id = id;
    }

    fn overwrite_from(&mut self, other: Self) {
        self.book_name = other.book_name;
        self.category = other.category;
        self.price = other.price;
    }
}

// ============================================================================
// REQUEST PAYLOAD
// ============================================================================

/// Body of POST/PUT /api/books
///
/// All fields are required. A `bookId` in the body is ignored.
/// PascalCase names (`BookName`, `Category`, `Price`) are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(alias = "BookName")]
    pub book_name: String,
    #[serde(alias = "Category")]
    pub category: String,
    #[serde(alias = "Price", with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl From<BookPayload> for Book {
    fn from(payload: BookPayload) -> Self {
        Book::new(payload.book_name, payload.category, payload.price)
    }
}

// ============================================================================
// TESTS
// ============================================================================
