use crate::entities::{Book, EntityId};
use crate::repository::BookRepository;

/// Book capabilities the books controller relies on
pub trait BookService {
    fn list_books(&self) -> Vec<Book>;

    fn get_book(&self, id: EntityId) -> Option<Book>;

    /// Store a new book; the returned copy carries its assigned id
    fn save_book(&self, book: Book) -> Book;

    /// `None` when no book has this id
    fn update_book(&self, id: EntityId, book: Book) -> Option<Book>;

    /// `false` when no book has this id
    fn delete_book(&self, id: EntityId) -> bool;
}

/// Forwards every call to a borrowed `BookRepository`
#[derive(Clone, Copy)]
pub struct RepositoryBookService<'a> {
    repo: &'a BookRepository,
}

impl<'a> RepositoryBookService<'a> {
    pub fn new(repo: &'a BookRepository) -> Self {
        Self { repo }
    }
}

impl BookService for RepositoryBookService<'_> {
    fn list_books(&self) -> Vec<Book> {
        self.repo.list()
    }

    fn get_book(&self, id: EntityId) -> Option<Book> {
        self.repo.get(id)
    }

    fn save_book(&self, book: Book) -> Book {
        self.repo.add(book)
    }

    fn update_book(&self, id: EntityId, book: Book) -> Option<Book> {
        self.repo.update(id, book)
    }

    fn delete_book(&self, id: EntityId) -> bool {
        self.repo.delete(id)
    }
}
