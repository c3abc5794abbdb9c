//! Book operations

use crate::{
    error::ClientResult,
    models::{Book, BookPatch, BookStats, Category, NewBook},
    transport::{ApiRequest, Transport},
};

use super::{json_body, ApiClient};

/// Which field a free-text book search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookSearch {
    #[default]
    Title,
    Author,
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_books(&self) -> ClientResult<Vec<Book>> {
        self.fetch(ApiRequest::get(&["books"])).await
    }

    pub async fn get_book(&self, id: i64) -> ClientResult<Book> {
        self.fetch(ApiRequest::get(&["books", &id.to_string()])).await
    }

    /// Case-insensitive substring match, evaluated by the service
    pub async fn search_books_by_title(&self, title: &str) -> ClientResult<Vec<Book>> {
        self.fetch(ApiRequest::get(&["books", "search", "title"]).with_query("title", title)).await
    }

    pub async fn search_books_by_author(&self, author: &str) -> ClientResult<Vec<Book>> {
        self.fetch(ApiRequest::get(&["books", "search", "author"]).with_query("author", author))
            .await
    }

    /// Title or author search. A blank term lists every book; any other
    /// term is sent as given, surrounding whitespace included.
    pub async fn search_books(&self, by: BookSearch, term: &str) -> ClientResult<Vec<Book>> {
        if term.trim().is_empty() {
            return self.list_books().await;
        }
        match by {
            BookSearch::Title => self.search_books_by_title(term).await,
            BookSearch::Author => self.search_books_by_author(term).await,
        }
    }

    pub async fn list_books_by_category(&self, category: Category) -> ClientResult<Vec<Book>> {
        self.fetch(ApiRequest::get(&["books", "category", category.label()])).await
    }

    /// Books with at least one available copy
    pub async fn list_available_books(&self) -> ClientResult<Vec<Book>> {
        self.fetch(ApiRequest::get(&["books", "available"])).await
    }

    pub async fn create_book(&self, book: &NewBook) -> ClientResult<Book> {
        book.check()?;
        let created: Book = self
            .fetch(ApiRequest::post(&["books"]).with_body(json_body(book)?))
            .await?;
        tracing::info!(id = created.id, title = %created.title, "book created");
        Ok(created)
    }

    pub async fn update_book(&self, id: i64, patch: &BookPatch) -> ClientResult<Book> {
        patch.check()?;
        self.fetch(ApiRequest::put(&["books", &id.to_string()]).with_body(json_body(patch)?)).await
    }

    /// Only 200 and 204 count as success
    pub async fn delete_book(&self, id: i64) -> ClientResult<()> {
        self.fetch_deleted(ApiRequest::delete(&["books", &id.to_string()])).await?;
        tracing::info!(id, "book deleted");
        Ok(())
    }

    /// Total and available counts, fetched concurrently. Either failure
    /// fails the whole call.
    pub async fn book_stats(&self) -> ClientResult<BookStats> {
        let (total_books, available_books) = tokio::try_join!(
            self.fetch::<i64>(ApiRequest::get(&["books", "stats", "total"])),
            self.fetch::<i64>(ApiRequest::get(&["books", "stats", "available"])),
        )?;
        Ok(BookStats {
            total_books,
            available_books,
        })
    }
}
