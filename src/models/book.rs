//! Book model and related types

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

use super::enums::Category;
use crate::error::{ClientError, ClientResult};

/// Book record as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub category: Category,
    pub total_copies: i32,
    pub available_copies: i32,
    /// Service timestamps, kept as sent
    pub created_at: String,
    pub updated_at: String,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    pub fn borrowed_copies(&self) -> i32 {
        self.total_copies - self.available_copies
    }

    /// Share of copies currently lent out, rounded to a whole percent
    pub fn utilization_percent(&self) -> u32 {
        if self.total_copies <= 0 {
            return 0;
        }
        let ratio = f64::from(self.borrowed_copies()) / f64::from(self.total_copies);
        (ratio * 100.0).round().clamp(0.0, 100.0) as u32
    }
}

/// Create book request
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub category: Category,
    #[validate(range(min = 1, message = "A book needs at least one copy"))]
    pub total_copies: i32,
    #[validate(range(min = 0, message = "Available copies cannot be negative"))]
    pub available_copies: i32,
}

impl NewBook {
    /// New book with every copy available
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: Category,
        total_copies: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: None,
            description: None,
            category,
            total_copies,
            available_copies: total_copies,
        }
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Required-field and copy-count checks run before the request is sent
    pub fn check(&self) -> ClientResult<()> {
        self.validate()?;
        if self.title.trim().is_empty() || self.author.trim().is_empty() {
            return Err(ClientError::Validation(
                "Title and author are required".to_string(),
            ));
        }
        check_copies(self.total_copies, self.available_copies)
    }
}

/// Partial book update. Only the fields that are set are sent.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub total_copies: Option<i32>,
    pub available_copies: Option<i32>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        *self == BookPatch::default()
    }

    /// Rejects copy counts that would break the copy invariant on their own
    pub fn check(&self) -> ClientResult<()> {
        if let Some(total) = self.total_copies {
            if total < 1 {
                return Err(ClientError::Validation(
                    "A book needs at least one copy".to_string(),
                ));
            }
        }
        if let Some(available) = self.available_copies {
            if available < 0 {
                return Err(ClientError::Validation(
                    "Available copies cannot be negative".to_string(),
                ));
            }
        }
        if let (Some(total), Some(available)) = (self.total_copies, self.available_copies) {
            check_copies(total, available)?;
        }
        Ok(())
    }
}

impl From<&Book> for BookPatch {
    /// Full patch from an edited record, as the edit form submits it
    fn from(book: &Book) -> Self {
        Self {
            title: Some(book.title.clone()),
            author: Some(book.author.clone()),
            isbn: book.isbn.clone(),
            description: book.description.clone(),
            category: Some(book.category),
            total_copies: Some(book.total_copies),
            available_copies: Some(book.available_copies),
        }
    }
}

fn check_copies(total: i32, available: i32) -> ClientResult<()> {
    if available > total {
        return Err(ClientError::Validation(format!(
            "Available copies ({}) exceed total copies ({})",
            available, total
        )));
    }
    Ok(())
}

/// Aggregate book counters, composed from two service calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookStats {
    pub total_books: i64,
    pub available_books: i64,
}

/// Keep only books with at least one copy on the shelf
pub fn available_only(books: &[Book]) -> Vec<Book> {
    books.iter().filter(|b| b.is_available()).cloned().collect()
}
