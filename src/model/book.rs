//! Book records as returned by the search index.

use super::identifiers::{BookKey, InvalidBookKey};
use serde::Deserialize;

/// Title shown for records the index returns without one.
pub const UNTITLED: &str = "Untitled";

/// One search hit. Immutable once fetched.
///
/// Every optional field may be absent; `title` is always present (records
/// without one are given [`UNTITLED`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    key: BookKey,
    title: String,
    authors: Vec<String>,
    first_publish_year: Option<i32>,
    cover_id: Option<u64>,
    subjects: Vec<String>,
}

impl Book {
    /// Create a book with only the required fields.
    pub fn new(key: BookKey, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            key,
            title: if title.trim().is_empty() {
                UNTITLED.to_string()
            } else {
                title
            },
            authors: Vec::new(),
            first_publish_year: None,
            cover_id: None,
            subjects: Vec::new(),
        }
    }

    /// Builder: set the author list.
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the first publish year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.first_publish_year = Some(year);
        self
    }

    /// Builder: set the cover image id.
    pub fn with_cover(mut self, cover_id: u64) -> Self {
        self.cover_id = Some(cover_id);
        self
    }

    /// Builder: set the subject tags.
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = subjects.into_iter().map(Into::into).collect();
        self
    }

    /// Stable unique identifier.
    pub fn key(&self) -> &BookKey {
        &self.key
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All credited authors, possibly empty.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// First credited author, if any.
    pub fn primary_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }

    /// Year of first publication.
    pub fn first_publish_year(&self) -> Option<i32> {
        self.first_publish_year
    }

    /// Cover image id on the covers service.
    pub fn cover_id(&self) -> Option<u64> {
        self.cover_id
    }

    /// Cover image URL (large size), if the book has a cover.
    pub fn cover_url(&self) -> Option<String> {
        self.cover_id
            .map(|id| format!("https://covers.openlibrary.org/b/id/{id}-L.jpg"))
    }

    /// Subject tags, possibly empty.
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }
}

/// Wire shape of one `docs[]` element.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BookDoc {
    /// Work key.
    #[serde(default)]
    pub key: Option<String>,
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// Author names.
    #[serde(default)]
    pub author_name: Option<Vec<String>>,
    /// Year of first publication.
    #[serde(default)]
    pub first_publish_year: Option<i32>,
    /// Cover id.
    #[serde(default)]
    pub cover_i: Option<u64>,
    /// Subject tags.
    #[serde(default)]
    pub subject: Option<Vec<String>>,
}

impl TryFrom<BookDoc> for Book {
    type Error = InvalidBookKey;

    fn try_from(doc: BookDoc) -> Result<Self, Self::Error> {
        let key = BookKey::new(doc.key.unwrap_or_default())?;
        let mut book = Book::new(key, doc.title.unwrap_or_default());
        book.authors = doc.author_name.unwrap_or_default();
        book.first_publish_year = doc.first_publish_year;
        book.cover_id = doc.cover_i;
        book.subjects = doc.subject.unwrap_or_default();
        Ok(book)
    }
}
