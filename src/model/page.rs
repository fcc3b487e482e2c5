//! One fetched page of search results.

use super::book::{Book, BookDoc};
use super::identifiers::PageNumber;
use serde::Deserialize;
use tracing::warn;

/// Wire shape of the search endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Matching documents for the requested page.
    #[serde(default)]
    pub docs: Vec<BookDoc>,
    /// Total number of hits for the query.
    #[serde(rename = "numFound", default)]
    pub num_found: Option<u64>,
    /// Offset of the first returned doc.
    #[serde(default)]
    pub start: Option<u64>,
}

/// The result of one fetch: an ordered batch of books plus its exhaustion signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    number: PageNumber,
    books: Vec<Book>,
    returned: usize,
    num_found: Option<u64>,
}

impl Page {
    /// Build a page directly from books.
    pub fn new(number: PageNumber, books: Vec<Book>) -> Self {
        let returned = books.len();
        Self {
            number,
            books,
            returned,
            num_found: None,
        }
    }

    /// An exhausted (zero-item) page.
    pub fn empty(number: PageNumber) -> Self {
        Self::new(number, Vec::new())
    }

    /// Builder: attach the server's total hit count.
    pub fn with_num_found(mut self, num_found: u64) -> Self {
        self.num_found = Some(num_found);
        self
    }

    /// Convert a decoded response into a page.
    ///
    /// Docs without a usable key are dropped. Exhaustion is judged on the
    /// number of docs the server returned, not on how many survived.
    pub fn from_response(number: PageNumber, response: SearchResponse) -> Self {
        let returned = response.docs.len();
        let books = response
            .docs
            .into_iter()
            .filter_map(|doc| match Book::try_from(doc) {
                Ok(book) => Some(book),
                Err(e) => {
                    warn!(page = %number, "Dropping search doc: {}", e);
                    None
                }
            })
            .collect();

        Self {
            number,
            books,
            returned,
            num_found: response.num_found,
        }
    }

    /// Which page this is.
    pub fn number(&self) -> PageNumber {
        self.number
    }

    /// Books in server order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Consume the page, yielding its books.
    pub fn into_books(self) -> Vec<Book> {
        self.books
    }

    /// Total hit count reported by the server, if any.
    pub fn num_found(&self) -> Option<u64> {
        self.num_found
    }

    /// A page that returned zero items ends pagination for its query.
    pub fn is_exhausted(&self) -> bool {
        self.returned == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_is_exhausted() {
        assert!(Page::empty(PageNumber::FIRST).is_exhausted());
    }

    #[test]
    fn response_decodes_docs_and_total() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"numFound": 2, "start": 0, "docs": [
                {"key": "/works/OL1W", "title": "A"},
                {"key": "/works/OL2W", "title": "B"}
            ]}"#,
        )
        .unwrap();

        let page = Page::from_response(PageNumber::FIRST, response);
        assert_eq!(page.books().len(), 2);
        assert_eq!(page.books()[1].title(), "B");
        assert_eq!(page.num_found(), Some(2));
        assert!(!page.is_exhausted());
    }

    #[test]
    fn keyless_docs_are_dropped_without_exhausting() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"docs": [{"title": "no key"}]}"#).unwrap();

        let page = Page::from_response(PageNumber::FIRST, response);
        assert!(page.books().is_empty());
        assert!(!page.is_exhausted());
    }

    #[test]
    fn response_without_docs_is_exhausted() {
        let response: SearchResponse = serde_json::from_str(r#"{"numFound": 0}"#).unwrap();
        let page = Page::from_response(PageNumber::FIRST, response);
        assert!(page.is_exhausted());
    }
}
