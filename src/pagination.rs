//! Pagination types for blog service responses.

use serde::{Deserialize, Serialize};

/// A page of results from the blog service.
///
/// Wire shape: `{ items, totalCount, pageNumber, pageSize }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total_count: u64,
    /// Current page number (1-indexed).
    #[serde(default = "first_page")]
    pub page_number: u32,
    /// Number of items per page.
    #[serde(default)]
    pub page_size: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> Page<T> {
    /// Create a new page from items and pagination info.
    #[must_use]
    pub fn new(items: Vec<T>, page_number: u32, page_size: u32, total_count: u64) -> Self {
        Self {
            items,
            total_count,
            page_number,
            page_size,
        }
    }

    /// Whether pages after this one hold more items.
    pub fn has_more(&self) -> bool {
        u64::from(self.page_number) * u64::from(self.page_size) < self.total_count
    }

    /// Number of pages, rounding up. Zero when the page size is unknown.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(u64::from(self.page_size))
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
