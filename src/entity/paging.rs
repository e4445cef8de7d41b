use std::slice;

use super::{Fetcher, FromPayload};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Previous,
}

/// A window (`items`, `total`, `limit`, `offset`) over a larger remote result
/// set.
///
/// `next` and `previous` are the raw cursor URLs returned by the service.
/// Following them goes through the client that produced the page, see
/// [`Page::fetch_page`].
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
    pub href: Option<String>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub(crate) wrapper: Option<&'static str>,
    pub(crate) fetcher: Fetcher,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn cursor(&self, direction: PageDirection) -> Option<&str> {
        match direction {
            PageDirection::Next => self.next.as_deref(),
            PageDirection::Previous => self.previous.as_deref(),
        }
    }

    /// Key the page is nested under in responses to its cursors.
    pub fn wrapper(&self) -> Option<&'static str> {
        self.wrapper
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: FromPayload> Page<T> {
    /// Fetches the adjacent page, or `None` when there is no cursor in that
    /// direction.
    pub async fn fetch_page(&self, direction: PageDirection) -> Result<Option<Page<T>>> {
        if self.cursor(direction).is_none() {
            return Ok(None);
        }
        self.fetcher.client()?.fetch_page(self, direction).await
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
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
