//! Fixed-size page windows over a record sequence.

use serde::{Deserialize, Serialize};

/// Rows per page on the dashboard.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of pages for display purposes. An empty sequence still has one page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// The visible part of a sequence plus its navigation bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    pub slice: &'a [T],
    pub page_index: usize,
    pub page_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> PageWindow<'_, T> {
    /// e.g. "Page 2 of 3"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count)
    }
}

/// Slice out page `page_index` of `records`.
///
/// An out-of-range index yields an empty slice rather than panicking.
pub fn visible_slice<T>(records: &[T], page_index: usize, page_size: usize) -> PageWindow<'_, T> {
    let size = page_size.max(1);
    let len = records.len();
    let start = page_index.saturating_mul(size).min(len);
    let end = page_index.saturating_add(1).saturating_mul(size);

    PageWindow {
        slice: &records[start..end.min(len)],
        page_index,
        page_count: page_count(len, size),
        has_previous: page_index > 0,
        has_next: end < len,
    }
}

/// Current pagination position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    page_index: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// A page size of zero is coerced to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn window<'a, T>(&self, records: &'a [T]) -> PageWindow<'a, T> {
        visible_slice(records, self.page_index, self.page_size)
    }

    /// Advance one page if there is a next page; otherwise unchanged.
    pub fn next(self, total: usize) -> Self {
        if self.page_index.saturating_add(1).saturating_mul(self.page_size) < total {
            Self {
                page_index: self.page_index + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Go back one page unless already on the first.
    pub fn previous(self) -> Self {
        Self {
            page_index: self.page_index.saturating_sub(1),
            ..self
        }
    }

    pub fn reset(self) -> Self {
        Self {
            page_index: 0,
            ..self
        }
    }

    /// Pull the index back onto the last non-empty page.
    pub fn clamp(self, total: usize) -> Self {
        let last = page_count(total, self.page_size) - 1;
        Self {
            page_index: self.page_index.min(last),
            ..self
        }
    }
}
