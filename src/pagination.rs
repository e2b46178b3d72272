use serde::Serialize;

use crate::error::{StoreError, StoreResult};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortKey {
    #[default]
    Title,
    FilmType,
    ReleaseDate,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Sort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(key: SortKey) -> Self {
        Self { key, direction: SortDirection::Asc }
    }

    pub fn desc(key: SortKey) -> Self {
        Self { key, direction: SortDirection::Desc }
    }
}

/// A zero-based page index and a page size, both validated on construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageRequest {
    page: u64,
    size: u64,
    sort: Sort,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> StoreResult<Self> {
        match (u64::try_from(page), u64::try_from(size)) {
            (Ok(page), Ok(size)) if size > 0 => Ok(Self { page, size, sort: Sort::default() }),
            _ => Err(StoreError::InvalidPageRequest { page, size }),
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    /// Row offset of the first item, or `None` when it does not fit the
    /// storage engine's signed 64-bit offsets.
    pub fn offset(&self) -> Option<u64> {
        self.page.checked_mul(self.size).filter(|&offset| offset <= i64::MAX as u64)
    }

    pub fn next(&self) -> Self {
        Self { page: self.page + 1, ..*self }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Page<T> {
    items: Vec<T>,
    page: u64,
    size: u64,
    total_items: u64,
    total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total_items: u64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total_items,
            total_pages: total_items.div_ceil(request.size),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn number_of_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0)]
    #[case(0, -1)]
    #[case(-1, 10)]
    #[case(-3, 0)]
    fn rejects_bad_requests(#[case] page: i64, #[case] size: i64) {
        let err = PageRequest::new(page, size).unwrap_err();
        assert!(matches!(err, StoreError::InvalidPageRequest { page: p, size: s } if p == page && s == size));
    }

    #[test]
    fn defaults_to_title_ascending() {
        let req = PageRequest::new(2, 10).unwrap();
        assert_eq!(req.page(), 2);
        assert_eq!(req.size(), 10);
        assert_eq!(req.sort(), Sort::asc(SortKey::Title));
    }

    #[rstest]
    #[case(0, 10, Some(0))]
    #[case(3, 10, Some(30))]
    #[case(i64::MAX, 1, Some(i64::MAX as u64))]
    #[case(i64::MAX, 10, None)]
    #[case(1 << 40, 1 << 30, None)]
    #[case(1 << 31, 1 << 31, Some(1 << 62))]
    fn offset_is_checked(#[case] page: i64, #[case] size: i64, #[case] expected: Option<u64>) {
        assert_eq!(PageRequest::new(page, size).unwrap().offset(), expected);
    }

    #[rstest]
    #[case(0, 10, 25, 3, false)]
    #[case(1, 10, 25, 3, false)]
    #[case(2, 10, 25, 3, true)]
    #[case(0, 10, 20, 2, false)]
    #[case(0, 10, 0, 0, true)]
    #[case(7, 10, 25, 3, true)]
    fn page_metadata(
        #[case] page: i64,
        #[case] size: i64,
        #[case] total: u64,
        #[case] pages: u64,
        #[case] last: bool,
    ) {
        let req = PageRequest::new(page, size).unwrap();
        let p: Page<()> = Page::new(Vec::new(), &req, total);
        assert_eq!(p.total_pages(), pages);
        assert_eq!(p.is_last(), last);
        assert_eq!(p.has_next(), !last);
    }

    #[test]
    fn map_keeps_metadata() {
        let req = PageRequest::new(1, 2).unwrap();
        let p = Page::new(vec![1, 2], &req, 5).map(|n| n * 10);
        assert_eq!(p.items(), &[10, 20]);
        assert_eq!(p.page(), 1);
        assert_eq!(p.total_items(), 5);
        assert_eq!(p.total_pages(), 3);
        assert!(!p.is_first());
    }
}
