use serde::{Deserialize, Serialize};

/// Fixed-size page selection, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// From a raw `?page=` value; anything unparsable selects the first page
    pub fn from_query(page: Option<&str>, per_page: u32) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(1);
        Self::new(page, per_page)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }
}

/// One page of results plus totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub per_page: u32,
    pub total: i64,
    pub last_page: u32,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, request: PageRequest, total: i64) -> Self {
        let per_page = i64::from(request.per_page);
        let last_page = ((total.max(0) + per_page - 1) / per_page).max(1);

        Self {
            data,
            current_page: request.page,
            per_page: request.per_page,
            total,
            last_page: u32::try_from(last_page).unwrap_or(u32::MAX),
        }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_offsets() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 15).offset(), 30);
        assert_eq!(PageRequest::new(0, 10).page, 1);
    }

    #[test]
    fn unparsable_page_selects_first() {
        assert_eq!(PageRequest::from_query(Some("abc"), 10).page, 1);
        assert_eq!(PageRequest::from_query(Some("-2"), 10).page, 1);
        assert_eq!(PageRequest::from_query(Some("4"), 10).page, 4);
        assert_eq!(PageRequest::from_query(None, 10).page, 1);
    }

    #[test]
    fn last_page_rounds_up() {
        let request = PageRequest::new(1, 15);
        assert_eq!(Paginated::<u8>::new(vec![], request, 0).last_page, 1);
        assert_eq!(Paginated::<u8>::new(vec![], request, 15).last_page, 1);
        assert_eq!(Paginated::<u8>::new(vec![], request, 16).last_page, 2);
    }
}
