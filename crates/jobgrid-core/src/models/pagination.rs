use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pagination block attached to search listings.
///
/// Derived from the search engine's `found` and `page` fields plus the page
/// size the caller asked for. `next_page`/`previous_page` are always present
/// in JSON (null when there is no such page) so clients can bind to them
/// without existence checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub next_page: Option<u32>,
    pub previous_page: Option<u32>,
}

impl PaginationMeta {
    /// Build pagination metadata from a search engine response.
    ///
    /// `total` and `page` come from the engine and are trusted as-is; `page`
    /// may point past the last page, in which case `has_next` is false while
    /// `has_previous` still only depends on `page > 1`. A zero `limit`
    /// produces zero pages rather than dividing by zero.
    pub fn from_search(total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit)).min(u64::from(u32::MAX)) as u32
        };
        let has_next = page < total_pages;
        let has_previous = page > 1;

        PaginationMeta {
            total,
            page,
            limit,
            total_pages,
            has_next,
            has_previous,
            next_page: if has_next { Some(page + 1) } else { None },
            previous_page: if has_previous { Some(page - 1) } else { None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_ninety_five_results() {
        let meta = PaginationMeta::from_search(95, 1, 10);
        assert_eq!(meta.total_pages, 10);
        assert!(meta.has_next);
        assert!(!meta.has_previous);
        assert_eq!(meta.next_page, Some(2));
        assert_eq!(meta.previous_page, None);
    }

    #[test]
    fn last_page_of_ninety_five_results() {
        let meta = PaginationMeta::from_search(95, 10, 10);
        assert_eq!(meta.total_pages, 10);
        assert!(!meta.has_next);
        assert!(meta.has_previous);
        assert_eq!(meta.next_page, None);
        assert_eq!(meta.previous_page, Some(9));
    }

    #[test]
    fn exact_multiple_has_no_partial_page() {
        let meta = PaginationMeta::from_search(100, 5, 10);
        assert_eq!(meta.total_pages, 10);
        assert!(meta.has_next);
        assert_eq!(meta.next_page, Some(6));
    }

    #[test]
    fn empty_result_set() {
        let meta = PaginationMeta::from_search(0, 1, 10);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_previous);
        assert_eq!(meta.next_page, None);
        assert_eq!(meta.previous_page, None);
    }

    #[test]
    fn page_beyond_range_keeps_previous_navigation() {
        let meta = PaginationMeta::from_search(95, 12, 10);
        assert!(!meta.has_next);
        assert!(meta.has_previous);
        assert_eq!(meta.previous_page, Some(11));
    }

    #[test]
    fn zero_limit_yields_zero_pages() {
        let meta = PaginationMeta::from_search(95, 1, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
    }

    #[test]
    fn serializes_camel_case_with_explicit_nulls() {
        let meta = PaginationMeta::from_search(95, 1, 10);
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value.get("totalPages"), Some(&serde_json::json!(10)));
        assert_eq!(value.get("hasNext"), Some(&serde_json::json!(true)));
        assert_eq!(value.get("hasPrevious"), Some(&serde_json::json!(false)));
        assert_eq!(value.get("nextPage"), Some(&serde_json::json!(2)));
        assert_eq!(value.get("previousPage"), Some(&serde_json::Value::Null));
    }
}
