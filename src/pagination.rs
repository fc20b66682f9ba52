use serde::Serialize;

/// Page size used when the caller does not supply `linesPerPage`.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// A bounded slice of an ordered result set, as returned to API callers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Zero-based page number this slice was taken from.
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, per_page: usize, total: usize) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };

        Self {
            items,
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_total_pages() {
        let page = Paginated::new(vec![1, 2], 0, 2, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total, 5);
        assert_eq!(page.per_page, 2);
    }

    #[test]
    fn zero_per_page_yields_no_pages() {
        let page: Paginated<i32> = Paginated::new(vec![], 0, 0, 5);
        assert_eq!(page.total_pages, 0);
    }
}
