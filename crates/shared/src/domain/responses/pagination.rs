use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub limit: i64,
}

impl Pagination {
    /// `limit` must already be clamped to at least 1. The requested page is
    /// clamped into `[1, total_pages]`.
    pub fn build(requested_page: i64, limit: i64, total_items: i64) -> Self {
        let limit = limit.max(1);
        let total_items = total_items.max(0);
        let total_pages = ((total_items + limit - 1) / limit).max(1);
        let current_page = requested_page.clamp(1, total_pages);

        Self {
            current_page,
            total_items,
            total_pages,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
            limit,
        }
    }
}
