//! Shared query parameter types for API handlers.

use dineflow_core::paging::clamp_limit;
use serde::Deserialize;

/// Cursor pagination parameters (`?cursor=&limit=`).
///
/// `cursor` is the id of the last record already seen. Limits are clamped
/// to `1..=500`; no limit returns every remaining record.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub cursor: Option<String>,
    pub limit: Option<i64>,
}

impl ListParams {
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref().filter(|c| !c.is_empty())
    }

    pub fn limit(&self) -> Option<usize> {
        clamp_limit(self.limit)
    }
}
