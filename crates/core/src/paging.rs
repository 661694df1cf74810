//! Cursor pagination over ordered record lists.
//!
//! A cursor is the id of the last record the client has already seen. The
//! next page starts immediately after that record. Stores and handlers that
//! sort in memory share these helpers so every list endpoint pages the same
//! way.

use serde::Serialize;

use crate::error::CoreError;

/// Hard upper bound on a single page.
pub const MAX_PAGE_LIMIT: i64 = 500;

/// A page of records plus the cursor for the following page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Id to pass as `cursor` to fetch the next page; `None` when exhausted.
    pub next: Option<String>,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next: self.next,
        }
    }
}

/// The cursor does not name any record in the list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown cursor '{0}'")]
pub struct UnknownCursor(pub String);

impl From<UnknownCursor> for CoreError {
    fn from(err: UnknownCursor) -> Self {
        CoreError::Validation(err.to_string())
    }
}

/// Clamp a user-provided limit. `None` means "no limit".
pub fn clamp_limit(limit: Option<i64>) -> Option<usize> {
    limit.map(|l| l.clamp(1, MAX_PAGE_LIMIT) as usize)
}

/// Slice `items` (already in the desired order) into the page after `cursor`.
pub fn page_after<T>(
    items: Vec<T>,
    cursor: Option<&str>,
    limit: Option<usize>,
    id_of: impl Fn(&T) -> &str,
) -> Result<Page<T>, UnknownCursor> {
    let start = match cursor {
        Some(cursor) => {
            let pos = items
                .iter()
                .position(|item| id_of(item) == cursor)
                .ok_or_else(|| UnknownCursor(cursor.to_string()))?;
            pos + 1
        }
        None => 0,
    };

    let end = match limit {
        Some(limit) => (start + limit).min(items.len()),
        None => items.len(),
    };

    let next = if end < items.len() && end > start {
        Some(id_of(&items[end - 1]).to_string())
    } else {
        None
    };

    let items = items.into_iter().skip(start).take(end - start).collect();
    Ok(Page { items, next })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("r{i}")).collect()
    }

    #[test]
    fn clamp_limit_bounds() {
        assert_eq!(clamp_limit(None), None);
        assert_eq!(clamp_limit(Some(0)), Some(1));
        assert_eq!(clamp_limit(Some(-3)), Some(1));
        assert_eq!(clamp_limit(Some(20)), Some(20));
        assert_eq!(clamp_limit(Some(10_000)), Some(MAX_PAGE_LIMIT as usize));
    }

    #[test]
    fn no_cursor_no_limit_returns_everything() {
        let page = page_after(ids(3), None, None, |s| s.as_str()).unwrap();
        assert_eq!(page.items, ids(3));
        assert_eq!(page.next, None);
    }

    #[test]
    fn walking_pages_visits_each_record_once() {
        let all = ids(7);
        let mut seen = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = page_after(all.clone(), cursor.as_deref(), Some(3), |s| s.as_str()).unwrap();
            seen.extend(page.items);
            match page.next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        assert_eq!(seen, all);
    }

    #[test]
    fn cursor_on_last_record_yields_empty_page() {
        let page = page_after(ids(2), Some("r2"), Some(5), |s| s.as_str()).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.next, None);
    }

    #[test]
    fn unknown_cursor_is_rejected() {
        let err = page_after(ids(2), Some("nope"), None, |s| s.as_str()).unwrap_err();
        assert_eq!(err, UnknownCursor("nope".into()));
    }
}
