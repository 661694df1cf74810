//! Request handlers, one module per resource.

pub mod auth;
pub mod billing;
pub mod broadcasts;
pub mod complaints;
pub mod guest;
pub mod menu;
pub mod settings;
pub mod stats;
pub mod student;
pub mod students;
pub mod suggestions;

use dineflow_core::types::Timestamp;

/// Sort newest first by `date`. Records with equal dates keep their
/// storage order.
pub(crate) fn newest_first<T>(mut items: Vec<T>, date: impl Fn(&T) -> Timestamp) -> Vec<T> {
    items.sort_by(|a, b| date(b).cmp(&date(a)));
    items
}
