//! Domain vocabulary shared by the store and the HTTP layer.
//!
//! Nothing in this crate performs I/O: it holds the error taxonomy, status
//! enums and their transition rules, required-field validation, pagination
//! helpers and password hashing.

pub mod error;
pub mod menu;
pub mod paging;
pub mod password;
pub mod roles;
pub mod status;
pub mod types;
pub mod validation;
