//! Authentication primitives.
//!
//! - [`jwt`] -- access-token generation and validation.
//!
//! Student password hashing lives in `dineflow_core::password`.

pub mod jwt;
