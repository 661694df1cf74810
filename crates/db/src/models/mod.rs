//! Record types and request DTOs, one module per entity.
//!
//! All records serialize with camelCase field names. Request DTOs use
//! `Option` fields so that missing values reach the handler's validation
//! instead of failing deserialization.

pub mod bill;
pub mod broadcast;
pub mod complaint;
pub mod guest_payment;
pub mod menu;
pub mod settings;
pub mod student;
pub mod suggestion;
