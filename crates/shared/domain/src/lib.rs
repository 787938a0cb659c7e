//! # Domain Models
//!
//! Pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O, networking, or validation logic, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod query;
pub mod registry;
pub mod response;
