//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading plus the state and routes every server
//! shares.
//!
//! ## Config loading
//! ```rust,no_run
//! use whub_kernel::config::load_config;
//! use whub_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("whub")).unwrap();
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use whub_domain as domain;
