//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain models and provides
//! layered configuration loading for the feature slices.
//!
//! ## Config loading
//! ```rust,ignore
//! use fhub_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config::<serde_json::Value>(Some("server")).unwrap();
//! ```

pub mod config;

pub use fhub_domain as domain;
