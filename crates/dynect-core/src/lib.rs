//! Core types for the DynECT API client.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - **Types**: the wire-level response envelope, diagnostic messages,
//!   credentials, and zone identifiers
//! - **Errors**: comprehensive error handling with [`DynectError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use dynect_core::{Zone, Result};
//!
//! fn zone_from_api(path: &str) -> Result<()> {
//!     let zone = Zone::from_resource_path(path)?;
//!     println!("zone: {}", zone.name());
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/dynect-core/0.1.0")]

mod error;
pub mod types;

pub use error::{DynectError, Result};
pub use types::*;
