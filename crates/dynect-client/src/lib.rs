//! HTTP client for the DynECT API.
//!
//! This crate provides [`DynectClient`], which authenticates against the
//! session endpoint, and [`Session`], which owns the resulting token and
//! exposes the authenticated operations. The call sequence the API expects
//! is encoded in the types: a client can only log in, a session can only
//! query and log out, and logging out consumes the session.
//!
//! ```rust,ignore
//! use dynect_client::DynectClient;
//! use dynect_core::Credentials;
//!
//! let client = DynectClient::builder().build()?;
//! let session = client.login(&Credentials::new("acme", "admin", "secret")?).await?;
//! for zone in session.list_zones().await? {
//!     println!("{zone}");
//! }
//! session.logout().await?;
//! ```

#![doc(html_root_url = "https://docs.rs/dynect-client/0.1.0")]

mod client;
mod session;

pub use client::{DynectClient, DynectClientBuilder};
pub use dynect_core::{DynectError, Result};
pub use session::Session;
