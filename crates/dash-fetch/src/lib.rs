//! Share-link resolution and download.
//!
//! Turns a public cloud-drive sharing URL into a direct-download URL and
//! fetches the raw bytes with a single synchronous request. No retries, no
//! caching, no special redirect handling.

pub mod client;
pub mod error;
pub mod resolver;

pub use client::{DriveClient, fetch_share_link};
pub use error::{FetchError, Result};
pub use resolver::{LinkResolution, resolve_share_link};
