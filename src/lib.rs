//! Blocklist Registry.
//!
//! Maintains a deduplicated registry of malicious/untrusted IP addresses
//! by periodically ingesting the FireHOL `blocklist-ipsets` feeds and
//! exposing the merged result through a lookup/management HTTP API.
//!
//! # Features
//!
//! - **Feed Ingestion** - Fetch ~250 public blocklist feeds concurrently,
//!   with per-feed timeouts and body-size caps
//! - **Atomic Rebuilds** - The registry is replaced as one generation
//!   swap; readers never observe a partial or empty mid-state
//! - **Partial-Failure Tolerance** - Unreachable or malformed feeds are
//!   tallied in the run report and never abort a run
//! - **Management API** - CRUD over individual records, plus truncate and
//!   rebuild endpoints
//!
//! # Example Configuration
//!
//! ```yaml
//! listen: "127.0.0.1:3000"
//! timeout_ms: 30000
//! max_body_bytes: 8388608
//! concurrency: 16
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod fetch;
pub mod ingest;
pub mod parse;
pub mod store;

pub use catalog::{Catalog, FeedDescriptor};
pub use config::Config;
pub use fetch::Fetcher;
pub use ingest::{IngestionReport, Ingestor};
pub use parse::AddressRecord;
pub use store::{MemoryStore, RegistryStore};
