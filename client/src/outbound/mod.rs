//! Outbound adapters implementing domain ports.
//!
//! - **http**: reqwest-backed gateway against the Holidaze REST API
//! - **storage**: file-backed and in-memory session persistence
//!
//! Adapters translate between domain types and wire or file formats. They
//! contain no business logic.

pub mod http;
pub mod storage;
