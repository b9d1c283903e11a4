//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization and deserialization. Response
//! field names follow the camelCase wire contract.

pub mod health;
pub mod shorten;
pub mod stats;
