//! Process-memory persistence for records and click ledgers.
//!
//! The whole data set lives in one [`ShortUrlStore`]. There is no durable
//! backing store; a restart starts empty.

mod store;

pub use store::ShortUrlStore;
