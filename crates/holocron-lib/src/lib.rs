//! Holocron library entry points.
//!
//! This crate holds the character record model, the seeded in-memory store,
//! and the item service that enforces id uniqueness and existence rules.
//! HTTP services should only call the functions exported here instead of
//! touching the store directly.
//!

pub mod error;
pub mod record;
pub mod seed;
pub mod service;
pub mod store;

pub use error::{Error, Result};
pub use record::{CharacterRecord, ItemSummary, RecordId};
pub use seed::{seed_records, SEED_RECORD_COUNT};
pub use service::ItemService;
pub use store::RecordStore;
