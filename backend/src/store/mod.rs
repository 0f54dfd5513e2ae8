//! Data-store access for the watch list.
//!
//! The rest of the backend talks to the store only through [`RegisterStore`].
//! Every call receives the [`Principal`] it runs as, and the implementation
//! decides which rows that principal may see or change.

mod sqlite;

#[cfg(test)]
pub(crate) mod testing;

pub use sqlite::SqliteStore;

use crate::session::Principal;
use common::error::RegisterError;
use common::model::product::Product;
use common::model::sds_metadata::SdsMetadataRecord;
use common::model::watch_list::{InlineSdsSnapshot, WatchListEntry};

pub trait RegisterStore: Send + Sync {
    /// Watch-list rows visible to `principal`, joined to their products,
    /// newest first.
    fn list_watch_list(&self, principal: &Principal) -> Result<Vec<WatchListEntry>, RegisterError>;

    /// Metadata records for the given products, oldest first, so that a
    /// last-write-wins index keeps the newest record.
    fn list_sds_metadata(
        &self,
        principal: &Principal,
        product_ids: &[String],
    ) -> Result<Vec<SdsMetadataRecord>, RegisterError>;

    /// Case-insensitive exact match on the product name.
    fn find_product_by_name(
        &self,
        principal: &Principal,
        name: &str,
    ) -> Result<Option<Product>, RegisterError>;

    fn insert_product(
        &self,
        principal: &Principal,
        name: &str,
        sds_url: Option<&str>,
    ) -> Result<Product, RegisterError>;

    /// Inserts the (principal, product) row, or updates its inline snapshot
    /// if one already exists. Returns the entry id either way.
    fn upsert_watch_list_entry(
        &self,
        principal: &Principal,
        product_id: &str,
        inline: &InlineSdsSnapshot,
    ) -> Result<i64, RegisterError>;

    /// Deleting a row the principal cannot see is not an error.
    fn delete_watch_list_entry(&self, principal: &Principal, entry_id: i64) -> Result<(), RegisterError>;
}
