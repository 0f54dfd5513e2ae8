//! Test doubles for the data store.

use super::{RegisterStore, SqliteStore};
use crate::session::Principal;
use common::error::RegisterError;
use common::model::product::Product;
use common::model::sds_metadata::SdsMetadataRecord;
use common::model::watch_list::{InlineSdsSnapshot, WatchListEntry};
use rusqlite::params;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Writes a metadata row the way the parsing service would.
pub(crate) fn insert_metadata(store: &SqliteStore, product_id: &str, vendor: Option<&str>, created_at: &str) {
    store
        .lock()
        .unwrap()
        .execute(
            "INSERT INTO sds_metadata (product_id, vendor, issue_date, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![product_id, vendor, "2024-04-04", created_at],
        )
        .unwrap();
}

/// Read-only store with canned results that counts how often each read runs.
pub(crate) struct FakeStore {
    pub entries: Result<Vec<WatchListEntry>, String>,
    pub metadata: Result<Vec<SdsMetadataRecord>, String>,
    pub watch_list_calls: AtomicUsize,
    pub metadata_calls: AtomicUsize,
}

impl FakeStore {
    pub fn new(entries: Vec<WatchListEntry>, metadata: Result<Vec<SdsMetadataRecord>, String>) -> Self {
        Self {
            entries: Ok(entries),
            metadata,
            watch_list_calls: AtomicUsize::new(0),
            metadata_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            entries: Err(message.to_string()),
            ..Self::new(Vec::new(), Ok(Vec::new()))
        }
    }

    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }
}

pub(crate) fn entry(id: i64, product_id: &str, name: &str, inline: InlineSdsSnapshot) -> WatchListEntry {
    WatchListEntry {
        id,
        product: Some(Product {
            id: product_id.to_string(),
            name: name.to_string(),
            sds_url: None,
        }),
        created_at: None,
        inline,
    }
}

impl RegisterStore for FakeStore {
    fn list_watch_list(&self, _principal: &Principal) -> Result<Vec<WatchListEntry>, RegisterError> {
        self.watch_list_calls.fetch_add(1, Ordering::SeqCst);
        self.entries.clone().map_err(RegisterError::Store)
    }

    fn list_sds_metadata(
        &self,
        _principal: &Principal,
        _product_ids: &[String],
    ) -> Result<Vec<SdsMetadataRecord>, RegisterError> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        self.metadata.clone().map_err(RegisterError::Store)
    }

    fn find_product_by_name(&self, _: &Principal, _: &str) -> Result<Option<Product>, RegisterError> {
        Err(RegisterError::Store("read-only fake".to_string()))
    }

    fn insert_product(&self, _: &Principal, _: &str, _: Option<&str>) -> Result<Product, RegisterError> {
        Err(RegisterError::Store("read-only fake".to_string()))
    }

    fn upsert_watch_list_entry(
        &self,
        _: &Principal,
        _: &str,
        _: &InlineSdsSnapshot,
    ) -> Result<i64, RegisterError> {
        Err(RegisterError::Store("read-only fake".to_string()))
    }

    fn delete_watch_list_entry(&self, _: &Principal, _: i64) -> Result<(), RegisterError> {
        Err(RegisterError::Store("read-only fake".to_string()))
    }
}
