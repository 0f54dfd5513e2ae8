//! SQLite implementation of [`RegisterStore`].
//!
//! Tables:
//! - `products`: shared product catalogue (`id`, `name`, `sds_url`). Name
//!   lookups go through `name_key`, the Unicode-lowercased name, because
//!   SQLite's `NOCASE` only folds ASCII.
//! - `user_chemical_watch_list`: one row per (user, product) with the
//!   inline SDS snapshot captured when the chemical was added.
//! - `sds_metadata`: normalized SDS data written by the parsing service.
//!   This store never writes to it.
//!
//! Watch-list rows are scoped to the calling principal inside every query.
//! Timestamps are stored as RFC 3339 text in UTC with millisecond precision,
//! so ordering by the text column is chronological.

use super::RegisterStore;
use crate::session::Principal;
use chrono::{SecondsFormat, Utc};
use common::error::RegisterError;
use common::model::product::Product;
use common::model::sds_metadata::SdsMetadataRecord;
use common::model::watch_list::{InlineSdsSnapshot, WatchListEntry};
use common::watch_list::sort::parse_instant;
use log::debug;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS products (
        id       TEXT PRIMARY KEY,
        name     TEXT NOT NULL,
        name_key TEXT NOT NULL,
        sds_url  TEXT
    );

    CREATE INDEX IF NOT EXISTS products_name_key ON products (name_key);

    CREATE TABLE IF NOT EXISTS user_chemical_watch_list (
        id                    INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id               TEXT NOT NULL,
        product_id            TEXT NOT NULL REFERENCES products(id),
        created_at            TEXT NOT NULL,
        sds_issue_date        TEXT,
        hazardous_substance   INTEGER,
        dangerous_good        INTEGER,
        dangerous_goods_class TEXT,
        packing_group         TEXT,
        subsidiary_risks      TEXT,
        description           TEXT,
        UNIQUE (user_id, product_id)
    );

    CREATE TABLE IF NOT EXISTS sds_metadata (
        product_id            TEXT NOT NULL REFERENCES products(id),
        vendor                TEXT,
        issue_date            TEXT,
        hazardous_substance   INTEGER,
        dangerous_good        INTEGER,
        dangerous_goods_class TEXT,
        description           TEXT,
        packing_group         TEXT,
        subsidiary_risks      TEXT,
        raw_json              TEXT,
        created_at            TEXT
    );
";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) the database file and makes sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RegisterError> {
        Self::with_connection(Connection::open(path).map_err(store_error)?)
    }

    pub fn open_in_memory() -> Result<Self, RegisterError> {
        Self::with_connection(Connection::open_in_memory().map_err(store_error)?)
    }

    fn with_connection(conn: Connection) -> Result<Self, RegisterError> {
        conn.execute_batch(SCHEMA).map_err(store_error)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, Connection>, RegisterError> {
        self.conn
            .lock()
            .map_err(|_| RegisterError::Store("database connection is unavailable".to_string()))
    }
}

impl RegisterStore for SqliteStore {
    fn list_watch_list(&self, principal: &Principal) -> Result<Vec<WatchListEntry>, RegisterError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT w.id, w.created_at, w.sds_issue_date, w.hazardous_substance,
                        w.dangerous_good, w.dangerous_goods_class, w.packing_group,
                        w.subsidiary_risks, w.description, p.id, p.name, p.sds_url
                 FROM user_chemical_watch_list w
                 LEFT JOIN products p ON p.id = w.product_id
                 WHERE w.user_id = ?1
                 ORDER BY w.created_at DESC, w.id DESC",
            )
            .map_err(store_error)?;
        let rows = stmt
            .query_map(params![principal.user_id()], entry_from_row)
            .map_err(store_error)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(store_error)
    }

    fn list_sds_metadata(
        &self,
        _principal: &Principal,
        product_ids: &[String],
    ) -> Result<Vec<SdsMetadataRecord>, RegisterError> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = (1..=product_ids.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT product_id, vendor, issue_date, hazardous_substance, dangerous_good,
                    dangerous_goods_class, packing_group, subsidiary_risks, description, created_at
             FROM sds_metadata
             WHERE product_id IN ({placeholders})
             ORDER BY created_at ASC, rowid ASC"
        );

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql).map_err(store_error)?;
        let rows = stmt
            .query_map(params_from_iter(product_ids.iter()), |row| {
                let created_at: Option<String> = row.get(9)?;
                Ok(SdsMetadataRecord {
                    product_id: row.get(0)?,
                    vendor: row.get(1)?,
                    issue_date: row.get(2)?,
                    hazardous_substance: row.get(3)?,
                    dangerous_good: row.get(4)?,
                    dangerous_goods_class: row.get(5)?,
                    packing_group: row.get(6)?,
                    subsidiary_risks: row.get(7)?,
                    description: row.get(8)?,
                    created_at: created_at.as_deref().and_then(parse_instant),
                })
            })
            .map_err(store_error)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(store_error)
    }

    fn find_product_by_name(
        &self,
        _principal: &Principal,
        name: &str,
    ) -> Result<Option<Product>, RegisterError> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT id, name, sds_url FROM products
             WHERE name_key = ?1
             ORDER BY rowid
             LIMIT 1",
            params![name_key(name)],
            |row| {
                Ok(Product {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    sds_url: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(store_error)
    }

    fn insert_product(
        &self,
        _principal: &Principal,
        name: &str,
        sds_url: Option<&str>,
    ) -> Result<Product, RegisterError> {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            sds_url: sds_url.map(str::to_string),
        };
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO products (id, name, name_key, sds_url) VALUES (?1, ?2, ?3, ?4)",
            params![&product.id, &product.name, name_key(name), &product.sds_url],
        )
            .map_err(store_error)?;
        debug!("created product {} ({})", product.name, product.id);
        Ok(product)
    }

    /// On conflict only the columns the add form supplies are replaced;
    /// `created_at`, `subsidiary_risks` and `description` keep their values.
    fn upsert_watch_list_entry(
        &self,
        principal: &Principal,
        product_id: &str,
        inline: &InlineSdsSnapshot,
    ) -> Result<i64, RegisterError> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let conn = self.lock()?;
        conn.query_row(
            "INSERT INTO user_chemical_watch_list (
                 user_id, product_id, created_at, sds_issue_date, hazardous_substance,
                 dangerous_good, dangerous_goods_class, packing_group, subsidiary_risks, description
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
             ON CONFLICT (user_id, product_id) DO UPDATE SET
                 sds_issue_date = excluded.sds_issue_date,
                 hazardous_substance = excluded.hazardous_substance,
                 dangerous_good = excluded.dangerous_good,
                 dangerous_goods_class = excluded.dangerous_goods_class,
                 packing_group = excluded.packing_group
             RETURNING id",
            params![
                principal.user_id(),
                product_id,
                created_at,
                &inline.issue_date,
                inline.hazardous_substance,
                inline.dangerous_good,
                &inline.dangerous_goods_class,
                &inline.packing_group,
                &inline.subsidiary_risks,
                &inline.description,
            ],
            |row| row.get(0),
        )
        .map_err(store_error)
    }

    fn delete_watch_list_entry(&self, principal: &Principal, entry_id: i64) -> Result<(), RegisterError> {
        let conn = self.lock()?;
        let removed = conn
            .execute(
                "DELETE FROM user_chemical_watch_list WHERE id = ?1 AND user_id = ?2",
                params![entry_id, principal.user_id()],
            )
            .map_err(store_error)?;
        if removed == 0 {
            debug!("delete of watch-list entry {entry_id} matched no visible row");
        }
        Ok(())
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<WatchListEntry> {
    let created_at: Option<String> = row.get(1)?;
    let product_id: Option<String> = row.get(9)?;
    let product = match product_id {
        Some(id) => Some(Product {
            id,
            name: row.get::<_, Option<String>>(10)?.unwrap_or_default(),
            sds_url: row.get(11)?,
        }),
        None => None,
    };
    Ok(WatchListEntry {
        id: row.get(0)?,
        product,
        created_at: created_at.as_deref().and_then(parse_instant),
        inline: InlineSdsSnapshot {
            issue_date: row.get(2)?,
            hazardous_substance: row.get(3)?,
            dangerous_good: row.get(4)?,
            dangerous_goods_class: row.get(5)?,
            packing_group: row.get(6)?,
            subsidiary_risks: row.get(7)?,
            description: row.get(8)?,
        },
    })
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn store_error(err: rusqlite::Error) -> RegisterError {
    RegisterError::Store(err.to_string())
}
