//! A user's tracked chemicals.
//!
//! Each `WatchListEntry` links the owning user (enforced by the store, never
//! visible here) to exactly one `Product` and carries an inline SDS snapshot
//! that was captured when the chemical was added. The snapshot is only used
//! when no `SdsMetadataRecord` exists for the product.

use crate::model::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// SDS fields stored directly on a watch-list row.
///
/// There is no vendor field: the add form never persisted one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineSdsSnapshot {
    pub issue_date: Option<String>,
    pub hazardous_substance: Option<bool>,
    pub dangerous_good: Option<bool>,
    pub dangerous_goods_class: Option<String>,
    pub packing_group: Option<String>,
    pub subsidiary_risks: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchListEntry {
    pub id: i64,
    /// The referenced product. `None` only when the join came back empty,
    /// in which case the row still renders with a blank name.
    pub product: Option<Product>,
    pub created_at: Option<DateTime<Utc>>,
    pub inline: InlineSdsSnapshot,
}

impl WatchListEntry {
    pub fn product_id(&self) -> Option<&str> {
        self.product.as_ref().map(|p| p.id.as_str())
    }
}
