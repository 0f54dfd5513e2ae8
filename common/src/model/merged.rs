use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One watch-list row joined to its product and its effective SDS snapshot.
///
/// This is the only row shape the browser sees. It is derived on every load
/// and never persisted. The SDS fields come from the product's
/// `SdsMetadataRecord` when one exists, otherwise from the inline snapshot on
/// the watch-list row (and `vendor` is then always `None`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedViewRow {
    /// Watch-list entry id.
    pub id: i64,
    pub product_id: Option<String>,
    /// Product display name, empty when the product could not be resolved.
    pub product_name: String,
    pub sds_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub vendor: Option<String>,
    pub issue_date: Option<String>,
    pub hazardous_substance: Option<bool>,
    pub dangerous_good: Option<bool>,
    pub dangerous_goods_class: Option<String>,
    pub packing_group: Option<String>,
    pub subsidiary_risks: Option<String>,
    pub description: Option<String>,
    /// `true` when the SDS fields above come from a metadata record.
    pub has_metadata_record: bool,
}

impl MergedViewRow {
    /// Whether the "Update SDS" action can be offered for this row.
    pub fn can_reparse(&self) -> bool {
        self.product_id.is_some()
            && self
                .sds_url
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty())
    }
}
