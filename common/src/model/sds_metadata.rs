use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized SDS metadata written by the external parsing backend.
///
/// At most one record is meaningful per product. When a query returns
/// duplicates, the last one seen wins (see `watch_list::merge::index_metadata`).
/// This app only ever reads these rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdsMetadataRecord {
    pub product_id: String,
    pub vendor: Option<String>,
    pub issue_date: Option<String>,
    pub hazardous_substance: Option<bool>,
    pub dangerous_good: Option<bool>,
    pub dangerous_goods_class: Option<String>,
    pub packing_group: Option<String>,
    pub subsidiary_risks: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
