//! Reconciles watch-list rows with normalized SDS metadata.
//!
//! The metadata table is authoritative. A record, when present, is used in
//! full, including fields that are `None`. The inline snapshot on the
//! watch-list row is only a fallback for products that have no record yet.

use crate::model::merged::MergedViewRow;
use crate::model::sds_metadata::SdsMetadataRecord;
use crate::model::watch_list::WatchListEntry;
use std::collections::{HashMap, HashSet};

/// Distinct product ids referenced by `entries`, in first-seen order.
/// Entries without a resolved product are skipped.
pub fn referenced_product_ids(entries: &[WatchListEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter_map(WatchListEntry::product_id)
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect()
}

/// Indexes records by product id. Later duplicates replace earlier ones.
pub fn index_metadata(records: Vec<SdsMetadataRecord>) -> HashMap<String, SdsMetadataRecord> {
    let mut by_product = HashMap::with_capacity(records.len());
    for record in records {
        by_product.insert(record.product_id.clone(), record);
    }
    by_product
}

pub fn merge_entry(
    entry: WatchListEntry,
    metadata: &HashMap<String, SdsMetadataRecord>,
) -> MergedViewRow {
    let record = entry
        .product_id()
        .and_then(|product_id| metadata.get(product_id));
    let (product_id, product_name, sds_url) = match entry.product {
        Some(product) => (Some(product.id), product.name, product.sds_url),
        None => (None, String::new(), None),
    };

    match record {
        Some(record) => MergedViewRow {
            id: entry.id,
            product_id,
            product_name,
            sds_url,
            created_at: entry.created_at,
            vendor: record.vendor.clone(),
            issue_date: record.issue_date.clone(),
            hazardous_substance: record.hazardous_substance,
            dangerous_good: record.dangerous_good,
            dangerous_goods_class: record.dangerous_goods_class.clone(),
            packing_group: record.packing_group.clone(),
            subsidiary_risks: record.subsidiary_risks.clone(),
            description: record.description.clone(),
            has_metadata_record: true,
        },
        None => {
            let inline = entry.inline;
            MergedViewRow {
                id: entry.id,
                product_id,
                product_name,
                sds_url,
                created_at: entry.created_at,
                vendor: None,
                issue_date: inline.issue_date,
                hazardous_substance: inline.hazardous_substance,
                dangerous_good: inline.dangerous_good,
                dangerous_goods_class: inline.dangerous_goods_class,
                packing_group: inline.packing_group,
                subsidiary_risks: inline.subsidiary_risks,
                description: inline.description,
                has_metadata_record: false,
            }
        }
    }
}

/// Merges every entry, keeping the input order.
pub fn merge_rows(
    entries: Vec<WatchListEntry>,
    metadata: &HashMap<String, SdsMetadataRecord>,
) -> Vec<MergedViewRow> {
    entries
        .into_iter()
        .map(|entry| merge_entry(entry, metadata))
        .collect()
}
