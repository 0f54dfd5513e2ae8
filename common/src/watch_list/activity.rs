//! Busy flags for in-flight mutations.
//!
//! Each operation tracks its own work so unrelated rows stay usable: deleting
//! one row never blocks updating another. A single row is locked while any
//! of its own operations is running.

use crate::model::merged::MergedViewRow;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowActivity {
    adding: bool,
    /// Watch-list entry ids with a delete in flight.
    deleting: HashSet<i64>,
    /// Product ids with a re-parse in flight.
    updating: HashSet<String>,
}

impl RowActivity {
    pub fn is_adding(&self) -> bool {
        self.adding
    }

    pub fn is_deleting(&self, entry_id: i64) -> bool {
        self.deleting.contains(&entry_id)
    }

    pub fn is_updating(&self, product_id: &str) -> bool {
        self.updating.contains(product_id)
    }

    /// `true` while any operation on this row is running.
    pub fn is_row_busy(&self, row: &MergedViewRow) -> bool {
        self.is_deleting(row.id)
            || row
                .product_id
                .as_deref()
                .is_some_and(|product_id| self.is_updating(product_id))
    }

    /// Returns `false` if an add is already running.
    pub fn begin_add(&mut self) -> bool {
        if self.adding {
            return false;
        }
        self.adding = true;
        true
    }

    pub fn finish_add(&mut self) {
        self.adding = false;
    }

    /// Returns `false` if the row is busy.
    pub fn begin_delete(&mut self, row: &MergedViewRow) -> bool {
        if self.is_row_busy(row) {
            return false;
        }
        self.deleting.insert(row.id)
    }

    pub fn finish_delete(&mut self, entry_id: i64) {
        self.deleting.remove(&entry_id);
    }

    /// Returns `false` if the row is busy or has no product.
    pub fn begin_update(&mut self, row: &MergedViewRow) -> bool {
        let Some(product_id) = row.product_id.as_deref() else {
            return false;
        };
        if self.is_row_busy(row) {
            return false;
        }
        self.updating.insert(product_id.to_string())
    }

    pub fn finish_update(&mut self, product_id: &str) {
        self.updating.remove(product_id);
    }
}
