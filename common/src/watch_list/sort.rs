//! Column sorting for the watch-list table.
//!
//! Sorting never touches the loaded rows; it returns a new ordered copy.
//! Ascending order is a stable sort on the extracted key. Descending order
//! is the exact reverse of ascending, so toggling a column flips the table
//! without re-sorting by anything else.

use crate::model::merged::MergedViewRow;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Vendor,
    IssueDate,
    DateAdded,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Vendor,
        SortKey::IssueDate,
        SortKey::DateAdded,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Product",
            SortKey::Vendor => "Vendor",
            SortKey::IssueDate => "Issue Date",
            SortKey::DateAdded => "Date Added",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The active column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    /// Newest first, matching the order rows are loaded in.
    fn default() -> Self {
        Self {
            key: SortKey::DateAdded,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Header click: the active column toggles, any other column starts ascending.
    pub fn select(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Ascending,
            }
        }
    }
}

pub fn sort_rows(rows: &[MergedViewRow], state: SortState) -> Vec<MergedViewRow> {
    let mut sorted = rows.to_vec();
    // `sort_by_cached_key` is stable, ties keep their input order.
    match state.key {
        SortKey::Name => sorted.sort_by_cached_key(|row| row.product_name.to_lowercase()),
        SortKey::Vendor => sorted.sort_by_cached_key(|row| {
            row.vendor.as_deref().unwrap_or_default().to_lowercase()
        }),
        SortKey::IssueDate => sorted.sort_by_cached_key(issue_instant),
        SortKey::DateAdded => sorted.sort_by_cached_key(added_instant),
    }
    if state.direction == SortDirection::Descending {
        sorted.reverse();
    }
    sorted
}

/// Issue date in epoch milliseconds. Missing or unreadable dates count as
/// the epoch so they sort first when ascending.
fn issue_instant(row: &MergedViewRow) -> i64 {
    row.issue_date
        .as_deref()
        .and_then(parse_instant)
        .map(|instant| instant.timestamp_millis())
        .unwrap_or(0)
}

/// Creation time in epoch milliseconds. Rows without a timestamp use their
/// id as a synthetic instant, which keeps them in insertion order.
fn added_instant(row: &MergedViewRow) -> i64 {
    row.created_at
        .map(|created| created.timestamp_millis())
        .unwrap_or(row.id)
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str) -> MergedViewRow {
        MergedViewRow {
            id,
            product_id: Some(format!("p{id}")),
            product_name: name.to_string(),
            sds_url: None,
            created_at: None,
            vendor: None,
            issue_date: None,
            hazardous_substance: None,
            dangerous_good: None,
            dangerous_goods_class: None,
            packing_group: None,
            subsidiary_risks: None,
            description: None,
            has_metadata_record: false,
        }
    }

    fn ids(rows: &[MergedViewRow]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    fn asc(key: SortKey) -> SortState {
        SortState {
            key,
            direction: SortDirection::Ascending,
        }
    }

    #[test]
    fn names_compare_case_insensitively() {
        let rows = vec![row(1, "toluene"), row(2, "Acetone"), row(3, "benzene")];
        assert_eq!(ids(&sort_rows(&rows, asc(SortKey::Name))), vec![2, 3, 1]);
    }

    #[test]
    fn missing_vendor_sorts_first_ascending() {
        let mut a = row(1, "A");
        a.vendor = Some("Sigma".into());
        let b = row(2, "B");
        let mut c = row(3, "C");
        c.vendor = Some("acme".into());
        let sorted = sort_rows(&[a, b, c], asc(SortKey::Vendor));
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn issue_dates_compare_as_instants() {
        let mut a = row(1, "A");
        a.issue_date = Some("2023-11-02".into());
        let mut b = row(2, "B");
        b.issue_date = Some("2021-01-15T10:00:00Z".into());
        let c = row(3, "C");
        let mut d = row(4, "D");
        d.issue_date = Some("not a date".into());
        let sorted = sort_rows(&[a, b, c, d], asc(SortKey::IssueDate));
        assert_eq!(ids(&sorted), vec![3, 4, 2, 1]);
    }

    #[test]
    fn rows_without_timestamp_keep_insertion_order() {
        let rows = vec![row(12, "x"), row(5, "y"), row(8, "z")];
        let sorted = sort_rows(&rows, asc(SortKey::DateAdded));
        assert_eq!(ids(&sorted), vec![5, 8, 12]);
    }

    #[test]
    fn timestamps_sort_by_date_added() {
        let mut a = row(1, "a");
        a.created_at = parse_instant("2024-03-01T08:00:00Z");
        let mut b = row(2, "b");
        b.created_at = parse_instant("2024-01-01T08:00:00Z");
        let sorted = sort_rows(&[a, b], SortState::default());
        assert_eq!(ids(&sorted), vec![1, 2]);
    }

    #[test]
    fn ties_keep_input_order() {
        let rows = vec![row(3, "same"), row(1, "Same"), row(2, "SAME")];
        assert_eq!(ids(&sort_rows(&rows, asc(SortKey::Name))), vec![3, 1, 2]);
    }

    #[test]
    fn sorting_is_deterministic_and_never_mutates_input() {
        let rows = vec![row(2, "b"), row(1, "a"), row(3, "a")];
        let state = asc(SortKey::Name);
        let first = sort_rows(&rows, state);
        let second = sort_rows(&rows, state);
        assert_eq!(first, second);
        assert_eq!(ids(&rows), vec![2, 1, 3]);
    }

    #[test]
    fn toggling_reverses_exactly() {
        let rows = vec![row(2, "b"), row(1, "a"), row(3, "a"), row(4, "c")];
        let ascending = asc(SortKey::Name);
        let descending = ascending.select(SortKey::Name);
        assert_eq!(descending.direction, SortDirection::Descending);

        let mut expected = sort_rows(&rows, ascending);
        expected.reverse();
        assert_eq!(sort_rows(&rows, descending), expected);
    }

    #[test]
    fn selecting_a_new_key_starts_ascending() {
        let state = SortState::default().select(SortKey::Vendor);
        assert_eq!(state, asc(SortKey::Vendor));
        let state = state.select(SortKey::Vendor).select(SortKey::Name);
        assert_eq!(state, asc(SortKey::Name));
    }
}
