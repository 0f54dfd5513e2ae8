//! State machine behind the watch-list page.
//!
//! The page never performs I/O itself. Every user action and every finished
//! request is fed in as a method call, and the method returns the
//! [`Command`]s the caller must run (HTTP calls, timers, reloads). Loaded rows
//! are always replaced wholesale; a reload is the only way the table changes
//! after a mutation. Reloads are not cancelled, so whichever one resolves
//! last is what the table shows.

use crate::error::RegisterError;
use crate::model::merged::MergedViewRow;
use crate::requests::{AddChemicalRequest, AddChemicalResponse, UpdateSdsRequest};
use crate::watch_list::activity::RowActivity;
use crate::watch_list::form::AddChemicalForm;
use crate::watch_list::sort::{sort_rows, SortKey, SortState};
use crate::watch_list::status::{
    StatusMessage, REPARSE_REFRESH_DELAY_MS, STATUS_CLEAR_DELAY_MS,
};

/// Side effect requested by the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Load the merged watch list now.
    Fetch,
    /// Load the merged watch list after the given delay in milliseconds.
    FetchAfter(u32),
    Add(AddChemicalRequest),
    Delete { id: i64 },
    Reparse(UpdateSdsRequest),
    /// Clear the status banner after the given delay in milliseconds.
    ClearStatusAfter(u32),
}

#[derive(Debug, Clone)]
pub struct WatchListPage {
    rows: Vec<MergedViewRow>,
    pub sort: SortState,
    pub activity: RowActivity,
    pub form: AddChemicalForm,
    pub status: Option<StatusMessage>,
    pub loading: bool,
    pub load_error: Option<String>,
}

impl Default for WatchListPage {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchListPage {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            sort: SortState::default(),
            activity: RowActivity::default(),
            form: AddChemicalForm::default(),
            status: None,
            loading: true,
            load_error: None,
        }
    }

    pub fn rows(&self) -> &[MergedViewRow] {
        &self.rows
    }

    /// Rows in the currently selected order.
    pub fn visible_rows(&self) -> Vec<MergedViewRow> {
        sort_rows(&self.rows, self.sort)
    }

    pub fn row(&self, entry_id: i64) -> Option<&MergedViewRow> {
        self.rows.iter().find(|row| row.id == entry_id)
    }

    pub fn reload(&mut self) -> Vec<Command> {
        self.loading = true;
        vec![Command::Fetch]
    }

    /// Applies a finished load. A failed load keeps the previous rows.
    pub fn rows_loaded(&mut self, result: Result<Vec<MergedViewRow>, RegisterError>) {
        self.loading = false;
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.load_error = None;
            }
            Err(err) => self.load_error = Some(err.to_string()),
        }
    }

    pub fn select_sort(&mut self, key: SortKey) {
        self.sort = self.sort.select(key);
    }

    pub fn submit_add(&mut self) -> Vec<Command> {
        if self.activity.is_adding() {
            return Vec::new();
        }
        match self.form.to_request() {
            Ok(request) => {
                self.activity.begin_add();
                vec![Command::Add(request)]
            }
            Err(err) => self.show(StatusMessage::error(err.to_string())),
        }
    }

    pub fn add_finished(
        &mut self,
        result: Result<AddChemicalResponse, RegisterError>,
    ) -> Vec<Command> {
        self.activity.finish_add();
        match result {
            Ok(_) => {
                let name = self.form.product_name.trim().to_string();
                self.form.reset();
                let mut commands = self.reload();
                commands.extend(self.show(StatusMessage::info(format!(
                    "Added {name} to the watch list."
                ))));
                commands
            }
            Err(err) => self.show(StatusMessage::from_error("Failed to add chemical", &err)),
        }
    }

    /// Text for the confirmation prompt shown before a delete.
    pub fn delete_prompt(&self, entry_id: i64) -> Option<String> {
        self.row(entry_id).map(|row| {
            format!("Remove \"{}\" from your watch list?", row.product_name)
        })
    }

    /// Starts a delete. Nothing happens unless the user confirmed or the row
    /// is already busy.
    pub fn request_delete(&mut self, entry_id: i64, confirmed: bool) -> Vec<Command> {
        if !confirmed {
            return Vec::new();
        }
        let Some(row) = self.row(entry_id).cloned() else {
            return Vec::new();
        };
        if !self.activity.begin_delete(&row) {
            return Vec::new();
        }
        vec![Command::Delete { id: entry_id }]
    }

    pub fn delete_finished(
        &mut self,
        entry_id: i64,
        result: Result<(), RegisterError>,
    ) -> Vec<Command> {
        self.activity.finish_delete(entry_id);
        match result {
            Ok(()) => {
                let mut commands = self.reload();
                commands.extend(self.show(StatusMessage::info("Chemical removed.")));
                commands
            }
            Err(err) => self.show(StatusMessage::from_error("Failed to delete chemical", &err)),
        }
    }

    /// Starts a re-parse of the row's SDS. Rows without an SDS URL cannot be
    /// re-parsed and are ignored.
    pub fn request_reparse(&mut self, entry_id: i64) -> Vec<Command> {
        let Some(row) = self.row(entry_id).cloned() else {
            return Vec::new();
        };
        if !row.can_reparse() || !self.activity.begin_update(&row) {
            return Vec::new();
        }
        self.status = None;
        let product_id = row.product_id.unwrap_or_default();
        vec![Command::Reparse(UpdateSdsRequest {
            product_id,
            pdf_url: row.sds_url,
        })]
    }

    pub fn reparse_finished(
        &mut self,
        product_id: &str,
        result: Result<(), RegisterError>,
    ) -> Vec<Command> {
        self.activity.finish_update(product_id);
        match result {
            Ok(()) => {
                let mut commands = vec![Command::FetchAfter(REPARSE_REFRESH_DELAY_MS)];
                commands.extend(self.show(StatusMessage::info(
                    "SDS parsed successfully. Refreshing…",
                )));
                commands
            }
            Err(err) => self.show(StatusMessage::error(err.to_string())),
        }
    }

    /// Called by the status timer. Clears whatever message is showing, even
    /// one set by a later operation.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    fn show(&mut self, message: StatusMessage) -> Vec<Command> {
        self.status = Some(message);
        vec![Command::ClearStatusAfter(STATUS_CLEAR_DELAY_MS)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watch_list::form::FormField;
    use crate::watch_list::status::StatusKind;

    fn row(id: i64, name: &str, sds_url: Option<&str>) -> MergedViewRow {
        MergedViewRow {
            id,
            product_id: Some(format!("p{id}")),
            product_name: name.to_string(),
            sds_url: sds_url.map(str::to_string),
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

    fn loaded_page() -> WatchListPage {
        let mut page = WatchListPage::new();
        page.rows_loaded(Ok(vec![
            row(1, "Acetone", Some("https://sds.example/acetone.pdf")),
            row(2, "Toluene", None),
        ]));
        page
    }

    #[test]
    fn delete_without_confirmation_does_nothing() {
        let mut page = loaded_page();
        assert!(page.request_delete(1, false).is_empty());
        assert!(!page.activity.is_deleting(1));
    }

    #[test]
    fn confirmed_delete_issues_one_call_and_one_reload() {
        let mut page = loaded_page();
        assert_eq!(page.request_delete(1, true), vec![Command::Delete { id: 1 }]);
        assert!(page.activity.is_deleting(1));

        let commands = page.delete_finished(1, Ok(()));
        let fetches = commands.iter().filter(|c| **c == Command::Fetch).count();
        assert_eq!(fetches, 1);
        assert!(!page.activity.is_deleting(1));
        assert!(page.loading);
    }

    #[test]
    fn failed_delete_surfaces_the_store_message() {
        let mut page = loaded_page();
        page.request_delete(1, true);
        let commands = page.delete_finished(1, Err(RegisterError::Store("row is locked".into())));
        assert_eq!(commands, vec![Command::ClearStatusAfter(STATUS_CLEAR_DELAY_MS)]);
        let status = page.status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.ends_with("row is locked"));
    }

    #[test]
    fn reparse_is_not_attempted_without_sds_url() {
        let mut page = loaded_page();
        assert!(page.request_reparse(2).is_empty());
    }

    #[test]
    fn reparse_success_schedules_a_delayed_reload() {
        let mut page = loaded_page();
        let commands = page.request_reparse(1);
        assert_eq!(
            commands,
            vec![Command::Reparse(UpdateSdsRequest {
                product_id: "p1".into(),
                pdf_url: Some("https://sds.example/acetone.pdf".into()),
            })]
        );
        // The row is locked for a delete while the re-parse runs.
        assert!(page.request_delete(1, true).is_empty());

        let commands = page.reparse_finished("p1", Ok(()));
        assert_eq!(
            commands,
            vec![
                Command::FetchAfter(REPARSE_REFRESH_DELAY_MS),
                Command::ClearStatusAfter(STATUS_CLEAR_DELAY_MS),
            ]
        );
        assert!(!page.activity.is_updating("p1"));
    }

    #[test]
    fn add_validation_error_never_submits() {
        let mut page = loaded_page();
        page.form.open();
        let commands = page.submit_add();
        assert_eq!(commands, vec![Command::ClearStatusAfter(STATUS_CLEAR_DELAY_MS)]);
        assert!(page.status.as_ref().is_some_and(StatusMessage::is_error));
        assert!(!page.activity.is_adding());
    }

    #[test]
    fn successful_add_resets_form_and_reloads() {
        let mut page = loaded_page();
        page.form.open();
        page.form.set_field(FormField::ProductName, "Xylene".into());
        let commands = page.submit_add();
        assert!(matches!(commands.as_slice(), [Command::Add(req)] if req.product_name == "Xylene"));
        assert!(page.submit_add().is_empty());

        let commands = page.add_finished(Ok(AddChemicalResponse {
            product_id: "p9".into(),
            entry_id: 9,
            created_product: true,
        }));
        assert!(commands.contains(&Command::Fetch));
        assert!(!page.form.open);
        assert!(page.form.product_name.is_empty());
        assert!(!page.activity.is_adding());
    }

    #[test]
    fn failed_load_keeps_previous_rows() {
        let mut page = loaded_page();
        page.reload();
        page.rows_loaded(Err(RegisterError::Store("permission denied".into())));
        assert_eq!(page.rows().len(), 2);
        assert_eq!(page.load_error.as_deref(), Some("permission denied"));
        assert!(!page.loading);
    }

    #[test]
    fn visible_rows_follow_the_selected_sort() {
        let mut page = loaded_page();
        page.select_sort(SortKey::Name);
        let names: Vec<String> = page
            .visible_rows()
            .into_iter()
            .map(|r| r.product_name)
            .collect();
        assert_eq!(names, vec!["Acetone", "Toluene"]);
        page.select_sort(SortKey::Name);
        let names: Vec<String> = page
            .visible_rows()
            .into_iter()
            .map(|r| r.product_name)
            .collect();
        assert_eq!(names, vec!["Toluene", "Acetone"]);
    }
}
