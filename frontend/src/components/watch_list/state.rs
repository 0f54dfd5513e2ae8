use common::watch_list::page::WatchListPage;

/// Main state container for the `WatchListComponent`.
pub struct WatchListComponent {
    /// Rows, sort order, busy flags, form values and the status banner.
    pub page: WatchListPage,

    /// Guard to avoid requesting the initial load more than once.
    pub loaded: bool,
}

impl WatchListComponent {
    pub fn new() -> Self {
        Self {
            page: WatchListPage::new(),
            loaded: false,
        }
    }
}
