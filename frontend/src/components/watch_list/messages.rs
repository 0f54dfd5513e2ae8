use common::error::RegisterError;
use common::model::merged::MergedViewRow;
use common::requests::AddChemicalResponse;
use common::watch_list::form::FormField;
use common::watch_list::sort::SortKey;

pub enum Msg {
    Reload,
    Loaded(Result<Vec<MergedViewRow>, RegisterError>),
    SortBy(SortKey),
    OpenForm,
    CloseForm,
    SetField(FormField, String),
    SetHazardous(bool),
    SetDangerousGood(bool),
    SubmitAdd,
    AddFinished(Result<AddChemicalResponse, RegisterError>),
    /// Delete button pressed for a watch-list entry; confirmation follows.
    Delete(i64),
    DeleteFinished(i64, Result<(), RegisterError>),
    /// "Update SDS" pressed for a watch-list entry.
    Reparse(i64),
    ReparseFinished(String, Result<(), RegisterError>),
    ClearStatus,
}
