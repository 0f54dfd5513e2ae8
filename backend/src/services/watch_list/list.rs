//! # Watch-List Loader
//!
//! Builds the rows shown on the watch-list page.
//!
//! 1. Read the caller's watch-list rows joined to their products, newest
//!    first. A failure here is returned to the caller.
//! 2. With no rows, stop. The metadata table is not queried at all.
//! 3. Read the metadata records for the referenced products. This read is
//!    best effort: a failure (for example a missing `sds_metadata` table) is
//!    logged and every row falls back to its inline snapshot.
//! 4. Index the records by product (last one wins) and merge each row.

use crate::services::error_response;
use crate::session::Principal;
use crate::state::AppState;
use crate::store::RegisterStore;
use actix_web::{web, HttpResponse, Responder};
use common::error::RegisterError;
use common::model::merged::MergedViewRow;
use common::watch_list::merge::{index_metadata, merge_rows, referenced_product_ids};
use log::warn;

/// Handler for `GET /api/watch-list`.
pub(crate) async fn process(state: web::Data<AppState>, principal: Principal) -> impl Responder {
    match load_watch_list(state.store.as_ref(), &principal) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => {
            warn!("loading watch list for {} failed: {}", principal.user_id(), err);
            error_response(&err)
        }
    }
}

pub fn load_watch_list(
    store: &dyn RegisterStore,
    principal: &Principal,
) -> Result<Vec<MergedViewRow>, RegisterError> {
    let entries = store.list_watch_list(principal)?;
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let product_ids = referenced_product_ids(&entries);
    let records = if product_ids.is_empty() {
        Vec::new()
    } else {
        match store.list_sds_metadata(principal, &product_ids) {
            Ok(records) => records,
            Err(err) => {
                warn!("SDS metadata unavailable, using inline snapshots: {}", err);
                Vec::new()
            }
        }
    };

    let metadata = index_metadata(records);
    Ok(merge_rows(entries, &metadata))
}
