//! # Add Chemical
//!
//! `POST /api/watch-list` with an [`AddChemicalRequest`] body.
//!
//! 1. Validate: the product name is required (trimmed).
//! 2. Look up an existing product by case-insensitive exact name.
//! 3. If none exists, create one with the given name and SDS URL.
//! 4. Upsert the watch-list row for (caller, product). Submitting the same
//!    product again updates the inline snapshot instead of adding a row,
//!    so a retried request is harmless.
//!
//! An existing product is reused as-is; a different SDS URL in the request
//! does not overwrite the product's URL.

use crate::services::error_response;
use crate::session::Principal;
use crate::state::AppState;
use crate::store::RegisterStore;
use actix_web::{web, HttpResponse, Responder};
use common::error::RegisterError;
use common::model::watch_list::InlineSdsSnapshot;
use common::requests::{AddChemicalRequest, AddChemicalResponse};
use log::{info, warn};

pub(crate) async fn process(
    state: web::Data<AppState>,
    principal: Principal,
    payload: web::Json<AddChemicalRequest>,
) -> impl Responder {
    match add_chemical(state.store.as_ref(), &principal, payload.into_inner()) {
        Ok(added) => {
            info!(
                "{} added product {} to watch list (entry {})",
                principal.user_id(),
                added.product_id,
                added.entry_id
            );
            HttpResponse::Created().json(added)
        }
        Err(err) => {
            warn!("adding chemical for {} failed: {}", principal.user_id(), err);
            error_response(&err)
        }
    }
}

pub fn add_chemical(
    store: &dyn RegisterStore,
    principal: &Principal,
    request: AddChemicalRequest,
) -> Result<AddChemicalResponse, RegisterError> {
    let request = request.validate()?;

    let (product, created_product) =
        match store.find_product_by_name(principal, &request.product_name)? {
            Some(product) => (product, false),
            None => {
                let product = store.insert_product(
                    principal,
                    &request.product_name,
                    request.sds_url.as_deref(),
                )?;
                (product, true)
            }
        };

    let inline = InlineSdsSnapshot {
        issue_date: request.issue_date,
        hazardous_substance: Some(request.hazardous),
        dangerous_good: Some(request.dangerous_good),
        dangerous_goods_class: request.dg_class,
        packing_group: request.packing_group,
        subsidiary_risks: None,
        description: None,
    };
    let entry_id = store.upsert_watch_list_entry(principal, &product.id, &inline)?;

    Ok(AddChemicalResponse {
        product_id: product.id,
        entry_id,
        created_product,
    })
}
