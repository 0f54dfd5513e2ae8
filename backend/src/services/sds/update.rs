//! # Update Proxy
//!
//! Relays "re-parse this product's SDS" to the parsing service.
//!
//! - Inbound: `POST /api/update-sds` with `{ "productId": "...", "pdfUrl": "..." }`.
//! - Outbound: `POST {SDS_BACKEND_URL}/parse-sds` with `{ "product_id": "..." }`.
//!
//! Responses:
//! - `200 { "success": true }` when the parsing service answers 2xx.
//! - `500 { "error": "Backend URL not configured" }` when `SDS_BACKEND_URL` is
//!   unset. No outbound request is made in that case.
//! - The parsing service's own status with its body text as `error` (or
//!   "Failed to trigger parse" when the body is empty) on any other answer.
//! - `500` with the transport error when the request cannot be completed.
//!
//! There are no retries; each call is one round trip at most.

use crate::services::error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::error::RegisterError;
use common::requests::{ParseSdsRequest, UpdateSdsRequest, UpdateSdsResponse};
use log::{debug, info, warn};
use reqwest::Client;

const PARSE_PATH: &str = "/parse-sds";
const GENERIC_FAILURE: &str = "Failed to trigger parse";

pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<UpdateSdsRequest>,
) -> HttpResponse {
    let request = payload.into_inner();
    match request_parse(&state.http, state.config.sds_backend_url.as_deref(), &request).await {
        Ok(()) => {
            info!("SDS parse requested for product {}", request.product_id);
            HttpResponse::Ok().json(UpdateSdsResponse { success: true })
        }
        Err(err) => {
            warn!("SDS parse for product {} failed: {}", request.product_id, err);
            error_response(&err)
        }
    }
}

/// Sends the parse request for `request.product_id`.
///
/// `backend_url` is the parsing service's base URL without a trailing slash.
pub async fn request_parse(
    client: &Client,
    backend_url: Option<&str>,
    request: &UpdateSdsRequest,
) -> Result<(), RegisterError> {
    let backend_url = backend_url.ok_or_else(RegisterError::backend_not_configured)?;
    let product_id = request.product_id.trim();
    if product_id.is_empty() {
        return Err(RegisterError::Validation("productId is required".to_string()));
    }

    let endpoint = format!("{backend_url}{PARSE_PATH}");
    debug!(
        "POST {} for product {} (pdf: {})",
        endpoint,
        product_id,
        request.pdf_url.as_deref().unwrap_or("none")
    );
    let response = client
        .post(&endpoint)
        .json(&ParseSdsRequest {
            product_id: product_id.to_string(),
        })
        .send()
        .await
        .map_err(|err| RegisterError::Network(err.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        body
    };
    Err(RegisterError::Backend {
        status: status.as_u16(),
        message,
    })
}
