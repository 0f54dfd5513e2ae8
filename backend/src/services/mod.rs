//! HTTP API of the register.
//!
//! - `watch_list`: read the merged watch list, add a chemical, delete an entry.
//! - `sds`: relay a "re-parse this product's SDS" request to the parsing service.
//!
//! Every failure is answered with a JSON body `{ "error": "..." }`.

pub mod sds;
pub mod watch_list;

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::error::RegisterError;
use common::requests::ErrorBody;

/// JSON extractor settings shared by all routes: 1 MB bodies, and malformed
/// payloads answered in the same `{ "error": ... }` shape as other failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(1024 * 1024)
        .error_handler(|err, _req| {
            let body = ErrorBody {
                error: err.to_string(),
            };
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}

pub(crate) fn error_response(err: &RegisterError) -> HttpResponse {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(ErrorBody {
        error: err.to_string(),
    })
}
