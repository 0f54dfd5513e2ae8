//! SDS re-parse relay.
//!
//! `POST /api/update-sds` forwards a single request to the external parsing
//! service, which fetches the product's SDS PDF and writes a fresh
//! `sds_metadata` row. See `update` for the exact contract.

use actix_web::web::{post, scope};
use actix_web::Scope;

mod update;

const API_PATH: &str = "/api/update-sds";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(update::process))
}
