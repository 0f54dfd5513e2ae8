//! Watch-list endpoints.
//!
//! All routes resolve the calling [`Principal`](crate::session::Principal)
//! and hand it to the store; visibility is decided there.
//!
//! - `GET /api/watch-list`: merged rows, newest first (`list`).
//! - `POST /api/watch-list`: add a chemical, creating its product if needed (`add`).
//! - `DELETE /api/watch-list/{entry_id}`: remove one entry (`delete`).

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

mod add;
mod delete;
mod list;

const API_PATH: &str = "/api/watch-list";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(add::process))
        .route("/{entry_id}", delete().to(delete::process))
}
