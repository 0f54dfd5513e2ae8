//! The principal every data-store call runs as.
//!
//! Row visibility is the store's job. Handlers only resolve who is asking and
//! pass that along explicitly; nothing here filters rows by user.

use crate::state::AppState;
use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{web, FromRequest, HttpRequest, HttpResponse};
use common::requests::ErrorBody;
use std::future::{ready, Ready};

/// Header carrying the authenticated user id, set by the fronting auth layer.
pub const USER_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Principal(String);

impl Principal {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self(user_id.into())
    }

    pub fn user_id(&self) -> &str {
        &self.0
    }
}

impl FromRequest for Principal {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve(req).ok_or_else(|| {
            let body = ErrorBody {
                error: "Not signed in".to_string(),
            };
            InternalError::from_response("missing principal", HttpResponse::Unauthorized().json(body))
                .into()
        }))
    }
}

/// Header first, then the configured single-user fallback.
fn resolve(req: &HttpRequest) -> Option<Principal> {
    let from_header = req
        .headers()
        .get(USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(Principal::new);

    from_header.or_else(|| {
        req.app_data::<web::Data<AppState>>()
            .and_then(|state| state.config.default_user.clone())
            .map(Principal::new)
    })
}
