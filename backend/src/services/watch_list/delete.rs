//! `DELETE /api/watch-list/{entry_id}`.
//!
//! Confirmation happens in the browser before this is called. The server
//! issues a single delete by id and answers `204 No Content`.

use crate::services::error_response;
use crate::session::Principal;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use log::{info, warn};

pub(crate) async fn process(
    state: web::Data<AppState>,
    principal: Principal,
    entry_id: web::Path<i64>,
) -> impl Responder {
    let entry_id = entry_id.into_inner();
    match state.store.delete_watch_list_entry(&principal, entry_id) {
        Ok(()) => {
            info!("{} removed watch-list entry {}", principal.user_id(), entry_id);
            HttpResponse::NoContent().finish()
        }
        Err(err) => {
            warn!("deleting watch-list entry {} failed: {}", entry_id, err);
            error_response(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::services::watch_list::add::add_chemical;
    use crate::services::watch_list::configure_routes;
    use crate::services::watch_list::list::load_watch_list;
    use crate::session::{Principal, USER_HEADER};
    use crate::state::AppState;
    use crate::store::SqliteStore;
    use actix_web::{test as actix_test, web, App};
    use common::requests::AddChemicalRequest;
    use std::sync::Arc;

    #[actix_web::test]
    async fn delete_removes_the_entry() {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        let alice = Principal::new("alice");
        let added = add_chemical(
            store.as_ref(),
            &alice,
            AddChemicalRequest {
                product_name: "Ethanol".into(),
                ..Default::default()
            },
        )
        .unwrap();
        let state = AppState::new(store.clone(), AppConfig::default());
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = actix_test::TestRequest::delete()
            .uri(&format!("/api/watch-list/{}", added.entry_id))
            .insert_header((USER_HEADER, "alice"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);
        assert!(load_watch_list(store.as_ref(), &alice).unwrap().is_empty());
    }

    #[actix_web::test]
    async fn non_numeric_id_is_rejected() {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(store, AppConfig::default())))
                .service(configure_routes()),
        )
        .await;

        let req = actix_test::TestRequest::delete()
            .uri("/api/watch-list/abc")
            .insert_header((USER_HEADER, "alice"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
