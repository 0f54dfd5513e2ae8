mod config;
mod services;
mod session;
mod state;
mod store;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::store::SqliteStore;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let dotenv = dotenvy::dotenv();
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    let config = AppConfig::from_env().map_err(|e| io::Error::other(e.to_string()))?;
    for warning in config.startup_warnings() {
        warn!("{}", warning);
    }

    let store = SqliteStore::open(&config.database_path)
        .map_err(|e| io::Error::other(format!("opening {}: {}", config.database_path, e)))?;
    info!("Using database {}", config.database_path);

    let url = config.url();
    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let bind = (config.host.clone(), config.port);
    let state = AppState::new(Arc::new(store), config);

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(services::json_config())
            .app_data(web::Data::new(state.clone()))
            .service(services::watch_list::configure_routes())
            .service(services::sds::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind(bind)?
        .run()
        .await
}
