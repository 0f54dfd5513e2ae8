//! Shared application state injected into every handler as `web::Data`.

use crate::config::AppConfig;
use crate::store::RegisterStore;
use std::sync::Arc;

/// Cheap to clone: the store and configuration are shared, and the HTTP
/// client is reference counted internally.
#[derive(Clone)]
pub struct AppState {
    /// The data store every watch-list operation goes through.
    pub store: Arc<dyn RegisterStore>,
    pub config: Arc<AppConfig>,
    /// Client used by the update proxy for the outbound parse request.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(store: Arc<dyn RegisterStore>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}
