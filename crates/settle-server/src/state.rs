//! Shared application state handed to every axum handler.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::job_table::JobTable;

#[derive(Clone)]
pub struct AppState {
    pub jobs: JobTable,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            jobs: JobTable::new(),
            config: Arc::new(config),
        }
    }
}
