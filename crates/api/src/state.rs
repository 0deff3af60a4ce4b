use std::sync::Arc;

use cachewise_store::JsonFileStore;

use crate::background::performance_monitor::PerformanceMonitor;
use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Local key-value store (dashboard probe history).
    pub store: Arc<JsonFileStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (browser clients).
    pub ws_manager: Arc<WsManager>,
    /// Performance monitor state and ticker.
    pub monitor: Arc<PerformanceMonitor>,
}

impl AppState {
    /// Wire up state from configuration, opening the store at
    /// `config.store_path`.
    pub fn new(config: ServerConfig, ws_manager: Arc<WsManager>) -> Self {
        let store = Arc::new(cachewise_store::open_store(&config.store_path));
        let monitor = Arc::new(PerformanceMonitor::new(
            config.monitor_interval(),
            Arc::clone(&ws_manager),
        ));
        Self {
            store,
            config: Arc::new(config),
            ws_manager,
            monitor,
        }
    }
}
