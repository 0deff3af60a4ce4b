use std::sync::Arc;
use std::time::Duration;

use crate::ws::manager::WsManager;

const PING_EVERY: Duration = Duration::from_secs(30);

/// Ping monitor feed subscribers every 30 s until the handle is aborted.
///
/// Pinging also prunes subscribers whose socket task has exited.
pub fn start_heartbeat(ws_manager: Arc<WsManager>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(PING_EVERY);
        loop {
            ticker.tick().await;
            let live = ws_manager.ping_all().await;
            tracing::trace!(live, "Monitor feed heartbeat");
        }
    })
}
