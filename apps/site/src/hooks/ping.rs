use dioxus::prelude::*;
use tracing::{info, warn};

use crate::API_CLIENT;

/// Probes `GET /api/` once when the shell mounts. The outcome is only logged.
pub fn use_backend_ping() {
    use_future(move || async move {
        let Some(client) = API_CLIENT.get().cloned() else {
            warn!("backend client not initialized, skipping ping");
            return;
        };

        match client.ping().await {
            Ok(body) => info!("{}", body.message),
            Err(err) => warn!(
                backend = %client.config().backend_url,
                status = ?err.status(),
                "Backend not reachable yet or error on /api/: {err}"
            ),
        }
    });
}
