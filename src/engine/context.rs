//! Process-wide context, built once at boot and read-only afterwards.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::data::{BookingService, session_role};
use crate::domain::{GraphModel, ViewRole};

/// Role, graph and remote service for the lifetime of the process.
/// There is no teardown beyond process exit.
#[derive(Clone)]
pub struct AppContext {
    pub role: ViewRole,
    pub graph: Arc<GraphModel>,
    pub service: Arc<dyn BookingService>,
    pub poll_interval_ms: u64,
    pub session_path: PathBuf,
}

impl AppContext {
    pub fn new(
        role: ViewRole,
        graph: GraphModel,
        service: Arc<dyn BookingService>,
        poll_interval_ms: u64,
        session_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            role,
            graph: Arc::new(graph),
            service,
            poll_interval_ms,
            session_path: session_path.into(),
        }
    }
}

/// Command line flag first, then a logged-in session marker, then passenger.
pub fn resolve_role(cli_role: Option<ViewRole>, session_path: &Path) -> ViewRole {
    cli_role
        .or_else(|| session_role(session_path))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SessionMarker, save_session};

    #[test]
    fn role_resolution_order() {
        let path = std::env::temp_dir().join(format!("rail_console_role_{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        assert_eq!(resolve_role(None, &path), ViewRole::Passenger);

        save_session(
            &path,
            &SessionMarker {
                is_logged_in: true,
                user_role: ViewRole::Admin,
            },
        )
        .unwrap();
        assert_eq!(resolve_role(None, &path), ViewRole::Admin);
        assert_eq!(resolve_role(Some(ViewRole::Passenger), &path), ViewRole::Passenger);

        std::fs::remove_file(&path).unwrap();
    }
}
