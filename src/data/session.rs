//! Local session markers left by the entry screen.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::ViewRole;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionMarker {
    pub is_logged_in: bool,
    pub user_role: ViewRole,
}

/// Reads the marker file. A missing file is not an error.
pub fn load_session(path: &Path) -> Result<Option<SessionMarker>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading session marker {}", path.display()))?;
    let marker = serde_json::from_str(&text)
        .with_context(|| format!("parsing session marker {}", path.display()))?;
    Ok(Some(marker))
}

pub fn save_session(path: &Path, marker: &SessionMarker) -> Result<()> {
    let text = serde_json::to_string_pretty(marker)?;
    std::fs::write(path, text)
        .with_context(|| format!("writing session marker {}", path.display()))
}

/// Logout: removes the marker so the next start falls back to the entry screen
pub fn clear_session(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("removing session marker {}", path.display())),
    }
}

/// Role of a logged-in session, if any
pub fn session_role(path: &Path) -> Option<ViewRole> {
    match load_session(path) {
        Ok(Some(marker)) if marker.is_logged_in => Some(marker.user_role),
        Ok(_) => None,
        Err(e) => {
            log::warn!("⚠️  Ignoring unreadable session marker: {:#}", e);
            None
        }
    }
}
