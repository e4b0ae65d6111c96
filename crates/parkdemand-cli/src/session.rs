//! Session state persisted as JSON between invocations.

use std::path::Path;

use anyhow::Context;
use parkdemand_core::SidebarState;

/// Read the session file; a missing file is an empty session.
pub(crate) fn load(path: &Path) -> anyhow::Result<SidebarState> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no session file; starting fresh");
            return Ok(SidebarState::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read session {}", path.display()))
        }
    };
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse session {}", path.display()))
}

pub(crate) fn save(path: &Path, state: &SidebarState) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("failed to write session {}", path.display()))
}
