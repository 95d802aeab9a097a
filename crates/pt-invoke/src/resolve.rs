//! Startup resolution of the simulation binary.

use std::path::{Path, PathBuf};

use crate::error::{InvokeError, InvokeResult};

/// Environment override for the simulation binary path.
pub const SIM_ENV_VAR: &str = "PIDTUNE_SIM";

#[cfg(windows)]
const SIM_BINARY: &str = "pid_simulation.exe";
#[cfg(not(windows))]
const SIM_BINARY: &str = "pid_simulation";

/// Locate the simulation binary.
///
/// `PIDTUNE_SIM` wins when set; otherwise the platform binary name is looked
/// up next to the current executable. Called once at startup; absence here is
/// fatal, not a per-invocation condition.
pub fn resolve_executable() -> InvokeResult<PathBuf> {
    if let Some(path) = std::env::var_os(SIM_ENV_VAR) {
        return existing(PathBuf::from(path));
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    resolve_in(&exe_dir)
}

/// Resolution against an explicit directory.
pub fn resolve_in(dir: &Path) -> InvokeResult<PathBuf> {
    existing(dir.join(SIM_BINARY))
}

fn existing(path: PathBuf) -> InvokeResult<PathBuf> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(InvokeError::ExecutableNotFound { path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pt-invoke-resolve-{tag}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn resolve_in_finds_present_binary() {
        let dir = scratch_dir("present");
        std::fs::write(dir.join(SIM_BINARY), b"").unwrap();
        let path = resolve_in(&dir).unwrap();
        assert_eq!(path, dir.join(SIM_BINARY));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn resolve_in_reports_missing_binary() {
        let dir = scratch_dir("missing");
        let err = resolve_in(&dir).unwrap_err();
        assert!(matches!(err, InvokeError::ExecutableNotFound { .. }));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
