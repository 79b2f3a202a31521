//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, the folder
//! Zellij was started from. Commands started with `run_command` run on the
//! host in that same folder, so a sandbox path becomes a host path by
//! dropping the mount prefix.

use std::path::{Path, PathBuf};

/// Name of the OTLP trace file inside [`get_data_dir`].
pub const TRACE_FILE_NAME: &str = "tie-archive-otlp.json";

const HOST_MOUNT: &str = "/host";

/// Returns the plugin's data directory as seen from the sandbox.
///
/// Typically `~/.local/share/zellij/tie-archive` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_MOUNT).join(".local/share/zellij").join("tie-archive")
}

/// Converts a configured document path into one a host command can open.
///
/// ```
/// use std::path::Path;
/// use tie_archive::infrastructure::host_path;
///
/// assert_eq!(host_path(Path::new("/host/archive/a.pdf")), Path::new("archive/a.pdf"));
/// assert_eq!(host_path(Path::new("articles/a.pdf")), Path::new("articles/a.pdf"));
/// ```
#[must_use]
pub fn host_path(path: &Path) -> PathBuf {
    path.strip_prefix(HOST_MOUNT)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_under_host_share() {
        assert_eq!(get_data_dir(), Path::new("/host/.local/share/zellij/tie-archive"));
    }

    #[test]
    fn only_the_whole_mount_component_is_stripped() {
        assert_eq!(host_path(Path::new("/host")), Path::new(""));
        assert_eq!(host_path(Path::new("/hostile/a.pdf")), Path::new("/hostile/a.pdf"));
        assert_eq!(host_path(Path::new("/srv/host/a.pdf")), Path::new("/srv/host/a.pdf"));
    }
}
