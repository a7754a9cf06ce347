use std::path::PathBuf;
use strip_core::LinkSource;

/// Connectivity probe: connected when any non-loopback interface's sysfs
/// `operstate` reads `"up"`.
#[derive(Debug, Clone)]
pub struct SysfsLink {
    root: PathBuf,
}

impl Default for SysfsLink {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/sys/class/net"),
        }
    }
}

impl SysfsLink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe rooted at `root` instead of the live sysfs tree.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl LinkSource for SysfsLink {
    fn connected(&self) -> bool {
        let Ok(entries) = std::fs::read_dir(&self.root) else {
            return false;
        };

        for entry in entries.flatten() {
            if entry.file_name() == "lo" {
                continue;
            }
            if let Ok(state) = std::fs::read_to_string(entry.path().join("operstate")) {
                if state.trim() == "up" {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iface(root: &std::path::Path, name: &str, state: &str) {
        let dir = root.join(name);
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("operstate"), state).unwrap();
    }

    #[test]
    fn up_interface_means_connected() {
        let dir = tempfile::tempdir().unwrap();
        iface(dir.path(), "wlan0", "up\n");
        assert!(SysfsLink::with_root(dir.path()).connected());
    }

    #[test]
    fn loopback_does_not_count() {
        let dir = tempfile::tempdir().unwrap();
        iface(dir.path(), "lo", "up\n");
        iface(dir.path(), "eth0", "down\n");
        assert!(!SysfsLink::with_root(dir.path()).connected());
    }

    #[test]
    fn missing_tree_reads_disconnected() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("absent");
        assert!(!SysfsLink::with_root(root).connected());
    }
}
