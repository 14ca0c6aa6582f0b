//! WebDriver server binary discovery.
//!
//! Locates a chromedriver or geckodriver executable on the host machine.
//! CI images and developer machines install these in different places, so
//! discovery walks a ladder of candidates and probes each one.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Binaries probed, in preference order.
const DRIVER_NAMES: &[&str] = &["chromedriver", "geckodriver"];

/// Locate a WebDriver server executable.
///
/// The search order is:
/// 1. `WD_DRIVER_EXE` environment variable (runtime override)
/// 2. `chromedriver` / `geckodriver` on `PATH`
/// 3. Common install locations
///
/// The runtime override takes precedence so CI can pin an exact driver build
/// matching the browser it provisions.
///
/// # Errors
///
/// Returns [`Error::DriverNotFound`] when no runnable binary is found in any
/// of the search locations.
pub fn find_driver_executable() -> Result<PathBuf> {
    if let Ok(exe) = std::env::var("WD_DRIVER_EXE") {
        let path = PathBuf::from(exe);
        if driver_is_usable(&path) {
            debug!(target = "wd", path = %path.display(), "using driver from WD_DRIVER_EXE");
            return Ok(path);
        }
        warn!(
            target = "wd",
            path = %path.display(),
            "WD_DRIVER_EXE is set but not runnable; falling back"
        );
    }

    for name in DRIVER_NAMES {
        if let Ok(path) = which::which(name) {
            if driver_is_usable(&path) {
                debug!(target = "wd", path = %path.display(), "found driver on PATH");
                return Ok(path);
            }
            warn!(
                target = "wd",
                path = %path.display(),
                "driver on PATH is not runnable; falling back"
            );
        }
    }

    for location in common_locations() {
        if location.exists() && driver_is_usable(&location) {
            debug!(target = "wd", path = %location.display(), "found driver in common location");
            return Ok(location);
        }
    }

    Err(Error::DriverNotFound {
        searched: DRIVER_NAMES.join(", "),
    })
}

fn common_locations() -> Vec<PathBuf> {
    #[cfg(not(windows))]
    let candidates = [
        "/usr/local/bin/chromedriver",
        "/usr/bin/chromedriver",
        "/opt/homebrew/bin/chromedriver",
        "/usr/local/bin/geckodriver",
        "/usr/bin/geckodriver",
        "/opt/homebrew/bin/geckodriver",
    ];

    #[cfg(windows)]
    let candidates = [
        "C:\\tools\\chromedriver\\chromedriver.exe",
        "C:\\tools\\geckodriver\\geckodriver.exe",
    ];

    candidates.iter().map(PathBuf::from).collect()
}

fn driver_is_usable(path: &Path) -> bool {
    Command::new(path)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_driver_reports_searched_names_when_missing() {
        // Tolerant of hosts with or without a driver installed; only the
        // error shape is asserted.
        match find_driver_executable() {
            Ok(path) => assert!(path.exists()),
            Err(Error::DriverNotFound { searched }) => {
                assert!(searched.contains("chromedriver"));
                assert!(searched.contains("geckodriver"));
            }
            Err(e) => panic!("unexpected error: {e:?}"),
        }
    }

    #[test]
    fn nonexistent_binary_is_not_usable() {
        assert!(!driver_is_usable(Path::new("/nonexistent/chromedriver")));
    }
}
