//! WebDriver server process lifecycle.
//!
//! Spawns a chromedriver/geckodriver child process, waits for its HTTP
//! endpoint to report ready, and tears it down on shutdown.

use std::net::TcpListener;
use std::path::Path;
use std::time::{Duration, Instant};

use tokio::process::{Child, Command};
use tracing::{debug, info};
use url::Url;
use wd_protocol::{ResponseValue, StatusValue};

use crate::driver::find_driver_executable;
use crate::error::{Error, Result};

/// How long to wait for the spawned server to answer `GET /status`.
const STARTUP_TIMEOUT: Duration = Duration::from_secs(15);

/// Interval between readiness probes.
const STARTUP_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A WebDriver server child process bound to a local port.
///
/// The server owns exactly one OS process. Dropping a still-running server
/// kills the process; prefer [`DriverServer::shutdown`] so the child is also
/// reaped.
#[derive(Debug)]
pub struct DriverServer {
    process: Child,
    endpoint: Url,
}

impl DriverServer {
    /// Discover a driver binary and launch it on a free local port.
    pub async fn launch() -> Result<Self> {
        let exe = find_driver_executable()?;
        let port = pick_free_port()?;
        Self::launch_at(&exe, port).await
    }

    /// Launch a specific driver binary on a specific port.
    ///
    /// This will:
    /// 1. Spawn `<exe> --port=<port>` with stderr passed through
    /// 2. Verify the process did not exit immediately
    /// 3. Poll `GET /status` until the remote end reports ready
    ///
    /// # Errors
    ///
    /// Returns [`Error::LaunchFailed`] if the process cannot be spawned or
    /// exits during startup, and [`Error::NotReady`] if the status endpoint
    /// never reports ready within the startup bound.
    pub async fn launch_at(exe: &Path, port: u16) -> Result<Self> {
        let endpoint: Url = format!("http://127.0.0.1:{port}/").parse()?;
        info!(target = "wd", exe = %exe.display(), %port, "launching WebDriver server");

        let mut child = Command::new(exe)
            .arg(format!("--port={port}"))
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::LaunchFailed(format!("failed to spawn {}: {e}", exe.display())))?;

        tokio::time::sleep(Duration::from_millis(100)).await;

        match child.try_wait() {
            Ok(Some(status)) => {
                return Err(Error::LaunchFailed(format!(
                    "server process exited immediately with status: {status}"
                )));
            }
            Ok(None) => {}
            Err(e) => {
                return Err(Error::LaunchFailed(format!(
                    "failed to check process status: {e}"
                )));
            }
        }

        wait_ready(&endpoint).await?;
        Ok(Self {
            process: child,
            endpoint,
        })
    }

    /// Base URL of the running server.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Kill the server process and reap it.
    pub async fn shutdown(mut self) -> Result<()> {
        debug!(target = "wd", endpoint = %self.endpoint, "shutting down WebDriver server");
        self.process
            .kill()
            .await
            .map_err(|e| Error::LaunchFailed(format!("failed to kill process: {e}")))?;
        let _ = self.process.wait().await;
        Ok(())
    }
}

async fn wait_ready(endpoint: &Url) -> Result<()> {
    wait_ready_within(endpoint, STARTUP_TIMEOUT).await
}

async fn wait_ready_within(endpoint: &Url, timeout: Duration) -> Result<()> {
    let http = reqwest::Client::new();
    let status_url = endpoint.join("status")?;
    let started = Instant::now();

    loop {
        if let Ok(resp) = http.get(status_url.clone()).send().await {
            if let Ok(status) = resp.json::<ResponseValue<StatusValue>>().await {
                if status.value.ready {
                    debug!(
                        target = "wd",
                        waited_ms = started.elapsed().as_millis() as u64,
                        "WebDriver server ready"
                    );
                    return Ok(());
                }
            }
        }

        if started.elapsed() >= timeout {
            return Err(Error::NotReady {
                endpoint: endpoint.to_string(),
                waited_ms: started.elapsed().as_millis() as u64,
            });
        }
        tokio::time::sleep(STARTUP_POLL_INTERVAL).await;
    }
}

/// Bind to port 0 and let the OS hand out a free port.
fn pick_free_port() -> Result<u16> {
    let listener = TcpListener::bind(("127.0.0.1", 0))?;
    Ok(listener.local_addr()?.port())
}
