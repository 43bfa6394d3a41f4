//! IPC between the control panel and the inspector process
//!
//! Length-prefixed JSON over Unix domain sockets. Traffic is one-way:
//! senders fire and forget, the inspector only reads. A panel notification
//! that finds no inspector listening is dropped, not reported.

use anyhow::{Context, Result, anyhow};
use serde::{Serialize, de::DeserializeOwned};
use std::io::{Read, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};
use tracing::debug;

mod messages;
pub use messages::{ControlMessage, InspectorRequest};

/// Maximum message size; far above any realistic attribute list
const MAX_MESSAGE_SIZE: usize = 1024 * 1024;

/// Default socket path (XDG_RUNTIME_DIR with fallback to cache)
pub fn default_socket_path() -> Result<PathBuf> {
    if let Ok(runtime_dir) = std::env::var("XDG_RUNTIME_DIR") {
        return Ok(PathBuf::from(runtime_dir).join("dom-lens/inspector.sock"));
    }

    let cache = dirs::cache_dir()
        .context("Failed to determine cache directory (no XDG_RUNTIME_DIR or HOME)")?;
    Ok(cache.join("dom-lens/inspector.sock"))
}

/// Listening side, owned by the inspector process
pub struct InspectorServer {
    listener: UnixListener,
    socket_path: PathBuf,
}

impl InspectorServer {
    /// Bind to the default socket path
    pub fn bind() -> Result<Self> {
        Self::bind_to(default_socket_path()?)
    }

    /// Bind to a specific socket path
    pub fn bind_to(socket_path: PathBuf) -> Result<Self> {
        if let Some(parent) = socket_path.parent() {
            std::fs::create_dir_all(parent).context(format!(
                "Failed to create socket directory: {}",
                parent.display()
            ))?;
        }

        // Remove stale socket if exists
        if socket_path.exists() {
            std::fs::remove_file(&socket_path).context(format!(
                "Failed to remove stale socket: {}",
                socket_path.display()
            ))?;
        }

        let listener = UnixListener::bind(&socket_path).context(format!(
            "Failed to bind socket at {}",
            socket_path.display()
        ))?;

        // Owner only
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&socket_path, std::fs::Permissions::from_mode(0o700))
                .context("Failed to set socket permissions")?;
        }

        Ok(Self {
            listener,
            socket_path,
        })
    }

    /// Accept an incoming connection (blocking)
    pub fn accept(&self) -> Result<Connection> {
        let (stream, _addr) = self
            .listener
            .accept()
            .context("Failed to accept IPC connection")?;
        Ok(Connection { stream })
    }

    pub fn path(&self) -> &Path {
        &self.socket_path
    }
}

impl Drop for InspectorServer {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.socket_path);
    }
}

/// One accepted sender connection
pub struct Connection {
    stream: UnixStream,
}

impl Connection {
    /// Receive the next request (blocking); errors when the sender hangs up
    pub fn recv(&mut self) -> Result<InspectorRequest> {
        read_message(&mut self.stream)
    }
}

/// Send one request to the inspector at a specific socket path
pub fn send_to(path: &Path, request: &InspectorRequest) -> Result<()> {
    let mut stream = UnixStream::connect(path)
        .context(format!("Failed to connect to inspector at {}", path.display()))?;
    write_message(&mut stream, request)
}

/// Fire-and-forget notification to the inspector at the default socket
///
/// A page with no inspector loaded simply misses the update; the failure is
/// logged at debug level and otherwise swallowed.
pub fn notify(request: &InspectorRequest) {
    if let Err(e) = default_socket_path().and_then(|path| send_to(&path, request)) {
        debug!(error = ?e, "No inspector listening, notification dropped");
    }
}

/// Write length-prefixed message to stream
fn write_message<T: Serialize>(stream: &mut UnixStream, msg: &T) -> Result<()> {
    let json = serde_json::to_vec(msg).context("Failed to serialize message to JSON")?;

    let len = json.len() as u32;
    stream
        .write_all(&len.to_le_bytes())
        .context("Failed to write message length")?;
    stream
        .write_all(&json)
        .context("Failed to write message payload")?;
    stream.flush().context("Failed to flush stream")?;

    Ok(())
}

/// Read length-prefixed message from stream
fn read_message<T: DeserializeOwned>(stream: &mut UnixStream) -> Result<T> {
    let mut len_buf = [0u8; 4];
    stream
        .read_exact(&mut len_buf)
        .context("Failed to read message length")?;
    let len = u32::from_le_bytes(len_buf) as usize;

    // Sanity check (prevent huge allocation)
    if len > MAX_MESSAGE_SIZE {
        return Err(anyhow!(
            "Message too large: {} bytes (max: {})",
            len,
            MAX_MESSAGE_SIZE
        ));
    }

    let mut json_buf = vec![0u8; len];
    stream
        .read_exact(&mut json_buf)
        .context("Failed to read message payload")?;

    serde_json::from_slice(&json_buf).context("Failed to deserialize message from JSON")
}
