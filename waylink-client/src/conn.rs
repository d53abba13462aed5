use std::{env, os::unix::net::UnixStream, path::PathBuf};

use waylink_backend::client::{Backend, InvalidId, ObjectId, ReadEventsGuard, WaylandError};
use waylink_backend::protocol::ObjectInfo;

/// A live connection to a Wayland compositor.
///
/// Wraps a [`Backend`], the low-level connection object from `waylink-backend`, and is the
/// handle generated [`crate::Proxy`] implementations use to send requests.
#[derive(Debug, Clone)]
pub struct Connection {
    backend: Backend,
}

impl Connection {
    /// Connect using the same environment variables `libwayland` does.
    ///
    /// `WAYLAND_SOCKET` (an already-connected, inherited fd) takes priority; otherwise
    /// `WAYLAND_DISPLAY` is resolved against `XDG_RUNTIME_DIR` (defaulting to `wayland-0`).
    pub fn connect_to_env() -> Result<Connection, ConnectError> {
        if let Ok(fd) = env::var("WAYLAND_SOCKET") {
            let fd: std::os::unix::io::RawFd =
                fd.parse().map_err(|_| ConnectError::InvalidFd)?;
            use std::os::unix::io::FromRawFd;
            // SAFETY: WAYLAND_SOCKET is documented by libwayland to hold an already-connected,
            // caller-owned socket fd meant to be consumed exactly once by the client library.
            let stream = unsafe { UnixStream::from_raw_fd(fd) };
            return Ok(Connection { backend: Backend::connect(stream) });
        }

        let runtime_dir = env::var_os("XDG_RUNTIME_DIR").ok_or(ConnectError::NoRuntimeDir)?;
        let display_name = env::var_os("WAYLAND_DISPLAY").unwrap_or_else(|| "wayland-0".into());
        let mut socket_path = PathBuf::from(runtime_dir);
        socket_path.push(display_name);

        let stream = UnixStream::connect(&socket_path).map_err(ConnectError::Io)?;
        Ok(Connection { backend: Backend::connect(stream) })
    }

    /// Wrap an already-initialized backend.
    pub fn from_backend(backend: Backend) -> Connection {
        Connection { backend }
    }

    /// Access the underlying [`Backend`].
    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Flush all pending outgoing requests.
    pub fn flush(&self) -> Result<(), waylink_backend::client::WaylandError> {
        self.backend.flush()
    }

    /// Get the detailed protocol information about a live object, notably its bound version.
    ///
    /// Generated requests that create a child object with a statically-known interface call this
    /// to look up the parent's version, since a new object always inherits it.
    pub fn object_info(&self, id: ObjectId) -> Result<ObjectInfo, InvalidId> {
        self.backend.info(id)
    }

    /// A placeholder ID used in outgoing messages for arguments that create a new object; the
    /// backend fills in the real ID once the request is sent.
    pub fn null_id() -> ObjectId {
        ObjectId::null()
    }
}

/// An error occurring while establishing a connection to the compositor.
#[derive(Debug)]
pub enum ConnectError {
    /// Neither `WAYLAND_SOCKET` nor `XDG_RUNTIME_DIR` was set.
    NoRuntimeDir,
    /// `WAYLAND_SOCKET` was set but did not contain a valid file descriptor.
    InvalidFd,
    /// Connecting to the resolved socket path failed.
    Io(std::io::Error),
}

impl std::fmt::Display for ConnectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectError::NoRuntimeDir => write!(f, "XDG_RUNTIME_DIR is not set"),
            ConnectError::InvalidFd => write!(f, "WAYLAND_SOCKET does not name a valid file descriptor"),
            ConnectError::Io(e) => write!(f, "failed to connect to the Wayland socket: {e}"),
        }
    }
}

impl std::error::Error for ConnectError {}

/// Wait for the socket to become readable, then consume `guard` to read and dispatch events.
///
/// A freshly prepared [`ReadEventsGuard`] does not block: reading it before the socket actually
/// has data returns a `WouldBlock` error, so callers that want to block must poll the guard's
/// connection fd themselves first.
pub(crate) fn blocking_read(guard: ReadEventsGuard) -> Result<usize, WaylandError> {
    loop {
        let mut fds =
            [rustix::event::PollFd::new(&guard.connection_fd(), rustix::event::PollFlags::IN)];
        match rustix::event::poll(&mut fds, None) {
            Ok(_) => break,
            Err(rustix::io::Errno::INTR) => continue,
            Err(e) => return Err(WaylandError::Io(e.into())),
        }
    }
    guard.read()
}
