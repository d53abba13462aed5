//! Binding a listening socket under `$XDG_RUNTIME_DIR`, the way every Wayland compositor does.

use std::env;
use std::ffi::OsStr;
use std::ops::Range;
use std::os::unix::io::{AsFd, AsRawFd, BorrowedFd, OwnedFd, RawFd};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::PathBuf;

use rustix::fs::{Mode, OFlags};

/// A Wayland-protocol listening socket, with the lock-file dance `libwayland` uses to let
/// several compositors probe `$XDG_RUNTIME_DIR` for a free `wayland-$N` name without racing.
#[derive(Debug)]
pub struct ListeningSocket {
    listener: UnixListener,
    _lock: OwnedFd,
    socket_path: PathBuf,
    lock_path: PathBuf,
}

impl ListeningSocket {
    /// Bind the socket at `$XDG_RUNTIME_DIR/<socket_name>`.
    ///
    /// Errors with [`BindError::AlreadyInUse`] if another process already holds the matching
    /// lock file, so callers probing a range of names (see [`ListeningSocket::bind_auto`]) can
    /// move on to the next one.
    pub fn bind<S: AsRef<OsStr>>(socket_name: S) -> Result<ListeningSocket, BindError> {
        let runtime_dir: PathBuf = env::var_os("XDG_RUNTIME_DIR").ok_or(BindError::RuntimeDirNotSet)?.into();
        let socket_path = runtime_dir.join(socket_name.as_ref());
        let lock_path = socket_path.with_extension("lock");

        let lock_fd = rustix::fs::open(
            &lock_path,
            OFlags::CREATE | OFlags::CLOEXEC | OFlags::RDWR,
            Mode::RUSR | Mode::WUSR | Mode::RGRP | Mode::WGRP,
        )
        .map_err(|_| BindError::PermissionDenied)?;

        rustix::fs::flock(&lock_fd, rustix::fs::FlockOperation::NonBlockingLockExclusive)
            .map_err(|_| BindError::AlreadyInUse)?;

        match rustix::fs::lstat(&socket_path) {
            Err(rustix::io::Errno::NOENT) => {}
            Ok(_) => {
                rustix::fs::unlink(&socket_path).map_err(|e| BindError::Io(e.into()))?;
            }
            Err(e) => return Err(BindError::Io(e.into())),
        }

        let listener = UnixListener::bind(&socket_path).map_err(BindError::Io)?;
        listener.set_nonblocking(true).map_err(BindError::Io)?;

        Ok(ListeningSocket { listener, _lock: lock_fd, socket_path, lock_path })
    }

    /// Bind the first available `<basename>-$N` name in `range`, the way
    /// `wl_display_add_socket_auto` scans `wayland-0` through `wayland-31`.
    pub fn bind_auto(basename: &str, range: Range<usize>) -> Result<ListeningSocket, BindError> {
        for i in range {
            match ListeningSocket::bind(format!("{basename}-{i}")) {
                Ok(socket) => return Ok(socket),
                Err(BindError::AlreadyInUse) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(BindError::AlreadyInUse)
    }

    /// Accept a pending connection, if one is ready; never blocks.
    pub fn accept(&self) -> std::io::Result<Option<UnixStream>> {
        match self.listener.accept() {
            Ok((stream, _addr)) => Ok(Some(stream)),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl AsFd for ListeningSocket {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.listener.as_fd()
    }
}

impl AsRawFd for ListeningSocket {
    fn as_raw_fd(&self) -> RawFd {
        self.listener.as_raw_fd()
    }
}

impl Drop for ListeningSocket {
    fn drop(&mut self) {
        let _ = rustix::fs::unlink(&self.socket_path);
        let _ = rustix::fs::unlink(&self.lock_path);
    }
}

/// An error occurring while binding a listening socket.
#[derive(Debug)]
pub enum BindError {
    /// `XDG_RUNTIME_DIR` is not set.
    RuntimeDirNotSet,
    /// Could not create or lock the lock file.
    PermissionDenied,
    /// The requested socket name is already bound by another process.
    AlreadyInUse,
    /// An I/O error occurred while binding.
    Io(std::io::Error),
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindError::RuntimeDirNotSet => write!(f, "XDG_RUNTIME_DIR is not set"),
            BindError::PermissionDenied => write!(f, "could not write to XDG_RUNTIME_DIR"),
            BindError::AlreadyInUse => write!(f, "requested socket name is already in use"),
            BindError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for BindError {}
