//! Helper for collecting the compositor's advertised globals during connection setup.
//!
//! Most applications need to know what globals exist before they can build their [`Dispatch`]
//! state, which creates a chicken-and-egg problem: binding the registry, like any other object,
//! requires an [`crate::EventQueue`] to receive its `global` events, but the queue usually lives
//! inside the very state the globals are needed to construct. [`GlobalList::new`] works around
//! this by driving its own private object data and a synchronous round trip, independent of any
//! application [`crate::QueueHandle`].

use std::os::unix::io::AsRawFd;
use std::sync::{Arc, Mutex};

use waylink_backend::client::{Backend, ObjectData, WaylandError};

use crate::backend::protocol::Message;
use crate::backend::{InvalidId, ObjectId};
use crate::conn::Connection;
use crate::display::wl_display;
use crate::display::wl_registry::{self, WlRegistry};
use crate::proxy::Proxy;

/// A snapshot of every global the compositor had advertised by the time it was collected.
#[derive(Debug)]
pub struct GlobalList {
    registry: WlRegistry,
    data: Arc<GlobalListContents>,
}

impl GlobalList {
    /// Bind the registry and collect every global advertised before the server processed the
    /// round-trip request this issues internally.
    pub fn new(conn: &Connection) -> Result<GlobalList, GlobalError> {
        let display = wl_display::WlDisplay::new(conn);
        let data = Arc::new(GlobalListContents { globals: Mutex::new(Vec::new()) });

        let (msg, child_spec) = display
            .write_request(conn, wl_display::Request::GetRegistry)
            .map_err(GlobalError::InvalidId)?;
        let registry_id = conn
            .backend()
            .send_request(to_raw_fd_message(msg), Some(data.clone() as Arc<dyn ObjectData>), child_spec)
            .map_err(GlobalError::InvalidId)?;
        let registry = WlRegistry::from_id(conn, registry_id).map_err(GlobalError::InvalidId)?;

        roundtrip(conn, &display).map_err(GlobalError::Backend)?;

        Ok(GlobalList { registry, data })
    }

    /// The globals advertised so far. Nothing advertised after construction is reflected here.
    pub fn list(&self) -> Vec<Global> {
        self.data.globals.lock().unwrap().clone()
    }

    /// Bind a single-instance global of a known type at the best version both sides support.
    ///
    /// Returns [`BindError::NotPresent`] if no global of `I::interface()`'s name was advertised,
    /// and [`BindError::UnsupportedVersion`] if the server's advertised version is below
    /// `min_version`.
    pub fn bind<I: Proxy>(&self, conn: &Connection, min_version: u32) -> Result<I, BindError> {
        let interface = I::interface();
        let guard = self.data.globals.lock().unwrap();
        let found = guard
            .iter()
            .find(|g| g.interface == interface.name)
            .ok_or(BindError::NotPresent)?;

        if found.version < min_version {
            return Err(BindError::UnsupportedVersion);
        }
        let version = found.version.min(interface.version);
        let name = found.name;
        drop(guard);

        self.registry.bind(conn, name, version).map_err(BindError::InvalidId)
    }

    /// The underlying `wl_registry` object, for binding globals this helper's API doesn't cover
    /// (e.g. multi-instance globals like `wl_output`, which need their own add/remove tracking).
    pub fn registry(&self) -> &WlRegistry {
        &self.registry
    }
}

/// Description of one global advertised by the compositor.
#[derive(Debug, Clone)]
pub struct Global {
    /// Numeric name used to bind this global.
    pub name: u32,
    /// Interface name of the global.
    pub interface: String,
    /// Highest version of the interface the server supports.
    pub version: u32,
}

/// Object data backing a [`GlobalList`]'s registry, tracking every `global`/`global_remove` event
/// received so far. Exposed so a [`crate::Dispatch`] impl on a registry bound through this type
/// can recover the same backing list via [`crate::proxy::Proxy`]-independent storage.
#[derive(Debug)]
pub struct GlobalListContents {
    globals: Mutex<Vec<Global>>,
}

impl GlobalListContents {
    /// The globals recorded so far.
    pub fn list(&self) -> Vec<Global> {
        self.globals.lock().unwrap().clone()
    }
}

impl ObjectData for GlobalListContents {
    fn event(self: Arc<Self>, backend: &Backend, msg: Message<ObjectId>) -> Option<Arc<dyn ObjectData>> {
        let conn = Connection::from_backend(backend.clone());
        if let Ok((_, event)) = wl_registry::WlRegistry::parse_event(&conn, msg) {
            match event {
                wl_registry::Event::Global { name, interface, version } => {
                    self.globals.lock().unwrap().push(Global { name, interface, version });
                }
                wl_registry::Event::GlobalRemove { name } => {
                    self.globals.lock().unwrap().retain(|g| g.name != name);
                }
            }
        }
        None
    }

    fn destroyed(&self, _object_id: ObjectId) {}
}

/// Waits synchronously for `wl_callback.done`, used by [`GlobalList::new`] to know the server has
/// finished processing `get_registry` and every `global` event it implies has already arrived.
fn roundtrip(conn: &Connection, display: &wl_display::WlDisplay) -> Result<(), WaylandError> {
    struct Done(Mutex<bool>);
    impl ObjectData for Done {
        fn event(self: Arc<Self>, _backend: &Backend, _msg: Message<ObjectId>) -> Option<Arc<dyn ObjectData>> {
            *self.0.lock().unwrap() = true;
            None
        }
        fn destroyed(&self, _object_id: ObjectId) {}
    }

    let (msg, child_spec) = display
        .write_request(conn, wl_display::Request::Sync)
        .map_err(|_| WaylandError::Io(std::io::ErrorKind::InvalidInput.into()))?;
    let done = Arc::new(Done(Mutex::new(false)));
    conn.backend()
        .send_request(to_raw_fd_message(msg), Some(done.clone()), child_spec)
        .map_err(|_| WaylandError::Io(std::io::ErrorKind::InvalidInput.into()))?;

    conn.flush()?;
    loop {
        if *done.0.lock().unwrap() {
            return Ok(());
        }
        match conn.backend().prepare_read() {
            Some(guard) => {
                crate::conn::blocking_read(guard)?;
            }
            None => {
                conn.backend().dispatch_inner_queue()?;
            }
        }
    }
}

fn to_raw_fd_message(
    msg: Message<ObjectId>,
) -> waylink_backend::protocol::Message<ObjectId, std::os::unix::io::RawFd> {
    msg.map_fd(|fd| fd.as_raw_fd())
}

/// An error occurring while collecting the initial global list.
#[derive(Debug)]
pub enum GlobalError {
    /// The backend itself reported an error while performing the round trip.
    Backend(WaylandError),
    /// An object ID involved in setting up the registry was invalid.
    InvalidId(InvalidId),
}

impl std::fmt::Display for GlobalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlobalError::Backend(e) => write!(f, "backend error: {e}"),
            GlobalError::InvalidId(_) => write!(f, "invalid object id while initializing the registry"),
        }
    }
}

impl std::error::Error for GlobalError {}

/// An error occurring while binding a specific global.
#[derive(Debug)]
pub enum BindError {
    /// No global of the requested interface was advertised.
    NotPresent,
    /// The server's advertised version is below the caller's required minimum.
    UnsupportedVersion,
    /// The bind request itself failed.
    InvalidId(InvalidId),
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindError::NotPresent => write!(f, "no matching global was advertised"),
            BindError::UnsupportedVersion => write!(f, "server version is below the requested minimum"),
            BindError::InvalidId(_) => write!(f, "invalid object id while binding the global"),
        }
    }
}

impl std::error::Error for BindError {}
