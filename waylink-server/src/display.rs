//! The server-side entry point: the listening display and per-state dispatch handle.

use std::marker::PhantomData;
use std::os::unix::io::{AsRawFd, BorrowedFd};
use std::os::unix::net::UnixStream;
use std::sync::Arc;

use waylink_backend::protocol::ObjectInfo;
use waylink_backend::server::{
    Backend, ClientData, GlobalHandler, Handle, InitError, InvalidId, ObjectData, ObjectId,
};

use crate::backend::protocol::Message;
use crate::client::Client;
use crate::dispatch::{Dispatch, Resource};
use waylink_backend::server::{ClientId, GlobalId};

/// Owns the listening backend and drives dispatch for every connected client.
///
/// `D` is the application state type threaded through every [`Dispatch`]/[`crate::GlobalDispatch`]
/// callback; most compositors use a single `Display` carrying their whole server state, but
/// nothing prevents multiple displays with different `D` types in the same process.
#[derive(Debug)]
pub struct Display<D: 'static> {
    backend: Backend<D>,
}

impl<D: 'static> Display<D> {
    /// Create a new display with no clients and no globals registered yet.
    pub fn new() -> Result<Display<D>, InitError> {
        Ok(Display { backend: Backend::new()? })
    }

    /// A cloneable [`DisplayHandle`] for registering globals, sending events, and dispatching
    /// requests by hand.
    pub fn handle(&self) -> DisplayHandle<D> {
        DisplayHandle::from_handle(self.backend.handle())
    }

    /// Accept an already-connected client socket, e.g. one returned by
    /// [`crate::ListeningSocket::accept`].
    pub fn insert_client(
        &mut self,
        stream: UnixStream,
        data: Arc<dyn ClientData>,
    ) -> std::io::Result<ClientId> {
        self.backend.handle().insert_client(stream, data)
    }

    /// The file descriptor to poll for readiness before calling [`Display::dispatch_clients`].
    pub fn poll_fd(&self) -> BorrowedFd<'_> {
        self.backend.poll_fd()
    }

    /// Dispatch every request currently readable from every client, running the appropriate
    /// [`Dispatch::request`] callbacks against `state` as they arrive.
    pub fn dispatch_clients(&mut self, state: &mut D) -> std::io::Result<usize> {
        self.backend.dispatch_all_clients(state)
    }

    /// Flush pending outgoing events to one client, or to every client if `None`.
    pub fn flush_clients(&mut self, client: Option<ClientId>) -> std::io::Result<()> {
        self.backend.flush(client)
    }
}

/// A lightweight, cloneable handle into a running [`Display`]'s backend.
///
/// This is the `cx` parameter every generated [`Resource`] method and every [`Dispatch`]/
/// [`crate::GlobalDispatch`] callback receives.
#[derive(Debug, Clone)]
pub struct DisplayHandle<D> {
    handle: Handle,
    _marker: PhantomData<fn() -> D>,
}

impl<D: 'static> DisplayHandle<D> {
    pub(crate) fn from_handle(handle: Handle) -> DisplayHandle<D> {
        DisplayHandle { handle, _marker: PhantomData }
    }

    /// Access the untyped [`Handle`] this display handle wraps.
    pub fn backend_handle(&self) -> &Handle {
        &self.handle
    }

    /// Protocol information about a live object, notably its bound version.
    ///
    /// Generated `Resource::from_id` impls call this to recover the version a newly wrapped
    /// object was created at.
    pub fn object_info(&self, id: ObjectId) -> Result<ObjectInfo, InvalidId> {
        self.handle.object_info(id)
    }

    /// A placeholder ID used in outgoing messages for arguments that create a new object; the
    /// backend fills in the real ID once the event carrying it is sent.
    pub fn null_id(&self) -> ObjectId {
        ObjectId::null()
    }

    /// The [`ObjectData`] the backend is holding for a live object, as installed by
    /// [`crate::DataInit::init`]. Generated `Resource::from_id` impls call this to recover the
    /// typed user data of an object they did not themselves create.
    pub fn get_object_data(&self, id: ObjectId) -> Result<Arc<dyn ObjectData<D>>, InvalidId> {
        self.handle.get_object_data(id)
    }

    /// The [`Client`] that owns a live object.
    pub fn client(&self, id: ClientId) -> Result<Client, InvalidId> {
        let data = self.handle.get_client_data(id.clone())?;
        Ok(Client { id, data })
    }

    /// The [`Client`] that owns the object named by `object_id`.
    pub fn client_for_object(&self, object_id: ObjectId) -> Result<Client, InvalidId> {
        let id = self.handle.get_client(object_id)?;
        self.client(id)
    }

    /// Send a typed event to `resource`.
    pub fn send_event<I: Resource>(&mut self, resource: &I, event: I::Event) -> Result<(), InvalidId> {
        let msg = resource.write_event(self, event)?;
        self.handle.send_event(msg.map_fd(|fd| fd.as_raw_fd()))
    }

    /// Post a fatal protocol error on an object; the client that owns it is disconnected.
    pub fn post_error(&self, object_id: ObjectId, error_code: u32, message: impl Into<Vec<u8>>) {
        if let Ok(message) = std::ffi::CString::new(message.into()) {
            self.handle.post_error(object_id, error_code, message);
        }
    }

    /// Register a new global of `I`'s interface at `version`, advertised to every connected (and
    /// future) client for which [`crate::GlobalDispatch::can_view`] returns true.
    pub fn create_global<I>(&self, version: u32, global_data: <D as crate::GlobalDispatch<I>>::GlobalData) -> GlobalId
    where
        I: Resource + 'static,
        D: crate::GlobalDispatch<I> + Dispatch<I> + 'static,
    {
        let handler: Arc<dyn GlobalHandler<D>> = Arc::new(GlobalData::<I, D> {
            data: global_data,
            _marker: PhantomData,
        });
        self.handle.create_global::<D>(I::interface(), version, handler)
    }

    /// Disable a previously registered global without freeing its resources; see
    /// [`Handle::disable_global`].
    pub fn disable_global(&self, id: GlobalId) {
        self.handle.disable_global::<D>(id)
    }

    /// Remove a previously registered global and free its resources; see
    /// [`Handle::remove_global`].
    pub fn remove_global(&self, id: GlobalId) {
        self.handle.remove_global::<D>(id)
    }
}

/// Backend-facing [`GlobalHandler`] adapter that routes binds for one global through a
/// [`crate::GlobalDispatch`] impl.
struct GlobalData<I: Resource, D: crate::GlobalDispatch<I>> {
    data: D::GlobalData,
    _marker: PhantomData<fn() -> I>,
}

impl<I, D> std::fmt::Debug for GlobalData<I, D>
where
    I: Resource,
    D: crate::GlobalDispatch<I>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalData").finish_non_exhaustive()
    }
}

impl<I, D> GlobalHandler<D> for GlobalData<I, D>
where
    I: Resource + 'static,
    D: crate::GlobalDispatch<I> + Dispatch<I> + 'static,
{
    fn can_view(&self, client_id: ClientId, client_data: &Arc<dyn ClientData>, _global_id: GlobalId) -> bool {
        let client = Client { id: client_id, data: client_data.clone() };
        D::can_view(client, &self.data)
    }

    fn bind(
        self: Arc<Self>,
        handle: &Handle,
        data: &mut D,
        client_id: ClientId,
        _global_id: GlobalId,
        object_id: ObjectId,
    ) -> Arc<dyn ObjectData<D>> {
        let mut cx = DisplayHandle::from_handle(handle.clone());
        let client = match cx.client(client_id.clone()) {
            Ok(client) => client,
            Err(_) => {
                handle.kill_client(client_id, waylink_backend::server::DisconnectReason::ConnectionClosed);
                panic!("bind invoked for a client that is no longer connected");
            }
        };

        let resource = crate::dispatch::New::wrap(object_id);
        let mut data_init =
            crate::dispatch::DataInit { cx: &mut cx, client_id, result: None };
        D::bind(data, &cx, &client, resource, &self.data, &mut data_init);
        data_init.result.expect("GlobalDispatch::bind must call DataInit::init exactly once")
    }
}
