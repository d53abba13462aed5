use std::{marker::PhantomData, sync::mpsc, sync::Arc};

use waylink_backend::client::{Backend, ObjectData};

use crate::backend::protocol::Message;
use crate::backend::ObjectId;
use crate::conn::Connection;
use crate::proxy::{DispatchError, Proxy};

/// Implemented by application state to receive events for a given proxy type.
///
/// `waylink-scanner` does not generate these impls: applications write one per (interface,
/// user-data) pair they care about, the same division of labor as upstream `wayland-client`.
pub trait Dispatch<I: Proxy, U = ()>: Sized {
    /// Handle one event received on `proxy`.
    fn event(
        state: &mut Self,
        proxy: &I,
        event: I::Event,
        data: &U,
        conn: &Connection,
        qhandle: &QueueHandle<Self>,
    );
}

type QueuedEvent<State> = Box<dyn FnOnce(&mut State, &Connection, &QueueHandle<State>) + Send>;

/// A per-object-type event sink, installed on a proxy via [`QueueHandle::assign`].
///
/// Parses the raw message eagerly (so a malformed message is detected at receive time, not at
/// dispatch time) and defers only the actual [`Dispatch::event`] call, so that dispatching can
/// happen later from a context with `&mut State` available.
struct QueueProxyData<I, U, State> {
    sender: mpsc::Sender<QueuedEvent<State>>,
    udata: U,
    _marker: PhantomData<fn() -> (I, State)>,
}

impl<I, U, State> ObjectData for QueueProxyData<I, U, State>
where
    I: Proxy + 'static,
    U: Clone + Send + Sync + 'static,
    State: Dispatch<I, U> + 'static,
{
    fn event(
        self: Arc<Self>,
        backend: &Backend,
        msg: Message<ObjectId>,
    ) -> Option<Arc<dyn ObjectData>> {
        let conn = Connection::from_backend(backend.clone());
        match I::parse_event(&conn, msg) {
            Ok((proxy, event)) => {
                let udata = self.udata_handle();
                let _ = self.sender.send(Box::new(move |state, conn, qh| {
                    State::event(state, &proxy, event, &udata, conn, qh);
                }));
            }
            Err(err) => log::warn!("dropping malformed event: {err}"),
        }
        None
    }

    fn destroyed(&self, _object_id: ObjectId) {}
}

impl<I, U: Clone, State> QueueProxyData<I, U, State> {
    fn udata_handle(&self) -> U {
        self.udata.clone()
    }
}

/// A lightweight, cloneable handle used to subscribe proxies to an [`EventQueue`].
pub struct QueueHandle<State> {
    sender: mpsc::Sender<QueuedEvent<State>>,
}

impl<State> Clone for QueueHandle<State> {
    fn clone(&self) -> Self {
        QueueHandle { sender: self.sender.clone() }
    }
}

impl<State> std::fmt::Debug for QueueHandle<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueHandle").finish_non_exhaustive()
    }
}

impl<State: 'static> QueueHandle<State> {
    /// Route future events for `proxy` to `State`'s [`Dispatch`] impl, carrying `udata` along
    /// with each one.
    pub fn assign<I, U, D>(
        &self,
        conn: &Connection,
        proxy: &I,
        udata: U,
    ) -> Result<(), waylink_backend::client::InvalidId>
    where
        I: Proxy + 'static,
        U: Clone + Send + Sync + 'static,
        D: Dispatch<I, U, State = State> + 'static,
    {
        let data: Arc<dyn ObjectData> = Arc::new(QueueProxyData::<I, U, State> {
            sender: self.sender.clone(),
            udata,
            _marker: PhantomData,
        });
        conn.backend().set_data(proxy.id(), data)
    }
}

/// A queue of parsed-but-not-yet-dispatched events for objects assigned to it.
///
/// `State` is the application state type threaded through [`Dispatch::event`] calls; most
/// programs use a single queue carrying their whole connection state, but nothing prevents
/// multiple queues with different `State` types (e.g. per-window state) in the same process.
pub struct EventQueue<State> {
    conn: Connection,
    receiver: mpsc::Receiver<QueuedEvent<State>>,
    handle: QueueHandle<State>,
}

impl<State> std::fmt::Debug for EventQueue<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventQueue").field("conn", &self.conn).finish_non_exhaustive()
    }
}

impl<State: 'static> EventQueue<State> {
    /// Create a new, empty event queue on `conn`.
    pub fn new(conn: &Connection) -> EventQueue<State> {
        let (sender, receiver) = mpsc::channel();
        EventQueue { conn: conn.clone(), receiver, handle: QueueHandle { sender } }
    }

    /// Get a cloneable [`QueueHandle`] for this queue.
    pub fn handle(&self) -> QueueHandle<State> {
        self.handle.clone()
    }

    /// Run every event that has already been parsed and is waiting to be dispatched, without
    /// reading the socket for more.
    pub fn dispatch_pending(&mut self, state: &mut State) -> Result<usize, DispatchError> {
        let mut count = 0;
        while let Ok(job) = self.receiver.try_recv() {
            job(state, &self.conn, &self.handle);
            count += 1;
        }
        Ok(count)
    }

    /// Flush outgoing requests, then read and dispatch events, blocking if none are pending.
    pub fn blocking_dispatch(&mut self, state: &mut State) -> Result<usize, DispatchError> {
        self.conn.flush().map_err(DispatchError::Backend)?;

        let dispatched = self.dispatch_pending(state)?;
        if dispatched > 0 {
            return Ok(dispatched);
        }

        match self.conn.backend().prepare_read() {
            Some(guard) => {
                crate::conn::blocking_read(guard).map_err(DispatchError::Backend)?;
            }
            None => {
                self.conn.backend().dispatch_inner_queue().map_err(DispatchError::Backend)?;
            }
        }

        self.dispatch_pending(state)
    }
}
