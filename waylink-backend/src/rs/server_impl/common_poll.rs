//! Dispatch scheduling: one reader thread per client feeds a shared action queue that a single
//! caller-driven consumer (`dispatch_all_clients`/`dispatch_client`) drains.
//!
//! Each client's own request stream is read and parsed in its own thread, since nothing but that
//! client's own `ObjectMap` is needed to do so (see `Client::next_request`); only the resulting
//! `DispatchAction` - display/registry bookkeeping aside - needs to cross back into the single
//! thread running application callbacks, so that `D` is only ever touched from one thread at a
//! time. A self-pipe stands in for the mpsc channel's missing pollable fd, so `Backend::poll_fd`
//! keeps meaning what it always has: readable exactly when `dispatch_all_clients` has work to do.

use std::{
    collections::VecDeque,
    os::unix::io::{AsFd, AsRawFd, BorrowedFd, OwnedFd},
    sync::{Arc, Mutex, Weak},
};

use super::{
    handle::State, ClientId, Data, GlobalHandler, GlobalId, Handle, InnerClientId, InnerGlobalId,
    InnerHandle, InnerObjectId, ObjectId,
};
use crate::{
    core_interfaces::{WL_DISPLAY_INTERFACE, WL_REGISTRY_INTERFACE},
    protocol::{same_interface, Argument, Message},
    rs::map::Object,
    types::server::InitError,
};

use rustix::event::{PollFd, PollFlags};
use rustix::pipe::{pipe_with, PipeFlags};
use smallvec::SmallVec;

/// The queue every client reader thread feeds and `InnerBackend::dispatch_*` drains.
pub(crate) struct ActionQueue<D: 'static> {
    queue: Mutex<VecDeque<(InnerClientId, DispatchAction<D>)>>,
    wake_write: OwnedFd,
}

impl<D> std::fmt::Debug for ActionQueue<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionQueue").finish_non_exhaustive()
    }
}

impl<D> ActionQueue<D> {
    fn push(&self, client_id: InnerClientId, action: DispatchAction<D>) {
        self.queue.lock().unwrap().push_back((client_id, action));
        self.wake();
    }

    fn wake(&self) {
        let _ = rustix::io::write(&self.wake_write, &[1u8]);
    }
}

#[derive(Debug)]
pub struct InnerBackend<D: 'static> {
    state: Arc<Mutex<State<D>>>,
    queue: Arc<ActionQueue<D>>,
    wake_read: OwnedFd,
}

impl<D> InnerBackend<D> {
    pub fn new() -> Result<Self, InitError> {
        let (wake_read, wake_write) = pipe_with(PipeFlags::CLOEXEC | PipeFlags::NONBLOCK)
            .map_err(Into::into)
            .map_err(InitError::Io)?;

        let queue = Arc::new(ActionQueue { queue: Mutex::new(VecDeque::new()), wake_write });
        let state = Arc::new(Mutex::new(State::new(queue.clone())));
        state.lock().unwrap().self_weak = Arc::downgrade(&state);

        Ok(Self { state, queue, wake_read })
    }

    pub fn flush(&self, client: Option<ClientId>) -> std::io::Result<()> {
        self.state.lock().unwrap().flush(client)
    }

    pub fn handle(&self) -> Handle {
        Handle { handle: InnerHandle { state: self.state.clone() as Arc<_> } }
    }

    pub fn poll_fd(&self) -> BorrowedFd<'_> {
        // Tying the lifetime to &self rather than wake_read directly is unnecessary here since
        // wake_read is a plain field, but kept for consistency with the rest of the backend's
        // poll_fd accessors.
        unsafe { BorrowedFd::borrow_raw(self.wake_read.as_raw_fd()) }
    }

    pub fn dispatch_client(
        &self,
        data: &mut D,
        client_id: InnerClientId,
    ) -> std::io::Result<usize> {
        let mut dispatched = 0;
        loop {
            let next = {
                let mut queue = self.queue.queue.lock().unwrap();
                let pos = queue.iter().position(|(id, _)| *id == client_id);
                pos.map(|i| queue.remove(i).unwrap())
            };
            match next {
                Some((id, action)) => {
                    self.run_action(data, id, action);
                    dispatched += 1;
                }
                None => break,
            }
        }
        self.drain_wake();
        let cleanup = self.state.lock().unwrap().cleanup();
        cleanup(&self.handle(), data);
        Ok(dispatched)
    }

    pub fn dispatch_all_clients(&self, data: &mut D) -> std::io::Result<usize> {
        let mut dispatched = 0;
        loop {
            let next = self.queue.queue.lock().unwrap().pop_front();
            match next {
                Some((id, action)) => {
                    self.run_action(data, id, action);
                    dispatched += 1;
                }
                None => break,
            }
        }
        self.drain_wake();
        let cleanup = self.state.lock().unwrap().cleanup();
        cleanup(&self.handle(), data);
        Ok(dispatched)
    }

    fn drain_wake(&self) {
        let mut buf = [0u8; 256];
        while matches!(rustix::io::read(&self.wake_read, &mut buf), Ok(n) if n > 0) {}
    }

    /// Runs the application-facing half of one already-classified action: invoking
    /// `ObjectData::request`/`destroyed` or `GlobalHandler::bind`. Called from whichever thread
    /// drains the action queue, one action at a time, so `data: &mut D` is never touched
    /// concurrently.
    fn run_action(&self, data: &mut D, client_id: InnerClientId, action: DispatchAction<D>) {
        let handle = self.handle();
        let mut state = self.state.lock().unwrap();
        match action {
            DispatchAction::Request { object, object_id, opcode, arguments, is_destructor, created_id } => {
                std::mem::drop(state);
                let ret = object.data.user_data.clone().request(
                    &handle,
                    data,
                    ClientId { id: client_id.clone() },
                    Message { sender_id: ObjectId { id: object_id.clone() }, opcode, args: arguments },
                );
                if is_destructor {
                    object.data.user_data.clone().destroyed(
                        &handle,
                        data,
                        ClientId { id: client_id.clone() },
                        ObjectId { id: object_id.clone() },
                    );
                }
                state = self.state.lock().unwrap();
                if is_destructor {
                    if let Ok(client) = state.clients.get_client_mut(client_id.clone()) {
                        client.send_delete_id(object_id);
                    }
                }
                match (created_id, ret) {
                    (Some(child_id), Some(child_data)) => {
                        if let Ok(client) = state.clients.get_client_mut(client_id.clone()) {
                            client.map.with(child_id.id, |obj| obj.data.user_data = child_data).unwrap();
                        }
                    }
                    (None, None) => {}
                    (Some(child_id), None) => {
                        if let Ok(client) = state.clients.get_client(client_id.clone()) {
                            if !client.killed {
                                panic!(
                                    "Callback creating object {child_id} did not provide any object data."
                                );
                            }
                        }
                    }
                    (None, Some(_)) => {
                        panic!("An object data was returned from a callback not creating any object");
                    }
                }
                // dropping the object calls destructors from which users could call into the
                // backend again, so release the lock first to avoid a self-deadlock.
                std::mem::drop(state);
                std::mem::drop(object);
                return;
            }
            DispatchAction::Bind { object, client, global, handler } => {
                std::mem::drop(state);
                let child_data = handler.bind(
                    &handle,
                    data,
                    ClientId { id: client.clone() },
                    GlobalId { id: global },
                    ObjectId { id: object.clone() },
                );
                let mut state = self.state.lock().unwrap();
                if let Ok(client) = state.clients.get_client_mut(client.clone()) {
                    client.map.with(object.id, |obj| obj.data.user_data = child_data).unwrap();
                }
            }
        }
    }
}

/// Spawns the dedicated reader thread for one newly accepted client.
///
/// The thread owns nothing but a duplicated, poll-only file descriptor: actually reading and
/// parsing messages still goes through the shared `state` lock, same as the rest of the server
/// object graph, so it is never touched from two threads at once.
pub(crate) fn spawn_reader_thread<D: 'static>(
    state: Weak<Mutex<State<D>>>,
    queue: Arc<ActionQueue<D>>,
    client_id: InnerClientId,
    poll_fd: OwnedFd,
) -> std::io::Result<()> {
    std::thread::Builder::new()
        .name(format!("waylink-server-client-{}", client_id.as_u64()))
        .spawn(move || reader_thread_main(state, queue, client_id, poll_fd))
        .map(|_join_handle| ())
        .map_err(Into::into)
}

fn reader_thread_main<D: 'static>(
    state: Weak<Mutex<State<D>>>,
    queue: Arc<ActionQueue<D>>,
    client_id: InnerClientId,
    poll_fd: OwnedFd,
) {
    loop {
        let Some(state_arc) = state.upgrade() else { return };
        let mut guard = state_arc.lock().unwrap();
        match next_action(&mut guard, &client_id) {
            Ok(Some(action)) => {
                std::mem::drop(guard);
                queue.push(client_id.clone(), action);
            }
            Ok(None) => {
                // Handled internally (wl_display/wl_registry bookkeeping); keep reading.
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                std::mem::drop(guard);
                if wait_readable(poll_fd.as_fd()).is_err() {
                    return;
                }
            }
            Err(_) => {
                std::mem::drop(guard);
                queue.wake();
                return;
            }
        }
    }
}

/// Blocks until `fd` is readable, the same `poll`-based wait `Connection::blocking_dispatch`
/// uses client-side while waiting for its socket to fill.
fn wait_readable(fd: BorrowedFd<'_>) -> std::io::Result<()> {
    loop {
        let mut fds = [PollFd::new(&fd, PollFlags::IN)];
        match rustix::event::poll(&mut fds, None) {
            Ok(_) => return Ok(()),
            Err(rustix::io::Errno::INTR) => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Reads and classifies exactly one request from `client_id`'s socket, without invoking any
/// application callback.
///
/// `wl_display`/`wl_registry` requests are fully handled here, under the lock, exactly as they
/// were before the object the request targets ever reaches application code; everything else is
/// handed back as a `DispatchAction` to run once the state lock is released.
fn next_action<D: 'static>(
    state: &mut State<D>,
    client_id: &InnerClientId,
) -> std::io::Result<Option<DispatchAction<D>>> {
    let State { clients, registry, .. } = state;
    let client = clients.get_client_mut(client_id.clone()).map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "Invalid client ID")
    })?;

    let (message, object) = client.next_request()?;

    if same_interface(object.interface, &WL_DISPLAY_INTERFACE) {
        client.handle_display_request(message, registry);
        Ok(None)
    } else if same_interface(object.interface, &WL_REGISTRY_INTERFACE) {
        match client.handle_registry_request(message, registry) {
            Some((client, global, object, handler)) => {
                Ok(Some(DispatchAction::Bind { object, client, global, handler }))
            }
            None => Ok(None),
        }
    } else {
        let object_id = InnerObjectId {
            id: message.sender_id,
            serial: object.data.serial,
            interface: object.interface,
            client_id: client_id.clone(),
        };
        let opcode = message.opcode;
        match client.process_request(&object, message) {
            Some((arguments, is_destructor, created_id)) => Ok(Some(DispatchAction::Request {
                object,
                object_id,
                opcode,
                arguments,
                is_destructor,
                created_id,
            })),
            None => Ok(None),
        }
    }
}

enum DispatchAction<D: 'static> {
    Request {
        object: Object<Data<D>>,
        object_id: InnerObjectId,
        opcode: u16,
        arguments: SmallVec<[Argument<ObjectId, OwnedFd>; 4]>,
        is_destructor: bool,
        created_id: Option<InnerObjectId>,
    },
    Bind {
        object: InnerObjectId,
        client: InnerClientId,
        global: InnerGlobalId,
        handler: Arc<dyn GlobalHandler<D>>,
    },
}
