use std::os::unix::io::AsRawFd;

use crate::backend::protocol::{Interface, Message};
use crate::backend::{InvalidId, ObjectId};
use crate::conn::Connection;

/// A typed handle to a Wayland object on the client side.
///
/// Implementations of this trait are generated by `waylink-scanner` for every interface in a
/// protocol XML file, except `wl_display` and `wl_registry` which are hand-written in
/// [`crate::display`] since they need behavior the generated shape does not cover.
pub trait Proxy: Clone + std::fmt::Debug + Sized {
    /// The enum of requests this object can send.
    type Request;
    /// The enum of events this object can receive.
    type Event;

    /// The interface descriptor for this object type.
    fn interface() -> &'static Interface;

    /// The underlying object ID.
    fn id(&self) -> ObjectId;

    /// Wrap an existing object ID as this proxy type.
    ///
    /// Fails if the ID's interface does not match [`Proxy::interface`].
    fn from_id(conn: &Connection, id: ObjectId) -> Result<Self, InvalidId>;

    /// Downgrade this proxy to a [`Weak`] handle that does not keep protocol state alive.
    fn downgrade(&self) -> Weak<Self> {
        Weak { id: self.id(), _marker: std::marker::PhantomData }
    }

    /// Parse a raw message addressed to this object type into its typed [`Proxy::Event`].
    fn parse_event(conn: &Connection, msg: Message<ObjectId>) -> Result<(Self, Self::Event), DispatchError>;

    /// Encode a typed request into a raw message, along with the child interface/version to
    /// create if the request allocates a new object.
    fn write_request(
        &self,
        conn: &Connection,
        request: Self::Request,
    ) -> Result<(Message<ObjectId>, Option<(&'static Interface, u32)>), InvalidId>;

    /// Send a request that does not create a new object.
    fn send_request(&self, conn: &Connection, request: Self::Request) -> Result<(), InvalidId> {
        let (msg, child_spec) = self.write_request(conn, request)?;
        debug_assert!(child_spec.is_none(), "request creates an object but was sent with send_request");
        conn.backend().send_request(to_raw_fd_message(msg), None, None)?;
        Ok(())
    }

    /// Send a request that creates a new object, and return the typed proxy for it.
    ///
    /// The returned object starts out with no event dispatch configured; pass it to
    /// [`crate::QueueHandle::assign`] to route its events to a [`crate::Dispatch`] impl.
    fn send_constructor<T: Proxy>(&self, conn: &Connection, request: Self::Request) -> Result<T, InvalidId> {
        let (msg, child_spec) = self.write_request(conn, request)?;
        let id = conn.backend().send_request(to_raw_fd_message(msg), None, child_spec)?;
        T::from_id(conn, id)
    }
}

fn to_raw_fd_message(
    msg: Message<ObjectId>,
) -> waylink_backend::protocol::Message<ObjectId, std::os::unix::io::RawFd> {
    // Safety-free conversion: `OwnedFd::as_raw_fd` borrows, it does not transfer ownership, so
    // dropping the original `OwnedFd`s after the backend has written them to the socket is fine.
    msg.map_fd(|fd| fd.as_raw_fd())
}

/// A non-owning reference to a Wayland object.
///
/// Unlike a [`Proxy`], holding a `Weak` does not assert that the object is still alive; use
/// [`Weak::upgrade`] to check.
#[derive(Debug, Clone)]
pub struct Weak<P> {
    id: ObjectId,
    _marker: std::marker::PhantomData<fn() -> P>,
}

impl<P: Proxy> Weak<P> {
    /// Try to recover a live proxy from this weak handle.
    pub fn upgrade(&self, conn: &Connection) -> Result<P, InvalidId> {
        P::from_id(conn, self.id.clone())
    }
}

/// An error occurring while parsing or dispatching an incoming event.
#[derive(Debug)]
#[non_exhaustive]
pub enum DispatchError {
    /// The message did not match the signature expected for its interface and opcode.
    BadMessage {
        /// The raw message that failed to parse.
        msg: Message<ObjectId>,
        /// Interface of the object the offending message was sent to.
        interface: &'static str,
    },
    /// Reading or flushing the connection itself failed.
    Backend(crate::backend::client::WaylandError),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::BadMessage { msg, interface } => {
                write!(f, "malformed message for {interface}@{}, opcode {}", msg.sender_id, msg.opcode)
            }
            DispatchError::Backend(e) => write!(f, "backend error: {e}"),
        }
    }
}

impl std::error::Error for DispatchError {}
