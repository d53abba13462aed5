//! Typed, generated-code-friendly client object model built on top of [`waylink_backend`].
//!
//! This crate plays the role that `wayland-client` plays over `wayland-backend` in the
//! upstream ecosystem: [`waylink_backend`] only knows about untyped [`Message`][backend::Message]s
//! and raw [`ObjectId`][backend::ObjectId]s, while this crate adds the [`Proxy`] trait that
//! `waylink-scanner`'s generated per-interface modules implement, plus the [`EventQueue`]/
//! [`Dispatch`] machinery applications use to receive events.
//!
//! `wl_display` and `wl_registry` are hand-written here (see [`display`]) rather than
//! generated, since both need behavior the scanner's codegen does not model: `wl_display` is
//! the implicit root object of every connection, and `wl_registry.bind` takes a
//! caller-chosen interface and version rather than a signature fixed by the protocol XML.

#![warn(missing_docs, missing_debug_implementations)]

/// Re-export of the pieces of `waylink-backend` that generated interface modules splice
/// directly into their `use` statements.
pub mod backend {
    pub use waylink_backend::client::ObjectId;
    pub use waylink_backend::smallvec;

    /// Error types shared with `waylink-backend`'s client engine.
    pub mod client {
        pub use waylink_backend::client::{InvalidId, WaylandError};
    }
    pub use client::InvalidId;

    /// Protocol-level types, with [`Message`] fixed to this crate's file descriptor
    /// representation so generated code can write it as a single-argument type.
    pub mod protocol {
        pub use waylink_backend::protocol::{
            same_interface, Argument, ArgumentType, Interface, MessageDesc, WEnum, WEnumError,
        };

        /// A received or sent Wayland message.
        pub type Message<Id> = waylink_backend::protocol::Message<Id, std::os::unix::io::OwnedFd>;
    }
}

mod conn;
mod display;
mod event_queue;
mod globals;
mod proxy;

pub use conn::{ConnectError, Connection};
pub use display::{WlDisplay, WlRegistry};
pub use event_queue::{Dispatch, EventQueue, QueueHandle};
pub use globals::{GlobalError, GlobalList, GlobalListContents};
pub use proxy::{DispatchError, Proxy, Weak};
