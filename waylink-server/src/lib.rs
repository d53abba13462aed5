//! Typed, generated-code-friendly server object model built on top of [`waylink_backend`].
//!
//! This crate plays the role that `wayland-server` plays over `wayland-backend` in the
//! upstream ecosystem: [`waylink_backend`] only knows about untyped [`Message`][backend::protocol::Message]s
//! and raw [`ObjectId`][backend::ObjectId]s, while this crate adds the [`Resource`] trait that
//! `waylink-scanner`'s generated per-interface modules implement, plus the [`Dispatch`]/
//! [`GlobalDispatch`] machinery applications implement to handle requests and bind globals.
//!
//! `wl_display` and `wl_registry` are hand-written here (see [`globals`]) rather than
//! generated, since both carry behavior the scanner's codegen does not model: `wl_display` is
//! the implicit root object every client connection starts with, and `wl_registry.bind` takes
//! a client-chosen interface and version rather than a signature fixed by the protocol XML.

#![warn(missing_docs, missing_debug_implementations)]

/// Re-export of the pieces of `waylink-backend` that generated interface modules splice
/// directly into their `use` statements.
pub mod backend {
    pub use waylink_backend::server::ObjectId;
    pub use waylink_backend::smallvec;

    /// Error and object-data types shared with `waylink-backend`'s server engine.
    pub use waylink_backend::server::{InvalidId, ObjectData};

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

mod client;
mod dispatch;
mod display;
mod globals;
mod listener;

pub use client::Client;
pub use dispatch::{DataInit, Dispatch, DispatchError, GlobalDispatch, New, Resource, ResourceData};
pub use display::{Display, DisplayHandle};
pub use globals::{WlDisplay, WlRegistry};
pub use listener::{BindError, ListeningSocket};

pub use waylink_backend::server::{ClientId, Credentials, DisconnectReason, GlobalId, InitError};
