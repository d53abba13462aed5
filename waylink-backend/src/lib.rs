//! Native Rust implementation of the Wayland wire protocol and object engine.
//!
//! This crate provides the low-level pieces consumed by `waylink-client` and
//! `waylink-server`: the [`protocol`] descriptor model and wire codec, and the
//! [`client`]/[`server`] object engines built on top of them. None of it talks
//! to `libwayland`; everything here is a from-scratch implementation of the
//! protocol described at <https://wayland.freedesktop.org>.

#![warn(missing_docs, missing_debug_implementations)]
#![forbid(unsafe_op_in_unsafe_fn)]

pub extern crate smallvec;

/// Helper macro for quickly making a [`Message`](crate::protocol::Message)
#[macro_export]
macro_rules! message {
    ($sender_id: expr, $opcode: expr, [$($args: expr),* $(,)?] $(,)?) => {
        $crate::protocol::Message {
            sender_id: $sender_id,
            opcode: $opcode,
            args: $crate::smallvec::smallvec![$($args),*],
        }
    }
}

/// Hard-coded descriptors for `wl_display`, `wl_registry` and `wl_callback`, the three
/// interfaces every backend and generated client/server wrapper needs regardless of which
/// protocol XML files were scanned.
pub mod core_interfaces;
mod debug;
pub mod protocol;
mod rs;
mod types;

pub use rs::client;
pub use rs::server;

#[cfg(test)]
mod test;
