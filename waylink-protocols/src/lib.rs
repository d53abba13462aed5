//! Generated bindings for the core Wayland protocol (`wl_display` and friends).
//!
//! The interface descriptors, and the typed client/server wrapper APIs gated behind the
//! `client`/`server` features, are produced at build time by `waylink-scanner` from
//! `protocols/wayland.xml` and pulled in here via `include!`. This crate only carries the
//! core protocol module, since extension protocols (including XDG-shell) are out of scope.

#![warn(missing_docs)]
#![allow(rustdoc::broken_intra_doc_links)]

/// Static `Interface` descriptors for every interface in the core protocol.
pub mod interfaces {
    #![allow(non_upper_case_globals, non_snake_case, dead_code, missing_docs)]
    include!(concat!(env!("OUT_DIR"), "/wayland_interfaces.rs"));
}

/// Typed client-side request/event wrappers for the core protocol, one module per interface.
#[cfg(feature = "client")]
pub mod client {
    #![allow(non_camel_case_types, non_snake_case, dead_code, missing_docs, unused_imports)]
    pub use super::interfaces::*;
    include!(concat!(env!("OUT_DIR"), "/wayland_client_api.rs"));
}

/// Typed server-side request/event wrappers for the core protocol, one module per interface.
#[cfg(feature = "server")]
pub mod server {
    #![allow(non_camel_case_types, non_snake_case, dead_code, missing_docs, unused_imports)]
    pub use super::interfaces::*;
    include!(concat!(env!("OUT_DIR"), "/wayland_server_api.rs"));
}
