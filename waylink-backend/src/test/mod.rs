#![allow(dead_code, non_snake_case)]

use std::os::fd::OwnedFd;
use std::sync::Arc;

use crate::protocol::{Argument, Message};

use crate::rs::{client as client_rs, server as server_rs};

macro_rules! expand_test {
    ($test_name:ident, $test_body:tt) => {
        #[test]
        #[allow(unused_imports)]
        fn $test_name() {
            let _ = env_logger::builder().is_test(true).try_init();
            use client_rs as client_backend;
            use server_rs as server_backend;
            $test_body
        }
    };
    (panic $test_name:ident, $test_body:tt) => {
        #[test]
        #[should_panic]
        #[allow(unused_imports)]
        fn $test_name() {
            let _ = env_logger::builder().is_test(true).try_init();
            use client_rs as client_backend;
            use server_rs as server_backend;
            $test_body
        }
    };
}



/*
 * Assertion of Send/Sync for all relevant objects
 */

fn ensure_both<I: Send + Sync>() {}

#[allow(dead_code)]
fn send_sync_client_rs() {
    ensure_both::<client_rs::Backend>();
    ensure_both::<client_rs::ObjectId>();
}

#[allow(dead_code)]
fn send_sync_server_rs() {
    ensure_both::<server_rs::Backend<()>>();
    ensure_both::<server_rs::ObjectId>();
    ensure_both::<server_rs::GlobalId>();
    ensure_both::<server_rs::ClientId>();
}

/*
 * A "do nothing" data as a helper
 */
struct DoNothingData;

// Server Global Handler

impl<D> server_rs::GlobalHandler<D> for DoNothingData {
    fn bind(
        self: Arc<Self>,
        _: &server_rs::Handle,
        _: &mut D,
        _: server_rs::ClientId,
        _: server_rs::GlobalId,
        _: server_rs::ObjectId,
    ) -> Arc<dyn server_rs::ObjectData<D>> {
        self
    }
}

// Server Object Data

impl<D> server_rs::ObjectData<D> for DoNothingData {
    fn request(
        self: Arc<Self>,
        _: &server_rs::Handle,
        _: &mut D,
        _: server_rs::ClientId,
        _: Message<server_rs::ObjectId, OwnedFd>,
    ) -> Option<Arc<dyn server_rs::ObjectData<D>>> {
        None
    }

    fn destroyed(
        self: Arc<Self>,
        _handle: &server_rs::Handle,
        _: &mut D,
        _: server_rs::ClientId,
        _: server_rs::ObjectId,
    ) {
    }
}

// Client Object Data

impl client_rs::ObjectData for DoNothingData {
    fn event(
        self: Arc<Self>,
        _: &client_rs::Backend,
        _: Message<client_rs::ObjectId, OwnedFd>,
    ) -> Option<Arc<dyn client_rs::ObjectData>> {
        None
    }

    fn destroyed(&self, _: client_rs::ObjectId) {}
}
