//! Hand-written `wl_display` and `wl_registry` resources.
//!
//! `waylink-scanner`'s generated server modules explicitly skip both interfaces: their wire-level
//! handling (creating the implicit root object, tracking bound registries, dispatching `bind` to
//! the right [`crate::GlobalDispatch`]) is done internally by `waylink-backend`'s engine, not by
//! per-object [`crate::Dispatch`] callbacks. These wrappers exist only so generated interfaces
//! can refer to `WlDisplay`/`WlRegistry` the same way they would a generated one, e.g. as the
//! sender of a `wl_display.error` event or the type parameter of [`crate::DisplayHandle::send_event`].

pub use wl_display::WlDisplay;
pub use wl_registry::WlRegistry;

pub mod wl_display {
    //! The `wl_display` singleton: the implicit root object of every client connection.
    use waylink_backend::core_interfaces::WL_DISPLAY_INTERFACE;

    use crate::backend::protocol::{same_interface, Argument, Interface, Message};
    use crate::backend::{smallvec, InvalidId, ObjectId};
    use crate::dispatch::{DispatchError, Resource};
    use crate::display::DisplayHandle;

    /// Requests `wl_display` accepts. Handled internally by `waylink-backend`; never delivered
    /// to application [`crate::Dispatch`] callbacks.
    #[derive(Debug)]
    #[non_exhaustive]
    pub enum Request {
        /// `wl_display.sync`
        Sync,
        /// `wl_display.get_registry`
        GetRegistry,
    }

    /// Events `wl_display` emits.
    #[derive(Debug)]
    #[non_exhaustive]
    pub enum Event {
        /// A request violated the protocol and the client is about to be disconnected.
        Error {
            /// The object that caused the error.
            object_id: ObjectId,
            /// Interface-specific error code.
            code: u32,
            /// Human-readable explanation.
            message: String,
        },
        /// A protocol object ID has been recycled and may be reused by a future request.
        DeleteId {
            /// The protocol ID that was freed.
            id: u32,
        },
    }

    #[derive(Debug, Clone)]
    pub struct WlDisplay {
        id: ObjectId,
    }

    impl std::cmp::PartialEq for WlDisplay {
        fn eq(&self, other: &WlDisplay) -> bool {
            self.id == other.id
        }
    }

    impl std::cmp::Eq for WlDisplay {}

    impl Resource for WlDisplay {
        type Request = Request;
        type Event = Event;

        #[inline]
        fn interface() -> &'static Interface {
            &WL_DISPLAY_INTERFACE
        }

        #[inline]
        fn id(&self) -> ObjectId {
            self.id.clone()
        }

        #[inline]
        fn version(&self) -> u32 {
            1
        }

        fn data<D: crate::Dispatch<Self> + 'static>(&self) -> Option<&<D as crate::Dispatch<Self>>::UserData> {
            None
        }

        #[inline]
        fn from_id<D>(_cx: &mut DisplayHandle<D>, id: ObjectId) -> Result<Self, InvalidId> {
            if same_interface(id.interface(), Self::interface()) {
                Ok(WlDisplay { id })
            } else {
                Err(InvalidId)
            }
        }

        fn parse_request<D>(
            cx: &mut DisplayHandle<D>,
            msg: Message<ObjectId>,
        ) -> Result<(Self, Self::Request), DispatchError> {
            let me = Self::from_id(cx, msg.sender_id.clone()).unwrap();
            match msg.opcode {
                0 => Ok((me, Request::Sync)),
                1 => Ok((me, Request::GetRegistry)),
                _ => Err(DispatchError::BadMessage { msg, interface: Self::interface().name }),
            }
        }

        fn write_event<D>(&self, _cx: &mut DisplayHandle<D>, event: Self::Event) -> Result<Message<ObjectId>, InvalidId> {
            let (opcode, args) = match event {
                Event::Error { object_id, code, message } => (
                    0u16,
                    smallvec::smallvec![
                        Argument::Object(object_id),
                        Argument::Uint(code),
                        Argument::Str(Some(Box::new(std::ffi::CString::new(message).unwrap()))),
                    ],
                ),
                Event::DeleteId { id } => (1u16, smallvec::smallvec![Argument::Uint(id)]),
            };
            Ok(Message { sender_id: self.id.clone(), opcode, args })
        }
    }
}

pub mod wl_registry {
    //! The global registry: advertises available globals and routes `bind` requests.
    use waylink_backend::core_interfaces::WL_REGISTRY_INTERFACE;

    use crate::backend::protocol::{same_interface, Argument, Interface, Message};
    use crate::backend::{smallvec, InvalidId, ObjectId};
    use crate::dispatch::{DispatchError, Resource};
    use crate::display::DisplayHandle;

    /// Requests `wl_registry` accepts. Dispatching a `bind` to the right
    /// [`crate::GlobalDispatch`] is done internally by `waylink-backend`; this variant exists so
    /// the request can still be named if ever observed, e.g. for logging.
    #[derive(Debug)]
    #[non_exhaustive]
    pub enum Request {
        /// `wl_registry.bind`
        Bind {
            /// Numeric name of the global being bound.
            name: u32,
            /// Interface name the client asked to bind.
            interface: String,
            /// Version the client asked to bind.
            version: u32,
            /// The not-yet-initialized object the bind allocated.
            id: ObjectId,
        },
    }

    /// Events `wl_registry` emits.
    #[derive(Debug)]
    #[non_exhaustive]
    pub enum Event {
        /// A new global is now advertised.
        Global {
            /// Numeric name to pass to a future `bind`.
            name: u32,
            /// Interface name of the advertised global.
            interface: String,
            /// Highest version of the interface the server supports.
            version: u32,
        },
        /// A previously advertised global is no longer available.
        GlobalRemove {
            /// Numeric name of the global that was removed.
            name: u32,
        },
    }

    #[derive(Debug, Clone)]
    pub struct WlRegistry {
        id: ObjectId,
    }

    impl std::cmp::PartialEq for WlRegistry {
        fn eq(&self, other: &WlRegistry) -> bool {
            self.id == other.id
        }
    }

    impl std::cmp::Eq for WlRegistry {}

    impl Resource for WlRegistry {
        type Request = Request;
        type Event = Event;

        #[inline]
        fn interface() -> &'static Interface {
            &WL_REGISTRY_INTERFACE
        }

        #[inline]
        fn id(&self) -> ObjectId {
            self.id.clone()
        }

        #[inline]
        fn version(&self) -> u32 {
            1
        }

        fn data<D: crate::Dispatch<Self> + 'static>(&self) -> Option<&<D as crate::Dispatch<Self>>::UserData> {
            None
        }

        #[inline]
        fn from_id<D>(_cx: &mut DisplayHandle<D>, id: ObjectId) -> Result<Self, InvalidId> {
            if same_interface(id.interface(), Self::interface()) {
                Ok(WlRegistry { id })
            } else {
                Err(InvalidId)
            }
        }

        fn parse_request<D>(
            cx: &mut DisplayHandle<D>,
            msg: Message<ObjectId>,
        ) -> Result<(Self, Self::Request), DispatchError> {
            let me = Self::from_id(cx, msg.sender_id.clone()).unwrap();
            if let [Argument::Uint(name), Argument::Str(interface), Argument::Uint(version), Argument::NewId(id)] =
                &msg.args[..]
            {
                Ok((
                    me,
                    Request::Bind {
                        name: *name,
                        interface: match interface {
                            Some(s) => String::from_utf8_lossy(s.as_bytes()).into_owned(),
                            None => String::new(),
                        },
                        version: *version,
                        id: id.clone(),
                    },
                ))
            } else {
                Err(DispatchError::BadMessage { msg, interface: Self::interface().name })
            }
        }

        fn write_event<D>(&self, _cx: &mut DisplayHandle<D>, event: Self::Event) -> Result<Message<ObjectId>, InvalidId> {
            let (opcode, args) = match event {
                Event::Global { name, interface, version } => (
                    0u16,
                    smallvec::smallvec![
                        Argument::Uint(name),
                        Argument::Str(Some(Box::new(std::ffi::CString::new(interface).unwrap()))),
                        Argument::Uint(version),
                    ],
                ),
                Event::GlobalRemove { name } => (1u16, smallvec::smallvec![Argument::Uint(name)]),
            };
            Ok(Message { sender_id: self.id.clone(), opcode, args })
        }
    }
}
