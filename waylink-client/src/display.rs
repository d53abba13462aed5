//! Hand-written `wl_display` and `wl_registry` proxies.
//!
//! `waylink-scanner`'s generated client modules explicitly skip both interfaces, since they need
//! behavior its templates do not model: `wl_display` is the implicit root object that exists
//! before any request has been sent on a connection, and `wl_registry.bind` takes a caller-chosen
//! interface and version rather than one fixed by the protocol XML. Everything else here follows
//! the same per-interface-module shape the generated code uses, so both types satisfy [`Proxy`]
//! identically and a generated interface can refer to them the same way it would a generated one.

pub use wl_display::WlDisplay;
pub use wl_registry::WlRegistry;

pub mod wl_display {
    //! The `wl_display` singleton: every connection's implicit root object.
    use waylink_backend::core_interfaces::{
        WL_CALLBACK_INTERFACE, WL_DISPLAY_INTERFACE, WL_REGISTRY_INTERFACE,
    };

    use crate::backend::protocol::{same_interface, Argument, Interface, Message};
    use crate::backend::{smallvec, InvalidId, ObjectId};
    use crate::conn::Connection;
    use crate::proxy::{DispatchError, Proxy};

    use super::wl_registry::WlRegistry;

    /// Requests `wl_display` accepts.
    ///
    /// The `new_id` arguments of both requests are omitted here: their target interface is fixed
    /// by the protocol, so the caller never supplies it, matching how the scanner's codegen drops
    /// statically-known `new_id` arguments from the client-side request enum.
    #[derive(Debug)]
    #[non_exhaustive]
    pub enum Request {
        /// See [`WlDisplay::sync`].
        Sync,
        /// See [`WlDisplay::get_registry`].
        GetRegistry,
    }

    /// Events `wl_display` emits.
    #[derive(Debug)]
    #[non_exhaustive]
    pub enum Event {
        /// A request violated the protocol and the connection is about to be torn down by the
        /// server.
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

    impl Proxy for WlDisplay {
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
        fn from_id(conn: &Connection, id: ObjectId) -> Result<Self, InvalidId> {
            let _ = conn;
            if same_interface(id.interface(), Self::interface()) {
                Ok(WlDisplay { id })
            } else {
                Err(InvalidId)
            }
        }

        fn parse_event(
            conn: &Connection,
            msg: Message<ObjectId>,
        ) -> Result<(Self, Self::Event), DispatchError> {
            let me = Self::from_id(conn, msg.sender_id.clone()).unwrap();
            match msg.opcode {
                0 => {
                    if let [Argument::Object(object_id), Argument::Uint(code), Argument::Str(message)] =
                        &msg.args[..]
                    {
                        Ok((
                            me,
                            Event::Error {
                                object_id: object_id.clone(),
                                code: *code,
                                message: match message {
                                    Some(s) => String::from_utf8_lossy(s.as_bytes()).into_owned(),
                                    None => String::new(),
                                },
                            },
                        ))
                    } else {
                        Err(DispatchError::BadMessage { msg, interface: Self::interface().name })
                    }
                }
                1 => {
                    if let [Argument::Uint(id)] = &msg.args[..] {
                        Ok((me, Event::DeleteId { id: *id }))
                    } else {
                        Err(DispatchError::BadMessage { msg, interface: Self::interface().name })
                    }
                }
                _ => Err(DispatchError::BadMessage { msg, interface: Self::interface().name }),
            }
        }

        fn write_request(
            &self,
            conn: &Connection,
            request: Self::Request,
        ) -> Result<(Message<ObjectId>, Option<(&'static Interface, u32)>), InvalidId> {
            let mut child_spec = None;
            let (opcode, args) = match request {
                Request::Sync => {
                    let my_info = conn.object_info(self.id())?;
                    child_spec = Some((&WL_CALLBACK_INTERFACE, my_info.version));
                    (0u16, smallvec::smallvec![Argument::NewId(Connection::null_id())])
                }
                Request::GetRegistry => {
                    let my_info = conn.object_info(self.id())?;
                    child_spec = Some((&WL_REGISTRY_INTERFACE, my_info.version));
                    (1u16, smallvec::smallvec![Argument::NewId(Connection::null_id())])
                }
            };
            Ok((Message { sender_id: self.id.clone(), opcode, args }, child_spec))
        }
    }

    impl WlDisplay {
        /// Wrap the display object ID a freshly connected [`Connection`] already knows about.
        pub fn new(conn: &Connection) -> WlDisplay {
            WlDisplay { id: conn.backend().display_id() }
        }

        /// Ask the server to emit `wl_callback.done` once it has processed every request sent
        /// before this one, useful for waiting on the completion of a batch of requests.
        ///
        /// Returns the raw ID of the new `wl_callback` object rather than a typed proxy: the
        /// generated `WlCallback` type lives downstream in `waylink-protocols`, which depends on
        /// this crate rather than the other way around. Wrap the ID with `WlCallback::from_id`
        /// there.
        pub fn sync(&self, conn: &Connection) -> Result<ObjectId, InvalidId> {
            let (msg, child_spec) = self.write_request(conn, Request::Sync)?;
            conn.backend().send_request(to_raw_fd_message(msg), None, child_spec)
        }

        /// Fetch the global registry, used to discover and bind the compositor's advertised
        /// globals.
        pub fn get_registry(&self, conn: &Connection) -> Result<WlRegistry, InvalidId> {
            self.send_constructor(conn, Request::GetRegistry)
        }
    }

    fn to_raw_fd_message(
        msg: Message<ObjectId>,
    ) -> waylink_backend::protocol::Message<ObjectId, std::os::unix::io::RawFd> {
        use std::os::unix::io::AsRawFd;
        msg.map_fd(|fd| fd.as_raw_fd())
    }
}

pub mod wl_registry {
    //! The global registry: advertises the compositor's available globals and binds them.
    use waylink_backend::core_interfaces::WL_REGISTRY_INTERFACE;

    use crate::backend::protocol::{same_interface, Argument, Interface, Message};
    use crate::backend::{smallvec, InvalidId, ObjectId};
    use crate::conn::Connection;
    use crate::proxy::{DispatchError, Proxy};

    /// Requests `wl_registry` accepts.
    #[derive(Debug)]
    #[non_exhaustive]
    pub enum Request {
        /// See [`WlRegistry::bind`].
        Bind {
            /// Numeric name of the global, as announced via [`Event::Global`].
            name: u32,
            /// Name of the interface to bind.
            interface: String,
            /// Version of the interface to bind.
            version: u32,
            /// Interface descriptor and version driving both the wire-level
            /// `interface`/`version` arguments above and the object actually allocated for this
            /// request.
            id: (&'static Interface, u32),
        },
    }

    /// Events `wl_registry` emits.
    #[derive(Debug)]
    #[non_exhaustive]
    pub enum Event {
        /// A new global was advertised by the server.
        Global {
            /// Numeric name to pass to [`WlRegistry::bind`].
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

    impl Proxy for WlRegistry {
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
        fn from_id(conn: &Connection, id: ObjectId) -> Result<Self, InvalidId> {
            let _ = conn;
            if same_interface(id.interface(), Self::interface()) {
                Ok(WlRegistry { id })
            } else {
                Err(InvalidId)
            }
        }

        fn parse_event(
            conn: &Connection,
            msg: Message<ObjectId>,
        ) -> Result<(Self, Self::Event), DispatchError> {
            let me = Self::from_id(conn, msg.sender_id.clone()).unwrap();
            match msg.opcode {
                0 => {
                    if let [Argument::Uint(name), Argument::Str(interface), Argument::Uint(version)] =
                        &msg.args[..]
                    {
                        Ok((
                            me,
                            Event::Global {
                                name: *name,
                                interface: match interface {
                                    Some(s) => String::from_utf8_lossy(s.as_bytes()).into_owned(),
                                    None => String::new(),
                                },
                                version: *version,
                            },
                        ))
                    } else {
                        Err(DispatchError::BadMessage { msg, interface: Self::interface().name })
                    }
                }
                1 => {
                    if let [Argument::Uint(name)] = &msg.args[..] {
                        Ok((me, Event::GlobalRemove { name: *name }))
                    } else {
                        Err(DispatchError::BadMessage { msg, interface: Self::interface().name })
                    }
                }
                _ => Err(DispatchError::BadMessage { msg, interface: Self::interface().name }),
            }
        }

        fn write_request(
            &self,
            conn: &Connection,
            request: Self::Request,
        ) -> Result<(Message<ObjectId>, Option<(&'static Interface, u32)>), InvalidId> {
            let _ = conn;
            let mut child_spec = None;
            let (opcode, args) = match request {
                Request::Bind { name, interface, version, id } => {
                    child_spec = Some((id.0, id.1));
                    (
                        0u16,
                        smallvec::smallvec![
                            Argument::Uint(name),
                            Argument::Str(Some(Box::new(std::ffi::CString::new(interface).unwrap()))),
                            Argument::Uint(version),
                            Argument::NewId(Connection::null_id()),
                        ],
                    )
                }
            };
            Ok((Message { sender_id: self.id.clone(), opcode, args }, child_spec))
        }
    }

    impl WlRegistry {
        /// Bind a global previously announced via [`Event::Global`].
        ///
        /// `interface`/`version` are supplied by the caller rather than fixed by the protocol
        /// XML, which is why this method, unlike every generated constructor method, takes the
        /// target type as an explicit generic parameter instead of inferring it from a fixed
        /// return type.
        pub fn bind<T: Proxy>(&self, conn: &Connection, name: u32, version: u32) -> Result<T, InvalidId> {
            self.send_constructor(
                conn,
                Request::Bind {
                    name,
                    interface: T::interface().name.to_string(),
                    version,
                    id: (T::interface(), version),
                },
            )
        }
    }
}
