//! The [`Resource`]/[`Dispatch`]/[`GlobalDispatch`] machinery `waylink-scanner`-generated
//! interface modules implement against.

use std::marker::PhantomData;
use std::sync::Arc;

use waylink_backend::protocol::Interface;
use waylink_backend::server::{ClientId, Handle, InvalidId, ObjectData, ObjectId};

use crate::backend::protocol::Message;
use crate::client::Client;
use crate::display::DisplayHandle;

/// A typed handle to a client's Wayland object on the server side.
///
/// Implementations of this trait are generated by `waylink-scanner` for every interface in a
/// protocol XML file, except `wl_display` and `wl_registry`, which are hand-written in
/// [`crate::globals`] since they need behavior the generated shape does not cover.
pub trait Resource: Clone + std::fmt::Debug + Sized {
    /// The enum of requests this object can receive.
    type Request;
    /// The enum of events this object can send.
    type Event;

    /// The interface descriptor for this object type.
    fn interface() -> &'static Interface;

    /// The underlying object ID.
    fn id(&self) -> ObjectId;

    /// The version of the interface this specific object was created at.
    fn version(&self) -> u32;

    /// The [`Dispatch::UserData`] the application attached via [`DataInit::init`] when this
    /// object was created, if `D` is the state type the backend is running with.
    fn data<D: Dispatch<Self> + 'static>(&self) -> Option<&<D as Dispatch<Self>>::UserData>;

    /// Wrap an existing object ID as this resource type.
    ///
    /// Fails if the ID's interface does not match [`Resource::interface`].
    fn from_id<D>(cx: &mut DisplayHandle<D>, id: ObjectId) -> Result<Self, InvalidId>;

    /// Parse a raw message addressed to this object type into its typed [`Resource::Request`].
    fn parse_request<D>(
        cx: &mut DisplayHandle<D>,
        msg: Message<ObjectId>,
    ) -> Result<(Self, Self::Request), DispatchError>;

    /// Encode a typed event into a raw message.
    fn write_event<D>(&self, cx: &mut DisplayHandle<D>, event: Self::Event) -> Result<Message<ObjectId>, InvalidId>;
}

/// Implemented by application state to receive requests for a given resource type.
///
/// `waylink-scanner` does not generate these impls: applications write one per (interface,
/// user-data) pair they care about, the same division of labor as upstream `wayland-server`.
pub trait Dispatch<I: Resource>: Sized {
    /// Data the application chose to associate with each object of this type at creation time.
    type UserData: Send + Sync + 'static;

    /// Handle one request received on `resource`.
    fn request(
        state: &mut Self,
        client: &Client,
        resource: &I,
        request: I::Request,
        data: &Self::UserData,
        cx: &mut DisplayHandle<Self>,
        data_init: &mut DataInit<'_, Self>,
    );

    /// Called after `resource` has been destroyed, either by a client-initiated destructor
    /// request or by the client disconnecting.
    fn destroyed(_state: &mut Self, _client_id: ClientId, _object_id: ObjectId, _data: &Self::UserData) {}
}

/// Implemented by application state to decide which clients can see a global, and to initialize
/// the resource a client creates by binding it.
pub trait GlobalDispatch<I: Resource>: Sized {
    /// Data the application chose to associate with the global at registration time.
    type GlobalData: Send + Sync + 'static;

    /// A client bound this global, creating `resource`.
    fn bind(
        state: &mut Self,
        cx: &DisplayHandle<Self>,
        client: &Client,
        resource: New<I>,
        global_data: &Self::GlobalData,
        data_init: &mut DataInit<'_, Self>,
    );

    /// Whether `client` should be told this global exists at all.
    ///
    /// Default implementation always returns true.
    fn can_view(_client: Client, _global_data: &Self::GlobalData) -> bool {
        true
    }
}

/// A freshly allocated object ID whose [`Dispatch::UserData`]/[`GlobalDispatch::GlobalData`] has
/// not been attached yet.
///
/// The wire parser allocates the backing ID as soon as it sees a `new_id` argument or a
/// `wl_registry.bind` request, before the application has had a chance to decide what data to
/// associate with it; [`DataInit::init`] bridges the gap. Every [`Dispatch::request`]/
/// [`GlobalDispatch::bind`] callback that receives one of these must call [`DataInit::init`] on
/// it exactly once before returning.
#[derive(Debug)]
pub struct New<I> {
    id: ObjectId,
    _marker: PhantomData<fn() -> I>,
}

impl<I: Resource> New<I> {
    pub(crate) fn wrap(id: ObjectId) -> New<I> {
        New { id, _marker: PhantomData }
    }

    /// The raw object ID, before it has been given typed data.
    pub fn id(&self) -> ObjectId {
        self.id.clone()
    }
}

/// Attaches application data to an object the wire parser has just allocated.
pub struct DataInit<'a, D> {
    pub(crate) cx: &'a mut DisplayHandle<D>,
    pub(crate) client_id: ClientId,
    pub(crate) result: Option<Arc<dyn ObjectData<D>>>,
}

impl<'a, D: 'static> DataInit<'a, D> {
    /// Attach `data` to `resource` and return the now fully initialized typed handle.
    pub fn init<I, U>(&mut self, resource: New<I>, data: U) -> I
    where
        I: Resource + 'static,
        U: Send + Sync + 'static,
        D: Dispatch<I, UserData = U>,
    {
        let id = resource.id();
        let object_data: Arc<dyn ObjectData<D>> =
            Arc::new(ResourceData::<I, D> { udata: data, _marker: PhantomData });
        self.cx
            .backend_handle()
            .set_object_data::<D>(id.clone(), object_data.clone())
            .expect("object data already set for a freshly allocated id");
        self.result = Some(object_data);
        I::from_id(self.cx, id).expect("freshly allocated id carries an unexpected interface")
    }

    /// The client that owns the object being initialized.
    pub fn client_id(&self) -> ClientId {
        self.client_id.clone()
    }
}

/// Backend-facing [`ObjectData`] adapter that routes requests for one object through a
/// [`Dispatch`] impl.
///
/// Exposed so `waylink-scanner`-generated code can recover `UserData` with a single downcast via
/// [`Resource::data`]; application code never constructs this directly, only reads it back
/// through that method. Built the same way as the backing adapter the companion client crate
/// uses, see `waylink-client`'s `QueueProxyData`.
pub struct ResourceData<I: Resource, D: Dispatch<I>> {
    /// The data the application attached via [`DataInit::init`].
    pub udata: D::UserData,
    _marker: PhantomData<fn() -> I>,
}

impl<I: Resource, D: Dispatch<I>> std::fmt::Debug for ResourceData<I, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceData").finish_non_exhaustive()
    }
}

impl<I, D> ObjectData<D> for ResourceData<I, D>
where
    I: Resource + 'static,
    D: Dispatch<I> + 'static,
{
    fn request(
        self: Arc<Self>,
        handle: &Handle,
        data: &mut D,
        client_id: ClientId,
        msg: Message<ObjectId>,
    ) -> Option<Arc<dyn ObjectData<D>>> {
        let mut cx = DisplayHandle::from_handle(handle.clone());
        let client = match cx.client(client_id.clone()) {
            Ok(client) => client,
            Err(_) => return None,
        };

        match I::parse_request(&mut cx, msg) {
            Ok((resource, request)) => {
                let mut data_init = DataInit { cx: &mut cx, client_id, result: None };
                D::request(data, &client, &resource, request, &self.udata, &mut cx, &mut data_init);
                data_init.result
            }
            Err(err) => {
                log::warn!("dropping malformed request: {err}");
                None
            }
        }
    }

    fn destroyed(self: Arc<Self>, _handle: &Handle, data: &mut D, client_id: ClientId, object_id: ObjectId) {
        D::destroyed(data, client_id, object_id, &self.udata);
    }
}

/// An error occurring while parsing or dispatching an incoming request.
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
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::BadMessage { msg, interface } => {
                write!(f, "malformed message for {interface}@{}, opcode {}", msg.sender_id, msg.opcode)
            }
        }
    }
}

impl std::error::Error for DispatchError {}
