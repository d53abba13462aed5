//! A handle to one connected client.

use std::sync::Arc;

use waylink_backend::server::{ClientData, ClientId, Credentials, Handle};

/// A connected client, as seen from inside a [`crate::Dispatch`]/[`crate::GlobalDispatch`]
/// callback.
///
/// Cheap to clone: it only carries a [`ClientId`] and the [`ClientData`] the application
/// installed when the connection was accepted.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) id: ClientId,
    pub(crate) data: Arc<dyn ClientData>,
}

impl Client {
    /// This client's ID, stable for the lifetime of the connection.
    pub fn id(&self) -> ClientId {
        self.id.clone()
    }

    /// The application data associated with this client at [`Handle::insert_client`] time.
    pub fn data<D: ClientData + 'static>(&self) -> Option<&D> {
        self.data.downcast_ref::<D>()
    }

    /// The kernel credentials (pid/uid/gid) of the connected process.
    pub fn credentials(&self, handle: &Handle) -> Result<Credentials, waylink_backend::server::InvalidId> {
        handle.get_client_credentials(self.id.clone())
    }
}
