//! Port definitions - the seams between the domain layer and the
//! outside world (storage, network, routing).

mod http_transport;
mod key_value_store;
mod navigator;

pub use http_transport::{
    HttpRequest, HttpResponse, HttpTransport, Method, MultipartFile, RequestBody, TransportError,
};
pub use key_value_store::{KeyValueStore, StorageError};
pub use navigator::{Navigator, LOGIN_ROUTE};
