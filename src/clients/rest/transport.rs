//! The transport seam used by resource accessors.

use std::future::Future;

use crate::clients::rest::RestError;
use crate::clients::{HttpRequest, HttpResponse};

/// Sends one request and returns the raw response.
///
/// Implementations must return a response for every HTTP status; a
/// [`RestError`] means the call could not be issued or no response was
/// obtained. Status classification and body decoding happen in the caller.
///
/// [`RestClient`](crate::clients::RestClient) is the production
/// implementation. Tests may provide their own to observe requests.
///
/// The returned future is `Send`, so accessors can be driven from spawned
/// tokio tasks while sharing one transport by reference.
pub trait Transport: Send + Sync {
    /// Sends `request`, making exactly one round trip.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, RestError>> + Send;
}
