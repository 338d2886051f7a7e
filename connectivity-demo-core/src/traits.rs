//! Gateway trait — the seam between panel controllers and the demo backend.
//!
//! Controllers never talk HTTP directly; they go through [`DemoGateway`] so
//! tests can script responses and frontends can share one implementation.

use async_trait::async_trait;

use crate::error::DemoResult;
use crate::types::{ActionOutcome, ResolvePayload};

/// Client-side view of the demo backend.
///
/// Error mapping contract:
/// - `resolve` turns an HTTP 404 into [`DemoError::ServiceNotFound`];
/// - the action calls turn any status > 399 into
///   [`DemoError::ActionFailed`] carrying the payload's message;
/// - transport failures become [`DemoError::NetworkError`].
///
/// [`DemoError::ServiceNotFound`]: crate::error::DemoError::ServiceNotFound
/// [`DemoError::ActionFailed`]: crate::error::DemoError::ActionFailed
/// [`DemoError::NetworkError`]: crate::error::DemoError::NetworkError
#[async_trait]
pub trait DemoGateway: Send + Sync {
    /// `GET /resolv?fqdn=` — resolve a name through the backend.
    async fn resolve(&self, fqdn: &str) -> DemoResult<ResolvePayload>;

    /// `GET /webproxy?url=` — proxy an HTTP request to the target.
    async fn web_proxy(&self, url: &str) -> DemoResult<ActionOutcome>;

    /// `GET /dbconnect?url=` — open a database connection to the target.
    async fn db_connect(&self, url: &str) -> DemoResult<ActionOutcome>;

    /// Fetch a static backend document (the `/dump` page).
    async fn fetch_dump(&self, path: &str) -> DemoResult<ActionOutcome>;
}
