//! Test helpers: a scriptable gateway mock with a call log.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify, RwLock};

use crate::error::{DemoError, DemoResult};
use crate::traits::DemoGateway;
use crate::types::{ActionOutcome, ResolvePayload};

/// In-memory gateway whose responses are scripted per test.
///
/// Unscripted names resolve to a 404, matching a backend that cannot answer
/// them. Every invocation is appended to a call log so tests can assert
/// which requests were (not) issued.
pub struct MockGateway {
    resolutions: RwLock<HashMap<String, DemoResult<ResolvePayload>>>,
    web_proxy: RwLock<DemoResult<ActionOutcome>>,
    db_connect: RwLock<DemoResult<ActionOutcome>>,
    dump: RwLock<DemoResult<ActionOutcome>>,
    /// When set, resolves block until notified (for supersede races).
    gate: RwLock<Option<Arc<Notify>>>,
    calls: Mutex<Vec<String>>,
}

impl MockGateway {
    pub fn new() -> Self {
        let ok = Ok(ActionOutcome {
            status: 200,
            message: "OK".to_string(),
        });
        Self {
            resolutions: RwLock::new(HashMap::new()),
            web_proxy: RwLock::new(ok.clone()),
            db_connect: RwLock::new(ok.clone()),
            dump: RwLock::new(ok),
            gate: RwLock::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script `fqdn` to resolve to `ips` (variant A body shape).
    pub async fn script_resolution(&self, fqdn: &str, ips: &[&str]) {
        self.resolutions.write().await.insert(
            fqdn.to_string(),
            Ok(ResolvePayload {
                fqdn: Some(fqdn.to_string()),
                ips: Some(ips.iter().map(ToString::to_string).collect()),
                message: None,
            }),
        );
    }

    /// Script `fqdn` to resolve via the `message` field (variant B).
    pub async fn script_resolution_message(&self, fqdn: &str, address: &str) {
        self.resolutions.write().await.insert(
            fqdn.to_string(),
            Ok(ResolvePayload {
                fqdn: Some(fqdn.to_string()),
                ips: None,
                message: Some(address.to_string()),
            }),
        );
    }

    /// Script `fqdn` to fail with `err`.
    pub async fn script_resolve_error(&self, fqdn: &str, err: DemoError) {
        self.resolutions
            .write()
            .await
            .insert(fqdn.to_string(), Err(err));
    }

    pub async fn script_web_proxy(&self, result: DemoResult<ActionOutcome>) {
        *self.web_proxy.write().await = result;
    }

    pub async fn script_db_connect(&self, result: DemoResult<ActionOutcome>) {
        *self.db_connect.write().await = result;
    }

    pub async fn script_dump(&self, result: DemoResult<ActionOutcome>) {
        *self.dump.write().await = result;
    }

    /// Make subsequent resolves block until the returned handle is notified.
    pub async fn hold_resolves(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.write().await = Some(Arc::clone(&gate));
        gate
    }

    /// Calls received so far, in order, as `"<endpoint> <argument>"`.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: String) {
        self.calls.lock().await.push(call);
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DemoGateway for MockGateway {
    async fn resolve(&self, fqdn: &str) -> DemoResult<ResolvePayload> {
        self.record(format!("resolve {fqdn}")).await;
        let gate = self.gate.read().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        match self.resolutions.read().await.get(fqdn) {
            Some(result) => result.clone(),
            None => Err(DemoError::ServiceNotFound(fqdn.to_string())),
        }
    }

    async fn web_proxy(&self, url: &str) -> DemoResult<ActionOutcome> {
        self.record(format!("webproxy {url}")).await;
        self.web_proxy.read().await.clone()
    }

    async fn db_connect(&self, url: &str) -> DemoResult<ActionOutcome> {
        self.record(format!("dbconnect {url}")).await;
        self.db_connect.read().await.clone()
    }

    async fn fetch_dump(&self, path: &str) -> DemoResult<ActionOutcome> {
        self.record(format!("dump {path}")).await;
        self.dump.read().await.clone()
    }
}
