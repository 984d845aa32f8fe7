//! Execution-context client registry.
//!
//! Supplies exactly one long-lived fetch client per logical execution
//! context. A request-scoped context gets a fresh client every time (it
//! will be discarded with the request); a persistent context gets a
//! lazily-built process-wide singleton, reused for the rest of the
//! session so in-flight de-duplication and cached results survive
//! rendering re-entrancy.

use std::sync::{Arc, OnceLock};

use crate::fetch::FetchClient;

/// The lifetime class of the caller's execution context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Lives only for one request (server-side render of one response).
    RequestScoped,
    /// Spans the whole session (a running client shell).
    Persistent,
}

/// Registry handing out correctly-scoped fetch clients.
///
/// A value rather than ambient global state, so tests construct their own
/// registry per test context; production goes through [`get_context`].
pub struct ClientRegistry {
    persistent: OnceLock<Arc<FetchClient>>,
}

impl ClientRegistry {
    pub const fn new() -> Self {
        Self {
            persistent: OnceLock::new(),
        }
    }

    /// Get a fetch client for the given execution context.
    pub fn get_context(&self, ctx: ExecutionContext) -> Arc<FetchClient> {
        match ctx {
            // Never reuse across request-scoped calls: a recycled client
            // would serve stale-context data across unrelated requests.
            ExecutionContext::RequestScoped => Arc::new(FetchClient::new()),
            ExecutionContext::Persistent => {
                Arc::clone(self.persistent.get_or_init(|| Arc::new(FetchClient::new())))
            }
        }
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: ClientRegistry = ClientRegistry::new();

/// Get the process-wide fetch client for the given execution context.
pub fn get_context(ctx: ExecutionContext) -> Arc<FetchClient> {
    REGISTRY.get_context(ctx)
}
