//! Application state shared across handlers.

use notely_core::Config;
use notely_storage::Storage;
use std::sync::Arc;

/// Shared application state: configuration plus the storage backend chosen
/// at startup. Handlers depend on the `Storage` abstraction only.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}
