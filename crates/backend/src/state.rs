use std::sync::Arc;

use crate::shared::data::store::SalesStore;

/// Shared application state handed to every handler.
///
/// The store never changes after startup, so concurrent requests read it
/// through the `Arc` without any further coordination.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SalesStore>,
}
