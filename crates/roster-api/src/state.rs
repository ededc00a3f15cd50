//! Shared application state for the roster API.
//!
//! The state is built once at startup and shared behind an [`Arc`] by
//! every handler. It holds no mutable data of its own: all coordination
//! happens in the store.

use std::sync::Arc;

use roster_core::RosterService;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The service facade.
    pub service: RosterService,
}

impl AppState {
    /// Wrap a service facade into shareable state.
    pub fn new(service: RosterService) -> Arc<Self> {
        Arc::new(Self { service })
    }
}
