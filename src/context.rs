//! Store context provider for the Connect client.
//!
//! The messages page owns conversation state through a shared
//! [`ChatStore`] signal provided at the app root, so every component
//! reads the same model and all mutations flow through one place.

use connect_core::ChatStore;
use dioxus::prelude::*;

/// Provide the shared store to the component tree. Called once in `App`.
pub fn provide_store(store: ChatStore) -> Signal<ChatStore> {
    use_context_provider(|| Signal::new(store))
}

/// Hook to access the shared store from any child component.
pub fn use_store() -> Signal<ChatStore> {
    use_context()
}
