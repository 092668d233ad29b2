use dioxus::prelude::*;

use crate::context::provide_store;
use crate::pages::{Landing, Messages};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page
/// - `/messages` - Messaging view with chat list and conversation
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/messages")]
    Messages {},
}

/// Root application component.
///
/// Provides global styles, the shared chat store, and routing. The
/// store is seeded with demo conversations here; state is owner-provided
/// rather than a file-scoped constant mutated by reference.
#[component]
pub fn App() -> Element {
    provide_store(crate::demo::seed_store());

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
