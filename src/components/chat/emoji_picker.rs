//! Emoji Picker Component
//!
//! Category-tabbed grid over an injected catalog. Selecting any emoji
//! fires the same reaction contract the quick bar uses and the owner
//! closes the picker.

use connect_core::EmojiCatalog;
use dioxus::prelude::*;

#[component]
pub fn EmojiPicker(
    /// Externally supplied category table
    catalog: EmojiCatalog,
    /// Fired with the chosen emoji
    on_pick: EventHandler<String>,
) -> Element {
    let initial = catalog.first_key().unwrap_or_default().to_string();
    let mut active_tab = use_signal(move || initial);

    let tabs: Vec<(String, String)> = catalog
        .categories()
        .map(|(key, category)| (key.to_string(), category.name.clone()))
        .collect();
    let emojis: Vec<String> = catalog
        .get(&active_tab())
        .map(|category| category.emojis.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "emoji-picker",
            div { class: "emoji-picker-tabs",
                for (key, name) in tabs {
                    button {
                        class: if active_tab() == key { "emoji-tab emoji-tab-active" } else { "emoji-tab" },
                        onclick: move |_| active_tab.set(key.clone()),
                        "{name}"
                    }
                }
            }
            div { class: "emoji-picker-grid",
                for emoji in emojis {
                    button {
                        class: "emoji-cell",
                        onclick: move |_| on_pick.call(emoji.clone()),
                        "{emoji}"
                    }
                }
            }
        }
    }
}
