//! Demo data for the messaging view.
//!
//! Seeds the store the way a freshly-synced account would look. All demo
//! state goes through the store's own operations so previews, unread
//! counters, and reactions are exercised for real.

use chrono::{Duration, Utc};
use connect_core::{ChatStore, Conversation, Presence};

/// Campus contacts offered in the new-message and new-group dialogs.
pub fn contacts() -> Vec<String> {
    vec![
        "Alice Chen".to_string(),
        "Ben Okafor".to_string(),
        "Carla Reyes".to_string(),
        "Dmitri Volkov".to_string(),
        "Emma Larsson".to_string(),
        "Prof. Harding".to_string(),
    ]
}

/// Build a store with a handful of conversations in realistic states.
pub fn seed_store() -> ChatStore {
    let mut store = ChatStore::new();

    let mut alice_convo = Conversation::direct("Alice Chen").with_presence(Presence::Online);
    alice_convo.last_seen = Some(Utc::now() - Duration::minutes(2));
    let alice = store.add_conversation(alice_convo);

    let study = store.add_conversation(
        Conversation::group(
            "CS301 Study Group",
            vec![
                "Alice Chen".to_string(),
                "Ben Okafor".to_string(),
                "Carla Reyes".to_string(),
            ],
        )
        .with_presence(Presence::Typing),
    );

    let mut ben_convo = Conversation::direct("Ben Okafor");
    ben_convo.last_seen = Some(Utc::now() - Duration::hours(3));
    let ben = store.add_conversation(ben_convo);

    let robotics = store.add_conversation(Conversation::group(
        "Robotics Club",
        vec![
            "Dmitri Volkov".to_string(),
            "Emma Larsson".to_string(),
            "Ben Okafor".to_string(),
        ],
    ));

    // Alice: a short read conversation
    if let Ok(msg) = store.send_text(alice, "Did you get the lab results?", None) {
        let _ = store.mark_read(alice, msg);
    }
    let _ = store.receive_text(alice, "Alice Chen", "Yes! Uploading them to the drive now.");
    if let Ok(reply) = store.receive_text(alice, "Alice Chen", "The spectra look great 🎉") {
        let _ = store.toggle_reaction(alice, reply, "👍", "You");
    }

    // Study group: unread burst, one pinned message
    if let Ok(pinned) = store.receive_text(
        study,
        "Carla Reyes",
        "Midterm review session moved to Thursday 5pm, room B204",
    ) {
        let _ = store.toggle_pin(study, pinned);
        let _ = store.toggle_reaction(study, pinned, "👍", "Alice Chen");
        let _ = store.toggle_reaction(study, pinned, "👍", "Ben Okafor");
    }
    let _ = store.receive_text(study, "Ben Okafor", "Can someone share last week's notes?");
    let _ = store.receive_text(study, "Alice Chen", "On it, give me an hour");

    // Ben: waiting on a delivered message
    if let Ok(msg) = store.send_text(ben, "Coffee before the seminar?", None) {
        let _ = store.mark_delivered(ben, msg);
    }

    // Robotics: quiet channel, muted
    let _ = store.receive_text(robotics, "Emma Larsson", "Servo order arrived 🎉");
    let _ = store.toggle_mute(robotics);

    store
}
