//! Property-based tests for the messaging domain
//!
//! Uses proptest to verify invariants of reaction aggregation,
//! conversation filtering, and the delivery-status machine.

use proptest::prelude::*;

use connect_core::{
    filter_conversations, ChatFilter, Conversation, DeliveryStatus, Message, Reaction,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// A small emoji alphabet so collisions (aggregation) actually happen
fn emoji_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["👍", "❤️", "😂", "😮", "😢", "🙏"]).prop_map(str::to_string)
}

fn reactor_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Alice", "Bob", "Carol", "Dave"]).prop_map(str::to_string)
}

fn reactions_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((emoji_strategy(), reactor_strategy()), 0..40)
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z ]{0,20}").expect("valid regex")
}

fn conversations_strategy() -> impl Strategy<Value = Vec<Conversation>> {
    prop::collection::vec(
        (name_strategy(), any::<bool>(), 0u32..5).prop_map(|(name, group, unread)| {
            let mut convo = if group {
                Conversation::group(name, vec!["A".to_string(), "B".to_string()])
            } else {
                Conversation::direct(name)
            };
            for _ in 0..unread {
                convo.record_incoming("ping");
            }
            convo
        }),
        0..20,
    )
}

fn filter_strategy() -> impl Strategy<Value = ChatFilter> {
    prop::sample::select(vec![
        ChatFilter::All,
        ChatFilter::Unread,
        ChatFilter::Direct,
        ChatFilter::Group,
    ])
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Aggregated counts always sum to the flat reaction-list length,
    /// and each emoji appears in exactly one group.
    #[test]
    fn aggregation_counts_sum_to_total(reactions in reactions_strategy()) {
        let mut msg = Message::incoming("Alice", "hello");
        for (emoji, reactor) in &reactions {
            msg.reactions.push(Reaction::new(emoji.clone(), reactor.clone()));
        }

        let groups = msg.aggregate_reactions();
        let total: usize = groups.iter().map(|g| g.count).sum();
        prop_assert_eq!(total, reactions.len());

        let mut seen = std::collections::HashSet::new();
        for group in &groups {
            prop_assert!(seen.insert(group.emoji.clone()), "duplicate group {}", group.emoji);
            prop_assert!(group.count >= 1);
        }
    }

    /// Aggregation preserves first-encountered order.
    #[test]
    fn aggregation_preserves_first_encounter_order(reactions in reactions_strategy()) {
        let mut msg = Message::incoming("Alice", "hello");
        for (emoji, reactor) in &reactions {
            msg.reactions.push(Reaction::new(emoji.clone(), reactor.clone()));
        }

        let mut expected = Vec::new();
        for (emoji, _) in &reactions {
            if !expected.contains(emoji) {
                expected.push(emoji.clone());
            }
        }
        let actual: Vec<String> =
            msg.aggregate_reactions().into_iter().map(|g| g.emoji).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Filtering returns a subset of the input, in input order.
    #[test]
    fn filtering_is_an_ordered_subset(
        chats in conversations_strategy(),
        filter in filter_strategy(),
        query in "[a-z]{0,4}",
    ) {
        let result = filter_conversations(&chats, filter, &query);
        prop_assert!(result.len() <= chats.len());

        // Every survivor exists in the input, and relative order matches
        let mut last_index = 0usize;
        for convo in result {
            let index = chats.iter().position(|c| c.id == convo.id);
            prop_assert!(index.is_some());
            let index = index.unwrap();
            prop_assert!(index >= last_index);
            last_index = index;
        }
    }

    /// The unread filter never yields a fully-read conversation, and
    /// search results always match name or preview.
    #[test]
    fn filter_predicates_hold(
        chats in conversations_strategy(),
        query in "[a-z]{0,4}",
    ) {
        for convo in filter_conversations(&chats, ChatFilter::Unread, &query) {
            prop_assert!(convo.unread_count > 0);
            prop_assert!(convo.matches_query(&query));
        }
    }

    /// However statuses are advanced, a message's status never moves
    /// backward and invalid jumps leave state untouched.
    #[test]
    fn delivery_status_is_monotonic(
        steps in prop::collection::vec(
            prop::sample::select(vec![
                DeliveryStatus::Sent,
                DeliveryStatus::Delivered,
                DeliveryStatus::Read,
            ]),
            0..12,
        )
    ) {
        fn rank(status: DeliveryStatus) -> u8 {
            match status {
                DeliveryStatus::Sent => 0,
                DeliveryStatus::Delivered => 1,
                DeliveryStatus::Read => 2,
            }
        }

        let mut msg = Message::outgoing("hi");
        let mut current = rank(msg.status.unwrap());
        for step in steps {
            let before = msg.status;
            match msg.advance_status(step) {
                Ok(()) => {
                    prop_assert!(rank(step) >= current);
                    current = rank(step);
                }
                Err(_) => prop_assert_eq!(msg.status, before),
            }
        }
    }
}
