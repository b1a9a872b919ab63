use keyed_charts::interaction::{PointerEvent, SelectionState};
use proptest::prelude::*;

const KEYS: [&str; 3] = ["A", "B", "C"];

fn event_strategy() -> impl Strategy<Value = PointerEvent> {
    (0..3usize, 0..KEYS.len()).prop_map(|(kind, key_index)| {
        let key = KEYS[key_index].to_owned();
        match kind {
            0 => PointerEvent::Enter(key),
            1 => PointerEvent::Leave(key),
            _ => PointerEvent::Click(key),
        }
    })
}

/// Straight-line reference model of the transition table.
fn reference_apply(
    pinned: Option<String>,
    hovered: Option<String>,
    event: &PointerEvent,
) -> (Option<String>, Option<String>) {
    match event {
        PointerEvent::Enter(key) => (pinned, Some(key.clone())),
        PointerEvent::Leave(key) => {
            let hovered = if hovered.as_deref() == Some(key.as_str()) {
                None
            } else {
                hovered
            };
            (pinned, hovered)
        }
        PointerEvent::Click(key) => {
            let pinned = if pinned.as_deref() == Some(key.as_str()) {
                None
            } else {
                Some(key.clone())
            };
            (pinned, hovered)
        }
    }
}

proptest! {
    #[test]
    fn reducer_matches_the_reference_model(
        events in proptest::collection::vec(event_strategy(), 0..64)
    ) {
        let mut state = SelectionState::default();
        let mut pinned: Option<String> = None;
        let mut hovered: Option<String> = None;

        for event in &events {
            state = state.apply(event);
            let next = reference_apply(pinned.take(), hovered.take(), event);
            pinned = next.0;
            hovered = next.1;

            prop_assert_eq!(state.pinned(), pinned.as_deref());
            prop_assert_eq!(state.hovered(), hovered.as_deref());
        }
    }

    #[test]
    fn at_most_one_key_is_pinned_after_any_click_sequence(
        events in proptest::collection::vec(event_strategy(), 0..64)
    ) {
        let mut state = SelectionState::default();
        for event in &events {
            state = state.apply(event);
            let pinned_count = KEYS
                .iter()
                .filter(|key| state.pinned() == Some(**key))
                .count();
            prop_assert!(pinned_count <= 1);
        }
    }

    #[test]
    fn click_toggle_round_trips_to_idle_from_idle(
        key_index in 0..KEYS.len()
    ) {
        let key = KEYS[key_index].to_owned();
        let state = SelectionState::default()
            .apply(&PointerEvent::Click(key.clone()))
            .apply(&PointerEvent::Click(key));
        prop_assert!(state.is_idle());
    }
}
