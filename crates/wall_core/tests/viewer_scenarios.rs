use shared::{
    domain::{LayoutId, WebcastKey},
    error::Rejection,
    protocol::{parse_snapshot, WallIntent},
};
use wall_core::{Outcome, WallEvent, WallStore};

const SNAPSHOT: &str = r#"[
    {"key": "a", "name": "Archimedes", "type": "twitch", "channel": "firstinspires_archimedes", "priority": 3},
    {"key": "b", "name": "Einstein", "type": "twitch", "channel": "firstinspires_einstein", "priority": 1},
    {"key": "c", "name": "Curie", "type": "youtube", "channel": "abc123", "priority": 2},
    {"key": "d", "name": "ccc", "type": "ustream", "channel": "998877"},
    {"key": "e", "name": "aaa", "type": "html5", "channel": "https://example.org/live.m3u8", "file": "live"}
]"#;

fn key(key: &str) -> WebcastKey {
    WebcastKey::from(key)
}

fn loaded_store() -> WallStore {
    let mut store = WallStore::default();
    let webcasts = parse_snapshot(SNAPSHOT).expect("snapshot");
    assert!(store
        .dispatch(WallIntent::SetWebcastsRaw { webcasts })
        .is_applied());
    store
}

fn keys(order: &[WebcastKey]) -> Vec<&str> {
    order.iter().map(WebcastKey::as_str).collect()
}

#[test]
fn picker_order_puts_featured_streams_first() {
    let mut store = loaded_store();
    assert_eq!(keys(&store.display_order()), ["b", "c", "a", "e", "d"]);
    assert_eq!(keys(&store.webcast_ids()), ["a", "b", "c", "d", "e"]);
}

#[test]
fn growing_the_wall_and_filling_it() {
    let mut store = loaded_store();
    store.dispatch(WallIntent::SetLayout {
        layout_id: LayoutId(3),
    });
    for k in ["b", "c", "a"] {
        assert!(store.dispatch(WallIntent::AddWebcast { key: key(k) }).is_applied());
    }

    let view = store.render_view();
    assert_eq!(view.layout_name, "Quad View");
    assert_eq!(view.empty_positions.iter().copied().collect::<Vec<_>>(), [3]);
    let names: Vec<Option<&str>> = view
        .cells
        .iter()
        .map(|cell| cell.webcast.as_ref().map(|w| w.name.as_str()))
        .collect();
    assert_eq!(
        names,
        [Some("Einstein"), Some("Curie"), Some("Archimedes"), None]
    );
}

#[test]
fn dragging_a_stream_between_cells() {
    let mut store = loaded_store();
    store.dispatch(WallIntent::SetLayout {
        layout_id: LayoutId(1),
    });
    store.dispatch(WallIntent::AddWebcast { key: key("a") });
    store.dispatch(WallIntent::AddWebcast { key: key("b") });

    store.dispatch(WallIntent::SwapWebcasts {
        first: 0,
        second: 1,
    });
    assert_eq!(store.grid().cell(0), Some(&key("b")));
    assert_eq!(store.grid().cell(1), Some(&key("a")));

    let outcome = store.dispatch(WallIntent::SwapWebcasts {
        first: 0,
        second: 4,
    });
    assert_eq!(
        outcome,
        Outcome::Ignored(Rejection::PositionOutOfRange {
            position: 4,
            num_cells: 2
        })
    );
}

#[test]
fn refresh_that_drops_a_live_stream_clears_its_cell() {
    let mut store = loaded_store();
    store.dispatch(WallIntent::SetLayout {
        layout_id: LayoutId(1),
    });
    store.dispatch(WallIntent::AddWebcast { key: key("a") });
    store.dispatch(WallIntent::AddWebcast { key: key("e") });

    let refreshed = parse_snapshot(
        r#"[{"key": "e", "name": "aaa", "type": "html5", "channel": "https://example.org/live.m3u8"}]"#,
    )
    .expect("snapshot");
    store.dispatch(WallIntent::SetWebcastsRaw {
        webcasts: refreshed,
    });

    assert_eq!(store.grid().cell(0), None);
    assert_eq!(store.grid().cell(1), Some(&key("e")));
    assert_eq!(keys(&store.display_order()), ["e"]);
}

#[test]
fn stale_intents_are_inert_but_observable() {
    let mut store = loaded_store();
    let mut events = store.subscribe();
    let before = store.snapshot();

    store.dispatch(WallIntent::AddWebcast { key: key("gone") });
    store.dispatch(WallIntent::RemoveWebcast { key: key("a") });
    store.dispatch(WallIntent::AddWebcastAtPosition {
        key: key("a"),
        position: 5,
    });

    assert_eq!(store.snapshot(), before);
    let reasons: Vec<WallEvent> = std::iter::from_fn(|| events.try_recv().ok()).collect();
    assert_eq!(reasons.len(), 3);
    assert!(reasons
        .iter()
        .all(|event| matches!(event, WallEvent::Ignored { .. })));
}

#[test]
fn intent_script_round_trips_through_json() {
    let script = r#"[
        {"type": "set_layout", "payload": {"layout_id": 2}},
        {"type": "add_webcast", "payload": {"key": "d"}},
        {"type": "add_webcast_at_position", "payload": {"key": "c", "position": 2}},
        {"type": "toggle_chat_sidebar"},
        {"type": "select_chat_channel", "payload": {"channel": "firstinspires"}}
    ]"#;
    let intents: Vec<WallIntent> = serde_json::from_str(script).expect("script");

    let mut store = loaded_store();
    for intent in intents {
        assert!(store.dispatch(intent).is_applied());
    }

    let view = store.render_view();
    assert_eq!(view.layout_id, LayoutId(2));
    assert!(view.sidebars.chat);
    assert_eq!(view.selected_chat_channel.as_deref(), Some("firstinspires"));
    assert_eq!(view.empty_positions.iter().copied().collect::<Vec<_>>(), [1]);
}
