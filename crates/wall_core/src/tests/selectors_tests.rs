use super::*;
use crate::grid::{reduce, WallState};
use shared::{
    domain::{WebcastKey, WebcastType},
    protocol::{RawWebcast, WallIntent},
};

fn raw(key: &str, name: &str) -> RawWebcast {
    RawWebcast {
        key: WebcastKey::from(key),
        name: Some(name.to_string()),
        webcast_type: WebcastType::Youtube,
        channel: format!("yt-{key}"),
        file: None,
        priority: None,
    }
}

fn quad_with(keys: &[(&str, usize)]) -> WallState {
    let layouts = LayoutCatalog::builtin();
    let mut intents = vec![
        WallIntent::SetWebcastsRaw {
            webcasts: vec![raw("a", "Field A"), raw("b", "Field B")],
        },
        WallIntent::SetLayout {
            layout_id: LayoutId(3),
        },
    ];
    intents.extend(keys.iter().map(|(key, position)| WallIntent::AddWebcastAtPosition {
        key: WebcastKey::from(*key),
        position: *position,
    }));
    intents.into_iter().fold(
        WallState::new(GridState::new(&layouts, LayoutId(0))),
        |state, intent| reduce(&state, &layouts, intent).state,
    )
}

#[test]
fn empty_positions_lists_unassigned_cells() {
    let state = quad_with(&[("a", 1), ("b", 3)]);
    assert_eq!(
        empty_positions(&state.grid).into_iter().collect::<Vec<_>>(),
        [0, 2]
    );
}

#[test]
fn cell_webcast_resolves_through_catalog() {
    let state = quad_with(&[("a", 1)]);
    let webcast = cell_webcast(&state.grid, &state.catalog, 1).expect("webcast");
    assert_eq!(webcast.name, "Field A");
    assert!(cell_webcast(&state.grid, &state.catalog, 0).is_none());
    assert!(cell_webcast(&state.grid, &state.catalog, 17).is_none());
}

#[test]
fn unresolvable_key_renders_as_empty() {
    let state = quad_with(&[("a", 0), ("b", 1)]);
    let stale = WebcastCatalog::from_raw(vec![raw("b", "Field B")]);

    assert!(cell_webcast(&state.grid, &stale, 0).is_none());
    let view = render_view(&state.grid, &stale, &LayoutCatalog::builtin());
    assert!(view.empty_positions.contains(&0));
    assert!(!view.empty_positions.contains(&1));
}

#[test]
fn displayed_webcasts_follow_cell_order() {
    let state = quad_with(&[("b", 0), ("a", 2)]);
    let displayed: Vec<(usize, &str)> = displayed_webcasts(&state.grid, &state.catalog)
        .into_iter()
        .map(|(position, webcast)| (position, webcast.key.as_str()))
        .collect();
    assert_eq!(displayed, [(0, "b"), (2, "a")]);
    assert!(has_webcasts_displayed(&state.grid, &state.catalog));
    assert!(!has_webcasts_displayed(
        &quad_with(&[]).grid,
        &state.catalog
    ));
}

#[test]
fn render_view_carries_geometry_and_panels() {
    let layouts = LayoutCatalog::builtin();
    let state = quad_with(&[("a", 3)]);
    let state = reduce(&state, &layouts, WallIntent::ToggleHashtagSidebar).state;

    let view = render_view(&state.grid, &state.catalog, &layouts);
    assert_eq!(view.layout_id, LayoutId(3));
    assert_eq!(view.layout_name, "Quad View");
    assert_eq!(view.cells.len(), 4);
    assert_eq!(view.cells[3].rect, CellRect::new(50.0, 50.0, 50.0, 50.0));
    assert_eq!(
        view.cells[3].webcast.as_ref().map(|w| w.key.as_str()),
        Some("a")
    );
    assert_eq!(view.empty_positions.len(), 3);
    assert_eq!(
        view.sidebars,
        SidebarVisibility {
            chat: false,
            hashtag: true,
            layout_drawer: false
        }
    );
}
