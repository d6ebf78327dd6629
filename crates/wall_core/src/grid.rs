//! Grid state machine: which webcast sits in which cell, and the transitions
//! that are allowed to change it.

use std::sync::Arc;

use shared::{
    domain::{LayoutId, WebcastKey},
    error::Rejection,
    protocol::WallIntent,
};
use tracing::{debug, warn};

use crate::{catalog::WebcastCatalog, layout::LayoutCatalog};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    layout_id: LayoutId,
    cells: Vec<Option<WebcastKey>>,
    chat_sidebar_visible: bool,
    hashtag_sidebar_visible: bool,
    layout_drawer_visible: bool,
    selected_chat_channel: Option<String>,
}

impl GridState {
    /// Empty grid on the given layout with every panel hidden.
    pub fn new(layouts: &LayoutCatalog, layout_id: LayoutId) -> Self {
        let layout_id = layouts.resolve(layout_id);
        Self {
            layout_id,
            cells: vec![None; layouts.num_cells(layout_id)],
            chat_sidebar_visible: false,
            hashtag_sidebar_visible: false,
            layout_drawer_visible: false,
            selected_chat_channel: None,
        }
    }

    pub fn with_chat_sidebar(mut self, visible: bool) -> Self {
        self.chat_sidebar_visible = visible;
        self
    }

    pub fn with_hashtag_sidebar(mut self, visible: bool) -> Self {
        self.hashtag_sidebar_visible = visible;
        self
    }

    pub fn with_chat_channel(mut self, channel: Option<String>) -> Self {
        self.selected_chat_channel = normalize_channel(channel);
        self
    }

    pub fn layout_id(&self) -> LayoutId {
        self.layout_id
    }

    pub fn cells(&self) -> &[Option<WebcastKey>] {
        &self.cells
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, position: usize) -> Option<&WebcastKey> {
        self.cells.get(position).and_then(Option::as_ref)
    }

    pub fn position_of(&self, key: &WebcastKey) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.as_ref() == Some(key))
    }

    pub fn is_displayed(&self, key: &WebcastKey) -> bool {
        self.position_of(key).is_some()
    }

    pub fn chat_sidebar_visible(&self) -> bool {
        self.chat_sidebar_visible
    }

    pub fn hashtag_sidebar_visible(&self) -> bool {
        self.hashtag_sidebar_visible
    }

    pub fn layout_drawer_visible(&self) -> bool {
        self.layout_drawer_visible
    }

    pub fn selected_chat_channel(&self) -> Option<&str> {
        self.selected_chat_channel.as_deref()
    }

    fn check_position(&self, position: usize) -> Result<(), Rejection> {
        if position < self.cells.len() {
            Ok(())
        } else {
            Err(Rejection::PositionOutOfRange {
                position,
                num_cells: self.cells.len(),
            })
        }
    }
}

/// Catalog snapshot plus grid: the full value a transition maps over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallState {
    pub catalog: Arc<WebcastCatalog>,
    pub grid: GridState,
}

impl WallState {
    pub fn new(grid: GridState) -> Self {
        Self {
            catalog: Arc::new(WebcastCatalog::empty()),
            grid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub state: WallState,
    pub outcome: Outcome,
}

/// Applies one intent. Never fails: a rejected intent yields a state equal to
/// `state` and reports the reason in `outcome`.
pub fn reduce(state: &WallState, layouts: &LayoutCatalog, intent: WallIntent) -> Transition {
    let name = intent.name();
    match step(state, layouts, intent) {
        Ok(next) => {
            debug!(intent = name, layout = %next.grid.layout_id, "applied wall intent");
            Transition {
                state: next,
                outcome: Outcome::Applied,
            }
        }
        Err(reason) => {
            debug!(intent = name, %reason, "ignored wall intent");
            Transition {
                state: state.clone(),
                outcome: Outcome::Ignored(reason),
            }
        }
    }
}

fn step(
    state: &WallState,
    layouts: &LayoutCatalog,
    intent: WallIntent,
) -> Result<WallState, Rejection> {
    let mut catalog = Arc::clone(&state.catalog);
    let mut next = state.grid.clone();
    match intent {
        WallIntent::SetWebcastsRaw { webcasts } => {
            catalog = Arc::new(WebcastCatalog::from_raw(webcasts));
            sweep_missing(&mut next, &catalog);
        }
        WallIntent::AddWebcast { key } => {
            ensure_known(&catalog, &key)?;
            if next.is_displayed(&key) {
                return Err(Rejection::AlreadyDisplayed { key });
            }
            let slot = next
                .cells
                .iter_mut()
                .find(|cell| cell.is_none())
                .ok_or(Rejection::NoEmptyCell)?;
            *slot = Some(key);
        }
        WallIntent::AddWebcastAtPosition { key, position } => {
            ensure_known(&catalog, &key)?;
            next.check_position(position)?;
            if let Some(previous) = next.position_of(&key) {
                next.cells[previous] = None;
            }
            next.cells[position] = Some(key);
        }
        WallIntent::SwapWebcasts { first, second } => {
            next.check_position(first)?;
            next.check_position(second)?;
            next.cells.swap(first, second);
        }
        WallIntent::RemoveWebcast { key } => {
            let mut removed = false;
            for cell in next.cells.iter_mut() {
                if cell.as_ref() == Some(&key) {
                    *cell = None;
                    removed = true;
                }
            }
            if !removed {
                return Err(Rejection::NotDisplayed { key });
            }
        }
        WallIntent::ResetWebcasts => {
            next.cells.iter_mut().for_each(|cell| *cell = None);
        }
        WallIntent::SetLayout { layout_id } => {
            if !layouts.is_valid(layout_id) {
                warn!(%layout_id, "unknown layout; falling back to single view");
            }
            let layout_id = layouts.resolve(layout_id);
            let num_cells = layouts.num_cells(layout_id);
            for (position, key) in next.cells.iter().enumerate().skip(num_cells) {
                if let Some(key) = key {
                    debug!(%key, position, "dropping webcast from truncated cell");
                }
            }
            next.cells.resize(num_cells, None);
            next.layout_id = layout_id;
        }
        WallIntent::ToggleChatSidebar => {
            next.chat_sidebar_visible = !next.chat_sidebar_visible;
        }
        WallIntent::ToggleHashtagSidebar => {
            next.hashtag_sidebar_visible = !next.hashtag_sidebar_visible;
        }
        WallIntent::ToggleLayoutDrawer => {
            next.layout_drawer_visible = !next.layout_drawer_visible;
        }
        WallIntent::SelectChatChannel { channel } => {
            next.selected_chat_channel = normalize_channel(channel);
        }
    }
    Ok(WallState {
        catalog,
        grid: next,
    })
}

// A swept cell never keeps pointing at a key the new snapshot dropped.
fn sweep_missing(grid: &mut GridState, catalog: &WebcastCatalog) {
    for cell in grid.cells.iter_mut() {
        if cell.as_ref().is_some_and(|key| !catalog.contains(key)) {
            if let Some(key) = cell.take() {
                debug!(%key, "cleared cell for webcast missing from new snapshot");
            }
        }
    }
}

fn ensure_known(catalog: &WebcastCatalog, key: &WebcastKey) -> Result<(), Rejection> {
    if catalog.contains(key) {
        Ok(())
    } else {
        Err(Rejection::UnknownWebcast { key: key.clone() })
    }
}

fn normalize_channel(channel: Option<String>) -> Option<String> {
    channel
        .map(|channel| channel.trim().to_string())
        .filter(|channel| !channel.is_empty())
}

#[cfg(test)]
#[path = "tests/grid_tests.rs"]
mod tests;
