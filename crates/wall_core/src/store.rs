use std::sync::Arc;

use shared::{
    domain::WebcastKey,
    error::Rejection,
    protocol::WallIntent,
};
use tokio::sync::broadcast;

use crate::{
    catalog::WebcastCatalog,
    config::WallSettings,
    grid::{reduce, GridState, Outcome, WallState},
    layout::LayoutCatalog,
    ordering::DisplayOrderMemo,
    selectors::{render_view, RenderView},
};

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallEvent {
    Applied {
        intent: &'static str,
    },
    Ignored {
        intent: &'static str,
        reason: Rejection,
    },
}

/// Single owner of the wall state. Intents are applied one at a time through
/// `dispatch`; readers only ever see shared references or clones.
pub struct WallStore {
    layouts: LayoutCatalog,
    state: WallState,
    order: DisplayOrderMemo,
    events: broadcast::Sender<WallEvent>,
}

impl WallStore {
    pub fn new(layouts: LayoutCatalog, settings: &WallSettings) -> Self {
        let grid = GridState::new(&layouts, settings.default_layout)
            .with_chat_sidebar(settings.chat_sidebar_visible)
            .with_hashtag_sidebar(settings.hashtag_sidebar_visible)
            .with_chat_channel(settings.default_chat_channel.clone());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            layouts,
            state: WallState::new(grid),
            order: DisplayOrderMemo::new(),
            events,
        }
    }

    pub fn dispatch(&mut self, intent: WallIntent) -> Outcome {
        let name = intent.name();
        let transition = reduce(&self.state, &self.layouts, intent);
        self.state = transition.state;

        let event = match &transition.outcome {
            Outcome::Applied => WallEvent::Applied { intent: name },
            Outcome::Ignored(reason) => WallEvent::Ignored {
                intent: name,
                reason: reason.clone(),
            },
        };
        // No subscribers is fine.
        let _ = self.events.send(event);

        transition.outcome
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WallEvent> {
        self.events.subscribe()
    }

    pub fn layouts(&self) -> &LayoutCatalog {
        &self.layouts
    }

    pub fn grid(&self) -> &GridState {
        &self.state.grid
    }

    pub fn catalog(&self) -> Arc<WebcastCatalog> {
        Arc::clone(&self.state.catalog)
    }

    pub fn snapshot(&self) -> WallState {
        self.state.clone()
    }

    pub fn webcast_ids(&self) -> Vec<WebcastKey> {
        self.state.catalog.webcast_ids()
    }

    pub fn display_order(&mut self) -> Arc<Vec<WebcastKey>> {
        self.order.get(&self.state.catalog)
    }

    pub fn render_view(&self) -> RenderView {
        render_view(&self.state.grid, &self.state.catalog, &self.layouts)
    }
}

impl Default for WallStore {
    fn default() -> Self {
        Self::new(LayoutCatalog::builtin(), &WallSettings::default())
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
