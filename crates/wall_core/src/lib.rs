pub mod catalog;
pub mod config;
pub mod grid;
pub mod layout;
pub mod ordering;
pub mod selectors;
mod store;

pub use catalog::WebcastCatalog;
pub use config::{load_settings, load_settings_from, WallSettings};
pub use grid::{reduce, GridState, Outcome, Transition, WallState};
pub use layout::{LayoutCatalog, LayoutDescriptor, MAX_CELLS};
pub use ordering::{display_order, DisplayOrderMemo};
pub use selectors::{RenderCell, RenderView, SidebarVisibility};
pub use store::{WallEvent, WallStore};
