//! Render-side views derived from the grid. Nothing here mutates state.

use std::collections::BTreeSet;

use serde::Serialize;
use shared::domain::{CellRect, LayoutId, Webcast};

use crate::{catalog::WebcastCatalog, grid::GridState, layout::LayoutCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarVisibility {
    pub chat: bool,
    pub hashtag: bool,
    pub layout_drawer: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderCell {
    pub position: usize,
    pub rect: CellRect,
    pub webcast: Option<Webcast>,
}

/// Everything the embed layer needs to draw the wall.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderView {
    pub layout_id: LayoutId,
    pub layout_name: &'static str,
    pub cells: Vec<RenderCell>,
    pub empty_positions: BTreeSet<usize>,
    pub sidebars: SidebarVisibility,
    pub selected_chat_channel: Option<String>,
}

pub fn empty_positions(grid: &GridState) -> BTreeSet<usize> {
    grid.cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(position, _)| position)
        .collect()
}

/// Resolves the webcast in `position`. A key the catalog cannot resolve is
/// rendered as an empty cell.
pub fn cell_webcast<'a>(
    grid: &GridState,
    catalog: &'a WebcastCatalog,
    position: usize,
) -> Option<&'a Webcast> {
    grid.cell(position).and_then(|key| catalog.get(key))
}

pub fn displayed_webcasts<'a>(
    grid: &GridState,
    catalog: &'a WebcastCatalog,
) -> Vec<(usize, &'a Webcast)> {
    (0..grid.num_cells())
        .filter_map(|position| {
            cell_webcast(grid, catalog, position).map(|webcast| (position, webcast))
        })
        .collect()
}

pub fn has_webcasts_displayed(grid: &GridState, catalog: &WebcastCatalog) -> bool {
    (0..grid.num_cells()).any(|position| cell_webcast(grid, catalog, position).is_some())
}

pub fn sidebar_visibility(grid: &GridState) -> SidebarVisibility {
    SidebarVisibility {
        chat: grid.chat_sidebar_visible(),
        hashtag: grid.hashtag_sidebar_visible(),
        layout_drawer: grid.layout_drawer_visible(),
    }
}

pub fn render_view(
    grid: &GridState,
    catalog: &WebcastCatalog,
    layouts: &LayoutCatalog,
) -> RenderView {
    let geometry = layouts.geometry(grid.layout_id());
    let cells: Vec<RenderCell> = geometry
        .iter()
        .enumerate()
        .map(|(position, rect)| RenderCell {
            position,
            rect: *rect,
            webcast: cell_webcast(grid, catalog, position).cloned(),
        })
        .collect();
    let empty_positions = cells
        .iter()
        .filter(|cell| cell.webcast.is_none())
        .map(|cell| cell.position)
        .collect();

    RenderView {
        layout_id: grid.layout_id(),
        layout_name: layouts.name(grid.layout_id()),
        cells,
        empty_positions,
        sidebars: sidebar_visibility(grid),
        selected_chat_channel: grid.selected_chat_channel().map(str::to_string),
    }
}

#[cfg(test)]
#[path = "tests/selectors_tests.rs"]
mod tests;
