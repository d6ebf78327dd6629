//! Built-in layout table: cell counts, names, and per-cell geometry.

use serde::Serialize;
use shared::domain::{CellRect, LayoutId};

pub const MAX_CELLS: usize = 9;
pub const DEFAULT_LAYOUT: LayoutId = LayoutId(0);

const THIRD: f32 = 100.0 / 3.0;
const TWO_THIRDS: f32 = 200.0 / 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutDescriptor {
    pub id: LayoutId,
    pub name: &'static str,
    pub cells: &'static [CellRect],
}

impl LayoutDescriptor {
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }
}

const FULL_WALL: &[CellRect] = &[CellRect::FULL];

static BUILTIN_LAYOUTS: [LayoutDescriptor; 9] = [
    LayoutDescriptor {
        id: LayoutId(0),
        name: "Single View",
        cells: FULL_WALL,
    },
    LayoutDescriptor {
        id: LayoutId(1),
        name: "Split View",
        cells: &[
            CellRect::new(50.0, 100.0, 0.0, 0.0),
            CellRect::new(50.0, 100.0, 0.0, 50.0),
        ],
    },
    LayoutDescriptor {
        id: LayoutId(2),
        name: "One Big, Two Small",
        cells: &[
            CellRect::new(TWO_THIRDS, 100.0, 0.0, 0.0),
            CellRect::new(THIRD, 50.0, 0.0, TWO_THIRDS),
            CellRect::new(THIRD, 50.0, 50.0, TWO_THIRDS),
        ],
    },
    LayoutDescriptor {
        id: LayoutId(3),
        name: "Quad View",
        cells: &[
            CellRect::new(50.0, 50.0, 0.0, 0.0),
            CellRect::new(50.0, 50.0, 0.0, 50.0),
            CellRect::new(50.0, 50.0, 50.0, 0.0),
            CellRect::new(50.0, 50.0, 50.0, 50.0),
        ],
    },
    LayoutDescriptor {
        id: LayoutId(4),
        name: "One Big, Three Small",
        cells: &[
            CellRect::new(TWO_THIRDS, 100.0, 0.0, 0.0),
            CellRect::new(THIRD, THIRD, 0.0, TWO_THIRDS),
            CellRect::new(THIRD, THIRD, THIRD, TWO_THIRDS),
            CellRect::new(THIRD, THIRD, TWO_THIRDS, TWO_THIRDS),
        ],
    },
    LayoutDescriptor {
        id: LayoutId(5),
        name: "Five View",
        cells: &[
            CellRect::new(TWO_THIRDS, TWO_THIRDS, 0.0, 0.0),
            CellRect::new(THIRD, THIRD, 0.0, TWO_THIRDS),
            CellRect::new(THIRD, THIRD, THIRD, TWO_THIRDS),
            CellRect::new(50.0, THIRD, TWO_THIRDS, 0.0),
            CellRect::new(50.0, THIRD, TWO_THIRDS, 50.0),
        ],
    },
    LayoutDescriptor {
        id: LayoutId(6),
        name: "Six View",
        cells: &[
            CellRect::new(THIRD, 50.0, 0.0, 0.0),
            CellRect::new(THIRD, 50.0, 0.0, THIRD),
            CellRect::new(THIRD, 50.0, 0.0, TWO_THIRDS),
            CellRect::new(THIRD, 50.0, 50.0, 0.0),
            CellRect::new(THIRD, 50.0, 50.0, THIRD),
            CellRect::new(THIRD, 50.0, 50.0, TWO_THIRDS),
        ],
    },
    LayoutDescriptor {
        id: LayoutId(7),
        name: "Eight View",
        cells: &[
            CellRect::new(25.0, 50.0, 0.0, 0.0),
            CellRect::new(25.0, 50.0, 0.0, 25.0),
            CellRect::new(25.0, 50.0, 0.0, 50.0),
            CellRect::new(25.0, 50.0, 0.0, 75.0),
            CellRect::new(25.0, 50.0, 50.0, 0.0),
            CellRect::new(25.0, 50.0, 50.0, 25.0),
            CellRect::new(25.0, 50.0, 50.0, 50.0),
            CellRect::new(25.0, 50.0, 50.0, 75.0),
        ],
    },
    LayoutDescriptor {
        id: LayoutId(8),
        name: "Nine View",
        cells: &[
            CellRect::new(THIRD, THIRD, 0.0, 0.0),
            CellRect::new(THIRD, THIRD, 0.0, THIRD),
            CellRect::new(THIRD, THIRD, 0.0, TWO_THIRDS),
            CellRect::new(THIRD, THIRD, THIRD, 0.0),
            CellRect::new(THIRD, THIRD, THIRD, THIRD),
            CellRect::new(THIRD, THIRD, THIRD, TWO_THIRDS),
            CellRect::new(THIRD, THIRD, TWO_THIRDS, 0.0),
            CellRect::new(THIRD, THIRD, TWO_THIRDS, THIRD),
            CellRect::new(THIRD, THIRD, TWO_THIRDS, TWO_THIRDS),
        ],
    },
];

/// Immutable layout table. Unknown ids degrade to a single full-wall cell
/// instead of failing.
#[derive(Debug, Clone, Copy)]
pub struct LayoutCatalog {
    layouts: &'static [LayoutDescriptor],
}

impl Default for LayoutCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LayoutCatalog {
    pub fn builtin() -> Self {
        Self {
            layouts: &BUILTIN_LAYOUTS,
        }
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn is_valid(&self, layout_id: LayoutId) -> bool {
        layout_id.0 < self.layouts.len()
    }

    pub fn descriptor(&self, layout_id: LayoutId) -> Option<&LayoutDescriptor> {
        self.layouts.get(layout_id.0)
    }

    pub fn descriptors(&self) -> &[LayoutDescriptor] {
        self.layouts
    }

    pub fn resolve(&self, layout_id: LayoutId) -> LayoutId {
        if self.is_valid(layout_id) {
            layout_id
        } else {
            DEFAULT_LAYOUT
        }
    }

    pub fn num_cells(&self, layout_id: LayoutId) -> usize {
        self.descriptor(layout_id).map_or(1, LayoutDescriptor::num_cells)
    }

    pub fn geometry(&self, layout_id: LayoutId) -> &[CellRect] {
        self.descriptor(layout_id)
            .map_or(FULL_WALL, |layout| layout.cells)
    }

    pub fn name(&self, layout_id: LayoutId) -> &'static str {
        self.descriptor(layout_id)
            .map_or(BUILTIN_LAYOUTS[0].name, |layout| layout.name)
    }
}
