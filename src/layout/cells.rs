use crate::foundation::core::{Rect, RoundedRect};
use crate::layout::grid::LayoutPlan;

pub(crate) const PANEL_INSET_PX: f64 = 60.0;
/// Total height taken from the panel for the caption band (top inset included).
pub(crate) const PANEL_HEIGHT_REDUCTION_PX: f64 = 180.0;
pub(crate) const PANEL_RADIUS_PX: f64 = 40.0;
pub(crate) const CELL_INSET_PX: f64 = 20.0;
pub(crate) const CELL_GAP_PX: f64 = 24.0;
pub(crate) const CELL_RADIUS_PX: f64 = 24.0;

/// Panel and cell rectangles for one layout.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PanelGeometry {
    pub(crate) panel: Rect,
    pub(crate) cell_width: f64,
    pub(crate) cell_height: f64,
    columns: u32,
    rows: u32,
}

impl PanelGeometry {
    pub(crate) fn new(plan: LayoutPlan) -> Self {
        let w = f64::from(plan.canvas_width);
        let h = f64::from(plan.canvas_height);
        let panel = Rect::new(
            PANEL_INSET_PX,
            PANEL_INSET_PX,
            w - PANEL_INSET_PX,
            PANEL_INSET_PX + (h - PANEL_HEIGHT_REDUCTION_PX),
        );

        let cols = f64::from(plan.columns);
        let rows = f64::from(plan.rows);
        let cell_width = (panel.width() - CELL_GAP_PX * (cols - 1.0) - 2.0 * CELL_INSET_PX) / cols;
        let cell_height = (panel.height() - CELL_GAP_PX * (rows - 1.0) - 2.0 * CELL_INSET_PX) / rows;

        Self {
            panel,
            cell_width,
            cell_height,
            columns: plan.columns,
            rows: plan.rows,
        }
    }

    pub(crate) fn panel_shape(&self) -> RoundedRect {
        self.panel.to_rounded_rect(PANEL_RADIUS_PX)
    }

    /// Cell rectangle for a row-major slot index.
    pub(crate) fn cell(&self, index: usize) -> Option<Rect> {
        let cols = self.columns as usize;
        if index >= self.slot_count() {
            return None;
        }
        let c = (index % cols) as f64;
        let r = (index / cols) as f64;
        let x = self.panel.x0 + CELL_INSET_PX + c * (self.cell_width + CELL_GAP_PX);
        let y = self.panel.y0 + CELL_INSET_PX + r * (self.cell_height + CELL_GAP_PX);
        Some(Rect::new(x, y, x + self.cell_width, y + self.cell_height))
    }

    pub(crate) fn cell_shape(&self, index: usize) -> Option<RoundedRect> {
        self.cell(index).map(|r| r.to_rounded_rect(CELL_RADIUS_PX))
    }

    pub(crate) fn slot_count(&self) -> usize {
        (self.columns * self.rows) as usize
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cells.rs"]
mod tests;
