use crate::foundation::core::Canvas;
use crate::foundation::error::{CompositionError, CompositionResult};

/// Side length of one grid slot's share of the canvas.
pub(crate) const SLOT_PX: u32 = 800;
/// Horizontal margin added around the grid.
pub(crate) const MARGIN_X_PX: u32 = 200;
/// Vertical margin added around the grid (panel border plus caption band).
pub(crate) const MARGIN_Y_PX: u32 = 300;

/// Number of photos chosen for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridSelection {
    /// One photo.
    One,
    /// Two photos side by side.
    Two,
    /// Three photos in a row.
    Three,
    /// Four photos, two by two.
    Four,
    /// Five photos on a three by two grid (one empty slot).
    Five,
    /// Six photos, three by two.
    Six,
}

impl GridSelection {
    /// Every selection in ascending order.
    pub const ALL: [GridSelection; 6] = [
        GridSelection::One,
        GridSelection::Two,
        GridSelection::Three,
        GridSelection::Four,
        GridSelection::Five,
        GridSelection::Six,
    ];

    /// Validate a raw photo count.
    pub fn new(count: u8) -> CompositionResult<Self> {
        match count {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            other => Err(CompositionError::InvalidGridSelection(other)),
        }
    }

    /// Number of photos the session must capture.
    pub fn photo_count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
        }
    }

    /// Resolve the layout plan for this selection.
    pub fn layout(self) -> LayoutPlan {
        resolve(self)
    }
}

impl TryFrom<u8> for GridSelection {
    type Error = CompositionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GridSelection> for u8 {
    fn from(value: GridSelection) -> Self {
        value.photo_count() as u8
    }
}

impl std::fmt::Display for GridSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.photo_count())
    }
}

/// Grid shape and canvas size derived from a [`GridSelection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LayoutPlan {
    /// Grid columns.
    pub columns: u32,
    /// Grid rows.
    pub rows: u32,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
}

impl LayoutPlan {
    /// Output canvas dimensions.
    pub fn canvas(self) -> Canvas {
        Canvas {
            width: self.canvas_width,
            height: self.canvas_height,
        }
    }

    /// Number of grid slots (may exceed the photo count for selection 5).
    pub fn slots(self) -> usize {
        (self.columns * self.rows) as usize
    }
}

/// Map a grid selection to its fixed `(columns, rows)` and canvas size.
///
/// The shape is a lookup, not a packing formula: five and six photos both use 3x2.
pub fn resolve(selection: GridSelection) -> LayoutPlan {
    let (columns, rows) = match selection {
        GridSelection::One => (1, 1),
        GridSelection::Two => (2, 1),
        GridSelection::Three => (3, 1),
        GridSelection::Four => (2, 2),
        GridSelection::Five | GridSelection::Six => (3, 2),
    };
    LayoutPlan {
        columns,
        rows,
        canvas_width: columns * SLOT_PX + MARGIN_X_PX,
        canvas_height: rows * SLOT_PX + MARGIN_Y_PX,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
