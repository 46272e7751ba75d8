use super::*;
use crate::layout::grid::{GridSelection, resolve};

#[test]
fn panel_is_inset_with_caption_band() {
    let g = PanelGeometry::new(resolve(GridSelection::Two));
    assert_eq!(g.panel, Rect::new(60.0, 60.0, 1740.0, 980.0));
    assert_eq!(g.panel.width(), 1800.0 - 120.0);
    assert_eq!(g.panel.height(), 1100.0 - 180.0);
}

#[test]
fn two_cells_sit_side_by_side_with_gap() {
    let g = PanelGeometry::new(resolve(GridSelection::Two));
    let a = g.cell(0).unwrap();
    let b = g.cell(1).unwrap();
    assert_eq!(g.cell_width, (1680.0 - 24.0 - 40.0) / 2.0);
    assert_eq!(g.cell_height, 920.0 - 40.0);
    assert_eq!(a.x0, 80.0);
    assert_eq!(a.y0, 80.0);
    assert_eq!(b.x0 - a.x1, 24.0);
    assert_eq!(a.y0, b.y0);
    assert!(g.cell(2).is_none());
}

#[test]
fn cells_are_row_major() {
    let g = PanelGeometry::new(resolve(GridSelection::Four));
    let c1 = g.cell(1).unwrap();
    let c2 = g.cell(2).unwrap();
    assert!(c1.x0 > c2.x0);
    assert_eq!(c2.x0, g.cell(0).unwrap().x0);
    assert_eq!(c2.y0 - g.cell(0).unwrap().y1, 24.0);
}

#[test]
fn cells_stay_inside_panel() {
    for sel in GridSelection::ALL {
        let g = PanelGeometry::new(resolve(sel));
        for i in 0..g.slot_count() {
            let c = g.cell(i).unwrap();
            assert!(c.x0 >= g.panel.x0 + 20.0 - 1e-9);
            assert!(c.y0 >= g.panel.y0 + 20.0 - 1e-9);
            assert!(c.x1 <= g.panel.x1 - 20.0 + 1e-9);
            assert!(c.y1 <= g.panel.y1 - 20.0 + 1e-9);
        }
    }
}

#[test]
fn rounded_shapes_use_fixed_radii() {
    let g = PanelGeometry::new(resolve(GridSelection::One));
    assert_eq!(g.panel_shape().radii().top_left, 40.0);
    assert_eq!(g.cell_shape(0).unwrap().radii().top_left, 24.0);
}
