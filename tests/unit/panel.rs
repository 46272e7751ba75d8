use super::*;
use crate::foundation::core::Rgba8;
use crate::style::FrameStyle;

fn solid_photo(color: Rgba8) -> ImagePaint {
    let px = color.to_premul();
    let bytes: Vec<u8> = std::iter::repeat_n(px, 16).flatten().collect();
    ImagePaint::from_premul_bytes(&bytes, 4, 4).unwrap()
}

fn surface_for(grid: GridSelection) -> Surface {
    Surface::new(grid.layout().canvas(), true).unwrap()
}

fn near(a: [u8; 4], b: [u8; 4]) -> bool {
    a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= 1)
}

fn center(geometry: &PanelGeometry, i: usize) -> (u32, u32) {
    let c = geometry.cell(i).unwrap().center();
    (c.x as u32, c.y as u32)
}

#[test]
fn photos_fill_their_cells_in_order() {
    let grid = GridSelection::Two;
    let mut s = surface_for(grid);
    let photos = [solid_photo(Rgba8::hex(0xFF0000)), solid_photo(Rgba8::hex(0x0000FF))];
    paint_panel_and_photos(&mut s, grid, &photos, &FrameStyle::Plain.theme()).unwrap();

    let g = PanelGeometry::new(grid.layout());
    let (x0, y0) = center(&g, 0);
    let (x1, y1) = center(&g, 1);
    assert_eq!(s.pixel(x0, y0), [255, 0, 0, 255]);
    assert_eq!(s.pixel(x1, y1), [0, 0, 255, 255]);
}

#[test]
fn border_is_stroked_on_the_cell_edge() {
    let grid = GridSelection::One;
    let mut s = surface_for(grid);
    let photos = [solid_photo(Rgba8::hex(0x00FF00))];
    paint_panel_and_photos(&mut s, grid, &photos, &FrameStyle::Plain.theme()).unwrap();

    let g = PanelGeometry::new(grid.layout());
    let cell = g.cell(0).unwrap();
    let y = cell.center().y as u32;
    assert!(near(s.pixel(cell.x0 as u32 - 2, y), [0xD1, 0xD5, 0xDB, 255]));
    assert!(near(s.pixel(cell.x0 as u32 + 1, y), [0xD1, 0xD5, 0xDB, 255]));
}

#[test]
fn fifth_photo_leaves_last_slot_empty() {
    let grid = GridSelection::Five;
    let mut s = surface_for(grid);
    let photos: Vec<ImagePaint> = (0..5).map(|_| solid_photo(Rgba8::hex(0x222222))).collect();
    paint_panel_and_photos(&mut s, grid, &photos, &FrameStyle::Plain.theme()).unwrap();

    let g = PanelGeometry::new(grid.layout());
    assert_eq!(g.slot_count(), 6);
    let (x4, y4) = center(&g, 4);
    let (x5, y5) = center(&g, 5);
    assert_eq!(s.pixel(x4, y4), [0x22, 0x22, 0x22, 255]);
    assert!(near(s.pixel(x5, y5), [250, 250, 250, 250]));
}

#[test]
fn wrong_photo_count_is_rejected() {
    let grid = GridSelection::Two;
    let mut s = surface_for(grid);
    let photos: Vec<ImagePaint> = (0..3).map(|_| solid_photo(Rgba8::hex(0x222222))).collect();
    let err = paint_panel_and_photos(&mut s, grid, &photos, &FrameStyle::Plain.theme()).unwrap_err();
    assert!(matches!(
        err,
        CompositionError::PhotoCountMismatch {
            expected: 2,
            actual: 3
        }
    ));
}

#[test]
fn neon_border_glows_into_the_gap() {
    let grid = GridSelection::Two;
    let photos = [solid_photo(Rgba8::hex(0x000000)), solid_photo(Rgba8::hex(0x000000))];
    let theme = FrameStyle::Neon.theme();

    let mut glowing = surface_for(grid);
    paint_panel_and_photos(&mut glowing, grid, &photos, &theme).unwrap();
    let mut flat = Surface::new(grid.layout().canvas(), false).unwrap();
    paint_panel_and_photos(&mut flat, grid, &photos, &theme).unwrap();

    let g = PanelGeometry::new(grid.layout());
    let a = g.cell(0).unwrap();
    let gap_x = (a.x1 + 12.0) as u32;
    let y = a.center().y as u32;
    assert!(glowing.pixel(gap_x, y)[1] > flat.pixel(gap_x, y)[1]);

    let (cx, cy) = center(&g, 1);
    assert_eq!(glowing.pixel(cx, cy), [0, 0, 0, 255]);
}
