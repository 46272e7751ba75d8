use crate::foundation::core::{BezPath, Rgba8};
use crate::foundation::error::CompositionResult;
use crate::render::surface::Surface;

const BASE: Rgba8 = Rgba8::hex(0xF7F4F0);
const SAMPLE_STEP_PX: usize = 10;
const WAVELENGTH_DIV: f64 = 90.0;

struct Band {
    color: Rgba8,
    amplitude: f64,
    thickness: f64,
    phase: f64,
}

const BANDS: [Band; 3] = [
    Band {
        color: Rgba8::hex(0x006D77),
        amplitude: 18.0,
        thickness: 48.0,
        phase: 0.0,
    },
    Band {
        color: Rgba8::hex(0xE29578),
        amplitude: 12.0,
        thickness: 40.0,
        phase: 80.0,
    },
    Band {
        color: Rgba8::hex(0x83C5BE),
        amplitude: 16.0,
        thickness: 44.0,
        phase: 160.0,
    },
];

/// Ribbon outline: a sine curve along the top and a flat bottom edge.
fn band_path(band: &Band, idx: usize, width: u32, height: f64) -> BezPath {
    let w = f64::from(width);
    let base_y = height / 5.0 * (idx as f64 + 1.2);

    let mut path = BezPath::new();
    path.move_to((0.0, base_y));
    for x in (0..=width as usize).step_by(SAMPLE_STEP_PX) {
        let x = x as f64;
        let y = base_y + ((x + band.phase) / WAVELENGTH_DIV).sin() * band.amplitude;
        path.line_to((x, y));
    }
    path.line_to((w, base_y + band.thickness));
    path.line_to((0.0, base_y + band.thickness));
    path.close_path();
    path
}

pub(crate) fn paint(surface: &mut Surface) -> CompositionResult<()> {
    let canvas = surface.canvas();
    let h = f64::from(canvas.height);
    let bounds = canvas.rect();
    surface.layer(|p| {
        p.fill(&bounds, BASE);
        for (idx, band) in BANDS.iter().enumerate() {
            p.fill(&band_path(band, idx, canvas.width, h), band.color);
        }
    })
}
