use std::sync::Arc;

use super::*;
use crate::config::CompositorOpts;

fn frame() -> PhotoSource {
    PhotoSource::Rgba {
        width: 2,
        height: 2,
        pixels: Arc::from(vec![200u8; 16]),
    }
}

fn compositor() -> Compositor {
    Compositor::new(CompositorOpts {
        seed: Some(3),
        captions: false,
        glow: false,
        ..CompositorOpts::default()
    })
}

#[test]
fn capture_reports_progress_until_full() {
    let mut s = PhotoSession::new(GridSelection::Two, FrameStyle::Wavy);
    assert_eq!(s.remaining(), 2);
    let p = s.capture(frame()).unwrap();
    assert_eq!(p, CaptureProgress { taken: 1, total: 2 });
    assert!(!s.is_complete());
    assert!(s.capture(frame()).unwrap().is_complete());
    assert_eq!(s.remaining(), 0);

    let err = s.capture(frame()).unwrap_err();
    assert!(matches!(
        err,
        CompositionError::PhotoCountMismatch {
            expected: 2,
            actual: 3
        }
    ));
}

#[test]
fn order_keeps_increasing_across_retakes() {
    let mut s = PhotoSession::new(GridSelection::One, FrameStyle::Plain);
    s.capture(frame()).unwrap();
    assert_eq!(s.photos()[0].order, 0);
    s.retake();
    assert!(s.photos().is_empty());
    s.capture(frame()).unwrap();
    assert_eq!(s.photos()[0].order, 1);
}

#[test]
fn incomplete_session_does_not_compose() {
    let mut s = PhotoSession::new(GridSelection::Three, FrameStyle::Plain);
    s.capture(frame()).unwrap();
    assert!(s.compose(&compositor()).is_err());
    assert!(s.composite().is_none());
}

#[test]
fn retake_supersedes_the_composite() {
    let c = compositor();
    let mut s = PhotoSession::new(GridSelection::One, FrameStyle::Checker);
    s.capture(frame()).unwrap();
    let dims = s.compose(&c).unwrap().dimensions();
    assert_eq!(dims, (1000, 1100));
    assert!(s.composite().is_some());

    s.retake();
    assert!(s.composite().is_none());
    assert_eq!(s.remaining(), 1);
}
