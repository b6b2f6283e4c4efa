use super::*;
use crate::source::frame::SourceFrame;
use crate::source::provider::StaticFrameSource;

fn red_source(width: u32, height: u32) -> StaticFrameSource {
    StaticFrameSource::with_frame(SourceFrame::solid(width, height, [255, 0, 0, 255]).unwrap())
}

#[test]
fn new_rejects_out_of_range_opacity() {
    assert!(Compositor::new(-0.1).is_err());
    assert!(Compositor::new(1.1).is_err());
    assert!(Compositor::new(f32::NAN).is_err());
    assert!(Compositor::new(0.0).is_ok());
    assert!(Compositor::new(1.0).is_ok());
}

#[test]
fn set_opacity_clamps() {
    let mut compositor = Compositor::new(0.5).unwrap();
    compositor.set_opacity(2.0);
    assert_eq!(compositor.opacity(), 1.0);
    compositor.set_opacity(-1.0);
    assert_eq!(compositor.opacity(), 0.0);
    compositor.set_opacity(f32::NAN);
    assert_eq!(compositor.opacity(), 0.0);
}

#[test]
fn tick_resizes_surface_to_measured_destination() {
    let mut compositor = Compositor::new(0.5).unwrap();
    let source = StaticFrameSource::new();

    compositor.tick(&source, Size::new(200.0, 100.0));
    assert_eq!(compositor.surface().dims(), SurfaceDims::new(200, 100));

    compositor.tick(&source, Size::new(120.0, 80.0));
    assert_eq!(compositor.surface().dims(), SurfaceDims::new(120, 80));
}

#[test]
fn unready_source_leaves_surface_blank() {
    let mut compositor = Compositor::new(0.5).unwrap();
    let source = StaticFrameSource::new();

    compositor.tick(&source, Size::new(64.0, 64.0));
    assert!(compositor.surface().data().iter().all(|&b| b == 0));
}

#[test]
fn source_going_unready_blanks_the_next_tick() {
    let mut compositor = Compositor::new(1.0).unwrap();
    let mut source = red_source(8, 8);

    compositor.tick(&source, Size::new(8.0, 8.0));
    assert!(compositor.surface().data().iter().any(|&b| b != 0));

    source.clear();
    compositor.tick(&source, Size::new(8.0, 8.0));
    assert!(compositor.surface().data().iter().all(|&b| b == 0));
}

#[test]
fn square_frame_into_wide_destination_is_letterboxed() {
    let mut compositor = Compositor::new(0.5).unwrap();
    let source = red_source(100, 100);

    compositor.tick(&source, Size::new(200.0, 100.0));
    let surface = compositor.surface();

    // Drawn band is x in [50, 150) at half opacity over transparent black.
    assert_eq!(surface.pixel(100, 50), Some([128, 0, 0, 128]));
    assert_eq!(surface.pixel(50, 0), Some([128, 0, 0, 128]));
    assert_eq!(surface.pixel(149, 99), Some([128, 0, 0, 128]));

    // Letterbox margins stay background.
    assert_eq!(surface.pixel(0, 50), Some([0, 0, 0, 0]));
    assert_eq!(surface.pixel(49, 50), Some([0, 0, 0, 0]));
    assert_eq!(surface.pixel(150, 50), Some([0, 0, 0, 0]));
    assert_eq!(surface.pixel(199, 50), Some([0, 0, 0, 0]));
}

#[test]
fn repeated_ticks_produce_identical_pixels() {
    let mut compositor = Compositor::new(0.5).unwrap();
    let source = red_source(100, 100);

    compositor.tick(&source, Size::new(200.0, 100.0));
    let first = compositor.surface().data().to_vec();

    compositor.tick(&source, Size::new(200.0, 100.0));
    assert_eq!(compositor.surface().data(), &first[..]);

    compositor.tick(&source, Size::new(200.0, 100.0));
    assert_eq!(compositor.surface().data(), &first[..]);
}

#[test]
fn zero_destination_is_tolerated() {
    let mut compositor = Compositor::new(0.5).unwrap();
    let source = red_source(100, 100);

    compositor.tick(&source, Size::ZERO);
    assert!(compositor.surface().is_empty());

    // And recovers when the destination becomes measurable again.
    compositor.tick(&source, Size::new(10.0, 10.0));
    assert!(!compositor.surface().is_empty());
}

#[test]
fn full_opacity_draw_is_opaque_source() {
    let mut compositor = Compositor::new(1.0).unwrap();
    let source = red_source(4, 4);

    compositor.tick(&source, Size::new(4.0, 4.0));
    assert_eq!(compositor.surface().pixel(2, 2), Some([255, 0, 0, 255]));
}
