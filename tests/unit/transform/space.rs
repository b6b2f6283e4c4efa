use super::*;

#[test]
fn maps_with_independent_axis_scales() {
    // 1280x720 video displayed at 640x480: x doubles, y scales by 1.5.
    let mapped = display_to_intrinsic(
        Rect::new(0.0, 0.0, 320.0, 240.0),
        Size::new(640.0, 480.0),
        Size::new(1280.0, 720.0),
    )
    .unwrap();
    assert_eq!(mapped, Rect::new(0.0, 0.0, 640.0, 360.0));
}

#[test]
fn maps_offset_rectangles() {
    let mapped = display_to_intrinsic(
        Rect::new(100.0, 50.0, 200.0, 150.0),
        Size::new(400.0, 200.0),
        Size::new(800.0, 600.0),
    )
    .unwrap();
    assert_eq!(mapped, Rect::new(200.0, 150.0, 400.0, 450.0));
}

#[test]
fn identity_when_display_matches_intrinsic() {
    let rect = Rect::new(3.0, 7.0, 13.0, 29.0);
    let size = Size::new(640.0, 480.0);
    assert_eq!(display_to_intrinsic(rect, size, size).unwrap(), rect);
}

#[test]
fn zero_display_size_is_an_error() {
    let err = display_to_intrinsic(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Size::ZERO,
        Size::new(100.0, 100.0),
    )
    .unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}
