use super::*;

const EPS: f64 = 1e-9;

#[test]
fn square_source_into_wide_destination_is_centered() {
    let result = fit(Size::new(100.0, 100.0), Size::new(200.0, 100.0));
    assert_eq!(result.draw_rect, Rect::new(50.0, 0.0, 150.0, 100.0));
    assert_eq!(result.scale, 1.0);
}

#[test]
fn wide_source_into_tall_destination_fills_width() {
    let result = fit(Size::new(200.0, 100.0), Size::new(100.0, 400.0));
    assert_eq!(result.draw_rect, Rect::new(0.0, 175.0, 100.0, 225.0));
    assert_eq!(result.scale, 0.5);
}

#[test]
fn matching_aspects_fill_the_destination_exactly() {
    let result = fit(Size::new(200.0, 100.0), Size::new(100.0, 50.0));
    assert_eq!(result.draw_rect, Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(result.scale, 0.5);
}

#[test]
fn draw_rect_preserves_aspect_and_stays_contained() {
    let intrinsics = [
        Size::new(1280.0, 720.0),
        Size::new(720.0, 1280.0),
        Size::new(333.0, 77.0),
        Size::new(1.0, 999.0),
    ];
    let destinations = [
        Size::new(1920.0, 1080.0),
        Size::new(100.0, 100.0),
        Size::new(257.3, 641.9),
    ];

    for intrinsic in intrinsics {
        for destination in destinations {
            let result = fit(intrinsic, destination);
            let rect = result.draw_rect;

            let source_aspect = intrinsic.width / intrinsic.height;
            let drawn_aspect = rect.width() / rect.height();
            assert!(
                (source_aspect - drawn_aspect).abs() < 1e-6,
                "aspect drifted for {intrinsic:?} into {destination:?}"
            );

            assert!(rect.x0 >= -EPS && rect.y0 >= -EPS);
            assert!(rect.x1 <= destination.width + EPS);
            assert!(rect.y1 <= destination.height + EPS);

            assert!((result.scale - rect.width() / intrinsic.width).abs() < EPS);
            assert!((result.scale - rect.height() / intrinsic.height).abs() < EPS);
        }
    }
}

#[test]
fn margin_splits_evenly_on_the_letterboxed_axis() {
    // Wider than destination: vertical margins.
    let result = fit(Size::new(400.0, 100.0), Size::new(200.0, 200.0));
    let rect = result.draw_rect;
    assert!((rect.y0 - (200.0 - rect.height()) / 2.0).abs() < EPS);
    assert!(((200.0 - rect.y1) - rect.y0).abs() < EPS);

    // Taller than destination: horizontal margins.
    let result = fit(Size::new(100.0, 400.0), Size::new(200.0, 200.0));
    let rect = result.draw_rect;
    assert!((rect.x0 - (200.0 - rect.width()) / 2.0).abs() < EPS);
    assert!(((200.0 - rect.x1) - rect.x0).abs() < EPS);
}

#[test]
fn zero_geometry_yields_empty_result() {
    assert!(fit(Size::ZERO, Size::new(100.0, 100.0)).is_empty());
    assert!(fit(Size::new(100.0, 100.0), Size::ZERO).is_empty());
    assert!(fit(Size::new(0.0, 100.0), Size::new(100.0, 0.0)).is_empty());
    assert_eq!(fit(Size::ZERO, Size::ZERO).scale, 0.0);
}

#[test]
fn non_finite_geometry_yields_empty_result() {
    assert!(fit(Size::new(f64::NAN, 10.0), Size::new(10.0, 10.0)).is_empty());
    assert!(fit(Size::new(10.0, 10.0), Size::new(f64::INFINITY, 10.0)).is_empty());
}
