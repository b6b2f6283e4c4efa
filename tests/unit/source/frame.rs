use super::*;

#[test]
fn new_rejects_mismatched_buffer_length() {
    let err = SourceFrame::new(2, 2, vec![0; 15]).unwrap_err();
    assert!(err.to_string().contains("source error:"));
}

#[test]
fn solid_fills_every_pixel() {
    let frame = SourceFrame::solid(3, 2, [1, 2, 3, 4]).unwrap();
    assert_eq!(frame.data.len(), 3 * 2 * 4);
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, [1, 2, 3, 4]);
    }
}

#[test]
fn intrinsic_size_matches_dimensions() {
    let frame = SourceFrame::solid(100, 50, [0, 0, 0, 255]).unwrap();
    assert_eq!(frame.intrinsic_size(), Size::new(100.0, 50.0));
}

#[test]
fn pixel_clamped_clamps_to_edges() {
    let mut data = vec![0u8; 2 * 2 * 4];
    data[0] = 10; // (0, 0)
    data[12] = 99; // (1, 1)
    let frame = SourceFrame::new(2, 2, data).unwrap();

    assert_eq!(frame.pixel_clamped(-5, -5)[0], 10);
    assert_eq!(frame.pixel_clamped(7, 7)[0], 99);
}

#[test]
fn pixel_clamped_on_zero_frame_is_transparent() {
    let frame = SourceFrame::new(0, 0, Vec::new()).unwrap();
    assert_eq!(frame.pixel_clamped(0, 0), [0, 0, 0, 0]);
}
