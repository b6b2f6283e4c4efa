use crate::foundation::core::{Rect, Size};
use crate::foundation::error::{GridlensError, GridlensResult};

/// Map a rectangle from a displayed-size coordinate space into intrinsic
/// pixel space.
///
/// A video element's displayed size and intrinsic resolution generally
/// differ, and not necessarily by the same factor per axis, so the two axes
/// scale independently (`intrinsic.width / display.width` and
/// `intrinsic.height / display.height`).
pub fn display_to_intrinsic(
    rect: Rect,
    display_size: Size,
    intrinsic_size: Size,
) -> GridlensResult<Rect> {
    if !(display_size.width > 0.0 && display_size.height > 0.0) {
        return Err(GridlensError::validation(
            "display size must be positive to map coordinates",
        ));
    }

    let scale_x = intrinsic_size.width / display_size.width;
    let scale_y = intrinsic_size.height / display_size.height;
    Ok(Rect::new(
        rect.x0 * scale_x,
        rect.y0 * scale_y,
        rect.x1 * scale_x,
        rect.y1 * scale_y,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/space.rs"]
mod tests;
