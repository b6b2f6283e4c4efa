use crate::foundation::core::Size;
use crate::source::frame::SourceFrame;

/// Read-only handle onto a live frame producer.
///
/// Acquisition, permission prompts, and track teardown stay with the
/// embedder; the engine only observes the handle. Readiness is re-queried on
/// every tick; it is not a latch, and a source that stops producing frames
/// (stream ended) reads as unready again until a new frame arrives.
pub trait FrameSource {
    /// The most recently produced frame, if any.
    fn current_frame(&self) -> Option<&SourceFrame>;

    /// Intrinsic pixel size of the current frame; `(0, 0)` while no frame is
    /// available.
    fn intrinsic_size(&self) -> Size {
        self.current_frame()
            .map(SourceFrame::intrinsic_size)
            .unwrap_or(Size::ZERO)
    }

    /// `true` once a frame with non-zero intrinsic dimensions is available.
    fn is_ready(&self) -> bool {
        self.current_frame()
            .is_some_and(|f| f.width > 0 && f.height > 0)
    }
}

/// In-memory frame source for tests and embedding glue.
///
/// The embedder's decode callback replaces the held frame with `set_frame`;
/// `clear` models a stream that ended and makes the source unready again.
#[derive(Clone, Debug, Default)]
pub struct StaticFrameSource {
    frame: Option<SourceFrame>,
}

impl StaticFrameSource {
    /// Create an unready source holding no frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source already holding `frame`.
    pub fn with_frame(frame: SourceFrame) -> Self {
        Self { frame: Some(frame) }
    }

    /// Replace the held frame.
    pub fn set_frame(&mut self, frame: SourceFrame) {
        self.frame = Some(frame);
    }

    /// Drop the held frame; the source reads as unready until the next
    /// `set_frame`.
    pub fn clear(&mut self) {
        self.frame = None;
    }
}

impl FrameSource for StaticFrameSource {
    fn current_frame(&self) -> Option<&SourceFrame> {
        self.frame.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/provider.rs"]
mod tests;
