/// Pixel rectangle of the drawable area, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ViewportRect {
    /// Full-window viewport of the given size.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Graphics-side receiver of viewport changes.
///
/// The camera calls this from [`FreeCamera::reshape`](crate::FreeCamera::reshape)
/// so the backend can resize its attachments and set the draw viewport.
pub trait ViewportSink {
    fn set_viewport(&mut self, rect: ViewportRect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_viewport_starts_at_origin() {
        let rect = ViewportRect::full(640, 480);
        assert_eq!((rect.x, rect.y), (0, 0));
        assert_eq!((rect.width, rect.height), (640, 480));
    }
}
