//! Image carousel state
//!
//! The carousel shows a window of `visible` items over a strip of equally wide
//! images. Advancing past the last full window wraps back to the start; going
//! back stops at the first item.

use super::config::Breakpoints;

/// One rendered carousel state: where the strip sits and how full the
/// progress bar is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselFrame {
    /// Horizontal translation of the strip in pixels (zero or negative)
    pub offset_px: f64,
    /// Progress bar value in percent
    pub progress: f64,
    /// How many items fit the viewport for this frame
    pub visible: usize,
}

/// Position of a carousel over a gallery of `item_count` images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    position: usize,
    item_count: usize,
}

impl CarouselState {
    pub fn new(item_count: usize) -> Self {
        Self {
            position: 0,
            item_count,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// The gallery may gain or lose images between events
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    /// Largest position at which a full window of `visible` items is still shown
    pub fn max_position(&self, visible: usize) -> usize {
        self.item_count.saturating_sub(visible)
    }

    /// Advance by one item, wrapping to the start after the last full window.
    pub fn next(&mut self, visible: usize) -> usize {
        if self.position < self.max_position(visible) {
            self.position += 1;
        } else {
            self.position = 0;
        }
        self.position
    }

    /// Step back by one item; stays on the first item.
    pub fn prev(&mut self) -> usize {
        if self.position > 0 {
            self.position -= 1;
        }
        self.position
    }

    /// Pull the position back inside the bound after the viewport grew.
    pub fn clamp_to(&mut self, visible: usize) {
        self.position = self.position.min(self.max_position(visible));
    }

    /// Compute the strip offset and progress value for the current position.
    ///
    /// Returns `None` for an empty gallery, which has nothing to render.
    pub fn render(&self, visible: usize, item_width: f64) -> Option<CarouselFrame> {
        if self.item_count == 0 {
            return None;
        }

        let progress = (self.position + visible) as f64 / self.item_count as f64 * 100.0;

        Some(CarouselFrame {
            offset_px: -(self.position as f64) * item_width,
            progress: progress.min(100.0),
            visible,
        })
    }
}

/// Number of gallery items that fit a viewport of the given width
pub fn visible_count(viewport_width: f64, breakpoints: &Breakpoints) -> usize {
    if viewport_width <= breakpoints.small {
        1
    } else if viewport_width <= breakpoints.medium {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_count_breakpoints() {
        let bp = Breakpoints::default();
        assert_eq!(visible_count(320.0, &bp), 1);
        assert_eq!(visible_count(480.0, &bp), 1);
        assert_eq!(visible_count(500.0, &bp), 2);
        assert_eq!(visible_count(768.0, &bp), 2);
        assert_eq!(visible_count(769.0, &bp), 3);
        assert_eq!(visible_count(1920.0, &bp), 3);
    }

    #[test]
    fn test_next_wraps_at_last_window() {
        let mut carousel = CarouselState::new(6);
        for expected in 1..=4 {
            assert_eq!(carousel.next(2), expected);
        }
        assert_eq!(carousel.position(), 4);
        assert_eq!(carousel.next(2), 0);
    }

    #[test]
    fn test_wraparound_law() {
        for n in 0..12 {
            for v in 1..=3 {
                let mut carousel = CarouselState::new(n);
                let steps = n.saturating_sub(v) + 1;
                for _ in 0..steps {
                    carousel.next(v);
                }
                assert_eq!(carousel.position(), 0, "n={n} v={v}");
            }
        }
    }

    #[test]
    fn test_prev_stops_at_zero() {
        let mut carousel = CarouselState::new(5);
        assert_eq!(carousel.prev(), 0);
        carousel.next(3);
        carousel.next(3);
        assert_eq!(carousel.prev(), 1);
        assert_eq!(carousel.prev(), 0);
        assert_eq!(carousel.prev(), 0);
    }

    #[test]
    fn test_render_offset_and_progress() {
        let mut carousel = CarouselState::new(6);
        carousel.next(3);
        let frame = carousel.render(3, 200.0).unwrap();
        assert_eq!(frame.offset_px, -200.0);
        assert!((frame.progress - 4.0 / 6.0 * 100.0).abs() < 1e-9);
        assert_eq!(frame.visible, 3);
    }

    #[test]
    fn test_render_empty_gallery_is_skipped() {
        let carousel = CarouselState::new(0);
        assert!(carousel.render(3, 200.0).is_none());
    }

    #[test]
    fn test_render_small_gallery_caps_progress() {
        let carousel = CarouselState::new(2);
        let frame = carousel.render(3, 100.0).unwrap();
        assert_eq!(frame.progress, 100.0);
        assert_eq!(frame.offset_px, 0.0);
    }

    #[test]
    fn test_clamp_after_viewport_grows() {
        let mut carousel = CarouselState::new(6);
        for _ in 0..5 {
            carousel.next(1);
        }
        assert_eq!(carousel.position(), 5);
        carousel.clamp_to(3);
        assert_eq!(carousel.position(), 3);
    }
}
