// Carousel state - cyclic index over a fixed-length list
//
// The certificates section shows one card at a time on narrow
// terminals. An interval timer advances the card automatically and a
// horizontal drag gesture moves it manually. The index is kept in
// range by modular arithmetic, so out-of-range states are impossible
// by construction.

/// Horizontal displacement (in input units) a gesture must exceed to
/// count as a swipe. Displacements at or below this are a no-op.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Cyclic carousel over `len` items with timed auto-advance.
#[derive(Debug, Clone)]
pub struct CarouselState {
    index: usize,
    len: usize,
    /// Seconds between automatic advances.
    interval: f32,
    /// Seconds accumulated toward the next automatic advance.
    elapsed: f32,
}

impl CarouselState {
    /// Carousel with the default 3-second auto-advance interval.
    pub fn new(len: usize) -> Self {
        Self::with_interval(len, 3.0)
    }

    pub fn with_interval(len: usize, interval: f32) -> Self {
        assert!(len > 0, "carousel requires at least one item");
        Self {
            index: 0,
            len,
            interval,
            elapsed: 0.0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Advance the auto-slide timer by `dt` seconds. Each full
    /// interval that elapsed advances the index by one.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.advance();
        }
    }

    /// Move to the next item, wrapping to 0 past the end.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Move to the previous item, wrapping to `len - 1` from 0.
    pub fn retreat(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump to a specific item (dot indicator click).
    pub fn select(&mut self, index: usize) {
        self.index = index % self.len;
    }

    /// Re-arm the auto-advance timer. Called after manual navigation
    /// so the next automatic slide doesn't fire right away.
    pub fn reset_timer(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Outcome of a completed swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Leftward swipe: show the next item.
    Next,
    /// Rightward swipe: show the previous item.
    Prev,
    /// Displacement below threshold.
    None,
}

/// Tracks one in-flight horizontal drag gesture.
///
/// Coordinates are in abstract input units; the TUI layer scales
/// terminal cells into units before feeding them in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    last_x: Option<f32>,
    threshold: f32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            start_x: None,
            last_x: None,
            threshold,
        }
    }

    /// Gesture began at `x`.
    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.last_x = Some(x);
    }

    /// Gesture moved to `x`.
    pub fn touch_move(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.last_x = Some(x);
        }
    }

    /// Gesture ended. Classifies the accumulated displacement and
    /// resets the tracker either way.
    pub fn touch_end(&mut self) -> Swipe {
        let result = match (self.start_x, self.last_x) {
            (Some(start), Some(end)) => {
                let distance = start - end;
                if distance > self.threshold {
                    Swipe::Next
                } else if distance < -self.threshold {
                    Swipe::Prev
                } else {
                    Swipe::None
                }
            }
            _ => Swipe::None,
        };
        self.start_x = None;
        self.last_x = None;
        result
    }

    /// Abandon the gesture without classifying it (view switch,
    /// pointer left the section).
    pub fn reset(&mut self) {
        self.start_x = None;
        self.last_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_advance_is_index_mod_len() {
        let mut c = CarouselState::new(9);
        for n in 1..=40usize {
            c.tick(3.0);
            assert_eq!(c.index(), n % 9);
        }
    }

    #[test]
    fn twenty_seven_ticks_over_nine_items_returns_to_start() {
        // 27 auto-advances = 81 simulated seconds.
        let mut c = CarouselState::new(9);
        for _ in 0..27 {
            c.tick(3.0);
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn tick_accumulates_partial_intervals() {
        let mut c = CarouselState::new(5);
        c.tick(1.0);
        c.tick(1.0);
        assert_eq!(c.index(), 0);
        c.tick(1.0);
        assert_eq!(c.index(), 1);
        // One long frame spanning two intervals advances twice.
        c.tick(6.0);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn retreat_wraps_through_last_item() {
        let mut c = CarouselState::new(9);
        c.retreat();
        assert_eq!(c.index(), 8);
        c.advance();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn swipe_below_threshold_is_noop() {
        let mut t = SwipeTracker::new();
        t.touch_start(100.0);
        t.touch_move(60.0);
        assert_eq!(t.touch_end(), Swipe::None);

        // Exactly at the threshold is still a no-op.
        t.touch_start(100.0);
        t.touch_move(50.0);
        assert_eq!(t.touch_end(), Swipe::None);
    }

    #[test]
    fn swipe_left_advances_and_right_retreats() {
        let mut t = SwipeTracker::new();
        t.touch_start(200.0);
        t.touch_move(140.0);
        assert_eq!(t.touch_end(), Swipe::Next);

        t.touch_start(100.0);
        t.touch_move(160.0);
        assert_eq!(t.touch_end(), Swipe::Prev);
    }

    #[test]
    fn swipe_tracker_resets_after_end() {
        let mut t = SwipeTracker::new();
        t.touch_start(200.0);
        t.touch_move(0.0);
        assert_eq!(t.touch_end(), Swipe::Next);
        // A move with no start is ignored; end without start is a no-op.
        t.touch_move(500.0);
        assert_eq!(t.touch_end(), Swipe::None);
    }

    #[test]
    fn swipe_drives_carousel_with_wrap() {
        let mut c = CarouselState::new(9);
        let mut t = SwipeTracker::new();

        t.touch_start(100.0);
        t.touch_move(200.0);
        if t.touch_end() == Swipe::Prev {
            c.retreat();
        }
        assert_eq!(c.index(), 8);
    }
}
