use glam::Vec2;

/// Bounding box of the parallax container in page coordinates
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Tracks the normalized pointer offset shared by every parallax layer.
///
/// The offset is absent until the first pointer event and after the pointer
/// leaves the container; consumers read zero in both cases. Only pointer
/// event handlers mutate this state, layers never own it.
#[derive(Debug, Default)]
pub struct PointerTracker {
    offset: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self { offset: None }
    }

    /// Record a pointer position, normalized to [-1,1] about the container
    /// center and clamped. Degenerate bounds are ignored.
    pub fn observe(&mut self, position: Vec2, bounds: Bounds) {
        let half = Vec2::new(bounds.width / 2.0, bounds.height / 2.0);
        if half.x <= 0.0 || half.y <= 0.0 {
            return;
        }

        let relative = position - bounds.center();
        let normalized = (relative / half).clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        self.offset = Some(normalized);
    }

    /// Forget the pointer, e.g. when it leaves the container
    pub fn clear(&mut self) {
        self.offset = None;
    }

    /// Current offset; zero before the first observation
    pub fn offset(&self) -> Vec2 {
        self.offset.unwrap_or(Vec2::ZERO)
    }

    pub fn has_observation(&self) -> bool {
        self.offset.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAGE: Bounds = Bounds {
        left: 0.0,
        top: 0.0,
        width: 1000.0,
        height: 500.0,
    };

    #[test]
    fn test_zero_before_first_event() {
        let tracker = PointerTracker::new();
        assert_eq!(tracker.offset(), Vec2::ZERO);
        assert!(!tracker.has_observation());
    }

    #[test]
    fn test_normalization() {
        let mut tracker = PointerTracker::new();

        tracker.observe(Vec2::new(500.0, 250.0), STAGE);
        assert_eq!(tracker.offset(), Vec2::ZERO);

        tracker.observe(Vec2::new(1000.0, 0.0), STAGE);
        assert_eq!(tracker.offset(), Vec2::new(1.0, -1.0));

        tracker.observe(Vec2::new(750.0, 375.0), STAGE);
        assert_eq!(tracker.offset(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_clamped_outside_container() {
        let mut tracker = PointerTracker::new();
        tracker.observe(Vec2::new(2000.0, -300.0), STAGE);
        assert_eq!(tracker.offset(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_clear_on_leave() {
        let mut tracker = PointerTracker::new();
        tracker.observe(Vec2::new(800.0, 100.0), STAGE);
        assert!(tracker.has_observation());

        tracker.clear();
        assert_eq!(tracker.offset(), Vec2::ZERO);
        assert!(!tracker.has_observation());
    }

    #[test]
    fn test_degenerate_bounds_ignored() {
        let mut tracker = PointerTracker::new();
        let flat = Bounds {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 500.0,
        };
        tracker.observe(Vec2::new(10.0, 10.0), flat);
        assert!(!tracker.has_observation());
    }
}
