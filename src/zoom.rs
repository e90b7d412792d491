//! Bounded zoom level for the page view.

/// Zoom level state, clamped to `[min, max]`.
///
/// ## Example
///
/// ```rust
/// use flipbook_core_view::ZoomState;
///
/// let mut zoom = ZoomState::default();
/// zoom.zoom_in();
/// assert_eq!(zoom.level(), 1.25);
/// assert_eq!(zoom.apply((400.0, 300.0)), (500.0, 375.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomState {
    level: f64,
    /// Smallest allowed level
    pub min: f64,
    /// Largest allowed level
    pub max: f64,
    /// Increment used by zoom_in / zoom_out
    pub step: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            level: 1.0,
            min: 1.0,
            max: 3.0,
            step: 0.25,
        }
    }
}

impl ZoomState {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let min = if min.is_finite() && min > 0.0 { min } else { 1.0 };
        let max = if max.is_finite() { max.max(min) } else { min };
        Self {
            level: min,
            min,
            max,
            step: step.abs(),
        }
    }

    #[inline]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Set the level, clamped to the allowed range. NaN is ignored.
    pub fn set_level(&mut self, level: f64) {
        if level.is_nan() {
            return;
        }
        self.level = level.clamp(self.min, self.max);
    }

    pub fn zoom_in(&mut self) {
        self.set_level(self.level + self.step);
    }

    pub fn zoom_out(&mut self) {
        self.set_level(self.level - self.step);
    }

    /// Back to the minimum level.
    pub fn reset(&mut self) {
        self.level = self.min;
    }

    #[inline]
    pub fn is_zoomed(&self) -> bool {
        self.level > self.min
    }

    /// Scale a fitted size by the current level.
    pub fn apply(&self, size: (f64, f64)) -> (f64, f64) {
        (size.0 * self.level, size.1 * self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamps_to_max() {
        let mut zoom = ZoomState::default();
        for _ in 0..20 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.level(), 3.0);
        assert!(zoom.is_zoomed());
    }

    #[test]
    fn test_zoom_out_stops_at_min() {
        let mut zoom = ZoomState::default();
        zoom.zoom_out();
        assert_eq!(zoom.level(), 1.0);
        assert!(!zoom.is_zoomed());
    }

    #[test]
    fn test_set_level_and_reset() {
        let mut zoom = ZoomState::new(0.5, 4.0, 0.5);
        assert_eq!(zoom.level(), 0.5);

        zoom.set_level(2.0);
        assert_eq!(zoom.level(), 2.0);
        zoom.set_level(f64::NAN);
        assert_eq!(zoom.level(), 2.0);
        zoom.set_level(10.0);
        assert_eq!(zoom.level(), 4.0);

        zoom.reset();
        assert_eq!(zoom.level(), 0.5);
    }

    #[test]
    fn test_new_sanitizes_bounds() {
        let zoom = ZoomState::new(-1.0, 0.5, -0.25);
        assert_eq!(zoom.min, 1.0);
        assert_eq!(zoom.max, 1.0);
        assert_eq!(zoom.step, 0.25);
    }
}
