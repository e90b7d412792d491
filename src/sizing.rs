//! Responsive sizing for fitting pages into a container.

/// Fit a box of the given aspect ratio into a container, leaving a margin.
///
/// `aspect_ratio` is width / height. `margin_fraction` is the share of each
/// container dimension kept free (0.1 leaves 90% usable).
///
/// The fit is width-constrained when `available_width / aspect_ratio`
/// fits in `available_height`, otherwise height-constrained. Non-positive
/// or non-finite inputs, and a margin outside `[0, 1)`, yield `(0.0, 0.0)`.
///
/// ## Example
///
/// ```rust
/// use flipbook_core_view::compute_fit;
///
/// // 900x450 usable; a 0.75 page is too tall for the width, so height wins
/// let (w, h) = compute_fit(1000.0, 500.0, 0.75, 0.1);
/// assert_eq!((w, h), (337.5, 450.0));
/// ```
pub fn compute_fit(
    container_width: f64,
    container_height: f64,
    aspect_ratio: f64,
    margin_fraction: f64,
) -> (f64, f64) {
    if !(0.0..1.0).contains(&margin_fraction) {
        return (0.0, 0.0);
    }
    let usable = 1.0 - margin_fraction;
    let available_width = container_width * usable;
    let available_height = container_height * usable;

    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(available_width) || !valid(available_height) || !valid(aspect_ratio) {
        return (0.0, 0.0);
    }

    if available_width / aspect_ratio <= available_height {
        (available_width, available_width / aspect_ratio)
    } else {
        (available_height * aspect_ratio, available_height)
    }
}

/// Page sizing configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSizing {
    /// Page width as a ratio of page height (0.75 for portrait 3:4)
    pub aspect_ratio: f64,
    /// Fraction of the container kept as margin
    pub margin_fraction: f64,
}

impl Default for PageSizing {
    fn default() -> Self {
        Self {
            aspect_ratio: 0.75,
            margin_fraction: 0.1,
        }
    }
}

impl PageSizing {
    pub fn new(aspect_ratio: f64, margin_fraction: f64) -> Self {
        Self {
            aspect_ratio,
            margin_fraction,
        }
    }

    /// Size of a single page in the container.
    pub fn page_fit(&self, container_width: f64, container_height: f64) -> (f64, f64) {
        compute_fit(container_width, container_height, self.aspect_ratio, self.margin_fraction)
    }

    /// Size of a two-page spread in the container.
    ///
    /// The spread is twice as wide as one page; each page gets half.
    pub fn spread_fit(&self, container_width: f64, container_height: f64) -> (f64, f64) {
        compute_fit(
            container_width,
            container_height,
            self.aspect_ratio * 2.0,
            self.margin_fraction,
        )
    }

    /// Size for the given number of pages per view.
    pub fn view_fit(&self, pages_per_view: usize, container_width: f64, container_height: f64) -> (f64, f64) {
        if pages_per_view >= 2 {
            self.spread_fit(container_width, container_height)
        } else {
            self.page_fit(container_width, container_height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_constrained() {
        // 900 / 0.75 = 1200 > 450
        let (w, h) = compute_fit(1000.0, 500.0, 0.75, 0.1);
        assert_eq!(h, 450.0);
        assert_eq!(w, 337.5);
    }

    #[test]
    fn test_width_constrained() {
        // 360 / 0.75 = 480 <= 900
        let (w, h) = compute_fit(400.0, 1000.0, 0.75, 0.1);
        assert_eq!(w, 360.0);
        assert_eq!(h, 480.0);
    }

    #[test]
    fn test_exact_fit_uses_width() {
        let (w, h) = compute_fit(300.0, 400.0, 0.75, 0.0);
        assert_eq!((w, h), (300.0, 400.0));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(compute_fit(0.0, 500.0, 0.75, 0.1), (0.0, 0.0));
        assert_eq!(compute_fit(1000.0, 500.0, 0.0, 0.1), (0.0, 0.0));
        assert_eq!(compute_fit(1000.0, 500.0, f64::NAN, 0.1), (0.0, 0.0));
        assert_eq!(compute_fit(1000.0, 500.0, 0.75, 1.0), (0.0, 0.0));
    }

    #[test]
    fn test_margin_out_of_range() {
        assert_eq!(compute_fit(1000.0, 500.0, 0.75, -0.1), (0.0, 0.0));
        assert_eq!(compute_fit(1000.0, 500.0, 0.75, 1.5), (0.0, 0.0));
        assert_eq!(compute_fit(1000.0, 500.0, 0.75, f64::NAN), (0.0, 0.0));
    }

    #[test]
    fn test_spread_fit_doubles_width() {
        let sizing = PageSizing::default();
        let (page_w, page_h) = sizing.page_fit(2000.0, 1000.0);
        let (spread_w, spread_h) = sizing.spread_fit(2000.0, 1000.0);

        // Height-constrained in both cases
        assert_eq!(page_h, spread_h);
        assert!((spread_w - 2.0 * page_w).abs() < 1e-9);
        assert_eq!(sizing.view_fit(2, 2000.0, 1000.0), (spread_w, spread_h));
        assert_eq!(sizing.view_fit(1, 2000.0, 1000.0), (page_w, page_h));
    }
}
