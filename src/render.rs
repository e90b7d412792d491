//! Layout and flip styling for the current view.

use crate::navigator::Direction;

/// Flip animation styling.
///
/// The page being turned is rotated around its spine inside a perspective
/// container for the duration of the transition.
#[derive(Clone, Debug, PartialEq)]
pub struct FlipStyle {
    /// Perspective depth of the container in pixels
    pub perspective_px: f64,
    /// Rotation reached while flipping, in degrees
    pub angle_deg: f64,
    /// CSS timing function
    pub easing: String,
}

impl Default for FlipStyle {
    fn default() -> Self {
        Self {
            perspective_px: 1000.0,
            angle_deg: 30.0,
            easing: "ease-in-out".to_string(),
        }
    }
}

impl FlipStyle {
    /// CSS transform for a page turning in `direction`.
    ///
    /// ```rust
    /// use flipbook_core_view::{Direction, FlipStyle};
    ///
    /// let style = FlipStyle::default();
    /// assert_eq!(style.transform(Direction::Forward), "rotateY(-30deg)");
    /// assert_eq!(style.transform(Direction::Backward), "rotateY(30deg)");
    /// ```
    pub fn transform(&self, direction: Direction) -> String {
        let angle = match direction {
            Direction::Forward => -self.angle_deg,
            Direction::Backward => self.angle_deg,
        };
        format!("rotateY({}deg)", angle)
    }

    /// CSS transition property value for the given duration.
    pub fn transition(&self, duration_ms: u32) -> String {
        format!("transform {}ms {}", duration_ms, self.easing)
    }

    /// CSS perspective value for the flipbook container.
    pub fn perspective(&self) -> String {
        format!("{}px", self.perspective_px)
    }
}

/// Where one page is drawn inside the view.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSlot {
    /// Page index
    pub page: usize,
    /// X offset from the left edge of the view, in pixels
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

/// Platform-agnostic plan for drawing the current view.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewLayout {
    /// Total view width in pixels
    pub width: f64,
    /// Total view height in pixels
    pub height: f64,
    pub slots: Vec<PageSlot>,
}

/// Lay out the visible pages inside a fitted view size.
///
/// `fit` is the size of the whole view: one page in single mode, the whole
/// spread in spread mode (see [`PageSizing::view_fit`](crate::PageSizing::view_fit)).
/// Spread pages sit side by side at half width; a lone last page of a
/// spread keeps the left half.
///
/// ```rust
/// use flipbook_core_view::render::layout_view;
///
/// let layout = layout_view((2, Some(3)), (800.0, 500.0), true);
/// assert_eq!(layout.slots.len(), 2);
/// assert_eq!(layout.slots[1].x, 400.0);
/// ```
pub fn layout_view(pages: (usize, Option<usize>), fit: (f64, f64), spread: bool) -> ViewLayout {
    let (width, height) = fit;
    let page_width = if spread { width / 2.0 } else { width };

    let mut slots = vec![PageSlot {
        page: pages.0,
        x: 0.0,
        width: page_width,
        height,
    }];
    if let (true, Some(second)) = (spread, pages.1) {
        slots.push(PageSlot {
            page: second,
            x: page_width,
            width: page_width,
            height,
        });
    }

    ViewLayout {
        width,
        height,
        slots,
    }
}

/// Web-specific rendering implementation.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use crate::optimize::fit_within;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, HtmlImageElement};

    /// Draw a page image onto a canvas, downscaled to fit the limits.
    ///
    /// Returns the canvas dimensions used.
    pub fn draw_page(canvas: &HtmlCanvasElement, image: &HtmlImageElement, max_width: u32, max_height: u32) -> Result<(u32, u32), String> {
        let (width, height) = fit_within(image.natural_width(), image.natural_height(), max_width, max_height);
        if width == 0 || height == 0 {
            return Err("Image has no dimensions".to_string());
        }

        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "Failed to get 2d context")?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, width as f64, height as f64)
            .map_err(|_| "Failed to draw page image")?;
        Ok((width, height))
    }

    /// Start the flip animation on a page element.
    pub fn apply_flip(element: &HtmlElement, style: &FlipStyle, direction: Direction, duration_ms: u32) -> Result<(), String> {
        let css = element.style();
        css.set_property("transition", &style.transition(duration_ms))
            .map_err(|_| "Failed to set transition")?;
        css.set_property("transform", &style.transform(direction))
            .map_err(|_| "Failed to set transform")?;
        Ok(())
    }

    /// Return a page element to rest after the transition commits.
    pub fn clear_flip(element: &HtmlElement) -> Result<(), String> {
        element
            .style()
            .remove_property("transform")
            .map_err(|_| "Failed to clear transform")?;
        Ok(())
    }

    /// Set the perspective on the flipbook container.
    pub fn apply_perspective(container: &HtmlElement, style: &FlipStyle) -> Result<(), String> {
        container
            .style()
            .set_property("perspective", &style.perspective())
            .map_err(|_| "Failed to set perspective")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_css() {
        let style = FlipStyle::default();
        assert_eq!(style.transition(600), "transform 600ms ease-in-out");
        assert_eq!(style.perspective(), "1000px");
    }

    #[test]
    fn test_single_layout_ignores_second_page() {
        let layout = layout_view((4, Some(5)), (300.0, 400.0), false);
        assert_eq!(
            layout.slots,
            vec![PageSlot {
                page: 4,
                x: 0.0,
                width: 300.0,
                height: 400.0
            }]
        );
    }

    #[test]
    fn test_spread_layout_halves_width() {
        let layout = layout_view((8, Some(9)), (600.0, 400.0), true);
        assert_eq!(layout.width, 600.0);
        assert_eq!(layout.slots[0].width, 300.0);
        assert_eq!(layout.slots[1].page, 9);
        assert_eq!(layout.slots[1].x, 300.0);
    }

    #[test]
    fn test_spread_layout_lone_last_page() {
        let layout = layout_view((10, None), (600.0, 400.0), true);
        assert_eq!(layout.slots.len(), 1);
        assert_eq!(layout.slots[0].width, 300.0);
    }
}
