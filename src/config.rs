use crate::error::{FlipbookError, Result};
use crate::navigator::NavigatorConfig;
use crate::optimize::ImageLimits;
use crate::sizing::PageSizing;
use crate::spread::ViewMode;
use crate::zoom::ZoomState;

/// Viewer settings, typically read from a `flipbook.toml` file.
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlipbookConfig {
    pub initial_page: usize,
    pub transition_duration_ms: u32,
    /// 1 for single pages, 2 for spreads
    pub pages_per_view: u8,
    pub fallback_grace_ms: u32,
    pub max_image_width: u32,
    pub max_image_height: u32,
    pub page_aspect_ratio: f64,
    pub margin_fraction: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
}

impl Default for FlipbookConfig {
    fn default() -> Self {
        Self {
            initial_page: 0,
            transition_duration_ms: 600,
            pages_per_view: 1,
            fallback_grace_ms: 250,
            max_image_width: 1200,
            max_image_height: 1600,
            page_aspect_ratio: 0.75,
            margin_fraction: 0.1,
            max_zoom: 3.0,
            zoom_step: 0.25,
        }
    }
}

impl FlipbookConfig {
    /// Parse a `flipbook.toml` string.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| FlipbookError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would make the viewer unusable.
    pub fn validate(&self) -> Result<()> {
        self.view_mode()?;
        if self.max_image_width == 0 || self.max_image_height == 0 {
            return Err(FlipbookError::InvalidConfig(
                "max image dimensions must be non-zero".to_string(),
            ));
        }
        if !(self.page_aspect_ratio.is_finite() && self.page_aspect_ratio > 0.0) {
            return Err(FlipbookError::InvalidConfig(format!(
                "page_aspect_ratio must be positive, got {}",
                self.page_aspect_ratio
            )));
        }
        if !(0.0..1.0).contains(&self.margin_fraction) {
            return Err(FlipbookError::InvalidConfig(format!(
                "margin_fraction must be in [0, 1), got {}",
                self.margin_fraction
            )));
        }
        Ok(())
    }

    pub fn view_mode(&self) -> Result<ViewMode> {
        ViewMode::from_pages_per_view(self.pages_per_view).ok_or_else(|| {
            FlipbookError::InvalidConfig(format!(
                "pages_per_view must be 1 or 2, got {}",
                self.pages_per_view
            ))
        })
    }

    /// Navigator settings for a book with `page_count` pages.
    pub fn navigator_config(&self, page_count: usize) -> Result<NavigatorConfig> {
        Ok(NavigatorConfig {
            page_count,
            initial_page: self.initial_page,
            transition_duration_ms: self.transition_duration_ms,
            view_mode: self.view_mode()?,
            fallback_grace_ms: self.fallback_grace_ms,
        })
    }

    pub fn image_limits(&self) -> ImageLimits {
        ImageLimits {
            max_width: self.max_image_width,
            max_height: self.max_image_height,
        }
    }

    pub fn sizing(&self) -> PageSizing {
        PageSizing::new(self.page_aspect_ratio, self.margin_fraction)
    }

    pub fn zoom(&self) -> ZoomState {
        ZoomState::new(1.0, self.max_zoom, self.zoom_step)
    }
}
