//! Page image preloading and progress tracking.
//!
//! Every page is fetched, decoded and downscaled in order. A page that fails
//! at any step gets a placeholder and still counts as resolved, so the
//! progress counter always reaches its total.

use crate::error::FlipbookError;
use crate::optimize::{self, ImageLimits};
use crate::PageSet;
use image::DynamicImage;

/// Progress information for a bulk preload
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreloadProgress {
    /// Pages resolved so far, placeholders included
    pub resolved: usize,
    /// Pages that fell back to a placeholder
    pub failed: usize,
    /// Total number of pages to resolve
    pub total: usize,
}

impl PreloadProgress {
    pub fn new(total: usize) -> Self {
        Self {
            resolved: 0,
            failed: 0,
            total,
        }
    }

    /// Get loading percentage (0-100)
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            0
        } else {
            ((self.resolved.min(self.total) as f32 / self.total as f32) * 100.0) as u8
        }
    }

    /// Check if every page has been resolved
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.resolved >= self.total
    }

    /// Format progress message
    pub fn message(&self) -> String {
        if self.failed > 0 {
            format!(
                "Loading pages... {} / {} ({}%, {} unavailable)",
                self.resolved,
                self.total,
                self.percent(),
                self.failed
            )
        } else {
            format!(
                "Loading pages... {} / {} ({}%)",
                self.resolved,
                self.total,
                self.percent()
            )
        }
    }
}

/// Outcome of resolving one page.
#[derive(Clone, Debug)]
pub enum PageImage {
    /// The real page image, downscaled
    Ready(DynamicImage),
    /// Substitute for a page that failed to load
    Placeholder(DynamicImage),
}

impl PageImage {
    /// The image to draw, whichever kind it is.
    pub fn image(&self) -> &DynamicImage {
        match self {
            PageImage::Ready(img) | PageImage::Placeholder(img) => img,
        }
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, PageImage::Placeholder(_))
    }
}

/// Per-page slots filled in as a preload progresses.
#[derive(Clone, Debug)]
pub struct PreloadState {
    slots: Vec<Option<PageImage>>,
    limits: ImageLimits,
    progress: PreloadProgress,
}

impl PreloadState {
    pub fn new(page_count: usize, limits: ImageLimits) -> Self {
        Self {
            slots: vec![None; page_count],
            limits,
            progress: PreloadProgress::new(page_count),
        }
    }

    /// Store a decoded page image, downscaling it to the limits.
    pub fn resolve(&mut self, index: usize, image: &DynamicImage) -> Option<&PageImage> {
        let page = PageImage::Ready(self.limits.apply(image));
        self.store(index, page)
    }

    /// Substitute a placeholder for a page that failed to load.
    pub fn fail(&mut self, index: usize, error: &FlipbookError) -> Option<&PageImage> {
        if index >= self.slots.len() {
            return None;
        }
        tracing::warn!(page = index, %error, "page image unavailable, using placeholder");
        let page = PageImage::Placeholder(self.limits.placeholder());
        self.store(index, page)
    }

    /// Record the outcome of one page, as produced by [`preload_pages`].
    pub fn record(&mut self, index: usize, page: PageImage) -> Option<&PageImage> {
        self.store(index, page)
    }

    /// Replace a slot, keeping `resolved` and `failed` in step with the slots.
    fn store(&mut self, index: usize, page: PageImage) -> Option<&PageImage> {
        let slot = self.slots.get_mut(index)?;
        match slot.as_ref().map(PageImage::is_placeholder) {
            None => self.progress.resolved += 1,
            Some(true) => self.progress.failed -= 1,
            Some(false) => {}
        }
        if page.is_placeholder() {
            self.progress.failed += 1;
        }
        *slot = Some(page);
        slot.as_ref()
    }

    /// Get the resolved image for a page, if any.
    pub fn image(&self, index: usize) -> Option<&PageImage> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }

    #[inline]
    pub fn progress(&self) -> &PreloadProgress {
        &self.progress
    }

    #[inline]
    pub fn limits(&self) -> ImageLimits {
        self.limits
    }
}

/// Result type for host I/O
pub type LoadResult<T> = Result<T, String>;

/// Trait for async page byte sources.
///
/// Implement this with your I/O mechanism (fetch API, filesystem, bundled
/// assets, etc.).
///
/// No `Send` bounds, so it works in both native and WASM (single-threaded)
/// contexts.
pub trait PageSource {
    /// Read the raw encoded bytes behind a page's source reference.
    fn fetch(&self, source_ref: &str) -> impl std::future::Future<Output = LoadResult<Vec<u8>>>;
}

/// Fetch, decode and downscale one page, substituting a placeholder on error.
pub async fn load_page<S: PageSource>(source: &S, page: usize, source_ref: &str, limits: ImageLimits) -> PageImage {
    let loaded = match source.fetch(source_ref).await {
        Ok(bytes) => optimize::decode(&bytes),
        Err(reason) => Err(FlipbookError::Fetch { page, reason }),
    };

    match loaded {
        Ok(image) => PageImage::Ready(limits.apply(&image)),
        Err(error) => {
            tracing::warn!(page, source_ref, %error, "page image unavailable, using placeholder");
            PageImage::Placeholder(limits.placeholder())
        }
    }
}

/// Preload every page in order.
///
/// Calls `on_page(index, total, image)` once per page, placeholders
/// included, and `yield_fn()` before each page so UI callbacks keep running
/// in single-threaded contexts. Never aborts early; the returned progress is
/// always complete.
pub async fn preload_pages<S, F, Y, YFut>(source: &S, pages: &PageSet, limits: ImageLimits, mut on_page: F, yield_fn: Y) -> PreloadProgress where S: PageSource, F: FnMut(usize, usize, PageImage), Y: Fn() -> YFut, YFut: std::future::Future<Output = ()> {
    let total = pages.len();
    let mut progress = PreloadProgress::new(total);

    for page in pages {
        yield_fn().await;

        let image = load_page(source, page.id, &page.source_ref, limits).await;
        if image.is_placeholder() {
            progress.failed += 1;
        }
        progress.resolved += 1;
        on_page(page.id, total, image);
    }

    tracing::debug!(total, failed = progress.failed, "preload finished");
    progress
}

/// Resolve after `ms` milliseconds using the browser's `setTimeout`.
///
/// Drive [`PageNavigator::tick`](crate::PageNavigator::tick) or a fallback
/// completion from this when the animation-end event may never fire.
#[cfg(feature = "web")]
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        } else {
            let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Yield control back to the browser event loop.
///
/// Pass this as the `yield_fn` of [`preload_pages`] in WASM builds.
#[cfg(feature = "web")]
pub async fn yield_to_event_loop() {
    sleep_ms(0).await;
}
