//! # flipbook-core-view
//!
//! Core page navigation library for flipbook viewers.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - Navigating pages or two-page spreads with a single in-flight transition
//! - Fitting pages into a responsive container
//! - Decoding, downscaling and preloading page images with placeholders
//! - Flip styling, zoom and fullscreen for the host UI
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load [`FlipbookConfig`] from TOML
//! - `web` - Enable web/WASM canvas, timer and fullscreen helpers
//!
//! The TOML config tests only build with the `toml` feature:
//! `cargo test --features toml`.
//!
//! ## Example
//!
//! ```rust
//! use flipbook_core_view::{FlipbookConfig, PageNavigator, PageSet};
//!
//! let pages = PageSet::new(vec!["p1.jpg".into(), "p2.jpg".into(), "p3.jpg".into()])?;
//! let config = FlipbookConfig::default();
//!
//! let mut nav = PageNavigator::new(config.navigator_config(pages.len())?, ())?;
//! nav.advance();
//!
//! // From the animation-end event, or let the fallback timer do it
//! nav.tick(config.transition_duration_ms + config.fallback_grace_ms);
//! assert_eq!(nav.current_index(), 1);
//!
//! let (width, height) = config.sizing().page_fit(1280.0, 800.0);
//! assert!(width > 0.0 && height > 0.0);
//! # Ok::<(), flipbook_core_view::FlipbookError>(())
//! ```

mod config;
mod data;
mod error;
pub mod fullscreen;
pub mod loader;
mod navigator;
pub mod optimize;
pub mod render;
mod sizing;
mod spread;
mod zoom;

pub use config::FlipbookConfig;
pub use data::{Page, PageSet};
pub use error::{FlipbookError, Result};
pub use fullscreen::Fullscreen;
pub use loader::{preload_pages, PageImage, PageSource, PreloadProgress, PreloadState};
pub use navigator::{Direction, NavigationHost, NavigatorConfig, PageNavigator, Transition};
pub use optimize::ImageLimits;
pub use render::{FlipStyle, PageSlot, ViewLayout};
pub use sizing::{compute_fit, PageSizing};
pub use spread::{SpreadPolicy, ViewMode};
pub use zoom::ZoomState;
