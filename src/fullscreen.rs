//! Fullscreen capability.
//!
//! Platform shims (vendor prefixes, window managers) live behind one trait so
//! the rest of the viewer never branches on them.

use crate::error::Result;

pub trait Fullscreen {
    fn enter_fullscreen(&mut self) -> Result<()>;

    fn exit_fullscreen(&mut self) -> Result<()>;

    fn is_fullscreen(&self) -> bool;

    /// Flip between the two states; returns whether fullscreen is now on.
    fn toggle_fullscreen(&mut self) -> Result<bool> {
        if self.is_fullscreen() {
            self.exit_fullscreen()?;
            Ok(false)
        } else {
            self.enter_fullscreen()?;
            Ok(true)
        }
    }
}

/// Browser fullscreen over the standard Fullscreen API.
#[cfg(feature = "web")]
pub mod web {
    use super::Fullscreen;
    use crate::error::{FlipbookError, Result};
    use web_sys::{Document, Element};

    /// Puts one element (usually the flipbook container) into fullscreen.
    #[derive(Clone, Debug)]
    pub struct ElementFullscreen {
        element: Element,
        document: Document,
    }

    impl ElementFullscreen {
        pub fn new(element: Element) -> Result<Self> {
            let document = element
                .owner_document()
                .ok_or_else(|| FlipbookError::Fullscreen("element has no document".to_string()))?;
            Ok(Self { element, document })
        }
    }

    impl Fullscreen for ElementFullscreen {
        fn enter_fullscreen(&mut self) -> Result<()> {
            self.element
                .request_fullscreen()
                .map_err(|e| FlipbookError::Fullscreen(format!("{e:?}")))
        }

        fn exit_fullscreen(&mut self) -> Result<()> {
            self.document.exit_fullscreen();
            Ok(())
        }

        fn is_fullscreen(&self) -> bool {
            self.document.fullscreen_element().is_some()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlipbookError;

    #[derive(Default)]
    struct FakeScreen {
        on: bool,
        deny: bool,
    }

    impl Fullscreen for FakeScreen {
        fn enter_fullscreen(&mut self) -> Result<()> {
            if self.deny {
                return Err(FlipbookError::Fullscreen("denied".to_string()));
            }
            self.on = true;
            Ok(())
        }

        fn exit_fullscreen(&mut self) -> Result<()> {
            self.on = false;
            Ok(())
        }

        fn is_fullscreen(&self) -> bool {
            self.on
        }
    }

    #[test]
    fn test_toggle() {
        let mut screen = FakeScreen::default();
        assert!(screen.toggle_fullscreen().unwrap());
        assert!(screen.is_fullscreen());
        assert!(!screen.toggle_fullscreen().unwrap());
        assert!(!screen.is_fullscreen());
    }

    #[test]
    fn test_toggle_propagates_denial() {
        let mut screen = FakeScreen {
            deny: true,
            ..Default::default()
        };
        assert!(matches!(screen.toggle_fullscreen(), Err(FlipbookError::Fullscreen(_))));
        assert!(!screen.is_fullscreen());
    }
}
