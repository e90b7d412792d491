//! Page navigation state machine with a single-slot transition lock.

use crate::error::{FlipbookError, Result};
use crate::spread::{SpreadPolicy, ViewMode};

/// Direction of a page turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// An accepted navigation that has not been committed yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Position before the turn
    pub from: usize,
    /// Position after the turn commits
    pub to: usize,
    pub direction: Direction,
}

/// Hooks the host renderer implements to follow navigation.
///
/// Both methods default to no-ops, so a host only overrides what it draws.
pub trait NavigationHost {
    /// A transition was accepted; start the turn animation.
    ///
    /// The host must eventually call [`PageNavigator::complete_transition`]
    /// (directly, from an animation-end event, or via the fallback timer).
    fn on_transition_start(&mut self, _transition: &Transition) {}

    /// A transition committed; refresh counters, buttons, thumbnails.
    fn on_transition_complete(&mut self, _index: usize) {}
}

impl NavigationHost for () {}

/// Construction parameters for a [`PageNavigator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Number of pages in the book
    pub page_count: usize,
    /// Page shown first (mapped to its spread in spread mode)
    pub initial_page: usize,
    /// Length of the turn animation
    pub transition_duration_ms: u32,
    pub view_mode: ViewMode,
    /// Extra time after the animation before the fallback timer commits
    pub fallback_grace_ms: u32,
}

impl NavigatorConfig {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            initial_page: 0,
            transition_duration_ms: 600,
            view_mode: ViewMode::Single,
            fallback_grace_ms: 250,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct PendingTransition {
    transition: Transition,
    elapsed_ms: u32,
}

/// Why a navigation request was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rejection {
    Busy,
    OutOfRange,
    AlreadyThere,
}

/// Owns the current position and arbitrates transitions so that exactly one
/// is in flight at a time.
///
/// Positions are page indices in [`ViewMode::Single`] and spread indices in
/// [`ViewMode::Spread`]. The navigator does not keep time itself: the host
/// either calls [`complete_transition`](Self::complete_transition) when its
/// animation ends, or feeds elapsed time to [`tick`](Self::tick), which
/// commits once the fallback deadline passes.
///
/// ## Example
///
/// ```rust
/// use flipbook_core_view::{NavigatorConfig, PageNavigator};
///
/// let mut nav = PageNavigator::new(NavigatorConfig::new(4), ()).unwrap();
/// assert!(nav.advance());
/// assert!(nav.is_transitioning());
///
/// // Locked until the turn commits
/// assert!(!nav.advance());
///
/// nav.complete_transition();
/// assert_eq!(nav.current_index(), 1);
/// assert!(nav.can_retreat());
/// ```
#[derive(Clone, Debug)]
pub struct PageNavigator<H = ()> {
    /// Committed position
    current: usize,
    /// Number of positions (pages or spreads)
    position_count: usize,
    page_count: usize,
    view_mode: ViewMode,
    transition_duration_ms: u32,
    fallback_grace_ms: u32,
    /// Single-slot lock; `Some` while a transition is in flight
    pending: Option<PendingTransition>,
    /// Direction of the last committed transition
    last_direction: Option<Direction>,
    host: H,
}

impl<H: NavigationHost> PageNavigator<H> {
    /// Create a navigator, validating the configuration.
    pub fn new(config: NavigatorConfig, host: H) -> Result<Self> {
        if config.page_count == 0 {
            return Err(FlipbookError::InvalidConfig(
                "page_count must be at least 1".to_string(),
            ));
        }
        if config.initial_page >= config.page_count {
            return Err(FlipbookError::InvalidConfig(format!(
                "initial_page {} is outside 0..{}",
                config.initial_page, config.page_count
            )));
        }

        let policy = SpreadPolicy::new(config.page_count);
        let (position_count, current) = match config.view_mode {
            ViewMode::Single => (config.page_count, config.initial_page),
            ViewMode::Spread => (policy.spread_count(), policy.spread_of(config.initial_page)),
        };

        Ok(Self {
            current,
            position_count,
            page_count: config.page_count,
            view_mode: config.view_mode,
            transition_duration_ms: config.transition_duration_ms,
            fallback_grace_ms: config.fallback_grace_ms,
            pending: None,
            last_direction: None,
            host,
        })
    }

    /// Committed position (page or spread index).
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of navigable positions.
    #[inline]
    pub fn position_count(&self) -> usize {
        self.position_count
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[inline]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[inline]
    pub fn spread_policy(&self) -> SpreadPolicy {
        SpreadPolicy::new(self.page_count)
    }

    #[inline]
    pub fn transition_duration_ms(&self) -> u32 {
        self.transition_duration_ms
    }

    /// Elapsed time after which [`tick`](Self::tick) forces a commit.
    #[inline]
    pub fn fallback_after_ms(&self) -> u32 {
        self.transition_duration_ms.saturating_add(self.fallback_grace_ms)
    }

    /// True exactly while a transition is in flight.
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// The in-flight transition, if any.
    pub fn pending_transition(&self) -> Option<Transition> {
        self.pending.map(|p| p.transition)
    }

    /// Direction of the most recently committed transition.
    #[inline]
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    #[inline]
    pub fn can_advance(&self) -> bool {
        self.current + 1 < self.position_count
    }

    #[inline]
    pub fn can_retreat(&self) -> bool {
        self.current > 0
    }

    /// Ask to move to `target`.
    ///
    /// The direction is inferred from the target unless given. Returns
    /// `false` without touching any state when the navigator is busy, the
    /// target is out of range, or it is already the current position.
    pub fn request_navigate(&mut self, target: usize, direction: Option<Direction>) -> bool {
        if let Err(reason) = self.check_request(target) {
            tracing::debug!(requested = target, current = self.current, ?reason, "navigation request dropped");
            return false;
        }

        let direction = direction.unwrap_or(if target > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        });
        let transition = Transition {
            from: self.current,
            to: target,
            direction,
        };
        self.pending = Some(PendingTransition {
            transition,
            elapsed_ms: 0,
        });

        tracing::debug!(from = transition.from, to = transition.to, ?direction, "transition started");
        self.host.on_transition_start(&transition);
        true
    }

    fn check_request(&self, target: usize) -> std::result::Result<(), Rejection> {
        if self.pending.is_some() {
            Err(Rejection::Busy)
        } else if target >= self.position_count {
            Err(Rejection::OutOfRange)
        } else if target == self.current {
            Err(Rejection::AlreadyThere)
        } else {
            Ok(())
        }
    }

    /// Move one position forward.
    pub fn advance(&mut self) -> bool {
        match self.current.checked_add(1) {
            Some(target) => self.request_navigate(target, Some(Direction::Forward)),
            None => false,
        }
    }

    /// Move one position backward.
    pub fn retreat(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(target) => self.request_navigate(target, Some(Direction::Backward)),
            None => {
                tracing::debug!("retreat at first position dropped");
                false
            }
        }
    }

    /// Jump to an arbitrary position.
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.request_navigate(index, None)
    }

    /// Jump to the position showing `page`, e.g. from a thumbnail click.
    pub fn jump_to_page(&mut self, page: usize) -> bool {
        if page >= self.page_count {
            tracing::debug!(page, "jump to unknown page dropped");
            return false;
        }
        let target = match self.view_mode {
            ViewMode::Single => page,
            ViewMode::Spread => self.spread_policy().spread_of(page),
        };
        self.jump_to(target)
    }

    /// Commit the in-flight transition.
    ///
    /// Returns `false` when nothing is pending, so a late or duplicate
    /// completion signal never moves the index twice.
    pub fn complete_transition(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let transition = pending.transition;
        self.current = transition.to;
        self.last_direction = Some(transition.direction);

        tracing::debug!(index = self.current, "transition committed");
        self.host.on_transition_complete(self.current);
        true
    }

    /// Feed elapsed time to the fallback timer.
    ///
    /// Call this from the host's frame or timer loop. If the host never
    /// signals completion, the pending transition commits once
    /// [`fallback_after_ms`](Self::fallback_after_ms) have elapsed.
    /// Returns true if this call committed a transition.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let deadline = self.fallback_after_ms();
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        pending.elapsed_ms = pending.elapsed_ms.saturating_add(elapsed_ms);
        if pending.elapsed_ms < deadline {
            return false;
        }
        tracing::warn!(
            to = pending.transition.to,
            elapsed_ms = pending.elapsed_ms,
            "no completion signal from host, committing on fallback timer"
        );
        self.complete_transition()
    }

    /// Pages shown at the current position.
    pub fn visible_pages(&self) -> (usize, Option<usize>) {
        match self.view_mode {
            ViewMode::Single => (self.current, None),
            ViewMode::Spread => self
                .spread_policy()
                .pages(self.current)
                .unwrap_or((self.current * 2, None)),
        }
    }

    /// Whether `page` is on screen, for thumbnail highlighting.
    pub fn is_page_visible(&self, page: usize) -> bool {
        let (first, second) = self.visible_pages();
        page == first || second == Some(page)
    }

    /// Human-readable position, e.g. "Page 3 of 10" or "Pages 3-4 of 10".
    pub fn counter_label(&self) -> String {
        match self.visible_pages() {
            (first, Some(second)) => {
                format!("Pages {}-{} of {}", first + 1, second + 1, self.page_count)
            }
            (first, None) => format!("Page {} of {}", first + 1, self.page_count),
        }
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
