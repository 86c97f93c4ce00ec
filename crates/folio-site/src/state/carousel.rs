//! Picture carousel state machine for the project modal.
//!
//! The carousel is either closed or open on a list of `len` pictures. Every
//! `open` starts a new [`Session`]; automatic advances carry the session they
//! were scheduled for, so a tick that was already in flight when the modal
//! closed (or switched project) is discarded instead of mutating the new view.

use serde::Deserialize;

/// Identifies one open period of the carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Session(u64);

/// How manual navigation interacts with the auto-advance timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavTimerPolicy {
    /// The timer keeps its own rhythm regardless of manual navigation.
    #[default]
    Independent,
    /// Manual navigation restarts the timer for a full period.
    RestartOnNavigate,
}

impl NavTimerPolicy {
    /// Returns true if a manual step should restart the timer.
    pub fn restarts_timer(&self) -> bool {
        matches!(self, NavTimerPolicy::RestartOnNavigate)
    }

    /// Returns the config/CLI spelling of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            NavTimerPolicy::Independent => "independent",
            NavTimerPolicy::RestartOnNavigate => "restart-on-navigate",
        }
    }
}

/// Carousel position over an ordered picture list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    open: bool,
    session: Session,
}

impl Carousel {
    /// Creates a closed carousel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the carousel on `len` pictures, resetting to the first one.
    pub fn open(&mut self, len: usize) -> Session {
        self.session = Session(self.session.0.wrapping_add(1));
        self.open = true;
        self.len = len;
        self.index = 0;
        self.session
    }

    /// Closes the carousel. Ticks from the ended session become stale.
    pub fn close(&mut self) {
        if self.open {
            self.session = Session(self.session.0.wrapping_add(1));
        }
        self.open = false;
        self.index = 0;
    }

    /// Steps forward one picture, wrapping to the first.
    pub fn next(&mut self) {
        if self.is_active() {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Steps back one picture, wrapping to the last.
    pub fn previous(&mut self) {
        if self.is_active() {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Applies a timer-driven advance scheduled for `session`.
    ///
    /// Returns false (and changes nothing) if the session has ended or there
    /// is nothing to cycle through.
    pub fn tick(&mut self, session: Session) -> bool {
        if session != self.session || !self.is_active() {
            return false;
        }
        self.next();
        true
    }

    /// Index of the picture on display, `None` when closed or empty.
    pub fn current(&self) -> Option<usize> {
        self.is_active().then_some(self.index)
    }

    /// Whether the auto-advance timer should run.
    pub fn autoplays(&self) -> bool {
        self.is_active()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn session(&self) -> Session {
        self.session
    }

    fn is_active(&self) -> bool {
        self.open && self.len > 0
    }
}
