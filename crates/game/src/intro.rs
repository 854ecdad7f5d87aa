//! Introductory text sequence shown when a session starts.
//!
//! Pages trickle in character by character. While the sequence is active the
//! world tick is gated and the doomsday countdown stays paused; dismissing
//! the last page hands control to the player and starts the clock.

use std::time::{Duration, Instant};

/// Delay between two revealed characters.
const TRICKLE_INTERVAL: Duration = Duration::from_millis(40);

pub const INTRO_PAGES: [&str; 4] = [
    "The end is nigh! The inaction of Earth leaders, unable or unwilling to \
     see past their greed, has led to the overexploitation and pollution of \
     the planet for the benefits of the ultra rich.",
    "Things have gone so far that it is now clear for everyone who is not in \
     denial that humanity is on the brink of extinction, as the doomsday \
     clock is unstoppably getting closer and closer to midnight.",
    "In a desperate move, a group of scientists has launched an autonomous \
     probe on a quest to find a planet that could be habitable enough to \
     become a new home for humans.",
    "Given the colossal size of that task, the probe is designed to replicate \
     and upgrade itself during its odyssey. Will it succeed in scanning \
     enough worlds to find the perfect planet before it is too late?",
];

/// Trickling multi-page text with confirm-to-advance.
#[derive(Debug)]
pub struct IntroSequence {
    pages: Vec<&'static str>,
    page: usize,
    page_started: Instant,
    /// Set when the player skipped the trickle on the current page.
    revealed_early: bool,
}

impl IntroSequence {
    pub fn new(now: Instant) -> Self {
        Self {
            pages: INTRO_PAGES.to_vec(),
            page: 0,
            page_started: now,
            revealed_early: false,
        }
    }

    fn current_page(&self) -> &'static str {
        self.pages[self.page]
    }

    /// Number of characters of the current page revealed at `now`.
    fn revealed_chars(&self, now: Instant) -> usize {
        let total = self.current_page().chars().count();
        if self.revealed_early {
            return total;
        }
        let elapsed = now.saturating_duration_since(self.page_started);
        let by_time = (elapsed.as_millis() / TRICKLE_INTERVAL.as_millis()) as usize;
        by_time.min(total)
    }

    /// Whether the current page is fully shown.
    pub fn page_fully_shown(&self, now: Instant) -> bool {
        self.revealed_chars(now) == self.current_page().chars().count()
    }

    /// Text to display this frame.
    pub fn visible_text(&self, now: Instant) -> String {
        self.current_page()
            .chars()
            .take(self.revealed_chars(now))
            .collect()
    }

    /// Handle a confirm press. A press on a partially-shown page reveals it;
    /// a press on a fully-shown page turns it. Returns true once the last
    /// page has been dismissed.
    pub fn confirm(&mut self, now: Instant) -> bool {
        if !self.page_fully_shown(now) {
            self.revealed_early = true;
            return false;
        }
        if self.page + 1 < self.pages.len() {
            self.page += 1;
            self.page_started = now;
            self.revealed_early = false;
            false
        } else {
            true
        }
    }
}
