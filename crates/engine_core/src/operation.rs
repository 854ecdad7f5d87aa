//! Timed-progress operations.
//!
//! An [`Operation`] tracks a percentage that advances proportionally to wall
//! time at a fixed rate. The game uses one per in-range planet scan and a
//! single long-lived one for the doomsday countdown.

use std::time::Instant;

/// A progress counter advancing with wall time while unpaused.
#[derive(Debug, Clone)]
pub struct Operation {
    completed_percentage: f64,
    last_update: Instant,
    /// Percentage points gained per second while unpaused.
    speed: f64,
    paused: bool,
}

impl Operation {
    /// Create a running operation starting at 0%.
    pub fn new(now: Instant, speed: f64) -> Self {
        Self {
            completed_percentage: 0.0,
            last_update: now,
            speed,
            paused: false,
        }
    }

    /// Create an operation that starts paused and only begins accruing
    /// progress after [`Operation::resume`].
    pub fn new_paused(now: Instant, speed: f64) -> Self {
        Self {
            completed_percentage: 0.0,
            last_update: now,
            speed,
            paused: true,
        }
    }

    /// Advance progress by the wall time elapsed since the last update.
    /// No-op while paused.
    pub fn update(&mut self, now: Instant) {
        if self.paused {
            return;
        }
        let elapsed = now.saturating_duration_since(self.last_update).as_secs_f64();
        self.completed_percentage += elapsed * self.speed;
        self.last_update = now;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Unpause. Resets the update timestamp to `now` so time spent paused is
    /// never credited as progress.
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.last_update = now;
    }

    /// Completed once the percentage reaches 100. The value is not clamped,
    /// so callers must treat ≥100 as the signal rather than ==100.
    pub fn is_completed(&self) -> bool {
        self.completed_percentage >= 100.0
    }

    pub fn completed_percentage(&self) -> f64 {
        self.completed_percentage
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn progress_scales_linearly_with_elapsed_time() {
        let t0 = Instant::now();
        let mut op = Operation::new(t0, 10.0);
        op.update(t0 + Duration::from_secs(3));
        assert_eq!(op.completed_percentage(), 30.0);
        assert!(!op.is_completed());
    }

    #[test]
    fn speed_fifty_completes_after_two_seconds() {
        let t0 = Instant::now();
        let mut op = Operation::new(t0, 50.0);
        op.update(t0 + Duration::from_secs(2));
        assert_eq!(op.completed_percentage(), 100.0);
        assert!(op.is_completed());
    }

    #[test]
    fn percentage_is_monotonic_and_unclamped() {
        let t0 = Instant::now();
        let mut op = Operation::new(t0, 50.0);
        op.update(t0 + Duration::from_secs(1));
        let p1 = op.completed_percentage();
        op.update(t0 + Duration::from_secs(5));
        let p2 = op.completed_percentage();
        assert!(p2 > p1);
        assert!(p2 > 100.0);
        assert!(op.is_completed());
    }

    #[test]
    fn update_while_paused_is_a_no_op() {
        let t0 = Instant::now();
        let mut op = Operation::new_paused(t0, 50.0);
        op.update(t0 + Duration::from_secs(10));
        assert_eq!(op.completed_percentage(), 0.0);
    }

    #[test]
    fn resume_does_not_credit_paused_time() {
        let t0 = Instant::now();
        let mut op = Operation::new(t0, 50.0);
        op.update(t0 + Duration::from_secs(1));
        assert_eq!(op.completed_percentage(), 50.0);

        op.pause();
        let t_resume = t0 + Duration::from_secs(60);
        op.resume(t_resume);
        op.update(t_resume);
        assert_eq!(op.completed_percentage(), 50.0);

        op.update(t_resume + Duration::from_secs(1));
        assert_eq!(op.completed_percentage(), 100.0);
    }
}
