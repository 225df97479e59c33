//! Click vs. drag recognition for pointer gestures
//!
//! A gesture runs from `start()` to `stop()`. It stays a click until the
//! pointer travels strictly further than the threshold from its origin; from
//! then on it is a drag until the gesture ends, even if the pointer comes back.
//!
//! ```text
//!            move_to: |delta| > threshold
//!   Idle ─────────────────────────────────────▶ Dragging
//!    ▲         (fires on_start_move once)          │
//!    └─────────────────────────────────────────────┘
//!        stop() or start()  (fires on_stop_move)
//! ```

use crate::geometry::{Point, Vector};
use crate::observer::ObserverList;

/// Pointer travel (in board units) that turns a click into a drag
pub const DEFAULT_DRAG_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
}

/// Tracks one pointer gesture at a time.
pub struct GestureTracker {
    origin: Point,
    current: Point,
    phase: GesturePhase,
    threshold: f64,
    on_start_move: ObserverList<Vector>,
    on_stop_move: ObserverList<Vector>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GestureTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureTracker")
            .field("origin", &self.origin)
            .field("current", &self.current)
            .field("phase", &self.phase)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            origin: Point::ORIGIN,
            current: Point::ORIGIN,
            phase: GesturePhase::Idle,
            threshold: DEFAULT_DRAG_THRESHOLD,
            on_start_move: ObserverList::new(),
            on_stop_move: ObserverList::new(),
        }
    }

    /// Tracker with a custom drag threshold.
    ///
    /// Negative or non-finite thresholds fall back to the default.
    pub fn with_threshold(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() && threshold >= 0.0 {
            threshold
        } else {
            tracing::warn!(
                target: "gesture",
                threshold,
                "invalid drag threshold, using default {}",
                DEFAULT_DRAG_THRESHOLD
            );
            DEFAULT_DRAG_THRESHOLD
        };

        Self {
            threshold,
            ..Self::new()
        }
    }

    /// Begin a new gesture at `point`.
    ///
    /// A drag still in progress is ended first, so no drag spans two gestures.
    pub fn start(&mut self, point: Point) {
        self.stop_moving();

        self.origin = point;
        self.current = point;
        tracing::trace!(target: "gesture", x = point.x, y = point.y, "start");
    }

    /// Pointer moved to `point`
    pub fn move_to(&mut self, point: Point) {
        self.current = point;

        if self.phase == GesturePhase::Idle && self.delta().length() > self.threshold {
            self.phase = GesturePhase::Dragging;
            let delta = self.delta();
            tracing::debug!(target: "gesture", dx = delta.x, dy = delta.y, "drag recognized");
            self.on_start_move.notify(&delta);
        }
    }

    /// End the gesture at `point`
    pub fn stop(&mut self, point: Point) {
        self.current = point;
        self.stop_moving();
    }

    fn stop_moving(&mut self) {
        if self.phase != GesturePhase::Dragging {
            return;
        }

        self.phase = GesturePhase::Idle;
        let delta = self.delta();
        tracing::debug!(target: "gesture", dx = delta.x, dy = delta.y, "drag ended");
        self.on_stop_move.notify(&delta);
    }

    /// True iff a drag has been recognized in the current gesture
    pub fn is_moving(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn current(&self) -> Point {
        self.current
    }

    /// `current - origin`
    pub fn delta(&self) -> Vector {
        self.current - self.origin
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Callbacks fired when a drag is recognized, with the delta at that moment
    pub fn on_start_move(&mut self) -> &mut ObserverList<Vector> {
        &mut self.on_start_move
    }

    /// Callbacks fired when a drag ends, with the final delta
    pub fn on_stop_move(&mut self) -> &mut ObserverList<Vector> {
        &mut self.on_stop_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_is_idle_at_origin() {
        let tracker = GestureTracker::new();
        assert!(!tracker.is_moving());
        assert_eq!(tracker.delta(), Vector::ZERO);
        assert_eq!(tracker.threshold(), DEFAULT_DRAG_THRESHOLD);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut tracker = GestureTracker::with_threshold(5.0);
        tracker.start(Point::new(0.0, 0.0));

        tracker.move_to(Point::new(3.0, 4.0));
        assert!(!tracker.is_moving(), "distance equal to threshold is a click");

        tracker.move_to(Point::new(3.0, 4.1));
        assert!(tracker.is_moving());
    }

    #[test]
    fn test_invalid_threshold_falls_back_to_default() {
        assert_eq!(
            GestureTracker::with_threshold(-1.0).threshold(),
            DEFAULT_DRAG_THRESHOLD
        );
        assert_eq!(
            GestureTracker::with_threshold(f64::NAN).threshold(),
            DEFAULT_DRAG_THRESHOLD
        );
        assert_eq!(GestureTracker::with_threshold(0.0).threshold(), 0.0);
    }

    #[test]
    fn test_start_resets_delta() {
        let mut tracker = GestureTracker::new();
        tracker.start(Point::new(1.0, 1.0));
        tracker.move_to(Point::new(4.0, 5.0));
        assert_eq!(tracker.delta(), Vector::new(3.0, 4.0));

        tracker.start(Point::new(50.0, 50.0));
        assert_eq!(tracker.origin(), Point::new(50.0, 50.0));
        assert_eq!(tracker.current(), Point::new(50.0, 50.0));
        assert_eq!(tracker.delta(), Vector::ZERO);
    }
}
