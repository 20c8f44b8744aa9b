//! Countdown Widget
//!
//! The tick loop: once per second, compute the remaining distance and
//! hand the decomposed fields to the display sink. When the distance
//! goes negative the loop stops for good and the sale-ended hook fires.

use std::time::Duration;

use chrono::Utc;

use crate::parts::TimeParts;

/// Tick interval (one second)
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Display sink for the countdown fields.
///
/// `sale_ended` fires once when the countdown passes zero. The default
/// body is deliberately empty: it is an extension point, and no behavior
/// beyond stopping the loop is defined.
pub trait CountdownDisplay {
    /// Render the remaining time
    fn show(&mut self, parts: TimeParts);

    /// Called once when the countdown ends
    fn sale_ended(&mut self) {}
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown still running
    Running,
    /// Target passed; the loop must not tick again
    Ended,
}

/// Countdown widget driving a display sink toward a fixed target
pub struct CountdownWidget<D>
where
    D: CountdownDisplay,
{
    target_ms: i64,
    display: D,
}

impl<D> CountdownWidget<D>
where
    D: CountdownDisplay,
{
    pub fn new(target_ms: i64, display: D) -> Self {
        Self { target_ms, display }
    }

    /// Advance the countdown by one tick at `now_ms`.
    ///
    /// A non-negative distance renders; a negative one fires the
    /// sale-ended hook and reports [`TickOutcome::Ended`].
    pub fn tick(&mut self, now_ms: i64) -> TickOutcome {
        let distance = self.target_ms - now_ms;

        if distance < 0 {
            self.display.sale_ended();
            TickOutcome::Ended
        } else {
            self.display.show(TimeParts::from_millis(distance));
            TickOutcome::Running
        }
    }

    /// Run the one-second tick loop until the target passes.
    ///
    /// Lives for the host's lifetime otherwise; there is no external
    /// cancellation and the widget never restarts.
    pub async fn run(mut self) {
        let mut ticker = tokio::time::interval(TICK_INTERVAL);

        loop {
            ticker.tick().await;

            if self.tick(Utc::now().timestamp_millis()) == TickOutcome::Ended {
                break;
            }
        }

        tracing::info!("Countdown finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::DAY_MS;

    /// Display double recording every callback
    #[derive(Default)]
    struct RecordingDisplay {
        rendered: Vec<TimeParts>,
        ended_count: usize,
    }

    impl CountdownDisplay for RecordingDisplay {
        fn show(&mut self, parts: TimeParts) {
            self.rendered.push(parts);
        }

        fn sale_ended(&mut self) {
            self.ended_count += 1;
        }
    }

    #[test]
    fn test_future_target_renders_fields() {
        let mut widget = CountdownWidget::new(90_061_000, RecordingDisplay::default());

        assert_eq!(widget.tick(0), TickOutcome::Running);

        let parts = widget.display.rendered[0];
        assert_eq!(parts.days, 1);
        assert_eq!(parts.hours, 1);
        assert_eq!(parts.minutes, 1);
        assert_eq!(parts.seconds, 1);
        assert_eq!(widget.display.ended_count, 0);
    }

    #[test]
    fn test_past_target_ends_without_rendering() {
        let mut widget = CountdownWidget::new(0, RecordingDisplay::default());

        assert_eq!(widget.tick(1), TickOutcome::Ended);

        assert!(widget.display.rendered.is_empty());
        assert_eq!(widget.display.ended_count, 1);
    }

    #[test]
    fn test_zero_distance_still_renders() {
        // Matches the reference behavior: only a strictly negative
        // distance ends the countdown
        let mut widget = CountdownWidget::new(1000, RecordingDisplay::default());

        assert_eq!(widget.tick(1000), TickOutcome::Running);
        assert_eq!(widget.display.rendered[0].seconds, 0);
    }

    #[test]
    fn test_countdown_sequence_then_stop() {
        let mut widget = CountdownWidget::new(2 * DAY_MS, RecordingDisplay::default());

        assert_eq!(widget.tick(DAY_MS), TickOutcome::Running);
        assert_eq!(widget.display.rendered.last().unwrap().days, 1);

        assert_eq!(widget.tick(2 * DAY_MS), TickOutcome::Running);
        assert_eq!(widget.display.rendered.last().unwrap().days, 0);

        assert_eq!(widget.tick(2 * DAY_MS + 1), TickOutcome::Ended);
        assert_eq!(widget.display.ended_count, 1);

        // Nothing rendered after the end
        assert_eq!(widget.display.rendered.len(), 2);
    }
}
