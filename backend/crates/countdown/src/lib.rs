//! Presale Countdown Engine
//!
//! Host-agnostic core of the countdown widget:
//! - `schedule` - fetches the presale end time, falling back to a fixed
//!   date when the endpoint is unreachable or returns garbage
//! - `parts` - decomposes a millisecond distance into days/hours/minutes/
//!   seconds
//! - `widget` - the one-second tick loop feeding a display sink until the
//!   target passes
//!
//! The engine never restarts: once the countdown reaches zero the loop
//! exits for the lifetime of the host.

pub mod parts;
pub mod schedule;
pub mod widget;

// Re-exports for convenience
pub use parts::TimeParts;
pub use schedule::{FALLBACK_END_TIME_MS, fetch_end_time};
pub use widget::{CountdownDisplay, CountdownWidget, TickOutcome};
