//! Platform abstraction layer
//!
//! Boundaries the host provides to the game:
//! - Input (held keys and fire presses)
//! - Time (wall clock for cooldowns and delays)
//! - Score display

pub mod input;
pub mod score;
pub mod time;

pub use input::{Action, Input, Keyboard, poll};
pub use score::{LogScoreSink, ScoreSink};
pub use time::{Clock, ManualClock, SystemClock};
