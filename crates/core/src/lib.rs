#![forbid(unsafe_code)]

pub mod hold;
pub mod model;
pub mod rest_timer;
pub mod time;

pub use hold::{HoldGesture, HoldProgress, HoldSample};
pub use rest_timer::{RestTick, RestTimer, format_countdown};
pub use time::{Clock, SharedClock};
