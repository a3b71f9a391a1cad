pub mod apps;
pub mod countdown;
pub mod enums;
pub mod tasks;

pub use apps::{matches_process, SuppressedAppSet, DEFAULT_SUPPRESSED_APPS};
pub use countdown::{Countdown, Hms};
pub use enums::{CountdownStatus, SessionPhase, SetupField, UiMode};
pub use tasks::TaskList;
