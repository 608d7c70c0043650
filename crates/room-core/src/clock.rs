//! Wall-clock formatting shared by messages and notices

use chrono::Local;

/// Display format for message and notice timestamps
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Current local time rendered as `HH:MM:SS`
#[must_use]
pub fn wall_clock() -> String {
    Local::now().format(CLOCK_FORMAT).to_string()
}
