use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    /// Runs the action and returns its result together with the elapsed
    /// wall time in milliseconds.
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let start = Instant::now();
        let result = action();
        (result, start.elapsed().as_millis())
    }
}

pub struct FormattingUtils;

impl FormattingUtils {
    /// Formats a minute count the way agenda rows display it: "1h 30min",
    /// "45min".
    pub fn format_duration(minutes: u32) -> String {
        let hours = minutes / 60;
        let remainder = minutes % 60;

        if hours > 0 {
            format!("{}h {}min", hours, remainder)
        } else {
            format!("{}min", remainder)
        }
    }
}
