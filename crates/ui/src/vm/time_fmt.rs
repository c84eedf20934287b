use chrono::Duration;

#[must_use]
pub fn format_remaining(units: u32) -> String {
    format!("Time Left: {units} seconds")
}

/// Render a session length as "Finished in 1m 05s" or "Finished in 42s".
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    if minutes > 0 {
        format!("Finished in {minutes}m {remainder:02}s")
    } else {
        format!("Finished in {remainder}s")
    }
}
