use persona_core::time::ElapsedTime;

/// Final time on the results page, e.g. `3 min 05 sec`.
#[must_use]
pub fn format_elapsed(elapsed: ElapsedTime) -> String {
    elapsed.to_string()
}

/// Live timer shown while answering.
#[must_use]
pub fn format_timer(elapsed: Option<ElapsedTime>) -> String {
    let elapsed = elapsed.unwrap_or_default();
    format!("Time: {}:{:02}", elapsed.minutes, elapsed.seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_pads_seconds() {
        assert_eq!(format_timer(Some(ElapsedTime::from_secs(65))), "Time: 1:05");
        assert_eq!(format_timer(None), "Time: 0:00");
    }

    #[test]
    fn elapsed_uses_minutes_and_seconds() {
        assert_eq!(format_elapsed(ElapsedTime::from_secs(200)), "3 min 20 sec");
    }
}
