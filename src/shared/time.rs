//! Wall-clock helpers
//!
//! Every persisted timestamp is Unix seconds.

use chrono::Utc;

/// Current wall-clock time in whole seconds since the Unix epoch.
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_now_is_seconds_resolution() {
        let now = unix_now();
        // 2020-01-01 .. 2100-01-01
        assert!(now > 1_577_836_800);
        assert!(now < 4_102_444_800);
    }
}
