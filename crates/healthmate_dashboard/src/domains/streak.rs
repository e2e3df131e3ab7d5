//! Consecutive-day logging streak.

use std::collections::HashSet;

use chrono::NaiveDate;
use healthmate_client::VitalsLogEntry;

use crate::transforms::parse_day;

/// Count consecutive days with a vitals log, walking backward from `today`.
///
/// Existence of a log is all that counts; its contents do not matter. If
/// today itself has no log the streak is 0. Entries whose date cannot be
/// parsed never contribute.
pub fn current_streak(vitals: &[VitalsLogEntry], today: NaiveDate) -> u32 {
    let logged: HashSet<NaiveDate> = vitals.iter().filter_map(|v| parse_day(&v.date)).collect();

    let mut streak = 0u32;
    let mut day = today;
    while logged.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}
