//! Static weekday tip table, used when the backend tip endpoint is missing.

use chrono::{Datelike, NaiveDate, Weekday};
use healthmate_client::DailyTip;

/// Tip of the day for a given date. Total: every weekday has an entry.
pub fn tip_for(date: NaiveDate) -> DailyTip {
    let (title, tip, icon, color) = match date.weekday() {
        Weekday::Mon => (
            "Weight Training",
            "Focus on heavy compound movements today (Squats, Deadlifts). Remember to get at least 8 hours of sleep tonight for optimal muscle recovery and growth.",
            "🏋️‍♂️",
            "#8b5cf6",
        ),
        Weekday::Tue => (
            "Cardio Blast",
            "Prioritize complex carbohydrates like oats or brown rice today. Your body needs to replenish glycogen stores after intense cardio sessions.",
            "🏃‍♂️",
            "#10b981",
        ),
        Weekday::Wed => (
            "Yoga & Mindfulness",
            "Focus on 'clean eating' today. Avoid processed sugars to reduce inflammation and improve your mental clarity for meditation.",
            "🧘‍♂️",
            "#0ea5e9",
        ),
        Weekday::Thu => (
            "Active Recovery",
            "Low-intensity movement is key today. Try some light stretching or mobility work to keep blood flowing without overtaxing your nervous system.",
            "🔄",
            "#f59e0b",
        ),
        Weekday::Fri => (
            "HIIT / Strength",
            "Ensure high protein intake across all meals today (2g per kg of body weight) to support tissue repair following a week of training.",
            "⚡",
            "#ec4899",
        ),
        Weekday::Sat => (
            "Nature & Movement",
            "Take your workout outdoors! Sunlight exposure helps regulate your circadian rhythm and boosts Vitamin D for bone health.",
            "🌳",
            "#22c55e",
        ),
        Weekday::Sun => (
            "Reset & Plan",
            "Preparation is 80% of the battle. Use today to meal prep for the upcoming week and set your fitness intentions for tomorrow.",
            "📋",
            "#6366f1",
        ),
    };

    DailyTip {
        title: title.to_string(),
        tip: tip.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monday_is_weight_training() {
        // 2026-02-02 is a Monday
        let tip = tip_for(NaiveDate::from_ymd_opt(2026, 2, 2).unwrap());
        assert_eq!(tip.title, "Weight Training");
        assert_eq!(tip.color, "#8b5cf6");
    }

    #[test]
    fn every_weekday_has_a_distinct_tip() {
        let titles: std::collections::HashSet<String> = (2..=8)
            .map(|d| tip_for(NaiveDate::from_ymd_opt(2026, 2, d).unwrap()).title)
            .collect();
        assert_eq!(titles.len(), 7);
    }
}
