//! Goal progress evaluation and target resolution.

use std::sync::OnceLock;

use healthmate_client::{HealthPlan, VitalsLogEntry};
use regex::Regex;

use crate::types::{DailyTargets, FeedbackTier, GoalProgress};

/// Evaluate progress for one metric against its daily target.
///
/// A target that is absent, non-finite or not positive means no goal was
/// set: percent is 0 and the tier is `NoGoal` rather than `Behind`, so the
/// UI can distinguish "no goal" from "goal missed". Otherwise percent is
/// `actual / target * 100`, capped at 100 and rounded.
pub fn evaluate(metric: &str, actual: f64, target: Option<f64>) -> GoalProgress {
    let valid_target = target.filter(|t| t.is_finite() && *t > 0.0);

    let (percent, tier) = match valid_target {
        None => (0, FeedbackTier::NoGoal),
        Some(t) => {
            let percent = (actual / t * 100.0).min(100.0).round().max(0.0) as u32;
            let tier = if percent >= 100 {
                FeedbackTier::Achieved
            } else if percent >= 80 {
                FeedbackTier::Close
            } else {
                FeedbackTier::Behind
            };
            (percent, tier)
        }
    };

    GoalProgress {
        metric: metric.to_string(),
        actual,
        target: valid_target,
        percent,
        tier,
    }
}

static LEADING_NUMBER: OnceLock<Regex> = OnceLock::new();

/// Pull the first numeric token out of a free-text recommendation.
///
/// Plan fields like "2.5 Liters" or "7-8 Hours" are descriptive strings;
/// this is a deliberately lossy best-effort parse ("7-8 Hours" yields 7) so
/// free text never reaches goal arithmetic directly.
pub fn extract_leading_number(text: &str) -> Option<f64> {
    let re = LEADING_NUMBER.get_or_init(|| Regex::new(r"(\d+(\.\d+)?)").expect("static regex"));
    re.find(text)?.as_str().parse().ok()
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Resolve the effective daily targets for a day.
///
/// A positive per-day override on the vitals log wins over the plan value;
/// plan water and sleep arrive as text and go through
/// [`extract_leading_number`]. A metric with neither source stays `None`.
pub fn effective_targets(
    today_log: Option<&VitalsLogEntry>,
    plan: Option<&HealthPlan>,
) -> DailyTargets {
    DailyTargets {
        calories: positive(today_log.and_then(|l| l.daily_calorie_target))
            .or_else(|| positive(plan.and_then(|p| p.daily_calories))),
        water: positive(today_log.and_then(|l| l.daily_water_target)).or_else(|| {
            positive(
                plan.and_then(|p| p.daily_water_intake.as_deref())
                    .and_then(extract_leading_number),
            )
        }),
        sleep: positive(today_log.and_then(|l| l.daily_sleep_target)).or_else(|| {
            positive(
                plan.and_then(|p| p.sleep_recommendation.as_deref())
                    .and_then(extract_leading_number),
            )
        }),
    }
}
