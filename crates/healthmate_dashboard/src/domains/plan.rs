//! BMI math and the client-side plan rule engine.
//!
//! Mirrors the backend's plan generation so the dashboard can show sensible
//! guidance while the backend has not generated a plan yet (a plan only
//! exists once the profile is complete).

use healthmate_client::{HealthPlan, UserProfile};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Body mass index from weight in kilograms and height in centimeters.
/// Zero or negative height has no meaningful BMI.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 || !height_cm.is_finite() || !weight_kg.is_finite() {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

pub fn categorize(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Generate a plan from the profile with the backend's rule set.
///
/// Health goal picks the diet track, activity level the exercise track, and
/// an obese BMI replaces the exercise track with a low-impact one. Returns
/// `None` when height or weight is missing, matching the backend's refusal
/// to generate a plan for an incomplete profile.
pub fn build_plan(profile: &UserProfile) -> Option<HealthPlan> {
    let weight = profile.weight?;
    let height = profile.height?;
    let bmi_value = bmi(weight, height)?;
    let category = categorize(bmi_value);

    let goal = profile.health_goal.as_deref().unwrap_or("").to_lowercase();
    let activity = profile
        .activity_level
        .as_deref()
        .unwrap_or("")
        .to_lowercase();

    let diet: Vec<String> = if goal.contains("loss") {
        vec![
            "Breakfast: Oatmeal with Berries".into(),
            "Lunch: Grilled Chicken Salad".into(),
            "Dinner: Steamed Vegetables with Fish".into(),
            "Snack: Green Tea + Almonds".into(),
            "Calorie Deficit: Maintain 500 kcal deficit".into(),
        ]
    } else if goal.contains("muscle") {
        vec![
            "Breakfast: Eggs + Whole Wheat Toast".into(),
            "Lunch: Brown Rice + Lean Beef/Chicken".into(),
            "Dinner: Quinoa + Salmon".into(),
            "Snack: Protein Shake / Greek Yogurt".into(),
            "High Protein Intake: 2g per kg of body weight".into(),
        ]
    } else {
        vec![
            "Balanced Diet: 50% Carbs, 30% Protein, 20% Fats".into(),
            "Focus on Whole Foods".into(),
            "Limit Sugar intake".into(),
        ]
    };

    let exercise: Vec<String> = if category == BmiCategory::Obese {
        vec![
            "Low Impact Cardio (Swimming/Walking) - Start Slow".into(),
            "Consult a doctor before intense training".into(),
        ]
    } else if activity == "low" {
        vec![
            "Daily 30 min brisk walk".into(),
            "Light Yoga / Stretching".into(),
        ]
    } else if activity == "medium" {
        vec![
            "Cardio (Running/Cycling) 3x a week".into(),
            "Bodyweight Strength Training 2x a week".into(),
        ]
    } else {
        vec![
            "HIIT Workouts 3x a week".into(),
            "Heavy Weight Training 4x a week".into(),
        ]
    };

    Some(HealthPlan {
        calculated_bmi: Some(bmi_value),
        bmi_category: Some(category.as_str().to_string()),
        daily_water_intake: Some("2.5 Liters".into()),
        sleep_recommendation: Some("7-8 Hours".into()),
        meal_suggestions: diet,
        recommendations: exercise,
        goal: profile.health_goal.clone(),
        ..HealthPlan::default()
    })
}
