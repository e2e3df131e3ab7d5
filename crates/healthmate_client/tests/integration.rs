use healthmate_client::http_client::ReqwestHealthmateClient;
use healthmate_client::{
    DailyStatsRequest, ExerciseType, HealthmateClient, HealthmateError, MealEntry, MealType,
    WorkoutEntry,
};
use secrecy::SecretString;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestHealthmateClient {
    ReqwestHealthmateClient::new(&server.uri(), SecretString::new("tok".into()))
}

#[tokio::test]
async fn get_profile_sends_bearer_auth_and_parses() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "id": 7,
        "username": "alice",
        "email": "alice@example.com",
        "age": 30,
        "height": 170.0,
        "weight": "65.5",
        "activityLevel": "medium",
        "healthGoal": "loss"
    });
    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let profile = client.get_profile().await.expect("profile");
    assert_eq!(profile.username.as_deref(), Some("alice"));
    assert_eq!(profile.weight, Some(65.5));

    // Verify the Authorization header was sent and is a bearer token
    let received = server.received_requests().await.unwrap();
    assert!(!received.is_empty());
    let auth = received[0].headers.get("authorization").cloned().unwrap();
    let ok = auth
        .to_str()
        .map(|s| s.starts_with("Bearer "))
        .unwrap_or(false);
    assert!(ok);
}

#[tokio::test]
async fn get_vitals_history_parses_list() {
    let server = MockServer::start().await;
    let body = serde_json::json!([
        {"id": 1, "date": "2026-02-01", "waterIntake": 2.0, "sleepDuration": 7.5},
        {"id": 2, "date": "2026-02-02T08:15:00", "caloriesBurned": 450}
    ]);
    Mock::given(method("GET"))
        .and(path("/api/analytics/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let history = client.get_vitals_history().await.expect("history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].water_intake, Some(2.0));
    assert_eq!(history[1].date, "2026-02-02T08:15:00");
}

#[tokio::test]
async fn get_health_plan_missing_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/plan"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let plan = client.get_health_plan().await.expect("plan lookup");
    assert!(plan.is_none());
}

#[tokio::test]
async fn get_health_plan_parses_legacy_payload() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "calculatedBmi": 27.3,
        "bmiCategory": "Overweight",
        "dailyCalories": 1800,
        "dailyWaterIntake": "2.5 Liters",
        "sleepRecommendation": "7-8 Hours",
        "dietPlan": ["Breakfast: Oatmeal with Berries"],
        "exercisePlan": ["Daily 30 min brisk walk"],
        "goal": "loss"
    });
    Mock::given(method("GET"))
        .and(path("/api/user/plan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let plan = client
        .get_health_plan()
        .await
        .expect("plan")
        .expect("plan exists");
    assert_eq!(plan.daily_calories, Some(1800.0));
    assert_eq!(plan.sleep_recommendation.as_deref(), Some("7-8 Hours"));
    assert_eq!(plan.meal_suggestions.len(), 1);
}

#[tokio::test]
async fn get_streak_parses_number() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/streak"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(4)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_streak().await.expect("streak"), 4);
}

#[tokio::test]
async fn log_daily_stats_normalizes_timestamp_to_day() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analytics/log"))
        .and(wiremock::matchers::body_partial_json(serde_json::json!({
            "date": "2026-02-01"
        })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stats = DailyStatsRequest {
        date: "2026-02-01T07:45:00".into(),
        water_intake: Some(2.0),
        ..Default::default()
    };
    client.log_daily_stats(&stats).await.expect("log stats");
}

#[tokio::test]
async fn log_daily_stats_rejects_invalid_date() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let stats = DailyStatsRequest {
        date: "01/02/2026".into(),
        ..Default::default()
    };
    let err = client.log_daily_stats(&stats).await.unwrap_err();
    match err {
        HealthmateError::InvalidInput(msg) => assert!(msg.contains("01/02/2026")),
        e => panic!("expected InvalidInput, got {e:?}"),
    }
    // nothing should have hit the server
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn add_meal_posts_wire_field_names() {
    let server = MockServer::start().await;
    let created = serde_json::json!({
        "id": 11,
        "date": "2026-02-01",
        "mealType": "Lunch",
        "calories": 600,
        "protein": 30,
        "carbs": 70,
        "fats": 20
    });
    Mock::given(method("POST"))
        .and(path("/api/meals"))
        .and(wiremock::matchers::body_partial_json(serde_json::json!({
            "mealType": "Lunch",
            "protein": 30.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&created))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let meal = MealEntry {
        id: None,
        date: "2026-02-01".into(),
        meal_type: MealType::Lunch,
        calories: Some(600.0),
        protein_grams: Some(30.0),
        carbs_grams: Some(70.0),
        fats_grams: Some(20.0),
        notes: None,
    };
    let out = client.add_meal(&meal).await.expect("add meal");
    assert_eq!(out.id.as_deref(), Some("11"));
    assert_eq!(out.protein_grams, Some(30.0));
}

#[tokio::test]
async fn add_workout_and_delete_roundtrip() {
    let server = MockServer::start().await;
    let created = serde_json::json!({
        "id": 3,
        "date": "2026-02-01",
        "exerciseType": "cardio",
        "duration": 45,
        "caloriesBurned": 400
    });
    Mock::given(method("POST"))
        .and(path("/api/workouts/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&created))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/workouts/3"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let workout = WorkoutEntry {
        id: None,
        date: "2026-02-01".into(),
        exercise_type: ExerciseType::Cardio,
        duration_minutes: 45,
        calories_burned: Some(400.0),
        notes: None,
    };
    let out = client.add_workout(&workout).await.expect("add workout");
    assert_eq!(out.duration_minutes, 45);

    client.delete_workout("3").await.expect("delete workout");
}

#[tokio::test]
async fn auth_failure_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_profile().await.unwrap_err();
    match err {
        HealthmateError::Auth(msg) => assert!(msg.contains("token expired")),
        e => panic!("expected Auth error, got {e:?}"),
    }
}

#[tokio::test]
async fn server_error_is_retried_then_succeeds() {
    let server = MockServer::start().await;

    // First attempt fails with a 500, the retry gets a 200.
    Mock::given(method("GET"))
        .and(path("/api/analytics/streak"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/streak"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(2)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_streak().await.expect("streak"), 2);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/streak"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let res = client.get_streak().await;
    assert!(res.is_err());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn base_url_trailing_slash_is_handled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tips/today"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "title": "Hydration Focus",
            "tip": "Drink a glass of water before every meal.",
            "icon": "droplet",
            "color": "#2196F3"
        })))
        .mount(&server)
        .await;

    let base = format!("{}/", server.uri());
    let client = ReqwestHealthmateClient::new(&base, SecretString::new("tok".into()));
    let tip = client.get_today_tip().await.expect("tip");
    assert_eq!(tip.title, "Hydration Focus");
}

#[tokio::test]
async fn get_user_meals_handles_unknown_meal_type() {
    let server = MockServer::start().await;
    let body = serde_json::json!([
        {"id": 1, "date": "2026-02-01", "mealType": "Breakfast", "calories": 350},
        {"id": 2, "date": "2026-02-01", "mealType": "Brunch", "calories": 500}
    ]);
    Mock::given(method("GET"))
        .and(path("/api/meals/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let meals = client.get_user_meals().await.expect("meals");
    assert_eq!(meals.len(), 2);
    assert_eq!(meals[1].meal_type, MealType::Unknown);
}
