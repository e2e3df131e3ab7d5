use std::sync::Arc;

use healthmate_client::config::Config;
use healthmate_client::http_client::ReqwestHealthmateClient;
use healthmate_dashboard::DashboardService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure logging from `HEALTHMATE_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("HEALTHMATE_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!("healthmate_dashboard: log filter: {}", log_env);

    let config = Config::from_env()?;
    let client = ReqwestHealthmateClient::new(&config.base_url, config.api_token);
    let service = DashboardService::new(Arc::new(client));

    let today = chrono::Local::now().date_naive();

    let summary = service.today_summary(today).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    let report = service.goal_report(today).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    let metrics = vec!["waterIntake".to_string(), "sleepDuration".to_string()];
    let chart = service.metric_series(&metrics, None, today).await?;
    println!("{}", serde_json::to_string_pretty(&chart)?);

    Ok(())
}
