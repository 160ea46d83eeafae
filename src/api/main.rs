use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let log_dir =
        std::env::var("STUDYBUDDY_LOG_DIR").unwrap_or_else(|_| "logs".to_string());
    let _ = studybuddy::shared::logging::init_service_logging(&log_dir, "studybuddy_api");

    studybuddy::api::rest::run_rest_server().await
}
