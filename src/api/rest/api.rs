use anyhow::Result;
use std::fs;
use std::process;
use tracing::{info, warn};

use crate::api::rest::create_router;
use crate::shared::config::StudyBuddyConfig;
use crate::shared::models::AppState;

pub async fn run_rest_server() -> Result<()> {
    // Write PID file for process management
    let pid = process::id();
    let pid_file = "/tmp/studybuddy.pid";

    if let Err(e) = fs::write(pid_file, pid.to_string()) {
        warn!("Could not write PID file: {}", e);
    }

    let pid_file_cleanup = pid_file.to_string();
    ctrlc::set_handler(move || {
        info!("Shutting down StudyBuddy API...");
        let _ = fs::remove_file(&pid_file_cleanup);
        std::process::exit(0);
    })?;

    info!("Starting StudyBuddy REST API service (PID: {})", pid);

    let config = StudyBuddyConfig::from_env()?;
    if config.inference.api_token.is_empty() {
        warn!("HF_API_TOKEN not set - inference requests will be unauthenticated");
    }
    info!(
        endpoint = %config.inference.endpoint,
        timeout_secs = config.inference.timeout_secs,
        "Using inference endpoint"
    );

    let app_state = AppState::new(config.clone())?;
    let app = create_router(app_state);

    let bind_addr = format!("{}:{}", config.host, config.port);
    info!("Binding to: {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("REST API Endpoint: http://{}/api", bind_addr);
    info!("Ready to accept requests...");

    let serve_result = axum::serve(listener, app).await;

    let _ = fs::remove_file(pid_file);

    serve_result?;
    Ok(())
}
