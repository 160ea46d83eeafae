use anyhow::{anyhow, Result};

/// Process-wide configuration, read from the environment once at startup
/// and passed by reference after that.
#[derive(Debug, Clone)]
pub struct StudyBuddyConfig {
    pub host: String,
    pub port: u16,
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Full URL of the text-generation model endpoint.
    pub endpoint: String,
    /// Bearer token for the inference service. Empty means the request is
    /// sent unauthenticated, which the Hugging Face free tier accepts.
    pub api_token: String,
    pub timeout_secs: u64,
    pub plan_max_length: u32,
    pub chat_max_length: u32,
    pub temperature: f32,
}

const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/google/flan-t5-large";

impl StudyBuddyConfig {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("STUDYBUDDY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("STUDYBUDDY_PORT").unwrap_or_else(|_| "5000".to_string());
        let port: u16 = port
            .parse()
            .map_err(|_| anyhow!("Invalid STUDYBUDDY_PORT value '{}'", port))?;

        let endpoint = std::env::var("STUDYBUDDY_INFERENCE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let api_token = std::env::var("HF_API_TOKEN")
            .map(|v| v.trim().to_string())
            .unwrap_or_default();

        let timeout_secs = match std::env::var("STUDYBUDDY_INFERENCE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow!("Invalid STUDYBUDDY_INFERENCE_TIMEOUT_SECS value '{}'", raw))?,
            Err(_) => 10,
        };

        Ok(Self {
            host,
            port,
            inference: InferenceConfig {
                endpoint,
                api_token,
                timeout_secs,
                plan_max_length: 500,
                chat_max_length: 200,
                temperature: 0.7,
            },
        })
    }
}
