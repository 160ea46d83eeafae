use serde::Serialize;
use std::sync::Arc;

use crate::shared::assistant::StudyAssistant;
use crate::shared::config::StudyBuddyConfig;

#[derive(Debug, Clone, Serialize)]
pub struct StudyPlan {
    pub subject: String,
    pub duration: String,
    pub sections: Vec<StudySection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudySection {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Article,
    Exercises,
    Video,
}

/// Three fixed resource entries per subject, derived from the subject string
/// alone. No remote call, no randomness.
pub fn resources_for(subject: &str) -> Vec<Resource> {
    let slug = subject.to_lowercase().replace(' ', "-");
    vec![
        Resource {
            title: format!("Introduction to {}", subject),
            kind: ResourceKind::Article,
            url: format!("https://example.com/{}-intro", slug),
        },
        Resource {
            title: format!("{} Practice Problems", subject),
            kind: ResourceKind::Exercises,
            url: format!("https://example.com/{}-practice", slug),
        },
        Resource {
            title: format!("Advanced {} Concepts", subject),
            kind: ResourceKind::Video,
            url: format!("https://example.com/{}-advanced", slug),
        },
    ]
}

/// Shared state handed to every request handler. Holds no per-request data;
/// everything here is immutable after startup.
pub struct AppState {
    pub config: StudyBuddyConfig,
    pub assistant: StudyAssistant,
}

impl AppState {
    pub fn new(config: StudyBuddyConfig) -> anyhow::Result<Arc<Self>> {
        let assistant = StudyAssistant::new(&config.inference)?;
        Ok(Arc::new(Self { config, assistant }))
    }
}
