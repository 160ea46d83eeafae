use tracing::{info, warn};

use crate::shared::config::InferenceConfig;
use crate::shared::inference::{GenerationParams, InferenceClient};
use crate::shared::models::{StudyPlan, StudySection};
use crate::shared::prompt;

/// The generation front door for both endpoints. Owns the inference client
/// and resolves every upstream failure into deterministic fallback content,
/// so callers always get a usable result.
pub struct StudyAssistant {
    client: InferenceClient,
    plan_params: GenerationParams,
    chat_params: GenerationParams,
}

impl StudyAssistant {
    pub fn new(config: &InferenceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: InferenceClient::new(config)?,
            plan_params: GenerationParams {
                max_length: config.plan_max_length,
                temperature: config.temperature,
            },
            chat_params: GenerationParams {
                max_length: config.chat_max_length,
                temperature: config.temperature,
            },
        })
    }

    /// Generate a study plan. The returned plan always has at least one
    /// section: if the model is unreachable or its output yields no sections,
    /// the canned three-section plan takes its place.
    pub async fn generate_study_plan(
        &self,
        subject: &str,
        duration: &str,
        topics: &[String],
    ) -> StudyPlan {
        let prompt = prompt::study_plan_prompt(subject, duration, topics);

        let mut sections = match self.client.generate(&prompt, self.plan_params).await {
            Ok(text) => parse_sections(&text),
            Err(e) => {
                warn!("Study plan generation failed, using fallback plan: {}", e);
                Vec::new()
            }
        };

        if sections.is_empty() {
            sections = fallback_sections(subject);
        } else {
            info!(count = sections.len(), "Parsed sections from generated plan");
        }

        StudyPlan {
            subject: subject.to_string(),
            duration: duration.to_string(),
            sections,
        }
    }

    /// Answer a study question. Generated text is returned verbatim; on any
    /// upstream failure (or empty output) the keyword fallback answers
    /// instead, so the response string is never empty.
    pub async fn answer_question(&self, question: &str, context: &str) -> String {
        let prompt = prompt::question_prompt(question, context);

        match self.client.generate(&prompt, self.chat_params).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!("Model returned empty answer, using fallback response");
                fallback_answer(question).to_string()
            }
            Err(e) => {
                warn!("Chat generation failed, using fallback response: {}", e);
                fallback_answer(question).to_string()
            }
        }
    }
}

/// Best-effort line classifier for model output, not a grammar. A line ending
/// in ':' opens a section; within a section the first line mentioning
/// "minute" or "hour" becomes its duration and everything else lands in
/// activities. Lines before the first section marker are dropped.
pub fn parse_sections(text: &str) -> Vec<StudySection> {
    let mut sections = Vec::new();
    let mut current: Option<StudySection> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.ends_with(':') {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            current = Some(StudySection {
                topic: line.trim_end_matches(':').to_string(),
                duration: None,
                activities: Vec::new(),
            });
        } else if let Some(section) = current.as_mut() {
            let lower = line.to_lowercase();
            if section.duration.is_none()
                && (lower.contains("minute") || lower.contains("hour"))
            {
                section.duration = Some(line.to_string());
            } else {
                section.activities.push(line.to_string());
            }
        }
    }

    if let Some(section) = current {
        sections.push(section);
    }

    sections
}

/// The canned three-section plan used whenever generation or parsing yields
/// nothing usable.
pub fn fallback_sections(subject: &str) -> Vec<StudySection> {
    vec![
        StudySection {
            topic: format!("Introduction to {}", subject),
            duration: Some("25% of total time".to_string()),
            activities: vec![
                "Review key concepts".to_string(),
                "Read introductory material".to_string(),
            ],
        },
        StudySection {
            topic: format!("Practice {} problems", subject),
            duration: Some("50% of total time".to_string()),
            activities: vec![
                "Solve example problems".to_string(),
                "Apply concepts learned".to_string(),
            ],
        },
        StudySection {
            topic: "Review and synthesis".to_string(),
            duration: Some("25% of total time".to_string()),
            activities: vec![
                "Summarize what you learned".to_string(),
                "Create connections with previous knowledge".to_string(),
            ],
        },
    ]
}

/// Keyword-matched canned answers for when the model is unavailable.
/// Checked in a fixed order; the first match wins.
pub fn fallback_answer(question: &str) -> &'static str {
    let q = question.to_lowercase();
    if q.contains("study") {
        "i'm happy to help you study. what subject?"
    } else if q.contains("schedule") {
        "lets make a schedule. how many hours a week u tryna study?"
    } else if q.contains("tired") || q.contains("break") {
        "Taking breaks is important! Consider using the Pomodoro technique: \
         25 minutes of focused study followed by a 5-minute break."
    } else if q.contains("motivation") {
        "remember to take breaks. try 25 min of studying with 5 min breaks in between."
    } else {
        "i'm studybudy. you can ask me about things like creating study plans, \
         finding resources, or managing your study time."
    }
}
