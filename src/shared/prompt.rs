/// Prompt construction for the two generation paths. Pure string formatting,
/// no validation beyond what callers already guarantee.

pub fn study_plan_prompt(subject: &str, duration: &str, topics: &[String]) -> String {
    let topics_clause = if topics.is_empty() {
        String::new()
    } else {
        format!(" with focus on {}", topics.join(", "))
    };
    format!(
        "Create a detailed study plan for {}{} that will take {}. \
         Break it down into sections with specific activities and time allocations.",
        subject, topics_clause, duration
    )
}

pub fn question_prompt(question: &str, context: &str) -> String {
    let context_clause = if context.is_empty() {
        String::new()
    } else {
        format!("\nContext: {}", context)
    };
    format!(
        "You are StudyBuddy, an AI assistant that helps students study effectively.\n\n\
         Question: {}{}\n\nAnswer:",
        question, context_clause
    )
}
