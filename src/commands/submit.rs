use console::style;
use std::collections::HashMap;

use super::print_outcome;
use crate::api::actions;
use crate::core::storage::AppCtx;

/// Submit a question for a teacher. Never contacts the generation backend.
pub fn run(
    ctx: &AppCtx,
    question: &str,
    topic_context: Option<&str>,
    profile: Option<&str>,
) -> Result<(), String> {
    let store = ctx.question_store();

    let mut form = HashMap::new();
    form.insert("question".to_string(), question.to_string());
    if let Some(topic_context) = topic_context {
        form.insert("topicContext".to_string(), topic_context.to_string());
    }
    if let Some(profile) = profile {
        form.insert("studentProfile".to_string(), profile.to_string());
    }

    let result = actions::submit_question(&store, &form);

    print_outcome(result, |data| {
        println!("{} {}", style("✔").green(), data.message);
        println!(
            "{} {}",
            style("Submitted:").dim(),
            data.submitted_question.question
        );
    })
}
