use console::style;
use spinners::{Spinner, Spinners};
use std::collections::HashMap;

use super::print_outcome;
use crate::api::actions;
use crate::core::{config, storage::AppCtx};

/// Ask the AI tutor a question and print the answer.
pub async fn run(
    ctx: &AppCtx,
    question: &str,
    topic_context: Option<&str>,
    profile: Option<&str>,
    backend_spec: Option<&str>,
) -> Result<(), String> {
    let backend = config::load_backend(ctx, backend_spec)?;

    let mut form = HashMap::new();
    form.insert("question".to_string(), question.to_string());
    if let Some(topic_context) = topic_context {
        form.insert("topicContext".to_string(), topic_context.to_string());
    }
    if let Some(profile) = profile {
        form.insert("studentProfile".to_string(), profile.to_string());
    }

    let mut sp = Spinner::new(Spinners::Dots9, "Waiting for the tutor...".into());
    let result = actions::answer_question(&backend, &form).await;
    sp.stop_with_message("✔ Response received.".into());

    print_outcome(result, |data| {
        println!("{}", style("Answer").green().bold());
        println!("{}", data.answer);
    })
}
