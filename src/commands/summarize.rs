use console::style;
use spinners::{Spinner, Spinners};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::print_outcome;
use crate::api::actions;
use crate::core::{config, storage::AppCtx};

/// Summarize lesson content and print the summary.
pub async fn run(
    ctx: &AppCtx,
    lesson: Option<&str>,
    lesson_file: Option<&Path>,
    context: &str,
    backend_spec: Option<&str>,
) -> Result<(), String> {
    let lesson_content = match (lesson, lesson_file) {
        (Some(text), None) => text.to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|e| format!("Unable to read {}: {}", path.display(), e))?,
        _ => return Err("Provide the lesson with either --lesson or --lesson-file.".to_string()),
    };

    let backend = config::load_backend(ctx, backend_spec)?;

    let mut form = HashMap::new();
    form.insert("lessonContent".to_string(), lesson_content);
    form.insert("context".to_string(), context.to_string());

    let mut sp = Spinner::new(Spinners::Dots9, "Summarizing lesson...".into());
    let result = actions::summarize_lesson(&backend, &form).await;
    sp.stop_with_message("✔ Response received.".into());

    print_outcome(result, |data| {
        println!("{}", style("Summary").green().bold());
        println!("{}", data.summary);
    })
}
