use console::style;
use spinners::{Spinner, Spinners};
use std::collections::HashMap;

use super::print_outcome;
use crate::api::actions;
use crate::core::{config, storage::AppCtx};

/// Generate a personalized explanation and print it.
pub async fn run(
    ctx: &AppCtx,
    topic: &str,
    age: &str,
    background: &str,
    backend_spec: Option<&str>,
) -> Result<(), String> {
    let backend = config::load_backend(ctx, backend_spec)?;

    let mut form = HashMap::new();
    form.insert("topic".to_string(), topic.to_string());
    form.insert("studentAge".to_string(), age.to_string());
    form.insert("studentBackground".to_string(), background.to_string());

    let mut sp = Spinner::new(Spinners::Dots9, "Generating explanation...".into());
    let result = actions::generate_explanation(&backend, &form).await;
    sp.stop_with_message("✔ Response received.".into());

    print_outcome(result, |data| {
        println!("{}", style("Explanation").green().bold());
        println!("{}", data.explanation);
    })
}
