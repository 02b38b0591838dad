use console::style;

use crate::api::ActionResult;
use crate::cli::{Cmd, QuestionsCmd};
use crate::core::storage::AppCtx;

pub mod ask;
pub mod describe;
pub mod explain;
pub mod questions;
pub mod submit;
pub mod summarize;

/// Dispatches the parsed command to the appropriate handler.
pub async fn dispatch(command: Cmd, ctx: &AppCtx) -> Result<(), String> {
    match command {
        Cmd::Explain {
            topic,
            age,
            background,
            backend,
        } => explain::run(ctx, &topic, &age, &background, backend.as_deref()).await,
        Cmd::Summarize {
            lesson,
            lesson_file,
            context,
            backend,
        } => {
            summarize::run(
                ctx,
                lesson.as_deref(),
                lesson_file.as_deref(),
                &context,
                backend.as_deref(),
            )
            .await
        }
        Cmd::Ask {
            question,
            topic_context,
            profile,
            backend,
        } => {
            ask::run(
                ctx,
                &question,
                topic_context.as_deref(),
                profile.as_deref(),
                backend.as_deref(),
            )
            .await
        }
        Cmd::Describe { image, backend } => describe::run(ctx, &image, backend.as_deref()).await,
        Cmd::Submit {
            question,
            topic_context,
            profile,
        } => submit::run(ctx, &question, topic_context.as_deref(), profile.as_deref()),
        Cmd::Questions(questions_cmd) => match questions_cmd {
            QuestionsCmd::List => questions::list(ctx),
            QuestionsCmd::Clear => questions::clear(ctx),
        },
    }
}

/// Renders an action envelope: shows the data on success, per-field messages
/// on validation failure, and turns the top-level message into the command
/// error otherwise.
pub(crate) fn print_outcome<T>(
    result: ActionResult<T>,
    show: impl FnOnce(&T),
) -> Result<(), String> {
    if result.success {
        if let Some(data) = &result.data {
            show(data);
        }
        return Ok(());
    }

    if let Some(field_errors) = &result.field_errors {
        for (field, messages) in field_errors {
            for message in messages {
                eprintln!("{} {}: {}", style("✗").red(), style(field).bold(), message);
            }
        }
    }
    Err(result
        .error
        .unwrap_or_else(|| "The request could not be completed.".to_string()))
}
