use console::style;

use crate::api::questions::{load_board, QuestionStore};
use crate::core::storage::AppCtx;

/// List submitted questions, newest first.
pub fn list(ctx: &AppCtx) -> Result<(), String> {
    let store = ctx.question_store();
    let board = load_board(&store);

    if let Some(notice) = &board.notice {
        eprintln!("{} {}", style("!").yellow().bold(), notice);
    }

    if board.questions.is_empty() {
        println!("No questions to display at the moment.");
        return Ok(());
    }

    for question in &board.questions {
        println!(
            "{} {}",
            style(format!("[{}]", question.id)).cyan().bold(),
            style(question.submitted_at.format("%Y-%m-%d %H:%M UTC")).dim()
        );
        println!("    {}", question.question);
        if let Some(topic_context) = &question.topic_context {
            println!("    {} {}", style("topic:").dim(), topic_context);
        }
        if let Some(student_profile) = &question.student_profile {
            println!("    {} {}", style("student:").dim(), student_profile);
        }
    }
    Ok(())
}

/// Remove all submitted questions.
pub fn clear(ctx: &AppCtx) -> Result<(), String> {
    let store = ctx.question_store();
    store
        .clear()
        .map_err(|e| format!("Unable to clear questions: {}", e))?;
    println!("{} All student questions cleared.", style("✔").green());
    Ok(())
}
