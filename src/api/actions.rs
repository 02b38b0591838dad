//! The validated action pipeline.
//!
//! Every action takes the same shape of input: a flat string field map, as
//! a form would submit it. Each invocation validates against the operation's
//! request schema, invokes the matching domain operation on success, and
//! wraps the outcome in a uniform [`ActionResult`] envelope. Validation
//! failures never reach the backend; generation failures are captured as a
//! top-level message and logged for diagnostics. Actions hold no state
//! between invocations and never return an error to the caller.

use serde::Serialize;
use std::collections::HashMap;

use super::backend::GenerationBackend;
use super::envelope::ActionResult;
use super::error::GenerationError;
use super::operations::{
    self, AnswerQuestionInput, AnswerQuestionOutput, DescribeImageInput, DescribeImageOutput,
    ExplainTopicInput, ExplainTopicOutput, SummarizeLessonInput, SummarizeLessonOutput,
    ANSWER_QUESTION_SCHEMA, DESCRIBE_IMAGE_SCHEMA, EXPLAIN_TOPIC_SCHEMA, SUMMARIZE_LESSON_SCHEMA,
};
use super::questions::QuestionStore;

/// Raw form input: every value is a string, numeric fields included.
pub type FormData = HashMap<String, String>;

/// Confirmation returned by [`submit_question`].
pub const QUESTION_SUBMITTED_MESSAGE: &str =
    "Your question has been successfully submitted to your teacher.";

/// Output of the record-only [`submit_question`] action: a confirmation
/// message plus the echoed validated input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuestionOutput {
    pub message: String,
    pub submitted_question: AnswerQuestionInput,
}

fn failure_message(action: &str, err: &GenerationError, fallback: &str) -> String {
    tracing::error!(action, error = %err, "generation failed");
    let message = err.to_string();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Generates a personalized explanation of a topic.
pub async fn generate_explanation(
    backend: &dyn GenerationBackend,
    form: &FormData,
) -> ActionResult<ExplainTopicOutput> {
    let fields = match EXPLAIN_TOPIC_SCHEMA.validate(form) {
        Ok(fields) => fields,
        Err(errors) => return ActionResult::invalid(errors),
    };
    let input = ExplainTopicInput {
        topic: fields.text("topic"),
        student_age: fields.number("studentAge"),
        student_background: fields.text("studentBackground"),
    };
    match operations::explain_topic(backend, input).await {
        Ok(output) => ActionResult::ok(output),
        Err(err) => ActionResult::failed(failure_message(
            "generate_explanation",
            &err,
            "An unexpected error occurred while generating the explanation.",
        )),
    }
}

/// Summarizes lesson content against the current class context.
pub async fn summarize_lesson(
    backend: &dyn GenerationBackend,
    form: &FormData,
) -> ActionResult<SummarizeLessonOutput> {
    let fields = match SUMMARIZE_LESSON_SCHEMA.validate(form) {
        Ok(fields) => fields,
        Err(errors) => return ActionResult::invalid(errors),
    };
    let input = SummarizeLessonInput {
        lesson_content: fields.text("lessonContent"),
        context: fields.text("context"),
    };
    match operations::summarize_lesson(backend, input).await {
        Ok(output) => ActionResult::ok(output),
        Err(err) => ActionResult::failed(failure_message(
            "summarize_lesson",
            &err,
            "An unexpected error occurred while summarizing the lesson.",
        )),
    }
}

/// Answers a student's question through the AI tutor.
pub async fn answer_question(
    backend: &dyn GenerationBackend,
    form: &FormData,
) -> ActionResult<AnswerQuestionOutput> {
    let fields = match ANSWER_QUESTION_SCHEMA.validate(form) {
        Ok(fields) => fields,
        Err(errors) => return ActionResult::invalid(errors),
    };
    let input = AnswerQuestionInput {
        question: fields.text("question"),
        topic_context: fields.optional_text("topicContext"),
        student_profile: fields.optional_text("studentProfile"),
    };
    match operations::answer_question(backend, input).await {
        Ok(output) => ActionResult::ok(output),
        Err(err) => ActionResult::failed(failure_message(
            "answer_question",
            &err,
            "An unexpected error occurred while answering the question.",
        )),
    }
}

/// Describes the content of an uploaded image.
pub async fn describe_image(
    backend: &dyn GenerationBackend,
    form: &FormData,
) -> ActionResult<DescribeImageOutput> {
    let fields = match DESCRIBE_IMAGE_SCHEMA.validate(form) {
        Ok(fields) => fields,
        Err(errors) => return ActionResult::invalid(errors),
    };
    let input = DescribeImageInput {
        photo_data_uri: fields.text("photoDataUri"),
    };
    match operations::describe_image(backend, input).await {
        Ok(output) => ActionResult::ok(output),
        Err(err) => ActionResult::failed(failure_message(
            "describe_image",
            &err,
            "An unexpected error occurred while analyzing the image.",
        )),
    }
}

/// Submits a question for a teacher to answer later.
///
/// This is the record-only split of the pipeline: it shares the validation
/// and envelope shape of the generating actions but never contacts a
/// generation backend. Valid input is appended to the injected store and
/// echoed back with a fixed confirmation.
pub fn submit_question(
    store: &dyn QuestionStore,
    form: &FormData,
) -> ActionResult<SubmitQuestionOutput> {
    let fields = match ANSWER_QUESTION_SCHEMA.validate(form) {
        Ok(fields) => fields,
        Err(errors) => return ActionResult::invalid(errors),
    };
    let input = AnswerQuestionInput {
        question: fields.text("question"),
        topic_context: fields.optional_text("topicContext"),
        student_profile: fields.optional_text("studentProfile"),
    };
    match store.append(&input) {
        Ok(_) => ActionResult::ok(SubmitQuestionOutput {
            message: QUESTION_SUBMITTED_MESSAGE.to_string(),
            submitted_question: input,
        }),
        Err(err) => {
            tracing::error!(error = %err, "failed to record submitted question");
            ActionResult::failed(err.to_string())
        }
    }
}
