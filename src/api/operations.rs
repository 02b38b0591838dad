//! The four fixed domain operations: each pairs a request schema with a
//! prompt template and a structured output type. Backend failures propagate
//! unchanged; no operation does its own recovery.

use serde::{Deserialize, Serialize};

use super::backend::GenerationBackend;
use super::error::GenerationError;
use super::invoker;
use super::prompt::{
    ANSWER_QUESTION_PROMPT, DESCRIBE_IMAGE_PROMPT, EXPLAIN_TOPIC_PROMPT, SUMMARIZE_LESSON_PROMPT,
};
use super::schema::{FieldRule, FieldSpec, RequestSchema};

pub static EXPLAIN_TOPIC_SCHEMA: RequestSchema = RequestSchema {
    name: "explainTopic",
    fields: &[
        FieldSpec {
            name: "topic",
            rule: FieldRule::Text {
                min_len: 3,
                message: "Topic must be at least 3 characters long.",
            },
        },
        FieldSpec {
            name: "studentAge",
            rule: FieldRule::Number {
                min: 5,
                max: 100,
                not_numeric: "Student age must be a number.",
                too_small: "Student age must be at least 5.",
                too_large: "Student age must be at most 100.",
            },
        },
        FieldSpec {
            name: "studentBackground",
            rule: FieldRule::Text {
                min_len: 10,
                message: "Student background must be at least 10 characters long.",
            },
        },
    ],
};

pub static SUMMARIZE_LESSON_SCHEMA: RequestSchema = RequestSchema {
    name: "summarizeLesson",
    fields: &[
        FieldSpec {
            name: "lessonContent",
            rule: FieldRule::Text {
                min_len: 20,
                message: "Lesson content must be at least 20 characters long.",
            },
        },
        FieldSpec {
            name: "context",
            rule: FieldRule::Text {
                min_len: 10,
                message: "Class context must be at least 10 characters long.",
            },
        },
    ],
};

pub static ANSWER_QUESTION_SCHEMA: RequestSchema = RequestSchema {
    name: "answerQuestion",
    fields: &[
        FieldSpec {
            name: "question",
            rule: FieldRule::Text {
                min_len: 10,
                message: "Question must be at least 10 characters long.",
            },
        },
        FieldSpec {
            name: "topicContext",
            rule: FieldRule::OptionalText,
        },
        FieldSpec {
            name: "studentProfile",
            rule: FieldRule::OptionalText,
        },
    ],
};

pub static DESCRIBE_IMAGE_SCHEMA: RequestSchema = RequestSchema {
    name: "describeImage",
    fields: &[FieldSpec {
        name: "photoDataUri",
        rule: FieldRule::Prefixed {
            prefix: "data:image/",
            message: "Please select a valid image file.",
        },
    }],
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainTopicInput {
    pub topic: String,
    pub student_age: i64,
    pub student_background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainTopicOutput {
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeLessonInput {
    pub lesson_content: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeLessonOutput {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerQuestionInput {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerQuestionOutput {
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeImageInput {
    pub photo_data_uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescribeImageOutput {
    pub description: String,
}

/// Generates an explanation of a topic tailored to the student's age and
/// background.
pub async fn explain_topic(
    backend: &dyn GenerationBackend,
    input: ExplainTopicInput,
) -> Result<ExplainTopicOutput, GenerationError> {
    invoker::invoke(backend, &EXPLAIN_TOPIC_PROMPT, &EXPLAIN_TOPIC_SCHEMA, &input).await
}

/// Summarizes lesson content, highlighting details students may have missed.
pub async fn summarize_lesson(
    backend: &dyn GenerationBackend,
    input: SummarizeLessonInput,
) -> Result<SummarizeLessonOutput, GenerationError> {
    invoker::invoke(
        backend,
        &SUMMARIZE_LESSON_PROMPT,
        &SUMMARIZE_LESSON_SCHEMA,
        &input,
    )
    .await
}

/// Answers a student's question as an AI tutor.
pub async fn answer_question(
    backend: &dyn GenerationBackend,
    input: AnswerQuestionInput,
) -> Result<AnswerQuestionOutput, GenerationError> {
    invoker::invoke(
        backend,
        &ANSWER_QUESTION_PROMPT,
        &ANSWER_QUESTION_SCHEMA,
        &input,
    )
    .await
}

/// Describes the content of an image supplied as a `data:image/` URI.
pub async fn describe_image(
    backend: &dyn GenerationBackend,
    input: DescribeImageInput,
) -> Result<DescribeImageOutput, GenerationError> {
    invoker::invoke(
        backend,
        &DESCRIBE_IMAGE_PROMPT,
        &DESCRIBE_IMAGE_SCHEMA,
        &input,
    )
    .await
}
