//! Fixed prompt templates and template rendering.
//!
//! Templates use `{{name}}` substitution slots plus presence-conditional
//! `{{#if name}}...{{/if}}` sections. There is no other logic: a section is
//! kept when the variable is present and non-empty, dropped otherwise.

use regex::Regex;
use std::collections::HashMap;

/// A named, fixed text pattern sent to the generation backend.
pub struct PromptTemplate {
    pub name: &'static str,
    pub text: &'static str,
}

pub static EXPLAIN_TOPIC_PROMPT: PromptTemplate = PromptTemplate {
    name: "explainTopic",
    text: "\
You are an expert tutor. Your task is to explain the following topic to a student.

Topic: {{topic}}
Student Age: {{studentAge}}
Student Background: {{studentBackground}}

Provide a clear and concise explanation tailored to the student's age and background. \
Use examples that are relevant to the student's experience. Break down complex \
concepts into simpler terms.

Respond with a single JSON object of the form {\"explanation\": \"...\"} and nothing else.
",
};

pub static SUMMARIZE_LESSON_PROMPT: PromptTemplate = PromptTemplate {
    name: "summarizeLesson",
    text: "\
You are an AI assistant helping students review lessons. Given the lesson content \
and the current context of the class, provide a summary that highlights key details \
that students might have missed or that are particularly important.

Lesson Content: {{lessonContent}}

Context: {{context}}

Respond with a single JSON object of the form {\"summary\": \"...\"} and nothing else.
",
};

pub static ANSWER_QUESTION_PROMPT: PromptTemplate = PromptTemplate {
    name: "answerQuestion",
    text: "\
You are a friendly and knowledgeable AI tutor. A student has a question.
Student's Question: \"{{question}}\"

{{#if topicContext}}The question is related to the topic of: \"{{topicContext}}\".
{{/if}}{{#if studentProfile}}Here is a little about the student: \"{{studentProfile}}\".
{{/if}}
Please provide a clear, helpful, and encouraging answer to the student's question.
If the question is unclear, ask for clarification.
If the question is complex, break down the answer into understandable parts.
Use examples if they help explain the concept.

Respond with a single JSON object of the form {\"answer\": \"...\"} and nothing else.
",
};

pub static DESCRIBE_IMAGE_PROMPT: PromptTemplate = PromptTemplate {
    name: "describeImage",
    text: "\
Analyze the following image and provide a detailed description of its content.

Image: {{photoDataUri}}

Respond with a single JSON object of the form {\"description\": \"...\"} and nothing else.
",
};

/// Renders a template with the given variables. Missing substitution slots
/// render as empty strings.
pub fn render_template(template: &str, vars: &HashMap<String, String>) -> String {
    let sections = Regex::new(r"(?s)\{\{#if\s+(\w+)\s*\}\}(.*?)\{\{/if\}\}").unwrap();
    let resolved = sections.replace_all(template, |caps: &regex::Captures| {
        match vars.get(&caps[1]) {
            Some(v) if !v.is_empty() => caps[2].to_string(),
            _ => String::new(),
        }
    });

    let slots = Regex::new(r"\{\{\s*(\w+)\s*\}\}").unwrap();
    slots
        .replace_all(&resolved, |caps: &regex::Captures| {
            vars.get(&caps[1]).map(|s| s.as_str()).unwrap_or("").to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_named_slots() {
        let out = render_template("Topic: {{topic}}, Age: {{ studentAge }}",
            &vars(&[("topic", "Gravity"), ("studentAge", "12")]));
        assert_eq!(out, "Topic: Gravity, Age: 12");
    }

    #[test]
    fn missing_slots_render_empty() {
        let out = render_template("Topic: {{topic}}!", &vars(&[]));
        assert_eq!(out, "Topic: !");
    }

    #[test]
    fn conditional_section_kept_when_present() {
        let out = render_template(
            "Q: {{question}}\n{{#if topicContext}}Context: {{topicContext}}\n{{/if}}Done",
            &vars(&[("question", "why?"), ("topicContext", "physics")]),
        );
        assert_eq!(out, "Q: why?\nContext: physics\nDone");
    }

    #[test]
    fn conditional_section_dropped_when_absent_or_empty() {
        let template = "Q: {{question}}\n{{#if topicContext}}Context: {{topicContext}}\n{{/if}}Done";
        let absent = render_template(template, &vars(&[("question", "why?")]));
        assert_eq!(absent, "Q: why?\nDone");
        let empty = render_template(template, &vars(&[("question", "why?"), ("topicContext", "")]));
        assert_eq!(empty, "Q: why?\nDone");
    }

    #[test]
    fn literal_braces_survive_rendering() {
        let out = render_template(
            "Respond with {\"answer\": \"...\"} for {{question}}",
            &vars(&[("question", "why?")]),
        );
        assert_eq!(out, "Respond with {\"answer\": \"...\"} for why?");
    }
}
