//! Defines the command-line interface structure using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "classmate-ai", version, about = "AI study assistant for students and teachers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Generate a personalized explanation of a topic
    Explain {
        /// The topic to explain
        #[arg(long)]
        topic: String,
        /// The student's age
        #[arg(long)]
        age: String,
        /// The student's background (interests, prior knowledge)
        #[arg(long)]
        background: String,
        /// LLM backend override, e.g. 'openai:gpt-4o-mini'
        #[arg(long)]
        backend: Option<String>,
    },
    /// Summarize lesson content, highlighting easily-missed details
    Summarize {
        /// Lesson content to summarize
        #[arg(long, conflicts_with = "lesson_file")]
        lesson: Option<String>,
        /// Read the lesson content from a file instead
        #[arg(long = "lesson-file")]
        lesson_file: Option<PathBuf>,
        /// The current context of the class
        #[arg(long)]
        context: String,
        /// LLM backend override, e.g. 'openai:gpt-4o-mini'
        #[arg(long)]
        backend: Option<String>,
    },
    /// Ask the AI tutor a question
    Ask {
        /// The question to ask
        #[arg(long)]
        question: String,
        /// Optional broader topic for the question
        #[arg(long = "topic-context")]
        topic_context: Option<String>,
        /// Optional information about the student
        #[arg(long)]
        profile: Option<String>,
        /// LLM backend override, e.g. 'openai:gpt-4o-mini'
        #[arg(long)]
        backend: Option<String>,
    },
    /// Describe the content of an image
    Describe {
        /// Path to the image file (PNG, JPG, GIF, WEBP)
        image: PathBuf,
        /// LLM backend override, e.g. 'openai:gpt-4o-mini'
        #[arg(long)]
        backend: Option<String>,
    },
    /// Submit a question for your teacher to answer later
    Submit {
        /// The question to submit
        #[arg(long)]
        question: String,
        /// Optional broader topic for the question
        #[arg(long = "topic-context")]
        topic_context: Option<String>,
        /// Optional information about the student
        #[arg(long)]
        profile: Option<String>,
    },
    /// Review questions submitted by students (teacher view)
    #[command(subcommand)]
    Questions(QuestionsCmd),
}

#[derive(Subcommand)]
pub enum QuestionsCmd {
    /// List submitted questions, newest first
    List,
    /// Remove all submitted questions
    Clear,
}
