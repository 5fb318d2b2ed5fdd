use codeqa_core::ScoredResult;
use serde::Serialize;

pub const SYSTEM_PROMPT: &str = "You are a helpful code assistant";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// System instruction plus one user message carrying every hit, in rank
/// order, followed by the question.
pub fn build_messages(results: &[ScoredResult], question: &str) -> Vec<ChatMessage> {
    let mut content = format!(
        "I want you to help me with a code question in a retrival augmented code search system. \
         I'm going to give you the top {} that are related to the question, and the question itself, \
         and would like your ideas regarding how to solve it.",
        results.len()
    );
    for hit in results {
        content.push_str(&hit.identifier);
        content.push_str(":\n");
        content.push_str(&hit.content);
        content.push('\n');
    }
    content.push_str("QUESTION:\n");
    content.push_str(question);

    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(content)]
}
