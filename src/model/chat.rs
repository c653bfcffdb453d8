//! Chef conversation transcript.

use serde::{Deserialize, Serialize};

use super::recipe::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Chef,
}

/// One entry in the chat. Carries data only; rendering is the view's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChatMessage {
    Text { role: Role, text: String },
    RecipeCard { recipe: Recipe },
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        ChatMessage::Text {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn chef(text: impl Into<String>) -> Self {
        ChatMessage::Text {
            role: Role::Chef,
            text: text.into(),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            ChatMessage::Text { role, .. } => *role,
            ChatMessage::RecipeCard { .. } => Role::Chef,
        }
    }
}
