use super::prompt::{Message, Role};
use serde::Deserialize;

/// One turn of interview history as sent by the caller.
#[derive(Debug, Deserialize, Clone)]
pub struct ConversationTurn {
    pub role: String,
    pub text: String,
}

impl ConversationTurn {
    /// The interviewer asks, so it speaks as the user; the applicant answers
    /// as the assistant. Anything else is sent as a user turn.
    pub fn upstream_role(&self) -> Role {
        match self.role.as_str() {
            "interviewer" => Role::User,
            "applicant" => Role::Assistant,
            _ => Role::User,
        }
    }

    pub fn to_message(&self) -> Message {
        Message {
            role: self.upstream_role(),
            content: self.text.clone(),
        }
    }
}
