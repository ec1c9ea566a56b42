use super::conversation::ConversationTurn;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PoemRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct DescriptionRequest {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ConversationRequest {
    pub conversations: Vec<ConversationTurn>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn conversation_request_requires_role_and_text() {
        let ok = json!({"conversations": [{"role": "interviewer", "text": "Hi"}]});
        assert!(serde_json::from_value::<ConversationRequest>(ok).is_ok());

        let no_text = json!({"conversations": [{"role": "interviewer"}]});
        assert!(serde_json::from_value::<ConversationRequest>(no_text).is_err());

        let no_role = json!({"conversations": [{"text": "Hi"}]});
        assert!(serde_json::from_value::<ConversationRequest>(no_role).is_err());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let value = json!({"prompt": "recursion", "style": "haiku"});
        let request: PoemRequest = serde_json::from_value(value).unwrap();
        assert_eq!(request.prompt, "recursion");
    }
}
