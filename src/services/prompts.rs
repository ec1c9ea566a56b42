//! Message lists sent upstream for each endpoint.
//!
//! Every list is `[system] ++ body ++ [format instruction]`; the format
//! instruction is what the reply formatter relies on.

use crate::models::conversation::ConversationTurn;
use crate::models::prompt::Message;

pub const POET_SYSTEM: &str = "You are a poetic assistant, skilled in explaining complex programming concepts with creative flair.";

pub const INTERVIEWER_SYSTEM: &str = "You are an experienced technical interviewer. \
You ask clear, specific questions that reveal how a candidate thinks and what they have actually built.";

pub const COACH_SYSTEM: &str = "You are an interview coach. \
You review interview transcripts and give the applicant honest, constructive feedback.";

pub const DESCRIPTION_FORMAT: &str = "Based on the job description above, write 5 interview questions for this role. \
Put each question on its own line in the form 'Question N: <question>' and write nothing else.";

pub const FOLLOW_UP_FORMAT: &str = "Based on the interview so far, write 3 follow-up questions the interviewer should ask next. \
Put each question on its own line in the form 'Question N: <question>' and write nothing else.";

pub const ANALYSIS_FORMAT: &str = "Evaluate the applicant in the interview above. \
Reply with exactly these eight lines, ratings out of 10:\n\
Overall Rating: <rating>\n\
Overall Comment: <comment>\n\
Technical Skills Rating: <rating>\n\
Technical Skills Comment: <comment>\n\
Communication Skills Rating: <rating>\n\
Communication Skills Comment: <comment>\n\
Problem Solving Rating: <rating>\n\
Problem Solving Comment: <comment>";

pub fn poem_messages(prompt: &str) -> Vec<Message> {
    vec![Message::system(POET_SYSTEM), Message::user(prompt)]
}

pub fn description_messages(description: &str) -> Vec<Message> {
    vec![
        Message::system(INTERVIEWER_SYSTEM),
        Message::user(format!("Job description:\n{}", description)),
        Message::user(DESCRIPTION_FORMAT),
    ]
}

pub fn follow_up_messages(conversations: &[ConversationTurn]) -> Vec<Message> {
    with_history(INTERVIEWER_SYSTEM, conversations, FOLLOW_UP_FORMAT)
}

pub fn analysis_messages(conversations: &[ConversationTurn]) -> Vec<Message> {
    with_history(COACH_SYSTEM, conversations, ANALYSIS_FORMAT)
}

fn with_history(system: &str, conversations: &[ConversationTurn], format: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(conversations.len() + 2);
    messages.push(Message::system(system));
    messages.extend(conversations.iter().map(ConversationTurn::to_message));
    messages.push(Message::user(format));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::prompt::Role;

    fn turn(role: &str, text: &str) -> ConversationTurn {
        ConversationTurn {
            role: role.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn poem_is_system_then_prompt() {
        let messages = poem_messages("explain recursion");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], Message::system(POET_SYSTEM));
        assert_eq!(messages[1], Message::user("explain recursion"));
    }

    #[test]
    fn description_ends_with_format_instruction() {
        let messages = description_messages("Senior Rust engineer");
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[1].content.contains("Senior Rust engineer"));
        assert_eq!(messages.last(), Some(&Message::user(DESCRIPTION_FORMAT)));
    }

    #[test]
    fn history_keeps_order_and_maps_roles() {
        let history = [
            turn("interviewer", "Tell me about yourself."),
            turn("applicant", "I write compilers."),
            turn("observer", "(nods)"),
        ];
        let messages = analysis_messages(&history);

        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0], Message::system(COACH_SYSTEM));
        let roles: Vec<Role> = messages[1..4].iter().map(|m| m.role).collect();
        assert_eq!(roles, [Role::User, Role::Assistant, Role::User]);
        assert_eq!(messages[2].content, "I write compilers.");
        assert_eq!(messages[4], Message::user(ANALYSIS_FORMAT));
    }

    #[test]
    fn empty_history_still_has_system_and_format() {
        let messages = follow_up_messages(&[]);
        assert_eq!(
            messages,
            vec![
                Message::system(INTERVIEWER_SYSTEM),
                Message::user(FOLLOW_UP_FORMAT)
            ]
        );
    }
}
