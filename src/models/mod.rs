pub mod conversation;
pub mod prompt;
pub mod reply;
pub mod request;
