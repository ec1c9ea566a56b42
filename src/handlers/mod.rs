use crate::errors::ApiError;
use crate::models::prompt::Message;
use crate::models::reply::{AnalysisReport, LabeledFields, PoemResponse};
use crate::models::request::{ConversationRequest, DescriptionRequest, PoemRequest};
use crate::services::{formatter, prompts, Completion};
use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse, Responder};
use log::error;

pub const WELCOME: &str =
    "Welcome to the Poem Generator API. Use the /generate-poem endpoint to generate a poem.";

pub async fn index() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(WELCOME)
}

/// Turns any body that does not fit the endpoint's payload into a 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidInput(err.to_string()).into()
}

// `Completion` comes first in every handler below: a missing client is
// reported before the payload is parsed.

pub async fn generate_poem(
    completion: Completion,
    request: web::Json<PoemRequest>,
) -> Result<web::Json<PoemResponse>, ApiError> {
    let message = complete(&completion, &prompts::poem_messages(&request.prompt)).await?;
    Ok(web::Json(PoemResponse { message }))
}

pub async fn take_description(
    completion: Completion,
    request: web::Json<DescriptionRequest>,
) -> Result<web::Json<LabeledFields>, ApiError> {
    let messages = prompts::description_messages(&request.description);
    let reply = complete(&completion, &messages).await?;
    Ok(web::Json(formatter::parse_labeled_lines(&reply)))
}

pub async fn new_questions(
    completion: Completion,
    request: web::Json<ConversationRequest>,
) -> Result<web::Json<LabeledFields>, ApiError> {
    let messages = prompts::follow_up_messages(&request.conversations);
    let reply = complete(&completion, &messages).await?;
    Ok(web::Json(formatter::parse_labeled_lines(&reply)))
}

pub async fn analyze(
    completion: Completion,
    request: web::Json<ConversationRequest>,
) -> Result<web::Json<AnalysisReport>, ApiError> {
    let messages = prompts::analysis_messages(&request.conversations);
    let reply = complete(&completion, &messages).await?;
    Ok(web::Json(formatter::parse_analysis(&reply)))
}

async fn complete(completion: &Completion, messages: &[Message]) -> Result<String, ApiError> {
    completion.complete(messages).await.map_err(|e| {
        error!("Upstream completion failed: {}", e);
        ApiError::from(e)
    })
}
