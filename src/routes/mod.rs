use crate::handlers;
use actix_web::web;

pub mod interview;
pub mod poem;

/// Registers every endpoint along with the JSON extractor settings they share.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
        .configure(poem::poem_routes)
        .configure(interview::interview_routes);
}
