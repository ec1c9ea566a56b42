use crate::handlers;
use actix_web::web;

pub fn interview_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/take-description", web::post().to(handlers::take_description))
        .route("/new-questions", web::post().to(handlers::new_questions))
        .route("/analyze", web::post().to(handlers::analyze));
}
