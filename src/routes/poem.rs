use crate::handlers;
use actix_web::web;

pub fn poem_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/generate-poem", web::post().to(handlers::generate_poem));
}
