pub mod compute;
pub mod graphql;
pub mod health;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(compute::run_task)
        .service(
            web::resource("/graphql")
                .route(web::post().to(graphql::graphql))
                .route(web::get().to(graphql::graphiql)),
        );
}
