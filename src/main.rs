use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use postboard::{config::Config, db, graphql, queue::TaskQueue, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to open database");
    let queue = TaskQueue::start(config.task_workers);
    let schema = graphql::build_schema(pool.clone());

    log::info!("Starting postboard server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(queue.clone()))
            .app_data(web::Data::new(schema.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
