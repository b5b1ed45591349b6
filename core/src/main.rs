mod cors;

use actix_web::{
    App, HttpResponse, HttpServer, Responder,
    web::{self},
};
use common::env_config::Config;

async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "OK", "message": "Server is running" }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.environment == "production";
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url, is_production)
        .await
        .expect("Failed to set up database");

    // idempotent provisioning of the system account guest bookings attach to
    db::seed::provision_system_account(&pool, &config)
        .await
        .expect("Failed to provision system account");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .wrap(logger::middleware()) // 2nd
            .wrap(cors::middleware(&origin)) // 1st
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(health))
                    .service(api_auth::mount_auth())
                    .service(api_auth::mount_users())
                    .service(api_auth::mount_contact())
                    .service(api_bookings::mount_bookings())
                    .service(api_resources::mount_resources())
                    .service(api_payments::mount_payments()),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
