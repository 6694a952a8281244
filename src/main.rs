use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use allotment::{
    api::{openapi::ApiDoc, routes, AppState},
    config::Config,
    error::json_config,
};
use log::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();
            error!("invalid configuration: {e}");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let bind_addr = config.bind_addr.clone();
    info!("🌱 Allotment Planner API started at http://{bind_addr}");
    info!("   GET    /api/gardens");
    info!("   POST   /api/gardens/{{id}}/elements");
    info!("   POST   /api/gardens/{{id}}/placement/check");
    info!("   POST   /api/gardens/{{id}}/placement/move");
    info!("   POST   /api/weather/alerts");
    info!("   GET    /api/plants/season/{{month}}");
    info!("   grid size: {} px", config.grid_size);
    info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    info!("   📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");

    let state = web::Data::new(AppState::new(config));
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .app_data(json_config())
            .configure(routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
