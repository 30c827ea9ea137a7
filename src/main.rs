use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use gigboard_backend::create_pool;
use gigboard_backend::handlers;
use gigboard_backend::session::SessionStore;
use migration::{Migrator, MigratorTrait};
use tera::Tera;
use tracing_subscriber::EnvFilter;

/// Default session lifetime: 14 days.
const DEFAULT_SESSION_TTL_SECS: u64 = 14 * 24 * 60 * 60;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = create_pool().await;
    Migrator::up(&db, None).await.expect("Failed to run migrations");
    let db_data = web::Data::new(db);

    // Session and flash storage lives in Redis.
    let redis_url = std::env::var("REDIS_URL").expect("REDIS_URL must be set");
    let session_ttl = std::env::var("SESSION_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_SESSION_TTL_SECS);
    let sessions = SessionStore::new(&redis_url, session_ttl)
        .await
        .expect("Failed to connect to Redis");
    let session_data = web::Data::new(sessions);
    tracing::info!("Connected to Redis");

    let tera = Tera::new("templates/**/*.html").expect("Failed to parse templates");
    let tera_data = web::Data::new(tera);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(session_data.clone())
            .app_data(tera_data.clone())
            .configure(handlers::init_routes)
            .service(Files::new("/static", "./static"))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
