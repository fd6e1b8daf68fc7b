use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use wildhaven::auth::provider::HostedAuth;
use wildhaven::cache::RenderCache;
use wildhaven::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = db::init_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");

    let auth_url = std::env::var("AUTH_URL").expect("AUTH_URL must be set");
    let provider = HostedAuth::new(auth_url);

    let cache = RenderCache::new();

    // Cookie sessions survive restarts only with a stable SESSION_KEY (64+ bytes)
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Session key loaded from SESSION_KEY");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY is only {} bytes (64+ required), falling back to a generated key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("SESSION_KEY not set, using a generated key; sessions reset on restart");
            Key::generate()
        }
    };

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(cache.clone()))
            .app_data(web::Data::new(provider.clone()))
            // Guest area form actions
            .route(
                "/account/profile",
                web::post().to(handlers::account_handlers::update_profile),
            )
            .route(
                "/account/reservations/update",
                web::post().to(handlers::booking_handlers::update),
            )
            .route(
                "/account/reservations/delete",
                web::post().to(handlers::booking_handlers::delete),
            )
            .route(
                "/cabins/reserve",
                web::post().to(handlers::booking_handlers::create),
            )
            // Identity provider delegation
            .route(
                "/auth/signin",
                web::post().to(handlers::auth_handlers::sign_in),
            )
            .route(
                "/auth/signout",
                web::post().to(handlers::auth_handlers::sign_out),
            )
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound().body("Not Found")
            }))
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
