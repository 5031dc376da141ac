use actix_web::{middleware::Logger, App, HttpServer};

use api_backend::{
    config::settings::Settings,
    middleware::{cors::Cors, json_body::JsonBody},
    routes::root::root_scope,
};

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let settings = Settings::new();
    let port = settings.port;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(JsonBody)
            // last wrap runs first, so Cors sees every response
            .wrap(Cors)
            .service(root_scope())
    })
        .bind(("0.0.0.0", port))
        .unwrap_or_else(|e| {
            log::error!("failed to bind port {port}: {e}");
            std::process::exit(1);
        });

    println!("API listening on http://localhost:{port}");

    server.run().await
}
