use cvfolio::{create_app, parser::ParserClient, AppState};
use dotenvy::dotenv;
use sea_orm::Database;
use std::env;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load .env (if present) so DATABASE_URL from file is visible
    let _ = dotenv();

    let db_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:./cvfolio.sqlite?mode=rwc".to_string());
    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to database");

    let state = AppState {
        db,
        parser: ParserClient::from_env(),
    };

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    tracing::info!("Server running on http://{}", bind_addr);
    axum::serve(listener, app).await.unwrap();
}
