use std::net::SocketAddr;
use tokio::net::TcpListener;

use bouquet::config::Config;
use bouquet::{build_app, db};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let addr = config.bind_addr;

    let pool = db::init_pool(&config.database_url).await;
    let app = build_app(pool, config);

    let listener = TcpListener::bind(addr).await.unwrap();

    tracing::info!("listening on {}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
