//! ferry service binary.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:8080/ping
//!   curl http://localhost:8080/task -H 'content-type: application/json' -d '{"name": "start the car"}'
//!   curl http://localhost:8080/upload --form 'afile=@"./photo.png"'
//!   curl --remote-name http://localhost:8080/download/photo.png

use ferry::{Config, Server, Store, routes};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ferry::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::default();
    let app = routes::app(Store::new(&config.store_root));

    Server::bind(config.addr).serve(app).await
}
