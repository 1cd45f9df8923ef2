use todo_server::{telemetry, Config, Database};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    telemetry::init_tracing(&config);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, debug = config.debug, "listening");

    todo_server::run(listener, Database::in_memory()).await?;
    Ok(())
}
