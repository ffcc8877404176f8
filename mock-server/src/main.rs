use mock_server::Behavior;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let behavior_name = std::env::var("MOCK_BEHAVIOR").unwrap_or_else(|_| "users".to_string());
    let behavior = Behavior::from_name(&behavior_name)
        .ok_or_else(|| format!("unknown MOCK_BEHAVIOR: {behavior_name}"))?;

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, behavior = %behavior_name, "mock server listening");
    mock_server::run(listener, behavior).await?;
    Ok(())
}
