use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use frases_api::startup;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frases_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = startup::run().await {
        tracing::error!(error = %err, "startup failed");
        std::process::exit(1);
    }
}
