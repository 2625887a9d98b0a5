mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = dealgap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let extractor = Arc::new(dealgap_scraper::ProductPageClient::new(
        config.request_timeout_secs,
    )?);

    let naver = match (&config.naver_client_id, &config.naver_client_secret) {
        (Some(id), Some(secret)) => {
            let credentials = dealgap_naver::NaverCredentials::new(id.clone(), secret.clone());
            Some(Arc::new(dealgap_naver::NaverShopClient::new(
                credentials,
                config.request_timeout_secs,
            )?))
        }
        _ => {
            tracing::warn!(
                "NAVER_CLIENT_ID/NAVER_CLIENT_SECRET not set; /api/v1/search will report configuration_error"
            );
            None
        }
    };

    let app = build_app(AppState { extractor, naver });

    tracing::info!(addr = %config.bind_addr, env = %config.env, "starting dealgap server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
