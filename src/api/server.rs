use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use crate::config::WalletConfig;
use crate::wallet::WalletManager;

pub async fn start_server(addr: &str) -> anyhow::Result<()> {
    let manager = Arc::new(WalletManager::new(WalletConfig::from_env()));

    // Configure CORS based on environment
    // Set ALLOWED_ORIGINS="https://wallet.example.com" for production
    // If not set, allows any origin (development mode)
    let cors = match std::env::var("ALLOWED_ORIGINS") {
        Ok(origins) if !origins.is_empty() => {
            log::info!("CORS configured for origins: {}", origins);
            let origin_list: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origin_list)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        _ => {
            log::warn!("CORS: Allowing all origins (development mode). Set ALLOWED_ORIGINS env var for production.");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let app = Router::new()
        // Wallet lifecycle
        .route("/api/wallet/create", post(handlers::create_wallet_handler))
        .route("/api/wallet/open", post(handlers::open_wallet_handler))
        .route("/api/wallet/close", post(handlers::close_wallet_handler))
        .route("/api/wallet/info", get(handlers::wallet_info_handler))
        .route("/api/wallet/refresh", post(handlers::refresh_handler))
        .route("/api/wallet/rescan", post(handlers::rescan_handler))
        // Node connection and sync
        .route("/api/node/connect", post(handlers::connect_node_handler))
        .route(
            "/api/node/disconnect",
            post(handlers::disconnect_node_handler),
        )
        .route("/api/sync/progress", get(handlers::sync_progress_handler))
        // Transactions
        .route(
            "/api/transactions/send",
            post(handlers::send_transaction_handler),
        )
        .route(
            "/api/transactions",
            get(handlers::list_transactions_handler),
        )
        .route(
            "/api/transactions/estimate-fee",
            post(handlers::estimate_fee_handler),
        )
        .route(
            "/api/transactions/:hash",
            get(handlers::get_transaction_handler),
        )
        // Term deposits
        .route(
            "/api/deposits",
            get(handlers::list_deposits_handler).post(handlers::create_deposit_handler),
        )
        .route("/api/deposits/:id", get(handlers::get_deposit_handler))
        .route(
            "/api/deposits/:id/withdraw",
            post(handlers::withdraw_deposit_handler),
        )
        // Mining
        .route("/api/mining/start", post(handlers::start_mining_handler))
        .route("/api/mining/stop", post(handlers::stop_mining_handler))
        .route("/api/mining/info", get(handlers::mining_info_handler))
        .route("/api/mining/stats", get(handlers::mining_stats_handler))
        .route("/api/mining/pool", post(handlers::set_mining_pool_handler))
        // Address book
        .route(
            "/api/address-book",
            get(handlers::list_addresses_handler).post(handlers::add_address_handler),
        )
        .route(
            "/api/address-book/:address",
            get(handlers::get_address_handler)
                .put(handlers::update_address_handler)
                .delete(handlers::remove_address_handler),
        )
        .route(
            "/api/address-book/:address/mark-used",
            post(handlers::mark_address_used_handler),
        )
        // Keys
        .route(
            "/api/keys/seed/generate",
            post(handlers::generate_seed_handler),
        )
        .route(
            "/api/keys/seed/validate",
            post(handlers::validate_seed_handler),
        )
        .route("/api/keys/seed", post(handlers::seed_phrase_handler))
        .route("/api/keys/derive", post(handlers::derive_keys_handler))
        .route("/api/keys/export", get(handlers::export_keys_handler))
        .route("/api/keys/import", post(handlers::import_keys_handler))
        .route("/api/keys/view-key", get(handlers::view_key_handler))
        .route("/api/keys/spend-key", get(handlers::spend_key_handler))
        .layer(cors)
        .with_state(manager.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Join worker threads before the process exits.
    let manager = manager.clone();
    tokio::task::spawn_blocking(move || {
        if let Err(e) = manager.close_wallet() {
            log::error!("Failed to close wallet during shutdown: {}", e);
        }
    })
    .await?;

    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
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
        _ = ctrl_c => {
            log::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            log::info!("Received SIGTERM signal");
        },
    }

    log::info!("Shutdown signal received, exiting gracefully...");
}
