use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use car_rental_backend::config::environment::EnvironmentConfig;
use car_rental_backend::database::DatabaseConnection;
use car_rental_backend::middleware::cors::cors_middleware;
use car_rental_backend::routes::create_router;
use car_rental_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Car Rental - API de gestion de locations");
    info!("===========================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .merge(create_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(&config))
        .with_state(app_state);

    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("📋 Endpoints - Locations:");
    info!("   POST /locations - Crear location");
    info!("   GET  /locations - Listar locations (coche poblado)");
    info!("   GET  /locations/:id - Obtener location");
    info!("   PUT  /locations/:id - Actualizar location");
    info!("   DELETE /locations/:id - Eliminar location");
    info!("   POST /locations/check - Verificar disponibilidad y simular precio");
    info!("   POST /locations/:id/demarrer - Démarrer la location");
    info!("   POST /locations/:id/terminer - Terminer la location");
    info!("🚗 Endpoints - Cars:");
    info!("   POST /car - Registrar coche");
    info!("   GET  /car - Listar coches");
    info!("   GET  /car/:id - Obtener coche");
    info!("   DELETE /car/:id - Eliminar coche");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    db_connection.close().await;
    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "API de location de voitures funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
