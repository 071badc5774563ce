mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{extract::State, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Sistema de Alquiler de Vehículos - API");
    info!("=========================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::default();

    // CORS permisivo sólo en desarrollo
    let cors = if config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/api/health", get(health_check))
        .nest("/api/clients", routes::client_routes::create_client_router())
        .nest("/api/employees", routes::employee_routes::create_employee_router())
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/rentals", routes::rental_routes::create_rental_router())
        .nest("/api/maintenance", routes::maintenance_routes::create_maintenance_router())
        .nest("/api/incidents", routes::incident_routes::create_incident_router())
        .nest("/api/reports", routes::report_routes::create_report_router())
        .nest("/api", routes::lookup_routes::create_lookup_router())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/health - Health check");
    info!("👤 Clientes:");
    info!("   GET/POST /api/clients - Listar / crear clientes");
    info!("   GET/PUT/DELETE /api/clients/:id");
    info!("🧑‍💼 Empleados:");
    info!("   GET/POST /api/employees - Listar / crear empleados");
    info!("   GET/PUT/DELETE /api/employees/:id");
    info!("🚙 Vehículos:");
    info!("   GET/POST /api/vehicles - Listar / crear vehículos");
    info!("   GET/PUT/DELETE /api/vehicles/:id");
    info!("   POST /api/vehicles/:id/status/resync - Resincronizar estado");
    info!("📋 Alquileres:");
    info!("   GET/POST /api/rentals - Listar / registrar alquileres");
    info!("   GET  /api/rentals/availability - Consultar disponibilidad");
    info!("   GET/PUT /api/rentals/:id - Obtener / modificar");
    info!("   POST /api/rentals/:id/start - Activar");
    info!("   POST /api/rentals/:id/finalize - Finalizar con kilometraje");
    info!("   POST /api/rentals/:id/cancel - Cancelar");
    info!("🔧 Mantenimientos:");
    info!("   POST /api/maintenance - Registrar mantenimiento");
    info!("   GET  /api/maintenance/vehicle/:id - Listar por vehículo");
    info!("   PUT/DELETE /api/maintenance/:id");
    info!("   POST /api/maintenance/:id/finalize - Finalizar");
    info!("⚠️  Incidentes:");
    info!("   POST /api/incidents - Registrar incidente");
    info!("   GET  /api/incidents/rental/:id - Listar por alquiler");
    info!("📊 Reportes:");
    info!("   GET  /api/reports/ranking - Vehículos más alquilados");
    info!("   GET  /api/reports/revenue/:year - Facturación mensual");
    info!("   GET  /api/reports/client/:id - Historial de cliente");
    info!("   POST /api/reports/period - Alquileres por período");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicle-rental",
        "status": "ok",
        "environment": state.config.environment,
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
