// src/config.rs

use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use anyhow::{bail, Context};
use sqlx::postgres::PgPoolOptions;

use crate::{
    db::{FleetStore, InMemoryFleetStore, PgFleetStore},
    services::{
        cost_service::CostService, dashboard_service::DashboardService,
        fleet_service::FleetService, income_service::IncomeService,
        report_service::ReportService,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub store: StoreKind,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub server_addr: SocketAddr,
    // Empty means any origin
    pub cors_allowed_origins: Vec<String>,
}

impl Settings {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let store = match lookup("FLEET_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => StoreKind::Postgres,
            Some("memory") => StoreKind::Memory,
            Some(other) => bail!("FLEET_STORE must be 'postgres' or 'memory', got '{other}'"),
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if store == StoreKind::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when FLEET_STORE is postgres");
        }

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DB_MAX_CONNECTIONS is not a number: '{raw}'"))?,
            None => 5,
        };

        let acquire_secs = match lookup("DB_ACQUIRE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("DB_ACQUIRE_TIMEOUT_SECS is not a number: '{raw}'"))?,
            None => 3,
        };

        let server_addr = lookup("SERVER_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .trim()
            .parse::<SocketAddr>()
            .context("SERVER_ADDR must look like host:port")?;

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            store,
            database_url,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(acquire_secs),
            server_addr,
            cors_allowed_origins,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub fleet_service: FleetService,
    pub cost_service: CostService,
    pub income_service: IncomeService,
    pub dashboard_service: DashboardService,
    pub report_service: ReportService,
}

impl AppState {
    /// Connects the configured store (running migrations for Postgres).
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        let store: Arc<dyn FleetStore> = match settings.store {
            StoreKind::Postgres => {
                let database_url = settings
                    .database_url
                    .as_deref()
                    .context("DATABASE_URL is required for the postgres store")?;

                let pool = PgPoolOptions::new()
                    .max_connections(settings.db_max_connections)
                    .acquire_timeout(settings.db_acquire_timeout)
                    .connect(database_url)
                    .await
                    .context("Could not connect to the database")?;
                tracing::info!("Database connection established");

                sqlx::migrate!()
                    .run(&pool)
                    .await
                    .context("Database migrations failed")?;
                tracing::info!("Database migrations applied");

                Arc::new(PgFleetStore::new(pool))
            }
            StoreKind::Memory => {
                tracing::warn!("Using the in-memory store; data is lost on restart");
                Arc::new(InMemoryFleetStore::new())
            }
        };

        Ok(Self::from_store(store))
    }

    pub fn from_store(store: Arc<dyn FleetStore>) -> Self {
        Self {
            fleet_service: FleetService::new(store.clone()),
            cost_service: CostService::new(store.clone()),
            income_service: IncomeService::new(store.clone()),
            dashboard_service: DashboardService::new(store.clone()),
            report_service: ReportService::new(store),
        }
    }
}
