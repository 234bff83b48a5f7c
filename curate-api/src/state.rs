//! Application state for the API server

use curate_db::{ContributorService, Database, DbError, ListService};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::middleware::auth::{AuthState, JwtConfig};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// List Manager
    pub lists: Arc<ListService>,
    /// Contributor Manager
    pub contributors: Arc<ContributorService>,
    /// Database facade (used by readiness checks)
    pub database: Arc<Database>,
    /// Auth config shared with the middleware
    pub auth: AuthState,
    /// API version
    pub version: String,
}

impl AppState {
    /// Create new app state from a connected pool
    pub async fn new(pool: SqlitePool, jwt: JwtConfig) -> Result<Self, DbError> {
        let database = Arc::new(Database::new(pool));

        database.init_schema().await?;

        let contributors = Arc::new(ContributorService::new(database.clone()));
        let lists = Arc::new(ListService::new(database.clone(), contributors.clone()));

        Ok(Self {
            lists,
            contributors,
            database,
            auth: AuthState::new(jwt),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub database_url: String,
    pub jwt_secret: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            enable_cors: true,
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: String::new(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for everything except the JWT secret, which is required.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let defaults = Self::default();

        let jwt_secret = JwtConfig::try_from_env("CURATE_JWT_SECRET")?.secret;

        Ok(Self {
            host: std::env::var("CURATE_HOST").unwrap_or(defaults.host),
            port: std::env::var("CURATE_PORT")
                .ok()
                .map(|p| p.parse())
                .transpose()?
                .unwrap_or(defaults.port),
            enable_cors: std::env::var("CURATE_ENABLE_CORS")
                .map(|v| v != "0" && v != "false")
                .unwrap_or(defaults.enable_cors),
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            jwt_secret,
        })
    }
}
