use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::entities::{credit_limits, emotions, users};
use crate::limits::EmotionKind;

pub mod migrator;
pub mod repositories;

/// Persistence gateway. Owns the connection pool; all reads and writes go
/// through the per-table repositories below.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn emotion_repo(&self) -> repositories::emotion::EmotionRepository {
        repositories::emotion::EmotionRepository::new(self.conn.clone())
    }

    fn credit_limit_repo(&self) -> repositories::credit_limit::CreditLimitRepository {
        repositories::credit_limit::CreditLimitRepository::new(self.conn.clone())
    }

    pub async fn insert_user(&self, user_id: Uuid, name: &str) -> Result<()> {
        self.user_repo().insert(user_id, name).await
    }

    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<users::Model>> {
        self.user_repo().get_by_id(user_id).await
    }

    pub async fn list_users(&self) -> Result<Vec<users::Model>> {
        self.user_repo().list_all().await
    }

    pub async fn list_emotions(&self) -> Result<Vec<emotions::Model>> {
        self.emotion_repo().list_all().await
    }

    /// Insert an emotion and upsert the owning user's credit limit in one
    /// transaction: either both rows land or neither does.
    pub async fn record_emotion(
        &self,
        user_id: Uuid,
        kind: EmotionKind,
        intensity: i32,
        credit_limit: &str,
    ) -> Result<()> {
        self.emotion_repo()
            .record_with_limit(user_id, kind, intensity, credit_limit)
            .await
    }

    pub async fn list_credit_limits(&self) -> Result<Vec<credit_limits::Model>> {
        self.credit_limit_repo().list_all().await
    }

    pub async fn latest_credit_limit(
        &self,
        user_id: Uuid,
    ) -> Result<Option<credit_limits::Model>> {
        self.credit_limit_repo().latest_for_user(user_id).await
    }
}
