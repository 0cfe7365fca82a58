use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::credit_limits;

pub struct CreditLimitRepository {
    conn: DatabaseConnection,
}

impl CreditLimitRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<credit_limits::Model>> {
        credit_limits::Entity::find()
            .all(&self.conn)
            .await
            .context("Failed to list credit limits")
    }

    /// Most recently updated limit for a user. The unique constraint keeps
    /// this to at most one row, but ordering by recency matches the read
    /// contract.
    pub async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<credit_limits::Model>> {
        credit_limits::Entity::find()
            .filter(credit_limits::Column::UserId.eq(user_id.to_string()))
            .order_by_desc(credit_limits::Column::UpdatedAt)
            .one(&self.conn)
            .await
            .context("Failed to query credit limit for user")
    }
}
