use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::entities::users;

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a freshly generated user. Fails on a primary-key collision,
    /// which is not expected in practice since the id is generated per call.
    pub async fn insert(&self, user_id: Uuid, name: &str) -> Result<()> {
        let user = users::ActiveModel {
            user_id: Set(user_id.to_string()),
            name: Set(name.to_string()),
        };

        user.insert(&self.conn)
            .await
            .context("Failed to insert user")?;

        Ok(())
    }

    pub async fn get_by_id(&self, user_id: Uuid) -> Result<Option<users::Model>> {
        users::Entity::find_by_id(user_id.to_string())
            .one(&self.conn)
            .await
            .context("Failed to query user by id")
    }

    pub async fn list_all(&self) -> Result<Vec<users::Model>> {
        users::Entity::find()
            .all(&self.conn)
            .await
            .context("Failed to list users")
    }
}
