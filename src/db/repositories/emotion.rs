use anyhow::{Context, Result};
use sea_orm::{DatabaseConnection, EntityTrait, Set, TransactionTrait};
use uuid::Uuid;

use crate::entities::{credit_limits, emotions};
use crate::limits::EmotionKind;

pub struct EmotionRepository {
    conn: DatabaseConnection,
}

impl EmotionRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<emotions::Model>> {
        emotions::Entity::find()
            .all(&self.conn)
            .await
            .context("Failed to list emotions")
    }

    /// Insert the emotion row and upsert the user's credit limit atomically.
    ///
    /// Both statements run inside a single transaction, so a failed upsert
    /// rolls the emotion insert back instead of leaving the limit stale.
    /// The upsert's conflict target is the unique constraint on
    /// credit_limits.user_id; concurrent writers for the same user collapse
    /// to one row, last commit wins.
    pub async fn record_with_limit(
        &self,
        user_id: Uuid,
        kind: EmotionKind,
        intensity: i32,
        credit_limit: &str,
    ) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();

        let txn = self.conn.begin().await?;

        emotions::Entity::insert(emotions::ActiveModel {
            user_id: Set(user_id.to_string()),
            emotion_type: Set(kind.as_str().to_string()),
            intensity: Set(intensity),
            created_at: Set(now.clone()),
            ..Default::default()
        })
        .exec(&txn)
        .await
        .context("Failed to insert emotion")?;

        credit_limits::Entity::insert(credit_limits::ActiveModel {
            user_id: Set(user_id.to_string()),
            credit_limit: Set(credit_limit.to_string()),
            updated_at: Set(now),
            ..Default::default()
        })
        .on_conflict(
            sea_orm::sea_query::OnConflict::column(credit_limits::Column::UserId)
                .update_columns([
                    credit_limits::Column::CreditLimit,
                    credit_limits::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(&txn)
        .await
        .context("Failed to upsert credit limit")?;

        txn.commit().await?;
        Ok(())
    }
}
