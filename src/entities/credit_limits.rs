use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "credit_limits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub limit_id: i32,

    /// Unique: at most one limit row per user, replaced in place on upsert.
    #[sea_orm(unique)]
    pub user_id: String,

    /// Decimal string with exactly two fractional digits, e.g. "523.71".
    pub credit_limit: String,

    /// RFC 3339, refreshed on every upsert.
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::UserId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
