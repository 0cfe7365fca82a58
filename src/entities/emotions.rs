use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "emotions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub emotion_id: i32,

    pub user_id: String,

    /// "positive" or "negative"
    pub emotion_type: String,

    /// Integer in [1,10], validated before write.
    pub intensity: i32,

    /// RFC 3339, set at write time. Rows are immutable once created.
    pub created_at: String,
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
