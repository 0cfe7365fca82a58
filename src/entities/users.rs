use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// UUIDv4, generated at creation and never changed afterwards.
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,

    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::emotions::Entity")]
    Emotions,

    #[sea_orm(has_one = "super::credit_limits::Entity")]
    CreditLimits,
}

impl Related<super::emotions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Emotions.def()
    }
}

impl Related<super::credit_limits::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreditLimits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
