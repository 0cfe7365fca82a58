use sea_orm_migration::prelude::*;

mod m20241013_create_users_and_emotions;
mod m20241014_add_credit_limits;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241013_create_users_and_emotions::Migration),
            Box::new(m20241014_add_credit_limits::Migration),
        ]
    }
}
