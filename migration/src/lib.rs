pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_user_table;
mod m20261019_000002_create_cart_table;
mod m20261019_000003_create_game_table;
mod m20261019_000004_create_purchase_table;
mod m20261019_000005_create_article_table;
mod m20261019_000006_create_sale_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_user_table::Migration),
            Box::new(m20261019_000002_create_cart_table::Migration),
            Box::new(m20261019_000003_create_game_table::Migration),
            Box::new(m20261019_000004_create_purchase_table::Migration),
            Box::new(m20261019_000005_create_article_table::Migration),
            Box::new(m20261019_000006_create_sale_table::Migration),
        ]
    }
}
