use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Menus: index on category_id for per-category listing and cascade
        manager
            .create_index(
                Index::create()
                    .name("idx_menus_category")
                    .table(Menus::Table)
                    .col(Menus::CategoryId)
                    .to_owned(),
            )
            .await?;

        // Menus: composite index for per-category order scans
        manager
            .create_index(
                Index::create()
                    .name("idx_menus_category_order")
                    .table(Menus::Table)
                    .col(Menus::CategoryId)
                    .col(Menus::Order)
                    .to_owned(),
            )
            .await?;

        // Categories: index on order for sorted listing
        manager
            .create_index(
                Index::create()
                    .name("idx_categories_order")
                    .table(Categories::Table)
                    .col(Categories::Order)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_menus_category").table(Menus::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_menus_category_order").table(Menus::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_categories_order").table(Categories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Menus { Table, CategoryId, Order }

#[derive(DeriveIden)]
enum Categories { Table, Order }
