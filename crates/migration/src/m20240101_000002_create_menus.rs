//! Create `menus` table.
//!
//! Cascade delete on the category FK implements the "deleting a category
//! removes its menus" rule at the storage layer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menus::Table)
                    .if_not_exists()
                    .col(pk_auto(Menus::MenusId))
                    .col(integer(Menus::CategoryId).not_null())
                    .col(string_len(Menus::Name, 64).not_null())
                    .col(string_len(Menus::Description, 256).not_null())
                    .col(string_len(Menus::Image, 512).not_null())
                    .col(integer(Menus::Price).not_null())
                    .col(integer(Menus::Order).not_null())
                    .col(string_len(Menus::Status, 16).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menus_category")
                            .from(Menus::Table, Menus::CategoryId)
                            .to(Categories::Table, Categories::CategoryId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Menus::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Menus {
    Table,
    MenusId,
    CategoryId,
    Name,
    Description,
    Image,
    Price,
    Order,
    Status,
}

#[derive(DeriveIden)]
enum Categories { Table, CategoryId }
