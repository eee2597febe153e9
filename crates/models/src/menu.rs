use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::category;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menus")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub menus_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: i32,
    pub order: i32,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Category,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::CategoryId)
                .into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Sale status of a menu item. FOR_SALE is the only initial state;
/// transitions are unrestricted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuStatus {
    #[default]
    ForSale,
    SoldOut,
}

impl MenuStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuStatus::ForSale => "FOR_SALE",
            MenuStatus::SoldOut => "SOLD_OUT",
        }
    }
}
