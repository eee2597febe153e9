use async_trait::async_trait;
use models::menu::{self, MenuStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::errors::ServiceError;

/// Fields for a new menu row. `order` is assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewMenu {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: i32,
    pub status: MenuStatus,
}

/// Full overwrite payload for an update. Image is not updatable through
/// this path, matching the public contract.
#[derive(Debug, Clone)]
pub struct MenuChanges {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub order: i32,
    pub status: MenuStatus,
}

/// Repository abstraction for menu persistence. All lookups are scoped to
/// the owning category.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Menus of one category, sorted by `order` ascending.
    async fn find_by_category(&self, category_id: i32) -> Result<Vec<menu::Model>, ServiceError>;
    async fn find_scoped(
        &self,
        category_id: i32,
        menus_id: i32,
    ) -> Result<Option<menu::Model>, ServiceError>;
    /// Insert with `order` = per-category max + 1 (1 when the category has
    /// no menus), read and written atomically.
    async fn create(&self, category_id: i32, new: NewMenu) -> Result<menu::Model, ServiceError>;
    /// Overwrite the menu scoped by both ids; `None` when no row matches.
    async fn update(
        &self,
        category_id: i32,
        menus_id: i32,
        changes: MenuChanges,
    ) -> Result<Option<menu::Model>, ServiceError>;
    /// Returns false when no row matched.
    async fn delete(&self, category_id: i32, menus_id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmMenuRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmMenuRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuRepository for SeaOrmMenuRepository {
    async fn find_by_category(&self, category_id: i32) -> Result<Vec<menu::Model>, ServiceError> {
        menu::Entity::find()
            .filter(menu::Column::CategoryId.eq(category_id))
            .order_by_asc(menu::Column::Order)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_scoped(
        &self,
        category_id: i32,
        menus_id: i32,
    ) -> Result<Option<menu::Model>, ServiceError> {
        menu::Entity::find_by_id(menus_id)
            .filter(menu::Column::CategoryId.eq(category_id))
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn create(&self, category_id: i32, new: NewMenu) -> Result<menu::Model, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;
        let last = menu::Entity::find()
            .filter(menu::Column::CategoryId.eq(category_id))
            .order_by_desc(menu::Column::Order)
            .one(&txn)
            .await
            .map_err(ServiceError::db)?;
        let next_order = last.map_or(1, |m| m.order + 1);
        let created = menu::ActiveModel {
            category_id: Set(category_id),
            name: Set(new.name),
            description: Set(new.description),
            image: Set(new.image),
            price: Set(new.price),
            order: Set(next_order),
            status: Set(new.status.as_str().to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(ServiceError::db)?;
        txn.commit().await.map_err(ServiceError::db)?;
        Ok(created)
    }

    async fn update(
        &self,
        category_id: i32,
        menus_id: i32,
        changes: MenuChanges,
    ) -> Result<Option<menu::Model>, ServiceError> {
        let Some(found) = self.find_scoped(category_id, menus_id).await? else {
            return Ok(None);
        };
        let mut am: menu::ActiveModel = found.into();
        am.name = Set(changes.name);
        am.description = Set(changes.description);
        am.price = Set(changes.price);
        am.order = Set(changes.order);
        am.status = Set(changes.status.as_str().to_string());
        let updated = am.update(&self.db).await.map_err(ServiceError::db)?;
        Ok(Some(updated))
    }

    async fn delete(&self, category_id: i32, menus_id: i32) -> Result<bool, ServiceError> {
        let res = menu::Entity::delete_many()
            .filter(menu::Column::MenusId.eq(menus_id))
            .filter(menu::Column::CategoryId.eq(category_id))
            .exec(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}
