use async_trait::async_trait;
use models::category;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};

use crate::errors::ServiceError;

/// Repository abstraction for category persistence.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, sorted by `order` ascending.
    async fn find_all(&self) -> Result<Vec<category::Model>, ServiceError>;
    async fn find_by_id(&self, category_id: i32) -> Result<Option<category::Model>, ServiceError>;
    /// Insert with `order` = current max + 1 (1 when empty). The read and
    /// the write happen atomically so concurrent registrations cannot
    /// assign the same slot.
    async fn create(&self, name: &str) -> Result<category::Model, ServiceError>;
    /// Overwrite name and order; `None` when no row matches.
    async fn update(
        &self,
        category_id: i32,
        name: &str,
        order: i32,
    ) -> Result<Option<category::Model>, ServiceError>;
    /// Delete; menus referencing the category go with it (FK cascade).
    /// Returns false when no row matched.
    async fn delete(&self, category_id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCategoryRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn find_all(&self) -> Result<Vec<category::Model>, ServiceError> {
        category::Entity::find()
            .order_by_asc(category::Column::Order)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_by_id(&self, category_id: i32) -> Result<Option<category::Model>, ServiceError> {
        category::Entity::find_by_id(category_id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn create(&self, name: &str) -> Result<category::Model, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;
        let last = category::Entity::find()
            .order_by_desc(category::Column::Order)
            .one(&txn)
            .await
            .map_err(ServiceError::db)?;
        let next_order = last.map_or(1, |c| c.order + 1);
        let created = category::ActiveModel {
            name: Set(name.to_string()),
            order: Set(next_order),
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
        name: &str,
        order: i32,
    ) -> Result<Option<category::Model>, ServiceError> {
        let Some(found) = category::Entity::find_by_id(category_id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?
        else {
            return Ok(None);
        };
        let mut am: category::ActiveModel = found.into();
        am.name = Set(name.to_string());
        am.order = Set(order);
        let updated = am.update(&self.db).await.map_err(ServiceError::db)?;
        Ok(Some(updated))
    }

    async fn delete(&self, category_id: i32) -> Result<bool, ServiceError> {
        let res = category::Entity::delete_by_id(category_id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}
