use std::sync::Arc;

use models::category;
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::errors::{Resource, ServiceError};
use crate::category::repository::CategoryRepository;

/// Registration payload. Name length is counted in characters, matching the
/// 1..=10 rule of the public contract.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryInput {
    #[validate(length(min = 1, max = 10, message = "카테고리 이름은 1자 이상 10자 이하여야 합니다."))]
    pub name: String,
}

/// Update payload; both fields are required together. `order` starts at 1,
/// which also rejects the zero boundary explicitly instead of treating it
/// as a missing value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryInput {
    #[validate(length(min = 1, max = 10, message = "카테고리 이름은 1자 이상 10자 이하여야 합니다."))]
    pub name: String,
    #[validate(range(min = 1, message = "순서는 1 이상이어야 합니다."))]
    pub order: i32,
}

/// Application service encapsulating category business rules: payload
/// validation, sequential order assignment, and existence checks.
pub struct CategoryService<R: CategoryRepository> {
    repo: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, input))]
    pub async fn register(&self, input: CreateCategoryInput) -> Result<category::Model, ServiceError> {
        input.validate()?;
        let created = self.repo.create(&input.name).await?;
        info!(category_id = created.category_id, order = created.order, "category registered");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<category::Model>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        category_id: i32,
        input: UpdateCategoryInput,
    ) -> Result<category::Model, ServiceError> {
        input.validate()?;
        self.repo
            .update(category_id, &input.name, input.order)
            .await?
            .ok_or(ServiceError::not_found(Resource::Category))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, category_id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(category_id).await? {
            return Err(ServiceError::not_found(Resource::Category));
        }
        info!(category_id, "category deleted");
        Ok(())
    }
}
