use std::sync::Arc;

use models::menu::{self, MenuStatus};
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::category::repository::CategoryRepository;
use crate::errors::{Resource, ServiceError};
use crate::menu::repository::{MenuChanges, MenuRepository, NewMenu};

/// Registration payload. Price must be positive from the start; the
/// storage never holds a non-sellable price. Status defaults to FOR_SALE
/// when omitted; unknown status values are rejected at deserialization.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMenuInput {
    #[validate(length(min = 1, max = 15, message = "메뉴 이름은 1자 이상 15자 이하여야 합니다."))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "메뉴 설명은 1자 이상 50자 이하여야 합니다."))]
    pub description: String,
    #[validate(range(min = 1, message = "메뉴 가격은 0보다 작을 수 없습니다."))]
    pub price: i32,
    #[validate(length(min = 1, message = "이미지 경로가 필요합니다."))]
    pub image: String,
    pub status: Option<MenuStatus>,
}

/// Full update payload; every field is required and overwritten. Image is
/// deliberately absent, it is set once at registration.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMenuInput {
    #[validate(length(min = 1, max = 15, message = "메뉴 이름은 1자 이상 15자 이하여야 합니다."))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "메뉴 설명은 1자 이상 50자 이하여야 합니다."))]
    pub description: String,
    #[validate(range(min = 1, message = "메뉴 가격은 0보다 작을 수 없습니다."))]
    pub price: i32,
    #[validate(range(min = 1, message = "순서는 1 이상이어야 합니다."))]
    pub order: i32,
    pub status: MenuStatus,
}

/// Application service for menus. Every operation verifies the parent
/// category first; menu lookups are scoped by both ids so a menu cannot be
/// reached through someone else's category.
pub struct MenuService<M: MenuRepository, C: CategoryRepository> {
    menus: Arc<M>,
    categories: Arc<C>,
}

impl<M: MenuRepository, C: CategoryRepository> MenuService<M, C> {
    pub fn new(menus: Arc<M>, categories: Arc<C>) -> Self {
        Self { menus, categories }
    }

    async fn ensure_category(&self, category_id: i32) -> Result<(), ServiceError> {
        self.categories
            .find_by_id(category_id)
            .await?
            .map(|_| ())
            .ok_or(ServiceError::not_found(Resource::Category))
    }

    #[instrument(skip(self, input))]
    pub async fn register(
        &self,
        category_id: i32,
        input: CreateMenuInput,
    ) -> Result<menu::Model, ServiceError> {
        self.ensure_category(category_id).await?;
        input.validate()?;
        let new = NewMenu {
            name: input.name,
            description: input.description,
            image: input.image,
            price: input.price,
            status: input.status.unwrap_or_default(),
        };
        let created = self.menus.create(category_id, new).await?;
        info!(
            menus_id = created.menus_id,
            category_id,
            order = created.order,
            status = %created.status,
            "menu registered"
        );
        Ok(created)
    }

    pub async fn list(&self, category_id: i32) -> Result<Vec<menu::Model>, ServiceError> {
        self.ensure_category(category_id).await?;
        self.menus.find_by_category(category_id).await
    }

    pub async fn detail(&self, category_id: i32, menus_id: i32) -> Result<menu::Model, ServiceError> {
        self.ensure_category(category_id).await?;
        self.menus
            .find_scoped(category_id, menus_id)
            .await?
            .ok_or(ServiceError::not_found(Resource::Menu))
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        category_id: i32,
        menus_id: i32,
        input: UpdateMenuInput,
    ) -> Result<menu::Model, ServiceError> {
        input.validate()?;
        self.ensure_category(category_id).await?;
        let changes = MenuChanges {
            name: input.name,
            description: input.description,
            price: input.price,
            order: input.order,
            status: input.status,
        };
        self.menus
            .update(category_id, menus_id, changes)
            .await?
            .ok_or(ServiceError::not_found(Resource::Menu))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, category_id: i32, menus_id: i32) -> Result<(), ServiceError> {
        self.ensure_category(category_id).await?;
        if !self.menus.delete(category_id, menus_id).await? {
            return Err(ServiceError::not_found(Resource::Menu));
        }
        info!(category_id, menus_id, "menu deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MemoryStore, MockCategoryRepository, MockMenuRepository};

    struct Fixture {
        categories: Arc<MockCategoryRepository>,
        svc: MenuService<MockMenuRepository, MockCategoryRepository>,
    }

    fn fixture() -> Fixture {
        let store = MemoryStore::shared();
        let categories = Arc::new(MockCategoryRepository::new(Arc::clone(&store)));
        let menus = Arc::new(MockMenuRepository::new(store));
        let svc = MenuService::new(menus, Arc::clone(&categories));
        Fixture { categories, svc }
    }

    fn americano() -> CreateMenuInput {
        CreateMenuInput {
            name: "아메리카노".into(),
            description: "깊고 진한 에스프레소".into(),
            price: 4000,
            image: "a.png".into(),
            status: None,
        }
    }

    fn full_update(price: i32) -> UpdateMenuInput {
        UpdateMenuInput {
            name: "아메리카노".into(),
            description: "깊고 진한 에스프레소".into(),
            price,
            order: 1,
            status: MenuStatus::SoldOut,
        }
    }

    #[tokio::test]
    async fn register_defaults_to_for_sale_and_assigns_order() {
        let f = fixture();
        let cat = f.categories.create("음료").await.unwrap();
        let first = f.svc.register(cat.category_id, americano()).await.unwrap();
        assert_eq!(first.status, "FOR_SALE");
        assert_eq!(first.order, 1);
        let second = f
            .svc
            .register(
                cat.category_id,
                CreateMenuInput { name: "라떼".into(), ..americano() },
            )
            .await
            .unwrap();
        assert_eq!(second.order, 2);
    }

    #[tokio::test]
    async fn order_is_scoped_per_category() {
        let f = fixture();
        let drinks = f.categories.create("음료").await.unwrap();
        let desserts = f.categories.create("디저트").await.unwrap();
        f.svc.register(drinks.category_id, americano()).await.unwrap();
        f.svc.register(drinks.category_id, americano()).await.unwrap();
        let cake = f
            .svc
            .register(
                desserts.category_id,
                CreateMenuInput { name: "케이크".into(), ..americano() },
            )
            .await
            .unwrap();
        // first menu of its own category, not third globally
        assert_eq!(cake.order, 1);
    }

    #[tokio::test]
    async fn register_under_missing_category_is_not_found() {
        let f = fixture();
        let err = f.svc.register(7, americano()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(Resource::Category)));
    }

    #[tokio::test]
    async fn register_rejects_invalid_fields() {
        let f = fixture();
        let cat = f.categories.create("음료").await.unwrap();
        let too_long = CreateMenuInput { name: "열다섯글자를넘어가는메뉴이름입니다".into(), ..americano() };
        let err = f.svc.register(cat.category_id, too_long).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let free = CreateMenuInput { price: 0, ..americano() };
        let err = f.svc.register(cat.category_id, free).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        assert!(f.svc.list(cat.category_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_returns_only_that_categorys_menus() {
        let f = fixture();
        let drinks = f.categories.create("음료").await.unwrap();
        let desserts = f.categories.create("디저트").await.unwrap();
        f.svc.register(drinks.category_id, americano()).await.unwrap();
        f.svc
            .register(
                desserts.category_id,
                CreateMenuInput { name: "케이크".into(), ..americano() },
            )
            .await
            .unwrap();
        let listed = f.svc.list(drinks.category_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "아메리카노");
    }

    #[tokio::test]
    async fn list_of_missing_category_is_not_found() {
        let f = fixture();
        let err = f.svc.list(3).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(Resource::Category)));
    }

    #[tokio::test]
    async fn detail_of_missing_menu_is_not_found() {
        let f = fixture();
        let cat = f.categories.create("음료").await.unwrap();
        let err = f.svc.detail(cat.category_id, 404).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(Resource::Menu)));
    }

    #[tokio::test]
    async fn detail_is_scoped_to_the_category() {
        let f = fixture();
        let drinks = f.categories.create("음료").await.unwrap();
        let desserts = f.categories.create("디저트").await.unwrap();
        let m = f.svc.register(drinks.category_id, americano()).await.unwrap();
        // reachable through its own category only
        assert!(f.svc.detail(drinks.category_id, m.menus_id).await.is_ok());
        let err = f.svc.detail(desserts.category_id, m.menus_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(Resource::Menu)));
    }

    #[tokio::test]
    async fn update_rejects_non_positive_price_and_keeps_row() {
        let f = fixture();
        let cat = f.categories.create("음료").await.unwrap();
        let m = f.svc.register(cat.category_id, americano()).await.unwrap();

        let err = f
            .svc
            .update(cat.category_id, m.menus_id, full_update(-100))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let unchanged = f.svc.detail(cat.category_id, m.menus_id).await.unwrap();
        assert_eq!(unchanged.price, 4000);
        assert_eq!(unchanged.status, "FOR_SALE");
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let f = fixture();
        let cat = f.categories.create("음료").await.unwrap();
        let m = f.svc.register(cat.category_id, americano()).await.unwrap();
        let updated = f
            .svc
            .update(cat.category_id, m.menus_id, full_update(4500))
            .await
            .unwrap();
        assert_eq!(updated.price, 4500);
        assert_eq!(updated.status, "SOLD_OUT");
        // image untouched by updates
        assert_eq!(updated.image, "a.png");
    }

    #[tokio::test]
    async fn update_missing_menu_is_not_found() {
        let f = fixture();
        let cat = f.categories.create("음료").await.unwrap();
        let err = f
            .svc
            .update(cat.category_id, 77, full_update(4500))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(Resource::Menu)));
    }

    #[tokio::test]
    async fn delete_missing_menu_is_not_found() {
        let f = fixture();
        let cat = f.categories.create("음료").await.unwrap();
        let err = f.svc.delete(cat.category_id, 5).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(Resource::Menu)));
    }

    #[test]
    fn create_input_parses_wire_payloads() {
        let input: CreateMenuInput = serde_json::from_value(serde_json::json!({
            "name": "아메리카노",
            "description": "깊고 진한 에스프레소",
            "price": 4000,
            "image": "a.png"
        }))
        .unwrap();
        assert!(input.status.is_none());

        let with_status: CreateMenuInput = serde_json::from_value(serde_json::json!({
            "name": "아메리카노",
            "description": "깊고 진한 에스프레소",
            "price": 4000,
            "image": "a.png",
            "status": "SOLD_OUT"
        }))
        .unwrap();
        assert_eq!(with_status.status, Some(MenuStatus::SoldOut));

        // unknown states never reach the service
        let bad = serde_json::from_value::<CreateMenuInput>(serde_json::json!({
            "name": "아메리카노",
            "description": "깊고 진한 에스프레소",
            "price": 4000,
            "image": "a.png",
            "status": "PAUSED"
        }));
        assert!(bad.is_err());
    }

    #[tokio::test]
    async fn deleting_category_cascades_to_menus() {
        let f = fixture();
        let cat = f.categories.create("음료").await.unwrap();
        let a = f.svc.register(cat.category_id, americano()).await.unwrap();
        let b = f
            .svc
            .register(cat.category_id, CreateMenuInput { name: "라떼".into(), ..americano() })
            .await
            .unwrap();
        assert!(f.categories.delete(cat.category_id).await.unwrap());
        // both menus unreachable afterwards (category gone, rows cascaded)
        for id in [a.menus_id, b.menus_id] {
            let err = f.svc.detail(cat.category_id, id).await.unwrap_err();
            assert!(matches!(err, ServiceError::NotFound(Resource::Category)));
        }
    }
}
