//! In-memory repositories for tests and doc examples.
//!
//! Both repositories share one [`MemoryStore`] so the category→menu
//! referential rule (delete cascade) behaves like the real schema.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use models::{category, menu};

use crate::category::repository::CategoryRepository;
use crate::errors::ServiceError;
use crate::menu::repository::{MenuChanges, MenuRepository, NewMenu};

#[derive(Default)]
struct Tables {
    categories: Vec<category::Model>,
    menus: Vec<menu::Model>,
    next_category_id: i32,
    next_menus_id: i32,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

pub struct MockCategoryRepository {
    store: Arc<MemoryStore>,
}

impl MockCategoryRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn find_all(&self) -> Result<Vec<category::Model>, ServiceError> {
        let t = self.store.tables.lock().unwrap();
        let mut all = t.categories.clone();
        all.sort_by_key(|c| c.order);
        Ok(all)
    }

    async fn find_by_id(&self, category_id: i32) -> Result<Option<category::Model>, ServiceError> {
        let t = self.store.tables.lock().unwrap();
        Ok(t.categories.iter().find(|c| c.category_id == category_id).cloned())
    }

    async fn create(&self, name: &str) -> Result<category::Model, ServiceError> {
        let mut t = self.store.tables.lock().unwrap();
        t.next_category_id += 1;
        let order = t.categories.iter().map(|c| c.order).max().map_or(1, |o| o + 1);
        let row = category::Model {
            category_id: t.next_category_id,
            name: name.to_string(),
            order,
        };
        t.categories.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        category_id: i32,
        name: &str,
        order: i32,
    ) -> Result<Option<category::Model>, ServiceError> {
        let mut t = self.store.tables.lock().unwrap();
        match t.categories.iter_mut().find(|c| c.category_id == category_id) {
            Some(row) => {
                row.name = name.to_string();
                row.order = order;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, category_id: i32) -> Result<bool, ServiceError> {
        let mut t = self.store.tables.lock().unwrap();
        let before = t.categories.len();
        t.categories.retain(|c| c.category_id != category_id);
        if t.categories.len() == before {
            return Ok(false);
        }
        // cascade, as the FK would
        t.menus.retain(|m| m.category_id != category_id);
        Ok(true)
    }
}

pub struct MockMenuRepository {
    store: Arc<MemoryStore>,
}

impl MockMenuRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MenuRepository for MockMenuRepository {
    async fn find_by_category(&self, category_id: i32) -> Result<Vec<menu::Model>, ServiceError> {
        let t = self.store.tables.lock().unwrap();
        let mut rows: Vec<menu::Model> = t
            .menus
            .iter()
            .filter(|m| m.category_id == category_id)
            .cloned()
            .collect();
        rows.sort_by_key(|m| m.order);
        Ok(rows)
    }

    async fn find_scoped(
        &self,
        category_id: i32,
        menus_id: i32,
    ) -> Result<Option<menu::Model>, ServiceError> {
        let t = self.store.tables.lock().unwrap();
        Ok(t.menus
            .iter()
            .find(|m| m.menus_id == menus_id && m.category_id == category_id)
            .cloned())
    }

    async fn create(&self, category_id: i32, new: NewMenu) -> Result<menu::Model, ServiceError> {
        let mut t = self.store.tables.lock().unwrap();
        t.next_menus_id += 1;
        let order = t
            .menus
            .iter()
            .filter(|m| m.category_id == category_id)
            .map(|m| m.order)
            .max()
            .map_or(1, |o| o + 1);
        let row = menu::Model {
            menus_id: t.next_menus_id,
            category_id,
            name: new.name,
            description: new.description,
            image: new.image,
            price: new.price,
            order,
            status: new.status.as_str().to_string(),
        };
        t.menus.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        category_id: i32,
        menus_id: i32,
        changes: MenuChanges,
    ) -> Result<Option<menu::Model>, ServiceError> {
        let mut t = self.store.tables.lock().unwrap();
        match t
            .menus
            .iter_mut()
            .find(|m| m.menus_id == menus_id && m.category_id == category_id)
        {
            Some(row) => {
                row.name = changes.name;
                row.description = changes.description;
                row.price = changes.price;
                row.order = changes.order;
                row.status = changes.status.as_str().to_string();
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, category_id: i32, menus_id: i32) -> Result<bool, ServiceError> {
        let mut t = self.store.tables.lock().unwrap();
        let before = t.menus.len();
        t.menus
            .retain(|m| !(m.menus_id == menus_id && m.category_id == category_id));
        Ok(t.menus.len() != before)
    }
}
