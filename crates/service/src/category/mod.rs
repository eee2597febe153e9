pub mod repository;
pub mod service;

pub use repository::{CategoryRepository, SeaOrmCategoryRepository};
pub use service::{CategoryService, CreateCategoryInput, UpdateCategoryInput};
