pub mod repository;
pub mod service;

pub use repository::{MenuChanges, MenuRepository, NewMenu, SeaOrmMenuRepository};
pub use service::{CreateMenuInput, MenuService, UpdateMenuInput};
