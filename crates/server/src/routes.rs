use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::category::{CategoryService, SeaOrmCategoryRepository};
use service::menu::{MenuService, SeaOrmMenuRepository};

pub mod categories;
pub mod menus;

/// Shared handler state: one service per entity, both backed by the same
/// SeaORM connection pool.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CategoryService<SeaOrmCategoryRepository>>,
    pub menus: Arc<MenuService<SeaOrmMenuRepository, SeaOrmCategoryRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let category_repo = Arc::new(SeaOrmCategoryRepository::new(db.clone()));
        let menu_repo = Arc::new(SeaOrmMenuRepository::new(db));
        Self {
            categories: Arc::new(CategoryService::new(Arc::clone(&category_repo))),
            menus: Arc::new(MenuService::new(menu_repo, category_repo)),
        }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { message: "ok" })
}

/// Build the full application router: liveness at `/`, the CRUD surface
/// under `/api`.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/categories", post(categories::register).get(categories::list))
        .route(
            "/categories/:category_id",
            put(categories::update).delete(categories::remove),
        )
        .route(
            "/categories/:category_id/menus",
            post(menus::register).get(menus::list),
        )
        .route(
            "/categories/:category_id/menus/:menus_id",
            get(menus::detail).put(menus::update).delete(menus::remove),
        );

    Router::new()
        .route("/", get(health))
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
