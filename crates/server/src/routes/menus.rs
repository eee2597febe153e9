use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::menu;
use serde::Serialize;
use serde_json::{json, Value};
use service::menu::{CreateMenuInput, UpdateMenuInput};

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::routes::AppState;

/// Listing view of a menu: no description, that is detail-only.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSummary {
    pub menus_id: i32,
    pub category_id: i32,
    pub name: String,
    pub image: String,
    pub price: i32,
    pub order: i32,
    pub status: String,
}

impl From<menu::Model> for MenuSummary {
    fn from(m: menu::Model) -> Self {
        Self {
            menus_id: m.menus_id,
            category_id: m.category_id,
            name: m.name,
            image: m.image,
            price: m.price,
            order: m.order,
            status: m.status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDetail {
    pub menus_id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: i32,
    pub order: i32,
    pub status: String,
}

impl From<menu::Model> for MenuDetail {
    fn from(m: menu::Model) -> Self {
        Self {
            menus_id: m.menus_id,
            name: m.name,
            description: m.description,
            image: m.image,
            price: m.price,
            order: m.order,
            status: m.status,
        }
    }
}

pub async fn register(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    ApiJson(input): ApiJson<CreateMenuInput>,
) -> Result<Json<Value>, JsonApiError> {
    state.menus.register(category_id, input).await?;
    Ok(Json(json!({ "message": "메뉴를 등록하였습니다." })))
}

pub async fn list(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<Json<Value>, JsonApiError> {
    let data: Vec<MenuSummary> = state
        .menus
        .list(category_id)
        .await?
        .into_iter()
        .map(MenuSummary::from)
        .collect();
    Ok(Json(json!({ "data": data })))
}

pub async fn detail(
    State(state): State<AppState>,
    Path((category_id, menus_id)): Path<(i32, i32)>,
) -> Result<Json<Value>, JsonApiError> {
    let data = MenuDetail::from(state.menus.detail(category_id, menus_id).await?);
    Ok(Json(json!({ "data": data })))
}

pub async fn update(
    State(state): State<AppState>,
    Path((category_id, menus_id)): Path<(i32, i32)>,
    ApiJson(input): ApiJson<UpdateMenuInput>,
) -> Result<Json<Value>, JsonApiError> {
    state.menus.update(category_id, menus_id, input).await?;
    Ok(Json(json!({ "message": "수정완료" })))
}

pub async fn remove(
    State(state): State<AppState>,
    Path((category_id, menus_id)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    state.menus.delete(category_id, menus_id).await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "삭제되었습니다." }))))
}
