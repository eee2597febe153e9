use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use service::category::{CreateCategoryInput, UpdateCategoryInput};

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::routes::AppState;

pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCategoryInput>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    state.categories.register(input).await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "카테고리를 등록하였습니다." }))))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, JsonApiError> {
    let data = state.categories.list().await?;
    Ok(Json(json!({ "data": data })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    ApiJson(input): ApiJson<UpdateCategoryInput>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    state.categories.update(category_id, input).await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "카테고리 정보를 수정하였습니다." }))))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    state.categories.delete(category_id).await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "데이터가 삭제되었습니다." }))))
}
