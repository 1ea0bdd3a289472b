//! Building REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::dto::{BuildingResponse, CreateBuildingRequest};
use crate::domain::Building;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::router::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/buildings",
    tag = "Buildings",
    responses(
        (status = 200, description = "Building list", body = ApiResponse<Vec<BuildingResponse>>)
    )
)]
pub async fn list_buildings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BuildingResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.buildings().find_all().await {
        Ok(buildings) => {
            let responses: Vec<BuildingResponse> = buildings.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/buildings/{id}",
    tag = "Buildings",
    params(("id" = i32, Path, description = "Building ID")),
    responses(
        (status = 200, description = "Building details", body = ApiResponse<BuildingResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_building(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<BuildingResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.buildings().find_by_id(id).await {
        Ok(Some(building)) => Ok(Json(ApiResponse::success(building.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Building {} not found", id))),
        )),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/buildings",
    tag = "Buildings",
    request_body = CreateBuildingRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<BuildingResponse>),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_building(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateBuildingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BuildingResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let building = Building {
        id: 0,
        name: req.name,
        units: req.units,
        created_at: Utc::now(),
    };

    match state.repos.buildings().save(building).await {
        Ok(saved) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(saved.into())),
        )),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/buildings/{id}",
    tag = "Buildings",
    params(("id" = i32, Path, description = "Building ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<String>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_building(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.buildings().delete(id).await {
        Ok(()) => Ok(Json(ApiResponse::success(format!(
            "Building {} deleted",
            id
        )))),
        Err(e) => Err(domain_error(e)),
    }
}
