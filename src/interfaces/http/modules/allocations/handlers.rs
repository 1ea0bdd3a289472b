//! Allocation REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use super::dto::{AllocationResponse, RunAllocationRequest};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::router::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/buildings/{building_id}/allocations",
    tag = "Allocations",
    params(("building_id" = i32, Path, description = "Building ID")),
    request_body = RunAllocationRequest,
    responses(
        (status = 201, description = "Allocation computed and stored", body = ApiResponse<AllocationResponse>),
        (status = 404, description = "Referenced record not found"),
        (status = 422, description = "Inconsistent inputs or computation failure")
    )
)]
pub async fn run_allocation(
    State(state): State<AppState>,
    Path(building_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<RunAllocationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AllocationResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    match state.allocation.allocate(req.into_command(building_id)).await {
        Ok(result) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(result.into())),
        )),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/allocations/{id}",
    tag = "Allocations",
    params(("id" = i32, Path, description = "Allocation result ID")),
    responses(
        (status = 200, description = "Allocation audit record", body = ApiResponse<AllocationResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_allocation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<AllocationResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.allocation.get_allocation(id).await {
        Ok(Some(result)) => Ok(Json(ApiResponse::success(result.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Allocation {} not found", id))),
        )),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/buildings/{building_id}/allocations",
    tag = "Allocations",
    params(("building_id" = i32, Path, description = "Building ID")),
    responses(
        (status = 200, description = "Allocation history for the building", body = ApiResponse<Vec<AllocationResponse>>)
    )
)]
pub async fn list_allocations(
    State(state): State<AppState>,
    Path(building_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<AllocationResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.allocation.list_for_building(building_id).await {
        Ok(results) => {
            let responses: Vec<AllocationResponse> = results.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(domain_error(e)),
    }
}
