//! Usage snapshot REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::dto::{CreateSnapshotRequest, SnapshotResponse};
use crate::domain::usage::{UnitReading, UsageSnapshot};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::router::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/buildings/{building_id}/snapshots",
    tag = "Snapshots",
    params(("building_id" = i32, Path, description = "Building ID")),
    responses(
        (status = 200, description = "Snapshots in reading-date order", body = ApiResponse<Vec<SnapshotResponse>>)
    )
)]
pub async fn list_snapshots(
    State(state): State<AppState>,
    Path(building_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<SnapshotResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.usages().find_for_building(building_id).await {
        Ok(snapshots) => {
            let responses: Vec<SnapshotResponse> = snapshots.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/snapshots/{id}",
    tag = "Snapshots",
    params(("id" = i32, Path, description = "Snapshot ID")),
    responses(
        (status = 200, description = "Snapshot with readings", body = ApiResponse<SnapshotResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_snapshot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<SnapshotResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.usages().find_by_id(id).await {
        Ok(Some(snapshot)) => Ok(Json(ApiResponse::success(snapshot.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Snapshot {} not found", id))),
        )),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/buildings/{building_id}/snapshots",
    tag = "Snapshots",
    params(("building_id" = i32, Path, description = "Building ID")),
    request_body = CreateSnapshotRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<SnapshotResponse>),
        (status = 404, description = "Building not found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_snapshot(
    State(state): State<AppState>,
    Path(building_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CreateSnapshotRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SnapshotResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    // Reject snapshots for buildings that do not exist
    match state.repos.buildings().find_by_id(building_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!(
                    "Building {} not found",
                    building_id
                ))),
            ));
        }
        Err(e) => return Err(domain_error(e)),
    }

    let now = Utc::now();
    let snapshot = UsageSnapshot {
        id: 0,
        building_id,
        taken_on: req.taken_on,
        created_at: now,
        updated_at: now,
        readings: req
            .readings
            .into_iter()
            .map(|r| UnitReading {
                unit: r.unit,
                liters: r.liters,
            })
            .collect(),
    };

    match state.repos.usages().save(snapshot).await {
        Ok(saved) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(saved.into())),
        )),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/snapshots/{id}",
    tag = "Snapshots",
    params(("id" = i32, Path, description = "Snapshot ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<String>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_snapshot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.usages().delete(id).await {
        Ok(()) => Ok(Json(ApiResponse::success(format!(
            "Snapshot {} deleted",
            id
        )))),
        Err(e) => Err(domain_error(e)),
    }
}
